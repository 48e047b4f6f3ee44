// ==========================================
// COSMIC 功能点文档生成 - Schema 解析集成测试
// ==========================================
// 覆盖: 表头回退策略 / 固定列下标回退 / CSV 数据源
// ==========================================

mod test_helpers;

use cosmic_docgen::{resolver, CsvSource, MemorySource};
use std::io::Write;

#[test]
fn test_composite_header_with_positional_fallback() {
    // 前三行都是无关键字的杂项标签 → 复合表头 + 固定下标回退
    let source = MemorySource::new().with_text_sheet(
        "功能点清单",
        &[
            &["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛"],
            &["备注", "", "", "", "", "", "", ""],
            &["", "", "", "", "", "", "", ""],
            &["需求1", "A", "B", "C", "", "", "p1", "输入-x"],
            &["", "", "", "", "", "", "p2", "输出-y"],
        ],
    );

    let (sheet, rows) = resolver::resolve(&source).expect("解析失败");
    assert_eq!(sheet, "功能点清单");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].customer_requirement, "需求1");
    assert_eq!(rows[0].level3, "C");
    assert_eq!(rows[0].process, "p1");
    assert_eq!(rows[1].process, "p2");
    assert_eq!(rows[1].level1, "A");
}

#[test]
fn test_narrow_table_without_labels_fails() {
    // 六列但无可识别列名，又不足 8 列回退 → SchemaResolution
    let source = MemorySource::new().with_text_sheet(
        "拆分表",
        &[
            &["a", "b", "c", "d", "e", "f"],
            &["需求1", "A", "B", "C", "p1", "输入-x"],
        ],
    );
    assert!(resolver::resolve(&source).is_err());
}

#[test]
fn test_csv_file_end_to_end_resolution() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("功能点拆分表.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    // 首行为说明噪声，真正表头在第 1 行
    writeln!(file, "某系统功能点拆分,,,,,").unwrap();
    writeln!(file, "客户需求,一级模块,二级模块,三级模块,功能过程,子过程描述").unwrap();
    writeln!(file, "需求1,A,B,C,p1,输入-x").unwrap();
    writeln!(file, ",,,,,查询-y").unwrap();

    let source = CsvSource::open(&path).unwrap();
    let (sheet, rows) = resolver::resolve(&source).unwrap();
    assert_eq!(sheet, "功能点拆分表");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].process, "p1");
    assert_eq!(rows[1].description, Some("查询-y".to_string()));
}

#[test]
fn test_messy_source_header_located_by_score() {
    let source = test_helpers::messy_source();
    let (_, rows) = resolver::resolve(&source).unwrap();
    // 噪声行不进入数据；填充不变式成立
    for row in &rows {
        assert!(!row.level1.is_empty());
        assert!(!row.level2.is_empty());
        assert!(!row.level3.is_empty());
        assert!(!row.process.is_empty());
    }
}
