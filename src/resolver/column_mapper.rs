// ==========================================
// COSMIC 功能点文档生成 - 列映射
// ==========================================
// 职责: 六个语义字段 → 源表列下标
// 策略链（固定优先级，逐个尝试）:
//   1. 列名精确匹配
//   2. 转置表头抢救（首个数据行内嵌"X级模块"标签）
//   3. 固定列下标回退（>=8 列时: 0,1,2,3 / 6,7）
// ==========================================

use crate::domain::row::{ColumnMap, SemanticField};
use crate::error::{ConvertError, ConvertResult};
use crate::source::Table;
use tracing::{info, warn};

/// 固定下标回退所需的最小列数
const POSITIONAL_FALLBACK_MIN_COLUMNS: usize = 8;

/// 解析列映射
///
/// 转置表头抢救会就地删除被标签污染的数据行，
/// 除此之外不修改输入。
pub fn resolve_columns(table: &mut Table) -> ConvertResult<ColumnMap> {
    let mut map = ColumnMap::default();

    match_exact_labels(table, &mut map);

    if !map.contains(SemanticField::Level1) {
        rescue_transposed_header(table, &mut map);
    }

    if !map.is_complete() {
        warn!(
            "未能通过列名自动识别所有列: {:?}，尝试使用固定列索引策略",
            map.missing_fields()
                .iter()
                .map(|f| f.name())
                .collect::<Vec<_>>()
        );
        apply_positional_fallback(table, &mut map)?;
    }

    if !map.contains(SemanticField::Process) {
        return Err(ConvertError::SchemaResolution(
            "无法定位'功能过程'列".to_string(),
        ));
    }

    info!(
        "列映射完成: {:?}",
        SemanticField::ALL
            .iter()
            .map(|f| (f.name(), map.get(*f)))
            .collect::<Vec<_>>()
    );
    Ok(map)
}

/// 策略 1: 列名与接受变体的精确匹配（按去空白比较）
///
/// 扫描顺序 = 列顺序，每个字段首个命中生效。
fn match_exact_labels(table: &Table, map: &mut ColumnMap) {
    for (col_idx, label) in table.columns.iter().enumerate() {
        let trimmed = label.trim();
        for field in SemanticField::ALL {
            if map.contains(field) {
                continue;
            }
            if field.label_variants().contains(&trimmed) {
                map.set(field, col_idx);
                break;
            }
        }
    }
}

/// 策略 2: 转置表头抢救
///
/// 个别源表把"一级模块/二级模块/三级模块"标签留在首个数据行里。
/// 从首行单元格的包含关系推出列位置，并删除所有含"级模块"
/// 标签的污染行。
fn rescue_transposed_header(table: &mut Table, map: &mut ColumnMap) {
    let Some(first_row) = table.rows.first() else {
        return;
    };

    let mut rescued = false;
    for (col_idx, cell) in first_row.iter().enumerate() {
        let Some(text) = cell.as_text() else {
            continue;
        };
        let field = if text.contains("一级模块") {
            SemanticField::Level1
        } else if text.contains("二级模块") {
            SemanticField::Level2
        } else if text.contains("三级模块") {
            SemanticField::Level3
        } else {
            continue;
        };
        if !map.contains(field) {
            map.set(field, col_idx);
            rescued = true;
        }
    }

    if rescued {
        let before = table.rows.len();
        table.rows.retain(|row| {
            !row.iter()
                .any(|cell| cell.as_text().is_some_and(|t| t.contains("级模块")))
        });
        info!("转置表头抢救: 删除 {} 行标签污染数据", before - table.rows.len());
    }
}

/// 策略 3: 固定列下标回退
///
/// 针对标准拆分表结构: [0]客户需求 [1]一级 [2]二级 [3]三级
/// [6]功能过程 [7]子过程描述，只补尚未映射的字段。
fn apply_positional_fallback(table: &Table, map: &mut ColumnMap) -> ConvertResult<()> {
    if table.column_count() < POSITIONAL_FALLBACK_MIN_COLUMNS {
        return Err(ConvertError::SchemaResolution(format!(
            "列数不足（{} < {}），无法继续",
            table.column_count(),
            POSITIONAL_FALLBACK_MIN_COLUMNS
        )));
    }

    let positions = [
        (SemanticField::CustomerRequirement, 0),
        (SemanticField::Level1, 1),
        (SemanticField::Level2, 2),
        (SemanticField::Level3, 3),
        (SemanticField::Process, 6),
        (SemanticField::Description, 7),
    ];
    for (field, col) in positions {
        if !map.contains(field) {
            map.set(field, col);
        }
    }
    Ok(())
}
