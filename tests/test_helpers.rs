// ==========================================
// COSMIC 功能点文档生成 - 集成测试辅助
// ==========================================

use cosmic_docgen::MemorySource;

/// 标准六列表头
pub const HEADER: &[&str] = &[
    "客户需求",
    "一级模块",
    "二级模块",
    "三级模块",
    "功能过程",
    "子过程描述",
];

/// 构造带干扰行与合并单元格的典型拆分表源
///
/// 前两行是标题/说明噪声，表头在第 2 行；
/// 数据含向下填充区域与非相邻的同键模块分组。
pub fn messy_source() -> MemorySource {
    MemorySource::new()
        .with_text_sheet("说明", &[&["本文件由需求组维护"]])
        .with_text_sheet(
            "功能点拆分表v2",
            &[
                &["某系统功能点拆分", "", "", "", "", ""],
                &["版本: 1.3", "", "", "", "", ""],
                HEADER,
                &["需求1", "模块A", "子模块B", "单元C", "p1", "输入-x；查询-y"],
                &["", "", "", "", "", "呈现-z"],
                &["", "", "", "单元D", "p2", "校验-m；输出-n"],
                &["", "", "", "单元C", "p3", "一般说明文字"],
                &["需求2", "模块A", "子模块B", "单元C", "p4", "输出-w"],
            ],
        )
}
