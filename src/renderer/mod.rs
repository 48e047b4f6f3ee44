// ==========================================
// COSMIC 功能点文档生成 - 层级渲染层
// ==========================================
// 职责: 解析行 → 四级标题层级文档
// ==========================================

pub mod grouping;
pub mod render;

pub use grouping::{group_by_module, group_by_process};
pub use render::{render, render_to_file};

/// 固定子标题: 关键时序图
pub const HEADING_SEQUENCE_DIAGRAM: &str = "关键时序图/业务逻辑图";

/// 固定子标题: 功能描述
pub const HEADING_FUNCTION_DESC: &str = "功能描述";

/// 时序图占位正文
pub const PLACEHOLDER_NONE: &str = "无。";

/// 整体功能列表前缀（含全角空格缩进）
pub const SUMMARY_PREFIX: &str = "　整体功能列表包含如下：";

/// 整体功能列表分隔符
pub const SUMMARY_SEPARATOR: &str = "、";

// 模块层级 → 文档标题级别
// 文档自身的标题编号约定整体偏移 2 级
pub const LEVEL1_HEADING: u8 = 3;
pub const LEVEL2_HEADING: u8 = 4;
pub const LEVEL3_HEADING: u8 = 5;
pub const SUB_HEADING: u8 = 6;
