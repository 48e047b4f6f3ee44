// ==========================================
// COSMIC 功能点文档生成 - 领域模型层
// ==========================================
// 职责: 行模型、语义字段、封闭词表
// 红线: 不含数据源访问逻辑,不含渲染逻辑
// ==========================================

pub mod row;
pub mod vocab;

pub use row::{CellValue, ColumnMap, ModuleKey, ResolvedRow, SemanticField};
pub use vocab::{
    is_reserved_keyword, split_subprocess_description, RESERVED_PROCESS_KEYWORDS,
    SUBPROCESS_PREFIXES,
};
