// ==========================================
// COSMIC 功能点文档生成 - 核心库
// ==========================================
// 流程: Schema 解析 → 层级渲染 → 一致性校验
// 技术栈: Rust + calamine + serde
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 行模型与词表
pub mod domain;

// 数据源层 - 表格数据源抽象 (Excel / CSV / 内存)
pub mod source;

// 文档层 - 段落流文档抽象
pub mod document;

// 解析层 - Sheet/表头定位与列映射
pub mod resolver;

// 渲染层 - 四级层级文档渲染
pub mod renderer;

// 校验层 - Excel/文档一致性校验
pub mod verifier;

// 配置层 - 系统配置
pub mod config;

// 错误类型
pub mod error;

// 日志系统
pub mod logging;

// API 层 - 对外转换/校验接口
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::row::{CellValue, ColumnMap, ModuleKey, ResolvedRow, SemanticField};
pub use domain::vocab::{split_subprocess_description, RESERVED_PROCESS_KEYWORDS, SUBPROCESS_PREFIXES};

// 数据源
pub use source::{CsvSource, ExcelSource, HeaderSpec, MemorySource, Table, TabularSource};

// 文档
pub use document::{DocumentSink, DocumentSource, Paragraph, ParagraphDocument};

// 校验
pub use verifier::{ModuleInstance, ModuleStat, VerificationReport};

// API
pub use api::{ConvertApi, RenderOutcome, VerifyOutcome};

// 错误
pub use error::{ConvertError, ConvertResult};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "COSMIC 功能点文档生成";
