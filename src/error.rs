// ==========================================
// COSMIC 功能点文档生成 - 错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 转换/校验流水线错误类型
///
/// 内容不一致（校验不通过）不是错误：`verify` 始终正常返回
/// `all_match = false` 与完整差异列表。
#[derive(Error, Debug)]
pub enum ConvertError {
    // ===== 数据源错误 =====
    #[error("数据源无法打开或解析 ({path}): {message}")]
    SourceUnreadable { path: String, message: String },

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xls/.csv）")]
    UnsupportedFormat(String),

    #[error("工作表不存在: {0}")]
    SheetNotFound(String),

    // ===== 列映射错误 =====
    #[error("列映射失败: {0}")]
    SchemaResolution(String),

    // ===== 文档写入错误 =====
    #[error("目标文档被占用，无法替换 ({path}): {message}")]
    ResourceBusy { path: String, message: String },

    #[error("文档写入失败 ({path}): {message}")]
    DocumentWriteError { path: String, message: String },

    // ===== 通用错误 =====
    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        ConvertError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ConvertError {
    fn from(err: csv::Error) -> Self {
        ConvertError::SourceUnreadable {
            path: String::new(),
            message: err.to_string(),
        }
    }
}

// 实现 From<serde_json::Error>
impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        ConvertError::SourceUnreadable {
            path: String::new(),
            message: err.to_string(),
        }
    }
}

/// Result 类型别名
pub type ConvertResult<T> = Result<T, ConvertError>;
