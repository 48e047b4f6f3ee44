// ==========================================
// COSMIC 功能点文档生成 - 文档层
// ==========================================
// 职责: 段落流文档抽象（写入面 + 读取面）
// 契约: 追加标题/正文段落；有序段落迭代
// ==========================================

pub mod naming;
pub mod store;

pub use naming::timestamped_artifact_name;
pub use store::ParagraphDocument;

use serde::{Deserialize, Serialize};

/// 文档段落：正文或带级别的标题
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
    /// 标题级别（1 起）；正文段落为 None
    pub heading_level: Option<u8>,
}

impl Paragraph {
    pub fn heading(level: u8, text: &str) -> Paragraph {
        Paragraph {
            text: text.to_string(),
            heading_level: Some(level),
        }
    }

    pub fn body(text: &str) -> Paragraph {
        Paragraph {
            text: text.to_string(),
            heading_level: None,
        }
    }

    pub fn is_heading(&self) -> bool {
        self.heading_level.is_some()
    }
}

/// 文档写入面
pub trait DocumentSink {
    fn add_heading(&mut self, level: u8, text: &str);
    fn add_paragraph(&mut self, text: &str);
}

/// 文档读取面：有序段落流
pub trait DocumentSource {
    fn paragraphs(&self) -> &[Paragraph];
}
