// ==========================================
// COSMIC 功能点文档生成 - 段落流文档
// ==========================================
// 职责: 内存段落流 + JSON 持久化
// 约束: 覆盖写入前先删除旧文件；删除失败即中止
// ==========================================

use crate::document::{DocumentSink, DocumentSource, Paragraph};
use crate::error::{ConvertError, ConvertResult};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::{debug, info};

/// 内存段落流文档
///
/// 具体的 Word 字节编码不在本库范围内；
/// 本实现以 JSON 段落流承载同一文档契约。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphDocument {
    paragraphs: Vec<Paragraph>,
}

impl ParagraphDocument {
    pub fn new() -> ParagraphDocument {
        ParagraphDocument::default()
    }

    /// 保存到目标路径
    ///
    /// 目标已存在时先删除；删除失败（文件被占用）返回
    /// `ResourceBusy`，不留下部分写入的文件。
    ///
    /// 注意: 删除-写入两步对并发的第二个写入方不安全，
    /// 同一目标路径的渲染必须由调用方串行化。
    pub fn save<P: AsRef<Path>>(&self, path: P) -> ConvertResult<()> {
        let path = path.as_ref();

        if path.exists() {
            std::fs::remove_file(path).map_err(|e| ConvertError::ResourceBusy {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            debug!("已删除旧文档: {}", path.display());
        }

        let file = File::create(path).map_err(|e| ConvertError::DocumentWriteError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        serde_json::to_writer_pretty(BufWriter::new(file), self).map_err(|e| {
            ConvertError::DocumentWriteError {
                path: path.display().to_string(),
                message: e.to_string(),
            }
        })?;

        info!("文档已写入: {} ({} 段)", path.display(), self.paragraphs.len());
        Ok(())
    }

    /// 从目标路径载入
    pub fn load<P: AsRef<Path>>(path: P) -> ConvertResult<ParagraphDocument> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ConvertError::SourceUnreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            ConvertError::SourceUnreadable {
                path: path.display().to_string(),
                message: e.to_string(),
            }
        })
    }

    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}

impl DocumentSink for ParagraphDocument {
    fn add_heading(&mut self, level: u8, text: &str) {
        self.paragraphs.push(Paragraph::heading(level, text));
    }

    fn add_paragraph(&mut self, text: &str) {
        self.paragraphs.push(Paragraph::body(text));
    }
}

impl DocumentSource for ParagraphDocument {
    fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }
}
