// ==========================================
// COSMIC 功能点文档生成 - 系统配置
// ==========================================
// 职责: 工作目录 / 保留时长 / 校验开关
// 载入: JSON 文件，缺省值可直接内嵌使用
// ==========================================

use crate::error::{ConvertError, ConvertResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 默认保留时长（小时）——外部清理进程按此窗口回收产物
const DEFAULT_RETENTION_HOURS: u64 = 1;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 上传的源表工作目录
    pub input_dir: PathBuf,
    /// 生成文档的工作目录
    pub output_dir: PathBuf,
    /// 产物保留时长（小时），与外部清理进程共享约定
    pub retention_hours: u64,
    /// 渲染完成后是否自动执行一致性校验
    pub verify_after_render: bool,
}

impl Default for AppConfig {
    fn default() -> AppConfig {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cosmic-docgen");
        AppConfig {
            input_dir: base.join("excel_input"),
            output_dir: base.join("word_output"),
            retention_hours: DEFAULT_RETENTION_HOURS,
            verify_after_render: true,
        }
    }
}

impl AppConfig {
    /// 从 JSON 配置文件载入；缺省字段取默认值
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConvertResult<AppConfig> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConvertError::SourceUnreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| ConvertError::SourceUnreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// 确保两个工作目录存在
    pub fn ensure_dirs(&self) -> ConvertResult<()> {
        std::fs::create_dir_all(&self.input_dir)?;
        std::fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }
}
