// ==========================================
// COSMIC 功能点文档生成 - 校验报告类型
// ==========================================
// 生命周期: 每次校验新建，核心不持久化
// （统计导出为外部前端职责，故带 serde 派生）
// ==========================================

use serde::{Deserialize, Serialize};
use tracing::info;

/// 单个功能过程的模块统计
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleStat {
    pub level1: String,
    pub level2: String,
    pub level3: String,
    pub process_name: String,
    /// 子过程数 = 该功能过程在源表中的行数
    pub subprocess_count: usize,
    /// 编号的子过程描述清单（换行分隔）
    pub subprocess_detail: String,
}

/// 一处位置不匹配
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessMismatch {
    /// 1 起的位置编号
    pub position: usize,
    pub expected: String,
    pub observed: String,
}

/// 校验报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport {
    pub process_count_excel: usize,
    pub process_count_word: usize,
    pub mismatches: Vec<ProcessMismatch>,
    pub all_match: bool,
    pub detailed_stats: Vec<ModuleStat>,
}

/// 行式报告收集器
///
/// 校验过程逐行输出人读报告：既写入 tracing 日志，
/// 也累积成返回给调用方的 log_text。
#[derive(Debug, Default)]
pub struct ReportLog {
    lines: Vec<String>,
}

impl ReportLog {
    pub fn new() -> ReportLog {
        ReportLog::default()
    }

    pub fn line<S: Into<String>>(&mut self, text: S) {
        let text = text.into();
        info!("{}", text);
        self.lines.push(text);
    }

    pub fn separator(&mut self) {
        self.line("=".repeat(80));
    }

    pub fn into_text(self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_log_collects_lines() {
        let mut log = ReportLog::new();
        log.separator();
        log.line("校验通过");
        let text = log.into_text();
        assert!(text.starts_with("======"));
        assert!(text.ends_with("校验通过"));
    }
}
