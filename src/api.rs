// ==========================================
// COSMIC 功能点文档生成 - 对外接口层
// ==========================================
// 契约: 转换 → {success, log_text}
//       校验 → {all_match, log_text, detailed_stats}
// 前端只依赖这两个返回形状
// ==========================================

use crate::config::AppConfig;
use crate::document::ParagraphDocument;
use crate::error::{ConvertError, ConvertResult};
use crate::renderer;
use crate::resolver;
use crate::source::{CsvSource, ExcelSource, TabularSource};
use crate::verifier;
use crate::verifier::report::{ModuleStat, ReportLog};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// 渲染步骤的调用方结果
#[derive(Debug)]
pub struct RenderOutcome {
    pub success: bool,
    pub log_text: String,
}

/// 校验步骤的调用方结果
#[derive(Debug)]
pub struct VerifyOutcome {
    pub all_match: bool,
    pub log_text: String,
    pub detailed_stats: Vec<ModuleStat>,
}

/// 转换/校验入口
pub struct ConvertApi {
    config: AppConfig,
}

impl ConvertApi {
    pub fn new(config: AppConfig) -> ConvertApi {
        ConvertApi { config }
    }

    /// 按扩展名打开表格数据源
    fn open_source(&self, path: &Path) -> ConvertResult<Box<dyn TabularSource>> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        match ext.as_str() {
            "xlsx" | "xls" => Ok(Box::new(ExcelSource::open(path)?)),
            "csv" => Ok(Box::new(CsvSource::open(path)?)),
            _ => Err(ConvertError::UnsupportedFormat(ext)),
        }
    }

    /// 将源表转换为结构化文档
    ///
    /// target 为 None 时输出到源文件同目录、同主干、.json 后缀。
    /// 渲染完成后按配置自动校验；校验报告并入 log_text。
    pub fn convert<P: AsRef<Path>>(&self, source_path: P, target: Option<PathBuf>) -> RenderOutcome {
        let source_path = source_path.as_ref();
        let mut log = ReportLog::new();
        log.line(format!("正在处理: {}", source_path.display()));

        match self.convert_inner(source_path, target, &mut log) {
            Ok(()) => RenderOutcome {
                success: true,
                log_text: log.into_text(),
            },
            Err(e) => {
                error!("转换失败: {}", e);
                log.line(format!("转换失败: {}", e));
                RenderOutcome {
                    success: false,
                    log_text: log.into_text(),
                }
            }
        }
    }

    fn convert_inner(
        &self,
        source_path: &Path,
        target: Option<PathBuf>,
        log: &mut ReportLog,
    ) -> ConvertResult<()> {
        let source = self.open_source(source_path)?;
        let (sheet, rows) = resolver::resolve(source.as_ref())?;
        log.line(format!("使用 Sheet: {}，解析 {} 行", sheet, rows.len()));

        let target = target.unwrap_or_else(|| source_path.with_extension("json"));
        renderer::render_to_file(&rows, &target)?;
        log.line(format!("文档已生成: {}", target.display()));

        if self.config.verify_after_render {
            log.line("正在进行内容校对...");
            let document = ParagraphDocument::load(&target)?;
            let report = verifier::verify(source.as_ref(), &document, log)?;
            info!(
                "渲染后校验: all_match={}, 过程数 {}/{}",
                report.all_match, report.process_count_excel, report.process_count_word
            );
        }
        Ok(())
    }

    /// 校验既有文档与源表的一致性
    ///
    /// 内容不一致返回 all_match=false；仅当输入无法打开时报错。
    pub fn verify<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        source_path: P,
        document_path: Q,
    ) -> ConvertResult<VerifyOutcome> {
        let source = self.open_source(source_path.as_ref())?;
        let document = ParagraphDocument::load(document_path.as_ref())?;

        let mut log = ReportLog::new();
        let report = verifier::verify(source.as_ref(), &document, &mut log)?;

        Ok(VerifyOutcome {
            all_match: report.all_match,
            log_text: log.into_text(),
            detailed_stats: report.detailed_stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_sample_csv(dir: &Path) -> PathBuf {
        let path = dir.join("拆分表.csv");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "客户需求,一级模块,二级模块,三级模块,功能过程,子过程描述").unwrap();
        writeln!(file, "需求1,A,B,C,p1,输入-x；查询-y").unwrap();
        writeln!(file, ",,,,,呈现-z").unwrap();
        writeln!(file, ",,,D,p2,输出-w").unwrap();
        path
    }

    #[test]
    fn test_convert_and_verify_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = write_sample_csv(dir.path());
        let target = dir.path().join("out.json");

        let api = ConvertApi::new(AppConfig::default());
        let outcome = api.convert(&csv_path, Some(target.clone()));
        assert!(outcome.success, "log: {}", outcome.log_text);
        assert!(outcome.log_text.contains("验证通过"));

        let verify = api.verify(&csv_path, &target).unwrap();
        assert!(verify.all_match);
        assert_eq!(verify.detailed_stats.len(), 2);
    }

    #[test]
    fn test_convert_unreadable_source() {
        let api = ConvertApi::new(AppConfig::default());
        let outcome = api.convert("不存在.xlsx", None);
        assert!(!outcome.success);
        assert!(outcome.log_text.contains("转换失败"));
    }

    #[test]
    fn test_verify_missing_document_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = write_sample_csv(dir.path());

        let api = ConvertApi::new(AppConfig::default());
        let result = api.verify(&csv_path, dir.path().join("缺失.json"));
        assert!(matches!(
            result,
            Err(ConvertError::SourceUnreadable { .. })
        ));
    }
}
