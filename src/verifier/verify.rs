// ==========================================
// COSMIC 功能点文档生成 - 一致性对比
// ==========================================
// 职责: 期望/观察序列的严格位置对齐 + 行式报告
// 约束: 内容不一致是正常阴性结果，不抛错误
// ==========================================

use crate::document::DocumentSource;
use crate::error::ConvertResult;
use crate::source::TabularSource;
use crate::verifier::expected::derive_expected;
use crate::verifier::observed::derive_observed;
use crate::verifier::report::{ProcessMismatch, ReportLog, VerificationReport};
use crate::verifier::MISSING_SENTINEL;

/// 匹配位置多于该值时折叠中间部分
const MATCH_DISPLAY_EDGE: usize = 5;

/// 校验源表与文档的一致性
///
/// 位置对齐: 两序列按下标逐位比较，短侧以 MISSING 补位
/// （不做重排或编辑距离对齐）；逐位按去空白字符串相等。
/// 仅当输入本身无法打开/解析时返回错误。
pub fn verify(
    source: &dyn TabularSource,
    document: &dyn DocumentSource,
    log: &mut ReportLog,
) -> ConvertResult<VerificationReport> {
    log.separator();
    log.line("文档内容验证");
    log.separator();

    let expected = derive_expected(source)?;
    let (observed_processes, _modules) = derive_observed(document);

    let expected_names = expected.process_sequence;
    let observed_names: Vec<String> =
        observed_processes.iter().map(|p| p.name.clone()).collect();

    log.line(format!("✓ 源表功能过程数: {}", expected_names.len()));
    log.line(format!("✓ 文档功能过程数: {}", observed_names.len()));
    if expected_names.len() == observed_names.len() {
        log.line("✓ 功能过程数量一致");
    } else {
        log.line("✗ 功能过程数量不一致!");
    }

    log.line("");
    log.separator();
    log.line("功能过程对比");
    log.separator();

    let total = expected_names.len().max(observed_names.len());
    let mut mismatches = Vec::new();

    for i in 0..total {
        let position = i + 1;
        let expected_name = expected_names
            .get(i)
            .map(|s| s.trim())
            .unwrap_or(MISSING_SENTINEL);
        let observed_name = observed_names
            .get(i)
            .map(|s| s.trim())
            .unwrap_or(MISSING_SENTINEL);

        if expected_name != observed_name {
            log.line(format!("✗ {}. 不匹配!", position));
            log.line(format!("   源表: {}", expected_name));
            log.line(format!("   文档: {}", observed_name));
            mismatches.push(ProcessMismatch {
                position,
                expected: expected_name.to_string(),
                observed: observed_name.to_string(),
            });
        } else {
            // 匹配位只展示首尾各 5 个，中间折叠
            let near_edge = position <= MATCH_DISPLAY_EDGE
                || (total > 2 * MATCH_DISPLAY_EDGE && position > total - MATCH_DISPLAY_EDGE);
            if near_edge {
                log.line(format!("✓ {}. {}", position, expected_name));
            } else if position == MATCH_DISPLAY_EDGE + 1 {
                log.line(format!(
                    "   ... (中间 {} 个过程)",
                    total.saturating_sub(2 * MATCH_DISPLAY_EDGE)
                ));
            }
        }
    }

    let all_match = mismatches.is_empty();

    log.line("");
    log.separator();
    if all_match {
        log.line("✓ 验证通过！文档与源表完全一致");
    } else {
        log.line("✗ 验证失败！存在内容不一致");
    }
    log.separator();

    Ok(VerificationReport {
        process_count_excel: expected_names.len(),
        process_count_word: observed_names.len(),
        mismatches,
        all_match,
        detailed_stats: expected.stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DocumentSink, ParagraphDocument};
    use crate::renderer::render;
    use crate::resolver;
    use crate::source::MemorySource;

    fn sample_source() -> MemorySource {
        MemorySource::new().with_text_sheet(
            "功能点拆分表",
            &[
                &["客户需求", "一级模块", "二级模块", "三级模块", "功能过程", "子过程描述"],
                &["需求1", "A", "B", "C", "p1", "输入-x；查询-y"],
                &["", "", "", "", "", "呈现-z"],
                &["", "", "", "D", "p2", "输出-w"],
            ],
        )
    }

    fn rendered_document(source: &MemorySource) -> ParagraphDocument {
        let (_, rows) = resolver::resolve(source).unwrap();
        let mut doc = ParagraphDocument::new();
        render(&rows, &mut doc);
        doc
    }

    #[test]
    fn test_verify_rendered_document_matches() {
        let source = sample_source();
        let doc = rendered_document(&source);

        let mut log = ReportLog::new();
        let report = verify(&source, &doc, &mut log).unwrap();

        assert!(report.all_match);
        assert!(report.mismatches.is_empty());
        assert_eq!(report.process_count_excel, 2);
        assert_eq!(report.process_count_word, 2);
        assert!(log.into_text().contains("验证通过"));
    }

    #[test]
    fn test_verify_detects_altered_process_name() {
        let source = sample_source();
        let doc = rendered_document(&source);

        // 篡改第二个编号段落
        let mut tampered = ParagraphDocument::new();
        for para in crate::document::DocumentSource::paragraphs(&doc) {
            match para.heading_level {
                Some(level) => tampered.add_heading(level, &para.text),
                None if para.text == "1.p2" => tampered.add_paragraph("1.p2改"),
                None => tampered.add_paragraph(&para.text),
            }
        }

        let mut log = ReportLog::new();
        let report = verify(&source, &tampered, &mut log).unwrap();

        assert!(!report.all_match);
        assert_eq!(report.mismatches.len(), 1);
        assert_eq!(report.mismatches[0].position, 2);
        assert_eq!(report.mismatches[0].expected, "p2");
        assert_eq!(report.mismatches[0].observed, "p2改");
    }

    #[test]
    fn test_verify_length_mismatch_padded_with_sentinel() {
        let source = sample_source();
        let mut doc = ParagraphDocument::new();
        doc.add_heading(5, "C");
        doc.add_heading(6, "功能描述");
        doc.add_paragraph("1.p1");

        let mut log = ReportLog::new();
        let report = verify(&source, &doc, &mut log).unwrap();

        assert!(!report.all_match);
        assert_eq!(report.process_count_excel, 2);
        assert_eq!(report.process_count_word, 1);
        assert_eq!(report.mismatches[0].observed, MISSING_SENTINEL);
    }

    #[test]
    fn test_verify_detailed_stats() {
        let source = sample_source();
        let doc = rendered_document(&source);

        let mut log = ReportLog::new();
        let report = verify(&source, &doc, &mut log).unwrap();

        assert_eq!(report.detailed_stats.len(), 2);
        let p1 = &report.detailed_stats[0];
        assert_eq!(
            (p1.level1.as_str(), p1.level2.as_str(), p1.level3.as_str()),
            ("A", "B", "C")
        );
        assert_eq!(p1.process_name, "p1");
        assert_eq!(p1.subprocess_count, 2);
        assert!(p1.subprocess_detail.contains("1. 输入-x；查询-y"));
    }
}
