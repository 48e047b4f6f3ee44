// ==========================================
// COSMIC 功能点文档生成 - 文档渲染
// ==========================================
// 职责: 模块分组 → 标题/正文段落序列
// 标题规则: 一级/二级仅在变化时输出（显式游标状态），
//           三级每模块分组必输出，同名也不合并。
// ==========================================

use crate::document::{DocumentSink, ParagraphDocument};
use crate::domain::row::ResolvedRow;
use crate::domain::vocab::split_subprocess_description;
use crate::error::ConvertResult;
use crate::renderer::grouping::{distinct_processes, group_by_module, group_by_process};
use crate::renderer::{
    HEADING_FUNCTION_DESC, HEADING_SEQUENCE_DIAGRAM, LEVEL1_HEADING, LEVEL2_HEADING,
    LEVEL3_HEADING, PLACEHOLDER_NONE, SUB_HEADING, SUMMARY_PREFIX, SUMMARY_SEPARATOR,
};
use std::path::Path;
use tracing::info;

/// 标题输出游标：当前已输出的一级/二级标题文本
///
/// 显式穿过分组折叠，替代自由散落的可变状态。
#[derive(Debug, Default)]
struct HeadingCursor {
    current_l1: Option<String>,
    current_l2: Option<String>,
}

impl HeadingCursor {
    /// 一级模块变化时输出标题并复位二级游标
    fn advance_l1(&mut self, level1: &str, sink: &mut dyn DocumentSink) {
        if self.current_l1.as_deref() != Some(level1) {
            sink.add_heading(LEVEL1_HEADING, level1);
            self.current_l1 = Some(level1.to_string());
            self.current_l2 = None;
        }
    }

    fn advance_l2(&mut self, level2: &str, sink: &mut dyn DocumentSink) {
        if self.current_l2.as_deref() != Some(level2) {
            sink.add_heading(LEVEL2_HEADING, level2);
            self.current_l2 = Some(level2.to_string());
        }
    }
}

/// 渲染解析行到文档写入面
///
/// 分组与顺序规则见 grouping 模块；确定性：相同输入两次
/// 渲染产生逐字节相同的段落序列。
pub fn render(rows: &[ResolvedRow], sink: &mut dyn DocumentSink) {
    let module_groups = group_by_module(rows);
    let mut cursor = HeadingCursor::default();

    for (key, group_rows) in &module_groups {
        cursor.advance_l1(&key.level1, sink);
        cursor.advance_l2(&key.level2, sink);

        // 三级标题每模块分组必输出，新分组总是开新节
        sink.add_heading(LEVEL3_HEADING, &key.level3);

        sink.add_heading(SUB_HEADING, HEADING_SEQUENCE_DIAGRAM);
        sink.add_paragraph(PLACEHOLDER_NONE);

        sink.add_heading(SUB_HEADING, HEADING_FUNCTION_DESC);

        // 整体功能列表（无有效过程时整段省略）
        let processes = distinct_processes(group_rows);
        if !processes.is_empty() {
            let summary = format!(
                "{}{}。",
                SUMMARY_PREFIX,
                processes.join(SUMMARY_SEPARATOR)
            );
            sink.add_paragraph(&summary);
        }

        // 详细功能列表：编号段落 + 子过程行，编号每节重置
        for (idx, (name, process_rows)) in group_by_process(group_rows).iter().enumerate() {
            sink.add_paragraph(&format!("{}.{}", idx + 1, name));

            for row in process_rows {
                let Some(description) = &row.description else {
                    continue;
                };
                for line in split_subprocess_description(description) {
                    sink.add_paragraph(&line);
                }
            }
        }
    }

    info!("渲染完成: {} 个模块分组", module_groups.len());
}

/// 渲染并写入目标文件
///
/// 目标存在时先删除（删除失败返回 ResourceBusy，不产生
/// 部分文件）。同一目标路径的并发渲染须由调用方串行化。
pub fn render_to_file<P: AsRef<Path>>(rows: &[ResolvedRow], target: P) -> ConvertResult<()> {
    let mut doc = ParagraphDocument::new();
    render(rows, &mut doc);
    doc.save(target)
}
