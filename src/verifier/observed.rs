// ==========================================
// COSMIC 功能点文档生成 - 文档反向解析
// ==========================================
// 职责: 段落流 → 观察到的功能过程序列与模块实例
// 规则: 五级标题严格按文档出现序，同名模块不合并
//       （每次出现视为一个独立模块实例）。
// ==========================================

use crate::document::DocumentSource;
use crate::renderer::{
    HEADING_FUNCTION_DESC, LEVEL1_HEADING, LEVEL2_HEADING, LEVEL3_HEADING, PLACEHOLDER_NONE,
    SUB_HEADING,
};

/// 未挂在五级标题下时的模块占位名
const UNDEFINED_MODULE: &str = "未定义三级模块";

/// 文档中观察到的一个功能过程
#[derive(Debug, Clone, PartialEq)]
pub struct ObservedProcess {
    pub name: String,
    /// 过程编号段之后的明细行（子过程行及其他正文）
    pub details: Vec<String>,
    /// 所属三级模块标题文本
    pub level3: String,
}

/// 按出现序记录的三级模块实例
///
/// 与渲染侧的逻辑分组不同，这一侧从不合并同名标题——
/// 两侧口径一致仅因渲染层对同一合并分组只输出一次标题。
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleInstance {
    pub module: String,
    pub processes: Vec<String>,
}

/// 文档段落流的游标状态
#[derive(Default)]
struct WalkState {
    current_level3: Option<String>,
    in_function_desc: bool,
    open_process: Option<ObservedProcess>,
}

/// 从文档反向提取功能过程与模块实例
pub fn derive_observed(document: &dyn DocumentSource) -> (Vec<ObservedProcess>, Vec<ModuleInstance>) {
    let mut processes: Vec<ObservedProcess> = Vec::new();
    let mut modules: Vec<ModuleInstance> = Vec::new();
    let mut state = WalkState::default();

    for para in document.paragraphs() {
        let text = para.text.trim();
        if text.is_empty() {
            continue;
        }

        if let Some(level) = para.heading_level {
            handle_heading(level, text, &mut state, &mut processes, &mut modules);
            continue;
        }

        // 跳过整体功能列表行与时序图占位
        if text.starts_with("整体功能列表") || text == PLACEHOLDER_NONE {
            continue;
        }

        if !state.in_function_desc {
            continue;
        }

        match parse_numbered_process(text) {
            Some(name) => {
                // 结束当前功能过程，开始新的
                flush(&mut state.open_process, &mut processes);
                state.open_process = Some(ObservedProcess {
                    name: name.clone(),
                    details: Vec::new(),
                    level3: state
                        .current_level3
                        .clone()
                        .unwrap_or_else(|| UNDEFINED_MODULE.to_string()),
                });
                if let Some(instance) = modules.last_mut() {
                    instance.processes.push(name);
                }
            }
            None => {
                // 明细行（无论是否命中已知子过程前缀）
                if let Some(process) = &mut state.open_process {
                    process.details.push(text.to_string());
                }
            }
        }
    }

    flush(&mut state.open_process, &mut processes);
    (processes, modules)
}

fn handle_heading(
    level: u8,
    text: &str,
    state: &mut WalkState,
    processes: &mut Vec<ObservedProcess>,
    modules: &mut Vec<ModuleInstance>,
) {
    match level {
        LEVEL1_HEADING | LEVEL2_HEADING => {
            state.current_level3 = None;
            state.in_function_desc = false;
        }
        LEVEL3_HEADING => {
            // 每个五级标题都开一个新模块实例，同名也不合并
            state.current_level3 = Some(text.to_string());
            modules.push(ModuleInstance {
                module: text.to_string(),
                processes: Vec::new(),
            });
            state.in_function_desc = false;
        }
        SUB_HEADING => {
            state.in_function_desc = text.contains(HEADING_FUNCTION_DESC);
            if !state.in_function_desc {
                // 离开功能描述区前收尾当前过程
                flush(&mut state.open_process, processes);
            }
        }
        _ => {}
    }
}

fn flush(open: &mut Option<ObservedProcess>, processes: &mut Vec<ObservedProcess>) {
    if let Some(process) = open.take() {
        processes.push(process);
    }
}

/// 识别"<数字>.<过程名>"编号段落；命中返回过程名
fn parse_numbered_process(text: &str) -> Option<String> {
    let digits: String = text.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let rest = &text[digits.len()..];
    let name = rest.strip_prefix('.')?;
    Some(name.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DocumentSink, ParagraphDocument};

    fn sample_document() -> ParagraphDocument {
        let mut doc = ParagraphDocument::new();
        doc.add_heading(3, "A");
        doc.add_heading(4, "B");
        doc.add_heading(5, "C");
        doc.add_heading(6, "关键时序图/业务逻辑图");
        doc.add_paragraph("无。");
        doc.add_heading(6, "功能描述");
        doc.add_paragraph("　整体功能列表包含如下：p1。");
        doc.add_paragraph("1.p1");
        doc.add_paragraph("输入-x");
        doc.add_paragraph("查询-y");
        doc
    }

    #[test]
    fn test_observed_processes_and_details() {
        let (processes, modules) = derive_observed(&sample_document());
        assert_eq!(processes.len(), 1);
        assert_eq!(processes[0].name, "p1");
        assert_eq!(processes[0].details, vec!["输入-x", "查询-y"]);
        assert_eq!(processes[0].level3, "C");

        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0].module, "C");
        assert_eq!(modules[0].processes, vec!["p1"]);
    }

    #[test]
    fn test_summary_and_placeholder_skipped() {
        let (processes, _) = derive_observed(&sample_document());
        // 摘要行与"无。"不产生过程或明细
        assert!(processes[0].details.iter().all(|d| !d.contains("整体功能")));
    }

    #[test]
    fn test_same_level3_heading_makes_new_instance() {
        let mut doc = ParagraphDocument::new();
        doc.add_heading(5, "C");
        doc.add_heading(6, "功能描述");
        doc.add_paragraph("1.p1");
        doc.add_heading(5, "C");
        doc.add_heading(6, "功能描述");
        doc.add_paragraph("1.p2");

        let (_, modules) = derive_observed(&doc);
        assert_eq!(modules.len(), 2);
        assert_eq!(modules[0].processes, vec!["p1"]);
        assert_eq!(modules[1].processes, vec!["p2"]);
    }

    #[test]
    fn test_paragraph_outside_function_desc_ignored() {
        let mut doc = ParagraphDocument::new();
        doc.add_heading(5, "C");
        doc.add_heading(6, "关键时序图/业务逻辑图");
        doc.add_paragraph("1.不应识别");
        doc.add_heading(6, "功能描述");
        doc.add_paragraph("1.p1");

        let (processes, _) = derive_observed(&doc);
        assert_eq!(processes.len(), 1);
        assert_eq!(processes[0].name, "p1");
    }

    #[test]
    fn test_parse_numbered_process() {
        assert_eq!(parse_numbered_process("1.登录"), Some("登录".to_string()));
        assert_eq!(parse_numbered_process("12. 查询用户 "), Some("查询用户".to_string()));
        assert_eq!(parse_numbered_process("输入-x"), None);
        assert_eq!(parse_numbered_process("第1.节"), None);
    }

    #[test]
    fn test_last_open_process_flushed() {
        let mut doc = ParagraphDocument::new();
        doc.add_heading(5, "C");
        doc.add_heading(6, "功能描述");
        doc.add_paragraph("1.p1");
        doc.add_paragraph("输出-z");

        let (processes, _) = derive_observed(&doc);
        assert_eq!(processes.len(), 1);
        assert_eq!(processes[0].details, vec!["输出-z"]);
    }
}
