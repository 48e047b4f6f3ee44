// ==========================================
// COSMIC 功能点文档生成 - 封闭词表
// ==========================================
// 职责: 保留关键字集合 + 子过程前缀集合 + 描述拆分
// 红线: 渲染与校验共用本词表,禁止在别处散落字面量
// ==========================================

/// 功能过程列中的保留关键字
///
/// 这些词是子过程描述的片段，不是功能过程名称；
/// 出现在功能过程列时按缺失处理（由向下填充补齐）。
pub const RESERVED_PROCESS_KEYWORDS: [&str; 6] = ["呈现", "查询", "保存", "输入", "校验", "输出"];

/// 子过程描述的拆分前缀（封闭集合）
pub const SUBPROCESS_PREFIXES: [&str; 5] = ["输入-", "查询-", "呈现-", "校验-", "输出-"];

/// 判断是否为保留关键字（按去空白比较）
pub fn is_reserved_keyword(value: &str) -> bool {
    let trimmed = value.trim();
    RESERVED_PROCESS_KEYWORDS.iter().any(|kw| *kw == trimmed)
}

/// 拆分子过程描述字段
///
/// 仅按"输入-"、"查询-"、"呈现-"、"校验-"、"输出-"前缀拆分，
/// 忽略其他分隔符（逗号、句号等），保持每个前缀块的完整性。
/// 每段去掉首尾空白与末尾的"；"/";"。
/// 文本中不含任何前缀时整体作为单独一段返回。
pub fn split_subprocess_description(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut segments: Vec<String> = Vec::new();
    let mut current = String::new();

    let mut i = 0;
    while i < chars.len() {
        // 检查当前位置是否是前缀开头
        let mut matched_prefix: Option<&str> = None;
        for prefix in SUBPROCESS_PREFIXES {
            let prefix_len = prefix.chars().count();
            if i + prefix_len <= chars.len()
                && chars[i..i + prefix_len].iter().collect::<String>() == prefix
            {
                matched_prefix = Some(prefix);
                break;
            }
        }

        match matched_prefix {
            Some(prefix) => {
                // 保存前一个段落，开始新段
                if !current.is_empty() {
                    segments.push(current);
                }
                current = prefix.to_string();
                i += prefix.chars().count();
            }
            None => {
                current.push(chars[i]);
                i += 1;
            }
        }
    }

    if !current.is_empty() {
        segments.push(current);
    }

    // 清理结果（去空白、去末尾分号）
    let cleaned: Vec<String> = segments
        .iter()
        .map(|seg| seg.trim().trim_end_matches(['；', ';']).trim().to_string())
        .filter(|seg| !seg.is_empty())
        .collect();

    if cleaned.is_empty() {
        vec![text.to_string()]
    } else {
        cleaned
    }
}
