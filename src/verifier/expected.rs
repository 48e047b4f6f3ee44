// ==========================================
// COSMIC 功能点文档生成 - 期望序列推导
// ==========================================
// 职责: 从源表独立重推功能过程序列与模块统计
// 口径: 复用解析层；分组次序与渲染层完全一致
// ==========================================

use crate::domain::row::ResolvedRow;
use crate::domain::vocab::is_reserved_keyword;
use crate::error::ConvertResult;
use crate::renderer::grouping::group_by_module;
use crate::resolver;
use crate::source::TabularSource;
use crate::verifier::report::ModuleStat;
use indexmap::IndexMap;

/// 源表侧的期望内容
#[derive(Debug)]
pub struct ExpectedContent {
    /// 功能过程名序列（模块分组序内首次出现，连续重复折叠）
    pub process_sequence: Vec<String>,
    /// 按 (一级, 二级, 三级, 功能过程) 的统计
    pub stats: Vec<ModuleStat>,
}

/// 从数据源推导期望内容
pub fn derive_expected(source: &dyn TabularSource) -> ConvertResult<ExpectedContent> {
    let (_sheet, rows) = resolver::resolve(source)?;
    Ok(ExpectedContent {
        process_sequence: linearize(&rows),
        stats: build_stats(&rows),
    })
}

/// 按模块分组序线性化功能过程名
///
/// 行先按模块分组重排（与渲染层相同的首次出现序合并），
/// 再顺序追加过程名；只折叠与上一个已追加名相同的连续
/// 重复——同名过程出现在非相邻分组时会再次追加。
pub fn linearize(rows: &[ResolvedRow]) -> Vec<String> {
    let mut sequence: Vec<String> = Vec::new();

    for (_, group_rows) in &group_by_module(rows) {
        for row in group_rows {
            let name = row.process.trim();
            if name.is_empty() || is_reserved_keyword(name) {
                continue;
            }
            if sequence.last().map(String::as_str) != Some(name) {
                sequence.push(name.to_string());
            }
        }
    }

    sequence
}

/// 构建模块统计
///
/// 按 (一级, 二级, 三级) 首次出现序分组（此处不含客户需求，
/// 统计口径与源表导出一致），组内按过程首次出现序，
/// 子过程数 = 行数，详情 = 编号的描述清单。
pub fn build_stats(rows: &[ResolvedRow]) -> Vec<ModuleStat> {
    let mut groups: IndexMap<(String, String, String), Vec<&ResolvedRow>> = IndexMap::new();
    for row in rows {
        let key = (
            row.level1.trim().to_string(),
            row.level2.trim().to_string(),
            row.level3.trim().to_string(),
        );
        groups.entry(key).or_default().push(row);
    }

    let mut stats = Vec::new();
    for ((level1, level2, level3), group_rows) in &groups {
        let mut by_process: IndexMap<String, Vec<&ResolvedRow>> = IndexMap::new();
        for row in group_rows {
            let name = row.process.trim().to_string();
            if name.is_empty() || is_reserved_keyword(&name) {
                continue;
            }
            by_process.entry(name).or_default().push(row);
        }

        for (process_name, process_rows) in &by_process {
            let descriptions: Vec<&String> = process_rows
                .iter()
                .filter_map(|r| r.description.as_ref())
                .collect();
            let subprocess_detail = descriptions
                .iter()
                .enumerate()
                .map(|(i, d)| format!("{}. {}", i + 1, d))
                .collect::<Vec<_>>()
                .join("\n");

            stats.push(ModuleStat {
                level1: level1.clone(),
                level2: level2.clone(),
                level3: level3.clone(),
                process_name: process_name.clone(),
                subprocess_count: process_rows.len(),
                subprocess_detail,
            });
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(req: &str, l1: &str, l2: &str, l3: &str, process: &str, desc: &str) -> ResolvedRow {
        ResolvedRow {
            customer_requirement: req.to_string(),
            level1: l1.to_string(),
            level2: l2.to_string(),
            level3: l3.to_string(),
            process: process.to_string(),
            description: if desc.is_empty() {
                None
            } else {
                Some(desc.to_string())
            },
        }
    }

    #[test]
    fn test_linearize_collapses_contiguous_repeats() {
        let rows = vec![
            row("需求1", "A", "B", "C", "p1", "输入-x"),
            row("需求1", "A", "B", "C", "p1", "查询-y"),
            row("需求1", "A", "B", "C", "p2", "输出-z"),
        ];
        assert_eq!(linearize(&rows), vec!["p1", "p2"]);
    }

    #[test]
    fn test_linearize_keeps_same_name_in_non_adjacent_groups() {
        // 同名过程出现在不相邻的分组中，两次都计入
        let rows = vec![
            row("需求1", "A", "B", "C", "p1", ""),
            row("需求1", "A", "B", "D", "p2", ""),
            row("需求2", "A", "B", "C", "p1", ""),
        ];
        assert_eq!(linearize(&rows), vec!["p1", "p2", "p1"]);
    }

    #[test]
    fn test_linearize_follows_module_group_order() {
        // 非连续同组行并入首个分组后再线性化
        let rows = vec![
            row("需求1", "A", "B", "C", "p1", ""),
            row("需求1", "A", "B", "D", "p2", ""),
            row("需求1", "A", "B", "C", "p3", ""),
        ];
        assert_eq!(linearize(&rows), vec!["p1", "p3", "p2"]);
    }

    #[test]
    fn test_build_stats_counts_and_details() {
        let rows = vec![
            row("需求1", "A", "B", "C", "p1", "输入-x；查询-y"),
            row("需求1", "A", "B", "C", "p1", "呈现-z"),
            row("需求1", "A", "B", "C", "p2", ""),
        ];
        let stats = build_stats(&rows);
        assert_eq!(stats.len(), 2);

        assert_eq!(stats[0].process_name, "p1");
        assert_eq!(stats[0].subprocess_count, 2);
        assert_eq!(stats[0].subprocess_detail, "1. 输入-x；查询-y\n2. 呈现-z");

        assert_eq!(stats[1].process_name, "p2");
        assert_eq!(stats[1].subprocess_count, 1);
        assert_eq!(stats[1].subprocess_detail, "");
    }

    #[test]
    fn test_build_stats_groups_without_customer_requirement() {
        // 统计口径按 (一级,二级,三级)，不同客户需求合并计数
        let rows = vec![
            row("需求1", "A", "B", "C", "p1", "输入-x"),
            row("需求2", "A", "B", "C", "p1", "输出-y"),
        ];
        let stats = build_stats(&rows);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].subprocess_count, 2);
    }
}
