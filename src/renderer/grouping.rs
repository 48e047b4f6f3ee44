// ==========================================
// COSMIC 功能点文档生成 - 有序分组
// ==========================================
// 规则: 首次出现序的键控分组；同键非连续再现
//       合并进首次出现的分组（稳定 groupby 语义）。
// ==========================================

use crate::domain::row::{ModuleKey, ResolvedRow};
use crate::domain::vocab::is_reserved_keyword;
use indexmap::IndexMap;

/// 按模块分组键 (客户需求, 一级, 二级, 三级) 分组
///
/// 显式的插入有序 map：非连续出现的同键行并入首个分组，
/// 分组顺序 = 键的首次出现顺序。
pub fn group_by_module<'a>(rows: &'a [ResolvedRow]) -> IndexMap<ModuleKey, Vec<&'a ResolvedRow>> {
    let mut groups: IndexMap<ModuleKey, Vec<&ResolvedRow>> = IndexMap::new();
    for row in rows {
        groups.entry(row.module_key()).or_default().push(row);
    }
    groups
}

/// 模块分组内按功能过程分组（首次出现序）
///
/// 保留关键字名的过程整组跳过。
pub fn group_by_process<'a>(rows: &[&'a ResolvedRow]) -> IndexMap<String, Vec<&'a ResolvedRow>> {
    let mut groups: IndexMap<String, Vec<&ResolvedRow>> = IndexMap::new();
    for row in rows {
        let name = row.process.trim().to_string();
        if is_reserved_keyword(&name) {
            continue;
        }
        groups.entry(name).or_default().push(row);
    }
    groups
}

/// 模块分组内不重复的过程名（首次出现序，保留关键字除外）
pub fn distinct_processes(rows: &[&ResolvedRow]) -> Vec<String> {
    group_by_process(rows).keys().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(req: &str, l1: &str, l2: &str, l3: &str, process: &str) -> ResolvedRow {
        ResolvedRow {
            customer_requirement: req.to_string(),
            level1: l1.to_string(),
            level2: l2.to_string(),
            level3: l3.to_string(),
            process: process.to_string(),
            description: None,
        }
    }

    #[test]
    fn test_non_contiguous_rows_merge_into_first_group() {
        let rows = vec![
            row("需求1", "A", "B", "C", "p1"),
            row("需求1", "A", "B", "D", "p2"),
            row("需求1", "A", "B", "C", "p3"),
        ];
        let groups = group_by_module(&rows);
        assert_eq!(groups.len(), 2);

        let first = groups.get_index(0).unwrap();
        assert_eq!(first.0.level3, "C");
        assert_eq!(first.1.len(), 2);
    }

    #[test]
    fn test_customer_requirement_in_group_key() {
        // 模块三级全同但客户需求不同 → 两个分组
        let rows = vec![
            row("需求1", "A", "B", "C", "p1"),
            row("需求2", "A", "B", "C", "p2"),
        ];
        let groups = group_by_module(&rows);
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_group_order_is_first_occurrence() {
        let rows = vec![
            row("需求1", "Z", "Z", "Z", "p1"),
            row("需求1", "A", "A", "A", "p2"),
        ];
        let groups = group_by_module(&rows);
        let keys: Vec<&ModuleKey> = groups.keys().collect();
        assert_eq!(keys[0].level1, "Z");
        assert_eq!(keys[1].level1, "A");
    }

    #[test]
    fn test_process_groups_skip_reserved_keywords() {
        let rows = vec![
            row("需求1", "A", "B", "C", "p1"),
            row("需求1", "A", "B", "C", "查询"),
            row("需求1", "A", "B", "C", "p1"),
        ];
        let refs: Vec<&ResolvedRow> = rows.iter().collect();
        let groups = group_by_process(&refs);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups.get("p1").unwrap().len(), 2);
        assert_eq!(distinct_processes(&refs), vec!["p1"]);
    }
}
