// ==========================================
// COSMIC 功能点文档生成 - 解析行构建
// ==========================================
// 职责: 投影 + 关键字置空 + 向下填充 + 残留表头剔除
// 不变式: 产出行的 一级/二级/三级/功能过程 均非缺失
// ==========================================

use crate::domain::row::{ColumnMap, ResolvedRow, SemanticField};
use crate::domain::vocab::is_reserved_keyword;
use crate::source::Table;
use tracing::debug;

/// 向下填充的工作区：六个语义字段的当前值
#[derive(Default)]
struct FillState {
    customer_requirement: Option<String>,
    level1: Option<String>,
    level2: Option<String>,
    level3: Option<String>,
    process: Option<String>,
}

/// 构建解析后的行序列
///
/// 逐行: 投影到六个语义字段 → 功能过程列的保留关键字置空
/// → 客户需求/一级/二级/三级/功能过程 向下填充（合并单元格
/// 语义，子过程描述不填充）→ 剔除一级模块仍含表头残留的行
/// 与填充后关键列仍缺失的行。
pub fn build_resolved_rows(table: &Table, column_map: &ColumnMap) -> Vec<ResolvedRow> {
    let mut state = FillState::default();
    let mut resolved = Vec::new();

    let read = |row: usize, field: SemanticField| -> Option<String> {
        column_map
            .get(field)
            .and_then(|col| table.cell(row, col).as_text())
    };

    for row_idx in 0..table.row_count() {
        let customer = read(row_idx, SemanticField::CustomerRequirement);
        let level1 = read(row_idx, SemanticField::Level1);
        let level2 = read(row_idx, SemanticField::Level2);
        let level3 = read(row_idx, SemanticField::Level3);
        // 关键字是描述片段而非过程名，置空后由填充补齐
        let process =
            read(row_idx, SemanticField::Process).filter(|p| !is_reserved_keyword(p));
        let description = read(row_idx, SemanticField::Description);

        // 向下填充
        fill(&mut state.customer_requirement, customer);
        fill(&mut state.level1, level1);
        fill(&mut state.level2, level2);
        fill(&mut state.level3, level3);
        fill(&mut state.process, process);

        // 表头重复行剔除
        if state
            .level1
            .as_deref()
            .is_some_and(|l1| l1.contains("一级模块"))
        {
            debug!("剔除表头残留行: 第 {} 行", row_idx);
            continue;
        }

        // 填充后关键列仍缺失的行（文件头部的游离行）不保留
        let (Some(level1), Some(level2), Some(level3), Some(process)) = (
            state.level1.clone(),
            state.level2.clone(),
            state.level3.clone(),
            state.process.clone(),
        ) else {
            debug!("剔除关键列缺失行: 第 {} 行", row_idx);
            continue;
        };

        resolved.push(ResolvedRow {
            customer_requirement: state.customer_requirement.clone().unwrap_or_default(),
            level1,
            level2,
            level3,
            process,
            description,
        });
    }

    resolved
}

fn fill(slot: &mut Option<String>, value: Option<String>) {
    if value.is_some() {
        *slot = value;
    }
}
