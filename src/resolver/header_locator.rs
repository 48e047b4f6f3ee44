// ==========================================
// COSMIC 功能点文档生成 - 表头定位
// ==========================================
// 规则: 前 10 行打分，得分 >=2 的最高分行作为表头；
//       平分取行号最小；无候选则回退前 3 行复合表头。
// 注意: 这是启发式打分，须容忍关键字在数据中偶现。
// ==========================================

use crate::domain::row::CellValue;
use crate::source::HeaderSpec;
use tracing::info;

/// 复合表头联合的行数
const COMPOSITE_HEADER_ROWS: usize = 3;

/// 候选表头行的最低得分
const MIN_HEADER_SCORE: u32 = 2;

/// 在预览行中定位表头
pub fn locate_header_row(preview: &[Vec<CellValue>]) -> HeaderSpec {
    let mut best: Option<(usize, u32)> = None;

    for (idx, row) in preview.iter().enumerate() {
        let score = score_header_row(row);
        if score >= MIN_HEADER_SCORE {
            // 平分保留首个出现的行
            let better = match best {
                Some((_, best_score)) => score > best_score,
                None => true,
            };
            if better {
                best = Some((idx, score));
            }
        }
    }

    match best {
        Some((idx, score)) => {
            info!("定位到表头在第 {} 行 (得分: {})", idx, score);
            HeaderSpec::Row(idx)
        }
        None => {
            info!("未找到标准表头行，尝试使用多行表头策略");
            HeaderSpec::Composite(COMPOSITE_HEADER_ROWS)
        }
    }
}

/// 对单行打分：四组关键字各计 1 分
fn score_header_row(row: &[CellValue]) -> u32 {
    let row_text: String = row
        .iter()
        .filter_map(|cell| cell.as_text())
        .collect::<Vec<_>>()
        .join(" ");

    let mut score = 0;
    if row_text.contains("客户需求") {
        score += 1;
    }
    if row_text.contains("一级模块") {
        score += 1;
    }
    if row_text.contains("功能过程") || row_text.contains("功能名称") {
        score += 1;
    }
    if row_text.contains("子过程描述") || row_text.contains("功能描述") {
        score += 1;
    }
    score
}
