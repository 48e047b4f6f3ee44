// ==========================================
// COSMIC 功能点文档生成 - Sheet 定位
// ==========================================
// 规则: 名称含"拆分表"或"功能点"的首个 Sheet；
//       否则回退到源中第一个 Sheet。总是成功。
// ==========================================

use crate::source::TabularSource;
use tracing::warn;

/// Sheet 名标记子串
const SHEET_MARKERS: [&str; 2] = ["拆分表", "功能点"];

/// 定位数据所在的 Sheet
pub fn locate_sheet(source: &dyn TabularSource) -> String {
    let names = source.sheet_names();

    for name in &names {
        if SHEET_MARKERS.iter().any(|marker| name.contains(marker)) {
            return name.clone();
        }
    }

    let fallback = names.first().cloned().unwrap_or_default();
    warn!("未找到名称包含'拆分表'的 Sheet，默认使用: {}", fallback);
    fallback
}
