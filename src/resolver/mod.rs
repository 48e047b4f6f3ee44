// ==========================================
// COSMIC 功能点文档生成 - Schema 解析层
// ==========================================
// 职责: Sheet 定位 → 表头定位 → 列映射 → 行构建
// 红线: 只读数据源,不写任何输出
// ==========================================

pub mod column_mapper;
pub mod header_locator;
pub mod row_builder;
pub mod sheet_locator;

pub use column_mapper::resolve_columns;
pub use header_locator::locate_header_row;
pub use row_builder::build_resolved_rows;
pub use sheet_locator::locate_sheet;

use crate::domain::row::ResolvedRow;
use crate::error::ConvertResult;
use crate::source::TabularSource;
use tracing::info;

/// 表头定位预览行数
pub const HEADER_PREVIEW_ROWS: usize = 10;

/// 对数据源执行完整的 Schema 解析
///
/// 返回选中的 Sheet 名与解析后的行序列。
/// 渲染与校验两侧都走本入口，保证口径一致。
pub fn resolve(source: &dyn TabularSource) -> ConvertResult<(String, Vec<ResolvedRow>)> {
    let sheet = locate_sheet(source);
    info!("使用 Sheet: {}", sheet);

    let preview = source.preview(&sheet, HEADER_PREVIEW_ROWS)?;
    let header = locate_header_row(&preview);
    info!("表头定位: {:?}", header);

    let mut table = source.read(&sheet, &header)?;
    let column_map = resolve_columns(&mut table)?;

    let rows = build_resolved_rows(&table, &column_map);
    info!("解析得到 {} 行", rows.len());

    Ok((sheet, rows))
}
