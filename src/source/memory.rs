// ==========================================
// COSMIC 功能点文档生成 - 内存数据源
// ==========================================
// 用途: 测试与内嵌调用方的现成网格数据
// ==========================================

use crate::domain::row::CellValue;
use crate::error::{ConvertError, ConvertResult};
use crate::source::{HeaderSpec, Table, TabularSource};
use indexmap::IndexMap;

/// 内存表格数据源
#[derive(Debug, Default)]
pub struct MemorySource {
    sheets: IndexMap<String, Vec<Vec<CellValue>>>,
}

impl MemorySource {
    pub fn new() -> MemorySource {
        MemorySource::default()
    }

    /// 追加一个 Sheet；同名覆盖
    pub fn with_sheet<S: Into<String>>(mut self, name: S, grid: Vec<Vec<CellValue>>) -> Self {
        self.sheets.insert(name.into(), grid);
        self
    }

    /// 便捷构造：全文本网格，空串按缺失处理
    pub fn with_text_sheet<S: Into<String>>(self, name: S, grid: &[&[&str]]) -> Self {
        let converted = grid
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| {
                        if cell.is_empty() {
                            CellValue::Missing
                        } else {
                            CellValue::Text(cell.to_string())
                        }
                    })
                    .collect()
            })
            .collect();
        self.with_sheet(name, converted)
    }
}

impl TabularSource for MemorySource {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.keys().cloned().collect()
    }

    fn preview(&self, sheet: &str, max_rows: usize) -> ConvertResult<Vec<Vec<CellValue>>> {
        let grid = self
            .sheets
            .get(sheet)
            .ok_or_else(|| ConvertError::SheetNotFound(sheet.to_string()))?;
        Ok(grid.iter().take(max_rows).cloned().collect())
    }

    fn read(&self, sheet: &str, header: &HeaderSpec) -> ConvertResult<Table> {
        let grid = self
            .sheets
            .get(sheet)
            .ok_or_else(|| ConvertError::SheetNotFound(sheet.to_string()))?;
        Ok(Table::from_grid(grid, header))
    }
}
