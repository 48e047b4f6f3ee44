// ==========================================
// COSMIC 功能点文档生成 - Excel 数据源
// ==========================================
// 支持: .xlsx/.xls
// 工具: calamine
// ==========================================

use crate::domain::row::CellValue;
use crate::error::{ConvertError, ConvertResult};
use crate::source::{HeaderSpec, Table, TabularSource};
use calamine::{open_workbook, Data, Reader, Xlsx};
use indexmap::IndexMap;
use std::path::Path;
use tracing::debug;

/// calamine 支撑的 Excel 数据源
///
/// 打开时整体载入全部 Sheet 网格；此后只读。
pub struct ExcelSource {
    sheets: IndexMap<String, Vec<Vec<CellValue>>>,
}

impl ExcelSource {
    pub fn open<P: AsRef<Path>>(path: P) -> ConvertResult<ExcelSource> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConvertError::SourceUnreadable {
                path: path.display().to_string(),
                message: "文件不存在".to_string(),
            });
        }

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if ext != "xlsx" && ext != "xls" {
            return Err(ConvertError::UnsupportedFormat(ext));
        }

        let mut workbook: Xlsx<_> =
            open_workbook(path).map_err(|e: calamine::XlsxError| ConvertError::SourceUnreadable {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        let sheet_names = workbook.sheet_names().to_vec();
        if sheet_names.is_empty() {
            return Err(ConvertError::SourceUnreadable {
                path: path.display().to_string(),
                message: "Excel 文件无工作表".to_string(),
            });
        }

        let mut sheets = IndexMap::new();
        for name in sheet_names {
            let range = workbook
                .worksheet_range(&name)
                .map_err(|e| ConvertError::SourceUnreadable {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?;

            let grid: Vec<Vec<CellValue>> = range
                .rows()
                .map(|row| row.iter().map(convert_cell).collect())
                .collect();
            debug!("载入 Sheet {}: {} 行", name, grid.len());
            sheets.insert(name, grid);
        }

        Ok(ExcelSource { sheets })
    }
}

/// calamine 单元格 → CellValue
fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Missing,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Text(b.to_string()),
        Data::Error(_) => CellValue::Missing,
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}

impl TabularSource for ExcelSource {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_missing_file() {
        let result = ExcelSource::open("不存在的文件.xlsx");
        assert!(matches!(
            result,
            Err(ConvertError::SourceUnreadable { .. })
        ));
    }

    #[test]
    fn test_open_unsupported_extension() {
        let temp = tempfile::NamedTempFile::with_suffix(".txt").unwrap();
        let result = ExcelSource::open(temp.path());
        assert!(matches!(result, Err(ConvertError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_convert_cell_variants() {
        assert_eq!(convert_cell(&Data::Empty), CellValue::Missing);
        assert_eq!(
            convert_cell(&Data::String("文本".to_string())),
            CellValue::Text("文本".to_string())
        );
        assert_eq!(convert_cell(&Data::Int(3)), CellValue::Number(3.0));
    }
}
