// ==========================================
// COSMIC 功能点文档生成 - CSV 数据源
// ==========================================
// 支持: .csv（单 Sheet，以文件名主干为 Sheet 名）
// 工具: csv crate
// ==========================================

use crate::domain::row::CellValue;
use crate::error::{ConvertError, ConvertResult};
use crate::source::{HeaderSpec, Table, TabularSource};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

/// CSV 数据源：整文件即一个 Sheet
///
/// 表头不在此处解释（交由解析层定位），整文件按网格载入。
pub struct CsvSource {
    sheet_name: String,
    grid: Vec<Vec<CellValue>>,
}

impl CsvSource {
    pub fn open<P: AsRef<Path>>(path: P) -> ConvertResult<CsvSource> {
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
        if ext != "csv" {
            return Err(ConvertError::UnsupportedFormat(ext));
        }

        let file = File::open(path).map_err(|e| ConvertError::SourceUnreadable {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let mut grid = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| ConvertError::SourceUnreadable {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            let row: Vec<CellValue> = record
                .iter()
                .map(|field| {
                    if field.trim().is_empty() {
                        // CSV 的空字段视为缺失（对应合并单元格语义）
                        CellValue::Missing
                    } else {
                        CellValue::Text(field.to_string())
                    }
                })
                .collect();
            grid.push(row);
        }

        let sheet_name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Sheet1")
            .to_string();

        Ok(CsvSource { sheet_name, grid })
    }
}

impl TabularSource for CsvSource {
    fn sheet_names(&self) -> Vec<String> {
        vec![self.sheet_name.clone()]
    }

    fn preview(&self, sheet: &str, max_rows: usize) -> ConvertResult<Vec<Vec<CellValue>>> {
        if sheet != self.sheet_name {
            return Err(ConvertError::SheetNotFound(sheet.to_string()));
        }
        Ok(self.grid.iter().take(max_rows).cloned().collect())
    }

    fn read(&self, sheet: &str, header: &HeaderSpec) -> ConvertResult<Table> {
        if sheet != self.sheet_name {
            return Err(ConvertError::SheetNotFound(sheet.to_string()));
        }
        Ok(Table::from_grid(&self.grid, header))
    }
}
