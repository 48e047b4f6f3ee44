// ==========================================
// COSMIC 功能点文档生成 - 表格数据源层
// ==========================================
// 职责: 表格数据源抽象 + Excel/CSV/内存实现
// 契约: Sheet 枚举 / 前 N 行预览 / 按表头偏移整读
// ==========================================

pub mod csv_source;
pub mod excel;
pub mod memory;

pub use csv_source::CsvSource;
pub use excel::ExcelSource;
pub use memory::MemorySource;

use crate::domain::row::CellValue;
use crate::error::ConvertResult;

/// 表头定位方式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderSpec {
    /// 第 idx 行（0 起）为表头，数据从 idx+1 行开始
    Row(usize),
    /// 前 n 行联合作为复合表头（逐列拼接非缺失标签），数据从第 n 行开始
    Composite(usize),
}

/// 按表头读出的表：列标签 + 数据行
#[derive(Debug, Clone)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// 从原始网格按表头定位方式构建表
    pub fn from_grid(grid: &[Vec<CellValue>], header: &HeaderSpec) -> Table {
        let (columns, data_start) = match header {
            HeaderSpec::Row(idx) => {
                let labels = grid
                    .get(*idx)
                    .map(|row| row.iter().map(cell_label).collect::<Vec<_>>())
                    .unwrap_or_default();
                (labels, idx + 1)
            }
            HeaderSpec::Composite(n) => {
                let width = grid.iter().take(*n).map(|r| r.len()).max().unwrap_or(0);
                let mut labels = Vec::with_capacity(width);
                for col in 0..width {
                    let parts: Vec<String> = grid
                        .iter()
                        .take(*n)
                        .filter_map(|row| row.get(col))
                        .filter_map(|cell| cell.as_text())
                        .collect();
                    labels.push(parts.join(" ").trim().to_string());
                }
                (labels, *n)
            }
        };

        let width = columns.len();
        let rows: Vec<Vec<CellValue>> = grid
            .iter()
            .skip(data_start)
            .map(|row| pad_row(row, width))
            // 跳过完全空白的行
            .filter(|row| !row.iter().all(|c| c.as_text().is_none()))
            .collect();

        Table { columns, rows }
    }

    /// 单元格读取；越界按缺失处理
    pub fn cell(&self, row: usize, col: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&CellValue::Missing)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

fn cell_label(cell: &CellValue) -> String {
    cell.as_text().unwrap_or_default()
}

/// 行右侧补齐到表宽（Excel 合并区域与 CSV 短行）
fn pad_row(row: &[CellValue], width: usize) -> Vec<CellValue> {
    let mut padded: Vec<CellValue> = row.iter().take(width.max(row.len())).cloned().collect();
    while padded.len() < width {
        padded.push(CellValue::Missing);
    }
    padded
}

/// 表格数据源契约
///
/// 核心流水线只通过本契约消费数据源；
/// 具体编码（xlsx/csv/内存）由实现承担。
pub trait TabularSource {
    /// 全部 Sheet 名，按源中顺序
    fn sheet_names(&self) -> Vec<String>;

    /// 不带表头地预览前 max_rows 行
    fn preview(&self, sheet: &str, max_rows: usize) -> ConvertResult<Vec<Vec<CellValue>>>;

    /// 按表头定位方式整读
    fn read(&self, sheet: &str, header: &HeaderSpec) -> ConvertResult<Table>;
}
