// ==========================================
// COSMIC 功能点文档生成 - 行模型
// ==========================================
// 职责: 单元格值 / 语义字段 / 列映射 / 解析后行
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// 单元格值
///
/// 缺失（合并单元格的被覆盖区域、空单元格）与空字符串是两种状态。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Missing,
    Text(String),
    Number(f64),
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// 转为去空白文本；缺失或纯空白返回 None
    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Missing => None,
            CellValue::Text(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            CellValue::Number(n) => Some(format_number(*n)),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Missing => Ok(()),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Number(n) => write!(f, "{}", format_number(*n)),
        }
    }
}

/// 整数值不带小数点输出（Excel 数值单元格常见为整数）
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// 六个语义字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticField {
    CustomerRequirement,
    Level1,
    Level2,
    Level3,
    Process,
    Description,
}

impl SemanticField {
    /// 全部字段，按列扫描时的匹配顺序
    pub const ALL: [SemanticField; 6] = [
        SemanticField::CustomerRequirement,
        SemanticField::Level1,
        SemanticField::Level2,
        SemanticField::Level3,
        SemanticField::Process,
        SemanticField::Description,
    ];

    /// 该字段接受的列名变体（精确匹配，按去空白比较）
    pub fn label_variants(&self) -> &'static [&'static str] {
        match self {
            SemanticField::CustomerRequirement => &["客户需求"],
            SemanticField::Level1 => &["一级模块"],
            SemanticField::Level2 => &["二级模块"],
            SemanticField::Level3 => &["三级模块"],
            SemanticField::Process => &["功能过程", "功能名称"],
            SemanticField::Description => &["子过程描述", "功能描述"],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SemanticField::CustomerRequirement => "客户需求",
            SemanticField::Level1 => "一级模块",
            SemanticField::Level2 => "二级模块",
            SemanticField::Level3 => "三级模块",
            SemanticField::Process => "功能过程",
            SemanticField::Description => "子过程描述",
        }
    }
}

/// 列映射：六个语义字段 → 源表列下标
///
/// 一次解析构建，此后不可变。
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    customer_requirement: Option<usize>,
    level1: Option<usize>,
    level2: Option<usize>,
    level3: Option<usize>,
    process: Option<usize>,
    description: Option<usize>,
}

impl ColumnMap {
    pub fn get(&self, field: SemanticField) -> Option<usize> {
        match field {
            SemanticField::CustomerRequirement => self.customer_requirement,
            SemanticField::Level1 => self.level1,
            SemanticField::Level2 => self.level2,
            SemanticField::Level3 => self.level3,
            SemanticField::Process => self.process,
            SemanticField::Description => self.description,
        }
    }

    pub fn set(&mut self, field: SemanticField, column: usize) {
        let slot = match field {
            SemanticField::CustomerRequirement => &mut self.customer_requirement,
            SemanticField::Level1 => &mut self.level1,
            SemanticField::Level2 => &mut self.level2,
            SemanticField::Level3 => &mut self.level3,
            SemanticField::Process => &mut self.process,
            SemanticField::Description => &mut self.description,
        };
        *slot = Some(column);
    }

    pub fn contains(&self, field: SemanticField) -> bool {
        self.get(field).is_some()
    }

    /// 尚未映射的字段列表
    pub fn missing_fields(&self) -> Vec<SemanticField> {
        SemanticField::ALL
            .iter()
            .copied()
            .filter(|f| !self.contains(*f))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// 解析后的行：六个语义字段，向下填充已完成
///
/// 不变式: Level1/Level2/Level3/Process 非缺失（构建阶段保证）。
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRow {
    /// 客户需求（极少数源表缺列时为空串）
    pub customer_requirement: String,
    pub level1: String,
    pub level2: String,
    pub level3: String,
    pub process: String,
    /// 子过程描述；不参与向下填充，可缺失
    pub description: Option<String>,
}

impl ResolvedRow {
    /// 该行所属的模块分组键
    pub fn module_key(&self) -> ModuleKey {
        ModuleKey {
            customer_requirement: self.customer_requirement.trim().to_string(),
            level1: self.level1.trim().to_string(),
            level2: self.level2.trim().to_string(),
            level3: self.level3.trim().to_string(),
        }
    }
}

/// 模块分组键 (客户需求, 一级, 二级, 三级)
///
/// 客户需求参与分组：不同客户需求下的同名模块不得合并。
/// 比较按去空白后的字符串相等。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleKey {
    pub customer_requirement: String,
    pub level1: String,
    pub level2: String,
    pub level3: String,
}
