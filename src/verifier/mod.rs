// ==========================================
// COSMIC 功能点文档生成 - 一致性校验层
// ==========================================
// 职责: 独立重推期望序列 + 反向解析文档 + 位置对比
// 依赖: 只依赖解析层/渲染层的输出契约，不依赖其实现
// ==========================================

pub mod expected;
pub mod observed;
pub mod report;
pub mod verify;

pub use expected::{derive_expected, ExpectedContent};
pub use observed::{derive_observed, ModuleInstance, ObservedProcess};
pub use report::{ModuleStat, ProcessMismatch, ReportLog, VerificationReport};
pub use verify::verify;

/// 位置对齐时短侧的补位哨兵
pub const MISSING_SENTINEL: &str = "MISSING";
