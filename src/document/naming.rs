// ==========================================
// COSMIC 功能点文档生成 - 产物命名
// ==========================================
// 约定: <主干>_<13位毫秒时间戳><扩展名>
// 后台保留清理进程只回收符合该命名的文件
// ==========================================

use chrono::Utc;

/// 生成带毫秒时间戳的产物文件名
///
/// 例: `timestamped_artifact_name("拆分表", ".json")` →
/// `拆分表_1735689600123.json`
///
/// 13 位毫秒时间戳是外部清理进程识别临时文件的唯一依据，
/// 本库创建的每个输入/输出产物都必须使用本函数命名。
pub fn timestamped_artifact_name(stem: &str, extension: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    format!("{}_{:013}{}", stem, millis, extension)
}
