//! 日志工具模块
//!
//! 提供日志格式化和输出的辅助函数

use tracing::info;

use crate::services::SectionModel;

/// 记录程序启动信息
///
/// # 参数
/// - `command`: 当前执行的命令名
pub fn log_startup(command: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 答题卡生成 ({})", command);
    info!("{}", "=".repeat(60));
}

/// 记录题组列表
///
/// # 参数
/// - `title`: 答题卡标题
/// - `model`: 题组模型
pub fn log_sections(title: &str, model: &SectionModel) {
    info!("📋 {} | 题号模式: {}", title, model.mode());
    for summary in model.describe_sections() {
        info!("  {}. {}", summary.position, summary);
    }
    info!("✓ 共 {} 个题组，{} 题", model.len(), model.total_questions());
}

/// 记录导出完成信息
///
/// # 参数
/// - `target`: 导出目标
pub fn log_export_done(target: &str) {
    info!("\n{}", "─".repeat(60));
    info!("✅ 导出完成: {}", target);
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "─".repeat(60));
}
