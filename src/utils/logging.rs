/// 日志工具模块
///
/// 提供日志初始化、格式化和输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化 tracing 日志
///
/// # 参数
/// - `verbose`: 是否启用详细日志（debug 级别）
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `api_base_url`: 评分后端地址
pub fn log_startup(api_base_url: &str) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 语言评分会话模式");
    info!("🌐 评分后端: {}", api_base_url);
    info!("{}", "=".repeat(60));
}

/// 记录短语加载信息
///
/// # 参数
/// - `total`: 短语总数
pub fn log_phrases_loaded(total: usize) {
    info!("✓ 找到 {} 条待分析的练习短语", total);
}

/// 打印会话统计
///
/// # 参数
/// - `scored`: 成功评分数量
/// - `degraded`: 降级结果数量
/// - `skipped`: 被拦截数量
/// - `average`: 会话平均分
pub fn log_session_summary(scored: usize, degraded: usize, skipped: usize, average: u32) {
    info!("\n{}", "=".repeat(60));
    info!("📊 会话统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}", scored);
    info!("❌ 降级: {}", degraded);
    info!("⏭ 跳过: {}", skipped);
    info!("🎯 会话平均分: {}", average);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
