/// 日志工具模块
///
/// 提供日志初始化和输出的辅助函数
use crate::config::Config;
use crate::presenter::Score;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 初始化日志
///
/// `RUST_LOG` 优先；否则 `verbose` 时为 debug，默认 info
pub fn init(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), level)));

    // 测试中可能重复初始化，忽略错误
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `config`: 当前配置
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🧠 学习集客户端启动 v{}", env!("CARGO_PKG_VERSION"));
    info!("🌐 生成服务: {}", config.api_base_url);
    info!(
        "📋 难度: {} | 题目数: {} | 摘要: {} | 术语表: {}",
        config.difficulty, config.num_questions, config.include_summary, config.include_glossary
    );
    info!("{}", "=".repeat(60));
}

/// 退出前汇总本次测验
///
/// # 参数
/// - `score`: 得分统计
pub fn print_final_stats(score: &Score) {
    let unanswered = score.total.saturating_sub(score.answered);
    info!(
        "🏁 学习结束 [{}] 答对 {} / 共 {} 题，未作答 {} 题",
        chrono::Local::now().format("%H:%M:%S"),
        score.correct,
        score.total,
        unanswered
    );
    if score.total > 0 && score.correct == score.total {
        info!("🎉 全部答对");
    }
}

/// 把学习材料压成一行用于日志预览，超过 `max_chars` 个字符时截断并加省略号
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    let preview = text.split_whitespace().collect::<Vec<_>>().join(" ");
    match preview.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", &preview[..cut]),
        None => preview,
    }
}
