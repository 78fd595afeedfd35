//! 日志工具模块
//!
//! 提供日志初始化和输出格式的辅助函数

use crate::config::Config;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 初始化控制台日志
///
/// `RUST_LOG` 优先；否则详细模式为 debug，普通模式为 info。
/// 重复初始化时静默忽略。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_file(false)
        .with_line_number(false);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 题库文本转 SQL");
    info!("📄 输入文件: {} 个", config.input_files.len());
    info!("🗄️ 目标表: {}", config.table_name);
    info!("{}", "=".repeat(60));
}

/// 记录单个文件的解析结果
///
/// # 参数
/// - `file_index`: 文件序号（从 1 开始）
/// - `path`: 文件路径
/// - `parsed`: 解析出的题目数
/// - `skipped`: 因没有题型被丢弃的题目数
pub fn log_file_parsed(file_index: usize, path: &Path, parsed: usize, skipped: usize) {
    if skipped > 0 {
        info!(
            "[文件 {}] 已解析 {}，获取 {} 道题目（丢弃 {} 道）",
            file_index,
            path.display(),
            parsed,
            skipped
        );
    } else {
        info!(
            "[文件 {}] 已解析 {}，获取 {} 道题目",
            file_index,
            path.display(),
            parsed
        );
    }
}

/// 打印最终统计信息
///
/// # 参数
/// - `files`: 成功处理的文件数
/// - `parsed`: 解析出的题目总数
/// - `unique`: 去重后剩余
/// - `output_path`: SQL 文件路径
pub fn print_final_stats(files: usize, parsed: usize, unique: usize, output_path: &Path) {
    info!("\n{}", "=".repeat(60));
    info!("📊 处理完成");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("共处理 {} 个文件", files);
    info!("解析出 {} 道题目", parsed);
    info!("去除重复后剩余 {} 道题目", unique);
    info!("共去除 {} 道重复题目", parsed.saturating_sub(unique));
    info!("{}", "=".repeat(60));
    info!("已生成 SQL 到 {}", output_path.display());
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大字符数
///
/// # 返回
/// 返回截断后的单行文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    let single_line = text.replace('\n', " ⏎ ");
    if single_line.chars().count() > max_len {
        single_line.chars().take(max_len).collect::<String>() + "..."
    } else {
        single_line
    }
}
