//! 单个文件处理器 - 编排层
//!
//! 读取 → 识别语言 → 分段 → 提取字段，得到该文件的全部题目。

use crate::config::Config;
use crate::models::{load_text_lines, QuestionRecord, TextFile};
use crate::services::{detect_language, extractor, segment};
use crate::utils::logging::{log_file_parsed, truncate_text};
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, warn};

/// 单个文件的解析统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FileStats {
    /// 得到的题目数
    pub parsed: usize,
    /// 因没有题型被丢弃的题目数
    pub skipped: usize,
}

/// 处理单个输入文件
///
/// # 参数
/// - `path`: 文件路径
/// - `file_index`: 文件序号（仅用于日志）
/// - `config`: 配置
///
/// # 返回
/// 文件不存在时返回 `None`（已记录警告），否则返回该文件的题目
pub fn process_file(
    path: &Path,
    file_index: usize,
    config: &Config,
) -> Result<Option<Vec<QuestionRecord>>> {
    let file = match load_text_lines(path) {
        Ok(file) => file,
        Err(e) if e.is_not_found() => {
            warn!("[文件 {}] 警告：文件 {} 不存在", file_index, path.display());
            return Ok(None);
        }
        Err(e) => return Err(e).with_context(|| format!("无法读取题库文件: {}", path.display())),
    };

    let (records, stats) = parse_text_file(&file, config.language_scan_lines)
        .with_context(|| format!("无法解析题库文件: {}", path.display()))?;

    log_file_parsed(file_index, path, stats.parsed, stats.skipped);

    Ok(Some(records))
}

/// 解析已读入内存的文件
pub fn parse_text_file(
    file: &TextFile,
    language_scan_lines: usize,
) -> Result<(Vec<QuestionRecord>, FileStats)> {
    let language = detect_language(&file.lines, language_scan_lines);
    debug!("{} 识别为 {}", file.display_name(), language);

    let mut stats = FileStats::default();
    let mut records = Vec::new();

    for raw in segment(&file.lines) {
        match extractor::finalize(&raw, language)? {
            Some(record) => {
                debug!(
                    "  第 {} 行 [{}] 第{}章 {}分: {}",
                    raw.line_number,
                    record.question_type,
                    record.chapter_id,
                    record.score,
                    truncate_text(&record.content, 40)
                );
                records.push(record);
                stats.parsed += 1;
            }
            None => {
                warn!(
                    "{} 第 {} 行的题目出现在任何大题标题之前，已丢弃",
                    file.display_name(),
                    raw.line_number
                );
                stats.skipped += 1;
            }
        }
    }

    Ok((records, stats))
}
