//! 分段器 - 业务能力层
//!
//! 单遍扫描题库文本行：
//! - 跟踪当前大题题型
//! - 按题头切分题目，收集每题的原始行
//! - 文件开头识别所属科目

use crate::error::{AppError, AppResult};
use crate::models::{Difficulty, Language, QuestionType, RawQuestion};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// 题头：`第N题 ...（2分）... 题号:123 ... 难度:易 ... 第3章`
static QUESTION_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^第[0-9０-９]+题.*（([0-9０-９]+\.?[0-9０-９]*)分）.*题号:[0-9０-９]+.*难度:(.).*第([0-9０-９]+)章",
    )
        .expect("question header regex")
});

/// 装饰分隔线
const SEPARATOR: &str = "━━━━━━━━━━━━━━━━";

/// 科目标签
const SUBJECT_LABEL: &str = "所属科目：";

/// 题头中解析出的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeaderFields {
    score: i64,
    difficulty: Difficulty,
    chapter_id: u32,
}

/// 分段状态
#[derive(Debug)]
enum SegmentState {
    /// 尚无进行中的题目
    Idle,
    /// 正在收集一道题的原始行
    Accumulating(RawQuestion),
}

/// 单遍分段器
#[derive(Debug)]
pub struct Segmenter {
    state: SegmentState,
    section: Option<QuestionType>,
    finished: Vec<RawQuestion>,
}

impl Segmenter {
    pub fn new() -> Self {
        Self {
            state: SegmentState::Idle,
            section: None,
            finished: Vec::new(),
        }
    }

    /// 处理一行
    ///
    /// # 参数
    /// - `line_number`: 行号（从 1 开始）
    /// - `line`: 原始行，收集时保留缩进
    pub fn feed(&mut self, line_number: usize, line: &str) {
        let trimmed = line.trim();

        if let Some(kind) = QuestionType::from_section_header(trimmed) {
            debug!("第 {} 行进入大题: {}", line_number, kind.name());
            self.section = Some(kind);
            return;
        }

        if trimmed.contains(SEPARATOR) {
            return;
        }

        match parse_header(trimmed, line_number) {
            Ok(Some(fields)) => {
                self.flush();
                self.state = SegmentState::Accumulating(RawQuestion::new(
                    self.section,
                    fields.chapter_id,
                    fields.difficulty,
                    fields.score,
                    line_number,
                ));
                return;
            }
            Ok(None) => {}
            Err(e) => {
                // 题头字段异常：结束上一题，丢弃本题正文
                warn!("{}，忽略该题", e);
                self.flush();
                return;
            }
        }

        if let SegmentState::Accumulating(current) = &mut self.state {
            current.lines.push(line.to_string());
        }
    }

    /// 输入结束，提交最后一道题
    pub fn finish(mut self) -> Vec<RawQuestion> {
        self.flush();
        self.finished
    }

    fn flush(&mut self) {
        if let SegmentState::Accumulating(question) =
            std::mem::replace(&mut self.state, SegmentState::Idle)
        {
            self.finished.push(question);
        }
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new()
    }
}

/// 将整份文件的行切分为题目
pub fn segment<S: AsRef<str>>(lines: &[S]) -> Vec<RawQuestion> {
    let mut segmenter = Segmenter::new();
    for (idx, line) in lines.iter().enumerate() {
        segmenter.feed(idx + 1, line.as_ref());
    }
    segmenter.finish()
}

/// 在前 `scan_lines` 行中查找 `所属科目：` 确定语言
///
/// 只看第一处标签；标签值无法识别或没有标签时默认为 Java。
pub fn detect_language<S: AsRef<str>>(lines: &[S], scan_lines: usize) -> Language {
    lines
        .iter()
        .take(scan_lines)
        .map(AsRef::<str>::as_ref)
        .find(|line| line.contains(SUBJECT_LABEL))
        .and_then(|line| line.split('：').nth(1))
        .and_then(|value| Language::find(value.trim()))
        .unwrap_or_default()
}

fn parse_header(line: &str, line_number: usize) -> AppResult<Option<HeaderFields>> {
    let Some(caps) = QUESTION_HEADER_RE.captures(line) else {
        return Ok(None);
    };

    let score: f64 = normalize_digits(&caps[1])
        .parse()
        .map_err(|_| AppError::invalid_header(line_number, format!("分值 {}", &caps[1])))?;
    let difficulty = caps[2]
        .chars()
        .next()
        .map(Difficulty::from_char)
        .unwrap_or_default();
    let chapter_id: u32 = normalize_digits(&caps[3])
        .parse()
        .map_err(|_| AppError::invalid_header(line_number, format!("章节 {}", &caps[3])))?;

    Ok(Some(HeaderFields {
        score: score.trunc() as i64,
        difficulty,
        chapter_id,
    }))
}

/// 全角数字转为 ASCII 数字
fn normalize_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '０'..='９' => char::from(b'0' + (c as u32 - '０' as u32) as u8),
            _ => c,
        })
        .collect()
}
