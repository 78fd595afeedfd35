use crate::models::{Difficulty, Language, QuestionType};

/// 分段阶段得到的题目：题头字段 + 原始行
///
/// `lines` 保留原始缩进，直到下一个题头或文件结束。
#[derive(Debug, Clone, PartialEq)]
pub struct RawQuestion {
    /// 所在大题的题型，题头出现在任何大题标题之前时为 None
    pub question_type: Option<QuestionType>,
    pub chapter_id: u32,
    pub difficulty: Difficulty,
    pub score: i64,
    /// 题头所在行号（从 1 开始）
    pub line_number: usize,
    pub lines: Vec<String>,
}

impl RawQuestion {
    pub fn new(
        question_type: Option<QuestionType>,
        chapter_id: u32,
        difficulty: Difficulty,
        score: i64,
        line_number: usize,
    ) -> Self {
        Self {
            question_type,
            chapter_id,
            difficulty,
            score,
            line_number,
            lines: Vec::new(),
        }
    }
}

/// 一道完整的题目记录，对应 questions 表的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    pub language: Language,
    pub question_type: QuestionType,
    pub chapter_id: u32,
    pub difficulty: Difficulty,
    pub score: i64,
    pub content: String,
    /// 选项的 JSON 数组文本，仅单选题有
    pub options: Option<String>,
    /// 代码模板，保留缩进和空行
    pub code_template: Option<String>,
    pub answer: String,
}

impl QuestionRecord {
    /// 去重键：语言、题型、章节、难度、题干、选项、代码模板
    ///
    /// 空代码模板与 NULL 视为相同。
    pub fn dedup_key(&self) -> DedupKey<'_> {
        (
            self.language,
            self.question_type,
            self.chapter_id,
            self.difficulty,
            self.content.as_str(),
            self.options.as_deref(),
            self.code_template.as_deref().filter(|code| !code.is_empty()),
        )
    }
}

pub type DedupKey<'a> = (
    Language,
    QuestionType,
    u32,
    Difficulty,
    &'a str,
    Option<&'a str>,
    Option<&'a str>,
);
