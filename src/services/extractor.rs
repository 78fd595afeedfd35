//! 字段提取 - 业务能力层
//!
//! 把一道题的原始行拆成题干、选项、代码模板和答案。

use crate::error::AppResult;
use crate::models::{Language, QuestionRecord, RawQuestion};
use regex::Regex;
use std::sync::LazyLock;

/// 选项行：`(A)选项文本`
static OPTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\(([A-Z])\)(.*)").expect("option regex"));

const ANSWER_MARKER: &str = "答案：";
const COMMENT_OPEN: &str = "/*";
const COMMENT_CLOSE: &str = "*/";

/// 题干、选项、代码模板
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedBody {
    pub content: String,
    pub options: Option<Vec<String>>,
    pub code_template: Option<String>,
}

/// 将分段结果整理为题目记录
///
/// 题型未知（题头出现在大题标题之前）时返回 `Ok(None)`。
pub fn finalize(raw: &RawQuestion, language: Language) -> AppResult<Option<QuestionRecord>> {
    let Some(question_type) = raw.question_type else {
        return Ok(None);
    };

    let (content_lines, answer) = split_answer(&raw.lines);
    let content_lines = trim_blank_edges(content_lines);

    let body = if question_type.has_code_template() {
        extract_code_question(content_lines)
    } else {
        extract_choice(content_lines)
    };

    let options = body
        .options
        .as_ref()
        .map(serde_json::to_string)
        .transpose()?;

    Ok(Some(QuestionRecord {
        language,
        question_type,
        chapter_id: raw.chapter_id,
        difficulty: raw.difficulty,
        score: raw.score,
        content: body.content,
        options,
        code_template: body.code_template,
        answer,
    }))
}

/// 分离答案
///
/// 第一处去掉首尾空白后以 `答案：` 开头的行及其后所有行都属于答案。
/// 只去掉第一行里的标记，其余行原样保留，整体去掉首尾空白。
pub fn split_answer(lines: &[String]) -> (&[String], String) {
    let Some(idx) = lines
        .iter()
        .position(|line| line.trim().starts_with(ANSWER_MARKER))
    else {
        return (lines, String::new());
    };

    let mut answer_lines: Vec<String> = lines[idx..].to_vec();
    answer_lines[0] = answer_lines[0].replacen(ANSWER_MARKER, "", 1);
    let answer = answer_lines.join("\n").trim().to_string();

    (&lines[..idx], answer)
}

/// 去掉首尾空行
pub fn trim_blank_edges(lines: &[String]) -> &[String] {
    let start = lines
        .iter()
        .position(|line| !line.trim().is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map_or(start, |i| i + 1);
    &lines[start..end]
}

/// 单选题：选项之前的行为题干，`(A)` 起每个标记开始一个新选项
///
/// 第一个选项出现后，非空且不带标记的行都是当前选项的续行。
pub fn extract_choice(lines: &[String]) -> ExtractedBody {
    let mut content_lines: Vec<&str> = Vec::new();
    let mut options: Vec<String> = Vec::new();
    let mut current: Option<Vec<&str>> = None;

    for line in lines {
        let stripped = line.trim();

        if let Some(caps) = OPTION_RE.captures(stripped) {
            if let Some(parts) = current.take() {
                options.push(parts.join("\n").trim().to_string());
            }
            let text = caps.get(2).map_or("", |m| m.as_str()).trim();
            current = Some(vec![text]);
            continue;
        }

        if stripped.is_empty() {
            continue;
        }

        match current.as_mut() {
            Some(parts) => parts.push(stripped),
            None => content_lines.push(line.trim_end()),
        }
    }

    if let Some(parts) = current {
        options.push(parts.join("\n").trim().to_string());
    }

    ExtractedBody {
        content: content_lines.join("\n").trim().to_string(),
        options: Some(options),
        code_template: None,
    }
}

/// 填空 / 改错 / 设计题：第一个注释块是题目描述，注释之后是代码模板
///
/// 没有完整注释块时，所有非空行作为题干，没有代码模板。
pub fn extract_code_question(lines: &[String]) -> ExtractedBody {
    let Some((start, end)) = find_comment_block(lines) else {
        let content = lines
            .iter()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.trim_end())
            .collect::<Vec<_>>()
            .join("\n");
        return ExtractedBody {
            content: content.trim().to_string(),
            options: None,
            code_template: None,
        };
    };

    let content = lines[start..=end]
        .iter()
        .filter_map(|line| description_line(line))
        .collect::<Vec<_>>()
        .join("\n");

    let code_lines = &lines[end + 1..];
    let first_code = code_lines
        .iter()
        .position(|line| !line.trim().is_empty())
        .unwrap_or(code_lines.len());

    ExtractedBody {
        content: content.trim().to_string(),
        options: None,
        code_template: Some(code_lines[first_code..].join("\n")),
    }
}

/// 第一个 `/*` 所在行，及其后（含同一行）第一个 `*/` 所在行
fn find_comment_block(lines: &[String]) -> Option<(usize, usize)> {
    let start = lines.iter().position(|line| line.contains(COMMENT_OPEN))?;
    let end = lines[start..]
        .iter()
        .position(|line| line.contains(COMMENT_CLOSE))?;
    Some((start, start + end))
}

/// 描述块中的一行：去掉注释符、分隔线、`【...】` 标签和空行
fn description_line(line: &str) -> Option<&str> {
    let stripped = line.trim();
    let text = if stripped.contains(COMMENT_OPEN) || stripped.contains(COMMENT_CLOSE) {
        strip_delimiters(stripped)?
    } else {
        line.trim_end()
    };

    let visible = text.trim();
    if visible.is_empty() || is_decoration(visible) {
        return None;
    }
    if visible.starts_with("----") || visible.starts_with("===") {
        return None;
    }
    if visible.contains('【') && visible.contains('】') {
        return None;
    }
    Some(text)
}

/// 去掉行首的 `/*` 和行尾的 `*/`
///
/// 注释符是一串星号（`/*****`、`*****/`、`/****FOUND****/`）时整行是装饰，返回 None。
fn strip_delimiters(line: &str) -> Option<&str> {
    let line = match line.find(COMMENT_OPEN) {
        Some(pos) => &line[pos + COMMENT_OPEN.len()..],
        None => line,
    };
    if line.starts_with('*') {
        return None;
    }
    let line = match line.rfind(COMMENT_CLOSE) {
        Some(pos) => &line[..pos],
        None => line,
    };
    if line.ends_with('*') {
        return None;
    }
    Some(line.trim())
}

/// 只由 `*`、`-`、`=` 和空白组成
fn is_decoration(text: &str) -> bool {
    text.chars()
        .all(|c| matches!(c, '*' | '-' | '=') || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, QuestionType};

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    fn raw(question_type: Option<QuestionType>, body: &str) -> RawQuestion {
        let mut q = RawQuestion::new(question_type, 3, Difficulty::Easy, 2, 1);
        q.lines = lines(body);
        q
    }

    #[test]
    fn test_single_choice_example() {
        let q = raw(
            Some(QuestionType::SingleChoice),
            "内容...\n(A)选项一\n(B)选项二\n答案：A",
        );
        let record = finalize(&q, Language::Java).unwrap().unwrap();

        assert_eq!(record.question_type, QuestionType::SingleChoice);
        assert_eq!(record.chapter_id, 3);
        assert_eq!(record.difficulty, Difficulty::Easy);
        assert_eq!(record.score, 2);
        assert_eq!(record.content, "内容...");
        assert_eq!(record.options.as_deref(), Some(r#"["选项一","选项二"]"#));
        assert_eq!(record.code_template, None);
        assert_eq!(record.answer, "A");
    }

    #[test]
    fn test_programming_example() {
        let q = raw(
            Some(QuestionType::Programming),
            "/* description text */\n\ncode line 1\ncode line 2\n答案：\nfixed line",
        );
        let record = finalize(&q, Language::Python).unwrap().unwrap();

        assert_eq!(record.language, Language::Python);
        assert_eq!(record.content, "description text");
        assert_eq!(record.code_template.as_deref(), Some("code line 1\ncode line 2"));
        assert_eq!(record.answer, "fixed line");
        assert_eq!(record.options, None);
    }

    #[test]
    fn test_untyped_question_is_skipped() {
        let q = raw(None, "题干\n答案：A");
        assert_eq!(finalize(&q, Language::Java).unwrap(), None);
    }

    #[test]
    fn test_missing_answer_marker() {
        let body = lines("第一行\n第二行");
        let (content, answer) = split_answer(&body);
        assert_eq!(content.len(), 2);
        assert_eq!(answer, "");
    }

    #[test]
    fn test_multiline_answer_keeps_inner_lines() {
        let body = lines("题干\n  答案：\nint main() {\n    return 0;\n}\n");
        let (content, answer) = split_answer(&body);
        assert_eq!(content, &body[..1]);
        assert_eq!(answer, "int main() {\n    return 0;\n}");
    }

    #[test]
    fn test_trim_blank_edges() {
        let body = lines("\n  \nA\n\nB\n \n");
        assert_eq!(trim_blank_edges(&body), &body[2..5]);
        let empty = lines("\n \n");
        assert!(trim_blank_edges(&empty).is_empty());
    }

    #[test]
    fn test_choice_continuation_lines() {
        let body = lines("  下列说法正确的是  \n\n(A) 第一项\n  第一项续行\n(B)第二项\n\n(C)\n不再是题干");
        let extracted = extract_choice(&body);
        assert_eq!(extracted.content, "下列说法正确的是");
        assert_eq!(
            extracted.options.unwrap(),
            vec![
                "第一项\n第一项续行".to_string(),
                "第二项".to_string(),
                "不再是题干".to_string(),
            ]
        );
    }

    #[test]
    fn test_choice_without_options() {
        let extracted = extract_choice(&lines("只有题干"));
        assert_eq!(extracted.content, "只有题干");
        assert_eq!(extracted.options, Some(vec![]));
    }

    #[test]
    fn test_comment_block_description() {
        let body = lines(
            "/*------------------------------------------------\n【程序填空】\n--------------------------------------------------\n功能：计算 1 到 n 的和。\n    要求使用循环。\n\n------------------------------------------------*/\n\n\npublic class Main {\n    /***********SPACE***********/\n\n    int sum;\n}",
        );
        let extracted = extract_code_question(&body);
        assert_eq!(extracted.content, "功能：计算 1 到 n 的和。\n    要求使用循环。");
        assert_eq!(
            extracted.code_template.as_deref(),
            Some("public class Main {\n    /***********SPACE***********/\n\n    int sum;\n}")
        );
    }

    #[test]
    fn test_asterisk_box_comment_is_dropped() {
        let stars = "*".repeat(32);
        let body = lines(&format!(
            "/{stars}\n【程序设计】\n功能：求和。\n{stars}/\nint main() {{}}"
        ));
        let extracted = extract_code_question(&body);
        assert_eq!(extracted.content, "功能：求和。");
        assert_eq!(extracted.code_template.as_deref(), Some("int main() {}"));
    }

    #[test]
    fn test_marker_only_comment_gives_empty_content() {
        let body = lines("public class Main {\n    /**********FOUND**********/\n    int x = 1\n}");
        let extracted = extract_code_question(&body);
        assert_eq!(extracted.content, "");
        assert_eq!(extracted.code_template.as_deref(), Some("    int x = 1\n}"));
    }

    #[test]
    fn test_star_rule_inside_plain_comment_is_dropped() {
        let body = lines("/*\n  ******\n  题目描述\n  ===== *\n*/\ncode");
        let extracted = extract_code_question(&body);
        assert_eq!(extracted.content, "题目描述");
    }

    #[test]
    fn test_comment_without_close_falls_back() {
        let body = lines("/* 描述\n  代码  \n\n更多");
        let extracted = extract_code_question(&body);
        assert_eq!(extracted.content, "/* 描述\n  代码\n更多");
        assert_eq!(extracted.code_template, None);
    }

    #[test]
    fn test_comment_at_end_gives_empty_template() {
        let body = lines("/*\n描述\n*/");
        let extracted = extract_code_question(&body);
        assert_eq!(extracted.content, "描述");
        assert_eq!(extracted.code_template.as_deref(), Some(""));
    }
}
