//! SQL 生成服务 - 业务能力层
//!
//! 把去重后的题目渲染成一条 INSERT 语句并写入文件

use crate::error::{AppError, AppResult};
use crate::models::QuestionRecord;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 插入的列，顺序与值元组一致
pub const COLUMNS: &str = "(`language`,`type`,chapter_id,difficulty,content,`options`,code_template,answer,score,created_at,updated_at)";

/// 时间戳格式
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 当前本地时间
pub fn now_timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// 转义为 SQL 字符串字面量，None 为 `NULL`
///
/// 先把 `\` 变成 `\\`，再把 `'` 变成 `''`，顺序不能调换。
pub fn escape_sql(text: Option<&str>) -> String {
    match text {
        Some(text) => format!("'{}'", text.replace('\\', "\\\\").replace('\'', "''")),
        None => "NULL".to_string(),
    }
}

/// SQL 文件写入服务
pub struct SqlWriter {
    table_name: String,
    output_path: PathBuf,
}

impl SqlWriter {
    pub fn new(table_name: impl Into<String>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            table_name: table_name.into(),
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// 渲染 INSERT 语句
    ///
    /// # 参数
    /// - `records`: 去重后的题目
    /// - `timestamp`: created_at / updated_at，所有行相同
    pub fn render(&self, records: &[QuestionRecord], timestamp: &str) -> String {
        if records.is_empty() {
            return format!("-- {}: 没有可插入的题目\n", self.table_name);
        }

        let rows: Vec<String> = records
            .iter()
            .map(|record| render_row(record, timestamp))
            .collect();

        format!(
            "INSERT INTO {} {} VALUES\n{};",
            self.table_name,
            COLUMNS,
            rows.join(",\n")
        )
    }

    /// 以当前时间渲染并写入输出文件
    ///
    /// # 返回
    /// 写入的字节数
    pub fn write(&self, records: &[QuestionRecord]) -> AppResult<usize> {
        let timestamp = now_timestamp();
        let sql = self.render(records, &timestamp);

        if let Some(parent) = self.output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|e| AppError::file_write_failed(parent.display().to_string(), e))?;
        }

        debug!(
            "写入 SQL: {} | {} 行 | {} 字节",
            self.output_path.display(),
            records.len(),
            sql.len()
        );

        fs::write(&self.output_path, &sql)
            .map_err(|e| AppError::file_write_failed(self.output_path.display().to_string(), e))?;

        Ok(sql.len())
    }
}

fn render_row(record: &QuestionRecord, timestamp: &str) -> String {
    format!(
        "\t ('{}','{}',{},'{}',{},{},{},{},{},'{}','{}')",
        record.language,
        record.question_type,
        record.chapter_id,
        record.difficulty,
        escape_sql(Some(&record.content)),
        escape_sql(record.options.as_deref()),
        escape_sql(record.code_template.as_deref()),
        escape_sql(Some(&record.answer)),
        record.score,
        timestamp,
        timestamp
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, Language, QuestionType};

    /// 还原一次转义：`''` → `'`，`\\` → `\`
    fn unescape_sql(literal: &str) -> String {
        let inner = &literal[1..literal.len() - 1];
        let mut out = String::with_capacity(inner.len());
        let mut chars = inner.chars().peekable();
        while let Some(c) = chars.next() {
            if (c == '\\' || c == '\'') && chars.peek() == Some(&c) {
                chars.next();
            }
            out.push(c);
        }
        out
    }

    fn sample() -> QuestionRecord {
        QuestionRecord {
            language: Language::Cpp,
            question_type: QuestionType::FillBlank,
            chapter_id: 4,
            difficulty: Difficulty::Hard,
            score: 10,
            content: "输出 'hello'".to_string(),
            options: None,
            code_template: Some("int main() {\n\n    printf(\"a\\n\");\n}".to_string()),
            answer: "return 0;".to_string(),
        }
    }

    #[test]
    fn test_escape_order() {
        assert_eq!(escape_sql(Some(r"a\'b")), r"'a\\''b'");
        assert_eq!(escape_sql(Some("it's")), "'it''s'");
        assert_eq!(escape_sql(Some("")), "''");
        assert_eq!(escape_sql(None), "NULL");
    }

    #[test]
    fn test_unescape_reverses_one_pass() {
        let original = "printf(\"%d\\n\", x); // it's \\\\ done";
        let once = escape_sql(Some(original));
        assert_eq!(unescape_sql(&once), original);

        // 再转义一次仍然是合法字面量，还原一次得到第一次的转义结果
        let twice = escape_sql(Some(&once));
        assert_ne!(twice, once);
        assert_eq!(unescape_sql(&twice), once);
        let inner = &twice[1..twice.len() - 1];
        assert_eq!(inner.replace("''", "").matches('\'').count(), 0);
    }

    #[test]
    fn test_code_template_round_trip() {
        let record = sample();
        let literal = escape_sql(record.code_template.as_deref());
        assert_eq!(Some(unescape_sql(&literal)), record.code_template);
    }

    #[test]
    fn test_render_statement() {
        let writer = SqlWriter::new("code_practice.questions", "questions.sql");
        let mut choice = sample();
        choice.question_type = QuestionType::SingleChoice;
        choice.code_template = None;
        choice.options = Some(r#"["a","b"]"#.to_string());

        let sql = writer.render(&[sample(), choice], "2026-01-25 13:23:36");

        let expected = concat!(
            "INSERT INTO code_practice.questions (`language`,`type`,chapter_id,difficulty,content,`options`,code_template,answer,score,created_at,updated_at) VALUES\n",
            "\t ('cpp','fill_blank',4,'hard','输出 ''hello''',NULL,'int main() {\n\n    printf(\"a\\\\n\");\n}','return 0;',10,'2026-01-25 13:23:36','2026-01-25 13:23:36'),\n",
            "\t ('cpp','single_choice',4,'hard','输出 ''hello''','[\"a\",\"b\"]',NULL,'return 0;',10,'2026-01-25 13:23:36','2026-01-25 13:23:36');",
        );
        assert_eq!(sql, expected);
    }

    #[test]
    fn test_render_empty() {
        let writer = SqlWriter::new("t", "out.sql");
        let sql = writer.render(&[], "2026-01-01 00:00:00");
        assert!(sql.starts_with("--"));
        assert!(!sql.contains("INSERT"));
    }

    #[test]
    fn test_timestamp_format() {
        let ts = now_timestamp();
        assert_eq!(ts.len(), 19);
        assert!(chrono::NaiveDateTime::parse_from_str(&ts, TIMESTAMP_FORMAT).is_ok());
    }
}
