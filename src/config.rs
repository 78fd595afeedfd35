use crate::error::{AppResult, ConfigError};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "question_sql.toml";

/// 程序配置
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 待解析的题库文本文件
    pub input_files: Vec<PathBuf>,
    /// 生成的 SQL 文件
    pub output_file: PathBuf,
    /// INSERT 目标表
    pub table_name: String,
    /// 识别科目时扫描的行数
    pub language_scan_lines: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_files: vec![
                PathBuf::from("745.txt"),
                PathBuf::from("746.txt"),
                PathBuf::from("752.txt"),
            ],
            output_file: PathBuf::from("questions.sql"),
            table_name: "code_practice.questions".to_string(),
            language_scan_lines: 20,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 加载配置：TOML 文件（若存在）→ 环境变量覆盖
    pub fn load() -> AppResult<Self> {
        Self::load_with(env_lookup)
    }

    /// 按给定的变量查询函数加载配置
    pub fn load_with<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = config_path(&lookup);

        let base = if path.exists() {
            Self::from_toml_file(&path)?
        } else {
            Self::default()
        };

        Ok(base.with_overrides(lookup))
    }

    /// 从 TOML 文件读取配置，缺省字段使用默认值
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    fn from_toml_str(content: &str, path: &Path) -> AppResult<Self> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.display().to_string(),
            source,
        })?;
        Ok(config)
    }

    /// 用环境变量覆盖配置，无法解析的值忽略
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(env_lookup)
    }

    /// 用查询函数提供的值覆盖配置，无法解析的值忽略
    pub fn with_overrides<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let input_files = lookup("INPUT_FILES")
            .map(|v| split_path_list(&v))
            .filter(|files| !files.is_empty())
            .unwrap_or(self.input_files);

        Self {
            input_files,
            output_file: lookup("OUTPUT_FILE").map(PathBuf::from).unwrap_or(self.output_file),
            table_name: lookup("TABLE_NAME").unwrap_or(self.table_name),
            language_scan_lines: lookup("LANGUAGE_SCAN_LINES").and_then(|v| v.parse().ok()).unwrap_or(self.language_scan_lines),
            verbose_logging: lookup("VERBOSE_LOGGING").and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
        }
    }

    /// 命令行参数非空时替换输入文件列表
    pub fn with_input_files<I>(mut self, files: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<PathBuf>,
    {
        let files: Vec<PathBuf> = files.into_iter().map(Into::into).collect();
        if !files.is_empty() {
            self.input_files = files;
        }
        self
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// `QUESTION_SQL_CONFIG` 指定的文件，否则为当前目录下的默认文件
fn config_path<F>(lookup: &F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    lookup("QUESTION_SQL_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

fn split_path_list(value: &str) -> Vec<PathBuf> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect()
}
