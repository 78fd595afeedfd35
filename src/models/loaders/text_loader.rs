use crate::error::{AppError, AppResult};
use std::path::{Path, PathBuf};

/// 读入内存的题库文件
#[derive(Debug, Clone)]
pub struct TextFile {
    pub path: PathBuf,
    pub lines: Vec<String>,
}

impl TextFile {
    /// 从内存文本构造（按行切分，去掉 UTF-8 BOM）
    pub fn from_content(path: impl Into<PathBuf>, content: &str) -> Self {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        Self {
            path: path.into(),
            lines: content.lines().map(str::to_string).collect(),
        }
    }

    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    }
}

/// 整个读取题库文本文件
///
/// 文件不存在时返回 `FileError::NotFound`，由调用方决定是否跳过。
pub fn load_text_lines(path: &Path) -> AppResult<TextFile> {
    if !path.exists() {
        return Err(AppError::file_not_found(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;

    Ok(TextFile::from_content(path, &content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_content_handles_crlf_and_bom() {
        let file = TextFile::from_content("x/745.txt", "\u{feff}第一行\r\n  第二行\r\n");
        assert_eq!(file.lines, vec!["第一行".to_string(), "  第二行".to_string()]);
        assert_eq!(file.display_name(), "745.txt");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = load_text_lines(Path::new("/definitely/not/here/746.txt")).unwrap_err();
        assert!(err.is_not_found());
    }
}
