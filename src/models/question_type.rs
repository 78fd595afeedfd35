/// 题型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionType {
    /// 单选
    SingleChoice,
    /// 程序填空
    FillBlank,
    /// 程序改错
    ErrorFix,
    /// 程序设计
    Programming,
}

/// 大题标题标记，按出现顺序匹配
const SECTION_MARKERS: [(&str, QuestionType); 4] = [
    ("一、单选", QuestionType::SingleChoice),
    ("二、程序填空", QuestionType::FillBlank),
    ("三、程序改错", QuestionType::ErrorFix),
    ("四、程序设计", QuestionType::Programming),
];

impl QuestionType {
    /// 数据库中的取值
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::SingleChoice => "single_choice",
            QuestionType::FillBlank => "fill_blank",
            QuestionType::ErrorFix => "error_fix",
            QuestionType::Programming => "programming",
        }
    }

    /// 中文名称
    pub fn name(self) -> &'static str {
        match self {
            QuestionType::SingleChoice => "单选",
            QuestionType::FillBlank => "程序填空",
            QuestionType::ErrorFix => "程序改错",
            QuestionType::Programming => "程序设计",
        }
    }

    /// 识别大题标题行（子串匹配）
    pub fn from_section_header(line: &str) -> Option<Self> {
        SECTION_MARKERS
            .iter()
            .find(|(marker, _)| line.contains(marker))
            .map(|(_, kind)| *kind)
    }

    /// 是否为代码类题型（描述在注释块中，后接代码模板）
    pub fn has_code_template(self) -> bool {
        !matches!(self, QuestionType::SingleChoice)
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_header() {
        assert_eq!(
            QuestionType::from_section_header("一、单选  共20题"),
            Some(QuestionType::SingleChoice)
        );
        assert_eq!(
            QuestionType::from_section_header("四、程序设计"),
            Some(QuestionType::Programming)
        );
        assert_eq!(QuestionType::from_section_header("二、填空"), None);
    }

    #[test]
    fn test_code_template_types() {
        assert!(!QuestionType::SingleChoice.has_code_template());
        assert!(QuestionType::FillBlank.has_code_template());
        assert!(QuestionType::ErrorFix.has_code_template());
        assert!(QuestionType::Programming.has_code_template());
    }
}
