/// 编程语言（所属科目）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Java,
    Cpp,
    Python,
}

impl Language {
    /// 数据库中的取值
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::Python => "python",
        }
    }

    /// 从科目名称模糊匹配语言（大小写不敏感）
    pub fn find(s: &str) -> Option<Self> {
        let s_lower = s.to_lowercase();
        if s_lower.contains("java") {
            return Some(Language::Java);
        }
        if s_lower.contains("c++") {
            return Some(Language::Cpp);
        }
        if s_lower.contains("python") {
            return Some(Language::Python);
        }
        None
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
