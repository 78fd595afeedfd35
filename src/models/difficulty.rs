use phf::phf_map;

/// 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

static DIFFICULTY_CHARS: phf::Map<char, Difficulty> = phf_map! {
    '易' => Difficulty::Easy,
    '中' => Difficulty::Medium,
    '难' => Difficulty::Hard,
};

impl Difficulty {
    /// 数据库中的取值
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// 从题头的难度字符解析，无法识别时为中等
    pub fn from_char(c: char) -> Self {
        DIFFICULTY_CHARS.get(&c).copied().unwrap_or_default()
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_mapping() {
        assert_eq!(Difficulty::from_char('易'), Difficulty::Easy);
        assert_eq!(Difficulty::from_char('中'), Difficulty::Medium);
        assert_eq!(Difficulty::from_char('难'), Difficulty::Hard);
        assert_eq!(Difficulty::from_char('?'), Difficulty::Medium);
        assert_eq!(Difficulty::from_char('A'), Difficulty::Medium);
    }
}
