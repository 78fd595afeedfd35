pub mod difficulty;
pub mod language;
pub mod loaders;
pub mod question;
pub mod question_type;

pub use difficulty::Difficulty;
pub use language::Language;
pub use loaders::{load_text_lines, TextFile};
pub use question::{DedupKey, QuestionRecord, RawQuestion};
pub use question_type::QuestionType;
