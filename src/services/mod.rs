pub mod dedup;
pub mod extractor;
pub mod segmenter;
pub mod sql_writer;

pub use dedup::deduplicate;
pub use extractor::finalize;
pub use segmenter::{detect_language, segment, Segmenter};
pub use sql_writer::{escape_sql, SqlWriter};
