//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量处理器
//! - 按顺序处理全部输入文件
//! - 合并去重、生成 SQL
//! - 输出全局统计信息
//!
//! ### `file_processor` - 单个文件处理器
//! - 读取文件，缺失时跳过
//! - 识别语言、分段、提取字段
//! - 输出单个文件的统计信息
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<文件>)
//!     ↓
//! file_processor (处理单个文件)
//!     ↓
//! services (能力层：segmenter / extractor / dedup / sql_writer)
//!     ↓
//! models (题目记录、枚举、文件读取)
//! ```

pub mod batch_processor;
pub mod file_processor;

// 重新导出主要类型
pub use batch_processor::{App, RunSummary};
pub use file_processor::{process_file, FileStats};
