//! # Question SQL Gen
//!
//! 把编程考试题库导出的纯文本转换为 questions 表的 INSERT 语句
//!
//! ## 架构设计
//!
//! 数据严格单向流动：文件 → 行 → 原始题目 → 题目记录 → 去重 → SQL 文本 → 输出文件
//!
//! ### ① 模型层（Models）
//! - `models/` - 题目记录、语言 / 题型 / 难度枚举
//! - `models/loaders` - 整个读入题库文本文件
//!
//! ### ② 业务能力层（Services）
//! - `Segmenter` - 单遍扫描，按大题标题和题头切分题目
//! - `extractor` - 拆出题干、选项、代码模板、答案
//! - `deduplicate` - 去掉完全相同的题目
//! - `SqlWriter` - 转义并生成 INSERT 语句
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/file_processor` - 单个文件：读取 → 解析
//! - `orchestrator/batch_processor` - 全部文件：合并 → 去重 → 写 SQL → 统计
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Difficulty, Language, QuestionRecord, QuestionType};
pub use orchestrator::{App, RunSummary};
