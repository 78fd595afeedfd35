//! 批量处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **逐个解析**：按配置顺序处理所有输入文件，缺失的文件跳过
//! 2. **合并去重**：所有文件的题目合并后去重，先出现者保留
//! 3. **生成 SQL**：渲染一条 INSERT 语句并写入输出文件
//! 4. **全局统计**：汇总文件数、题目数和重复数

use crate::config::Config;
use crate::models::QuestionRecord;
use crate::orchestrator::file_processor;
use crate::services::{deduplicate, SqlWriter};
use crate::utils::logging::{log_startup, print_final_stats};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{info, warn};

/// 应用主结构
pub struct App {
    config: Config,
}

/// 一次运行的统计
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// 成功处理的文件数
    pub files_processed: usize,
    /// 不存在而跳过的文件数
    pub files_missing: usize,
    /// 去重前的题目数
    pub total_parsed: usize,
    /// 去重后的题目数
    pub unique: usize,
    /// 生成的 SQL 文件
    pub output_path: PathBuf,
}

impl RunSummary {
    /// 被去掉的重复题目数
    pub fn duplicates_removed(&self) -> usize {
        self.total_parsed - self.unique
    }
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);
        Ok(Self { config })
    }

    /// 运行完整流程：解析 → 去重 → 写 SQL
    pub fn run(&self) -> Result<RunSummary> {
        let (all_questions, files_processed, files_missing) = self.parse_all_files()?;

        if files_processed == 0 {
            warn!("⚠️ 没有可读取的输入文件");
        }

        let total_parsed = all_questions.len();
        let unique_questions = deduplicate(all_questions);
        let unique = unique_questions.len();

        let writer = SqlWriter::new(&self.config.table_name, &self.config.output_file);
        let bytes = writer
            .write(&unique_questions)
            .with_context(|| format!("无法生成 SQL 文件: {}", writer.output_path().display()))?;
        info!("✓ SQL 已写入 ({} 字节)", bytes);

        print_final_stats(files_processed, total_parsed, unique, writer.output_path());

        Ok(RunSummary {
            files_processed,
            files_missing,
            total_parsed,
            unique,
            output_path: writer.output_path().to_path_buf(),
        })
    }

    /// 解析所有输入文件，返回合并后的题目、处理数和缺失数
    fn parse_all_files(&self) -> Result<(Vec<QuestionRecord>, usize, usize)> {
        let mut all_questions = Vec::new();
        let mut processed = 0;
        let mut missing = 0;

        for (idx, path) in self.config.input_files.iter().enumerate() {
            match file_processor::process_file(path, idx + 1, &self.config)? {
                Some(records) => {
                    all_questions.extend(records);
                    processed += 1;
                }
                None => missing += 1,
            }
        }

        Ok((all_questions, processed, missing))
    }
}
