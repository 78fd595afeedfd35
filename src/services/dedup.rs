//! 去重 - 业务能力层

use crate::models::QuestionRecord;
use std::collections::HashSet;

/// 去掉完全相同的题目，保留第一次出现的顺序
///
/// 比较键见 [`QuestionRecord::dedup_key`]，不做空白或大小写归一化。
pub fn deduplicate(records: Vec<QuestionRecord>) -> Vec<QuestionRecord> {
    let keep: Vec<bool> = {
        let mut seen = HashSet::with_capacity(records.len());
        records.iter().map(|r| seen.insert(r.dedup_key())).collect()
    };

    records
        .into_iter()
        .zip(keep)
        .filter_map(|(record, first)| first.then_some(record))
        .collect()
}
