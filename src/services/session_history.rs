//! 会话历史 - 业务能力层
//!
//! 只负责"记录历次分析并计算会话统计"能力
//!
//! - 存储不设上限，展示时才截取最近 N 条
//! - 只有成功的分析进入历史

use chrono::{DateTime, Local, Utc};

use crate::models::AnalysisResult;
use crate::utils::logging::truncate_text;

/// 单次分析记录
#[derive(Debug, Clone)]
pub struct AttemptRecord {
    pub text: String,
    pub result: AnalysisResult,
    pub timestamp: DateTime<Utc>,
}

/// 历史表格行（用于展示）
#[derive(Debug, Clone, PartialEq)]
pub struct AttemptRow {
    /// 第几次尝试（从 1 开始）
    pub attempt: usize,
    /// 截断到 30 字符的文本预览
    pub text: String,
    pub overall: f64,
    /// 本地时区的时刻字符串
    pub time: String,
}

/// 会话历史
#[derive(Debug, Default)]
pub struct SessionHistory {
    entries: Vec<AttemptRecord>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一条记录
    pub fn push(&mut self, text: String, result: AnalysisResult, timestamp: DateTime<Utc>) {
        self.entries.push(AttemptRecord {
            text,
            result,
            timestamp,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// overall 平均分（四舍五入取整，空历史返回 0）
    pub fn average_overall(&self) -> u32 {
        if self.entries.is_empty() {
            return 0;
        }
        let total: f64 = self
            .entries
            .iter()
            .map(|entry| entry.result.scores.overall)
            .sum();
        (total / self.entries.len() as f64).round() as u32
    }

    /// 最近 limit 条记录，新的在前
    pub fn recent_rows(&self, limit: usize) -> Vec<AttemptRow> {
        self.entries
            .iter()
            .enumerate()
            .rev()
            .take(limit)
            .map(|(index, entry)| AttemptRow {
                attempt: index + 1,
                text: truncate_text(&entry.text, 30),
                overall: entry.result.scores.overall,
                time: entry
                    .timestamp
                    .with_timezone(&Local)
                    .format("%H:%M:%S")
                    .to_string(),
            })
            .collect()
    }

    /// 清空历史
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScoreSet;

    fn result_with_overall(overall: f64) -> AnalysisResult {
        AnalysisResult {
            scores: ScoreSet {
                overall,
                ..ScoreSet::default()
            },
            corrections: vec![],
            advice: vec![],
        }
    }

    #[test]
    fn average_of_empty_history_is_zero() {
        let history = SessionHistory::new();
        assert_eq!(history.average_overall(), 0);
    }

    #[test]
    fn average_is_rounded_mean_of_overall() {
        let mut history = SessionHistory::new();
        history.push("one".into(), result_with_overall(80.0), Utc::now());
        history.push("two".into(), result_with_overall(60.0), Utc::now());
        assert_eq!(history.average_overall(), 70);

        history.push("three".into(), result_with_overall(65.0), Utc::now());
        // (80 + 60 + 65) / 3 = 68.33 → 68
        assert_eq!(history.average_overall(), 68);
    }

    #[test]
    fn recent_rows_are_newest_first_and_truncated() {
        let mut history = SessionHistory::new();
        for i in 0..12 {
            let text = format!("attempt number {} with a long trailing tail", i);
            history.push(text, result_with_overall(50.0), Utc::now());
        }

        let rows = history.recent_rows(10);
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].attempt, 12);
        assert_eq!(rows[9].attempt, 3);
        assert!(rows[0].text.chars().count() <= 33); // 30 字符 + "..."
        assert!(rows[0].text.ends_with("..."));
    }

    #[test]
    fn clear_resets_everything() {
        let mut history = SessionHistory::new();
        history.push("one".into(), result_with_overall(90.0), Utc::now());
        history.clear();

        assert!(history.is_empty());
        assert_eq!(history.average_overall(), 0);
        assert!(history.recent_rows(10).is_empty());
    }
}
