//! 本地估算 - 业务能力层
//!
//! 后端不可用时的粗略估分，仅供离线展示：
//! 不进入会话历史，也不替代降级结果
//!
//! - 句法分按句子数量线性给分
//! - 词汇分按去重词比例给分
//! - 发音分为固定占位值（无音频可分析）

use std::collections::HashSet;

use rand::Rng;
use regex::Regex;

use crate::models::{AnalysisResult, ScoreSet};

/// 对文本做本地粗略估分
pub fn estimate(text: &str) -> AnalysisResult {
    let words: Vec<String> = text
        .split_whitespace()
        .map(|word| word.to_lowercase())
        .collect();

    if words.is_empty() {
        return AnalysisResult {
            scores: ScoreSet::default(),
            corrections: vec![],
            advice: vec![],
        };
    }

    let mut sentences = 0;
    if let Ok(re) = Regex::new(r"[.!?]+") {
        sentences = re
            .split(text)
            .filter(|segment| !segment.trim().is_empty())
            .count();
    }

    let unique_words: HashSet<&str> = words.iter().map(String::as_str).collect();

    let grammar: f64 = (70.0_f64 + rand::thread_rng().gen_range(0.0..20.0)).min(100.0);
    let syntax = (sentences as f64 * 15.0).min(100.0);
    let vocabulary = (unique_words.len() as f64 / words.len() as f64 * 100.0).min(100.0);
    let pronunciation = 85.0;
    let overall = (grammar + syntax + vocabulary + pronunciation) / 4.0;

    AnalysisResult {
        scores: ScoreSet {
            pronunciation,
            grammar,
            syntax,
            vocabulary,
            overall,
        },
        corrections: vec![],
        advice: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_scores_zero() {
        let result = estimate("   ");
        assert_eq!(result.scores.overall, 0.0);
        assert_eq!(result.scores.vocabulary, 0.0);
    }

    #[test]
    fn scores_stay_inside_bounds() {
        let result = estimate("I study. I practice. I improve. I repeat. I learn. I win. Yes. Ok.");

        assert!(result.scores.grammar >= 70.0 && result.scores.grammar <= 90.0);
        assert_eq!(result.scores.syntax, 100.0); // 8 句 * 15 封顶
        assert!(result.scores.vocabulary <= 100.0);
        assert_eq!(result.scores.pronunciation, 85.0);
        assert!(result.scores.overall <= 100.0);
    }

    #[test]
    fn repeated_words_lower_vocabulary() {
        let varied = estimate("every single word here differs completely");
        let repeated = estimate("word word word word word word");

        assert_eq!(varied.scores.vocabulary, 100.0);
        assert!(repeated.scores.vocabulary < varied.scores.vocabulary);
    }
}
