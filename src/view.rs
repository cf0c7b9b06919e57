//! 评分展示投影
//!
//! 把分析结果映射为展示指令（数值夹取到 [0,100] + 三档色带）。
//! 投影本身不触碰任何展示面，终端打印只是其中一种消费方式。

use colored::Colorize;

use crate::models::{AnalysisResult, ScoreSet};

/// 三档色带
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    High,
    Mid,
    Low,
}

impl ScoreBand {
    /// 按分值划档：≥80 高档，≥60 中档，其余低档
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreBand::High
        } else if score >= 60.0 {
            ScoreBand::Mid
        } else {
            ScoreBand::Low
        }
    }

    /// 对应的展示色
    pub fn color_hex(self) -> &'static str {
        match self {
            ScoreBand::High => "#22c55e",
            ScoreBand::Mid => "#f59e0b",
            ScoreBand::Low => "#ef4444",
        }
    }
}

/// 单维度展示行
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreLine {
    pub label: &'static str,
    /// 夹取后的分值
    pub value: f64,
    /// 进度条占比 [0.0, 1.0]
    pub ratio: f64,
    pub band: ScoreBand,
}

/// 完整展示指令
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBoard {
    pub overall: f64,
    pub lines: Vec<ScoreLine>,
    pub corrections: Vec<String>,
    pub advice: Vec<String>,
}

/// 数值夹取到 [0, 100]
fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// 把分析结果投影为展示指令
pub fn render(result: &AnalysisResult) -> ScoreBoard {
    let ScoreSet {
        pronunciation,
        grammar,
        syntax,
        vocabulary,
        overall,
    } = result.scores;

    let line = |label: &'static str, raw: f64| {
        let value = clamp_score(raw);
        ScoreLine {
            label,
            value,
            ratio: value / 100.0,
            band: ScoreBand::from_score(value),
        }
    };

    ScoreBoard {
        overall: clamp_score(overall),
        lines: vec![
            line("Pronunciation", pronunciation),
            line("Grammar", grammar),
            line("Syntax", syntax),
            line("Vocabulary", vocabulary),
        ],
        corrections: result.corrections.clone(),
        advice: result.advice.clone(),
    }
}

/// 在终端打印评分板
pub fn print_board(board: &ScoreBoard) {
    println!("  Overall: {:>3.0}", board.overall);

    for line in &board.lines {
        let filled = (line.ratio * 20.0).round() as usize;
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(20 - filled));
        let bar = match line.band {
            ScoreBand::High => bar.green(),
            ScoreBand::Mid => bar.yellow(),
            ScoreBand::Low => bar.red(),
        };
        println!("  {:<13} {} {:>3.0}", line.label, bar, line.value);
    }

    for correction in &board.corrections {
        println!("  ✗ {}", correction.red());
    }
    for tip in &board.advice {
        println!("  💡 {}", tip);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_thresholds() {
        assert_eq!(ScoreBand::from_score(80.0), ScoreBand::High);
        assert_eq!(ScoreBand::from_score(79.9), ScoreBand::Mid);
        assert_eq!(ScoreBand::from_score(60.0), ScoreBand::Mid);
        assert_eq!(ScoreBand::from_score(59.9), ScoreBand::Low);
        assert_eq!(ScoreBand::from_score(0.0), ScoreBand::Low);
    }

    #[test]
    fn scores_are_clamped_before_projection() {
        let result = AnalysisResult {
            scores: ScoreSet {
                pronunciation: 150.0,
                grammar: -5.0,
                syntax: 50.0,
                vocabulary: 100.0,
                overall: 120.0,
            },
            corrections: vec![],
            advice: vec![],
        };

        let board = render(&result);

        assert_eq!(board.overall, 100.0);
        assert_eq!(board.lines[0].value, 100.0);
        assert_eq!(board.lines[0].ratio, 1.0);
        assert_eq!(board.lines[1].value, 0.0);
        assert_eq!(board.lines[1].band, ScoreBand::Low);
    }

    #[test]
    fn board_keeps_all_four_detail_dimensions() {
        let board = render(&AnalysisResult {
            scores: ScoreSet::default(),
            corrections: vec!["Error: x".into()],
            advice: vec!["try again".into()],
        });

        let labels: Vec<&str> = board.lines.iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Pronunciation", "Grammar", "Syntax", "Vocabulary"]);
        assert_eq!(board.corrections.len(), 1);
        assert_eq!(board.advice.len(), 1);
    }
}
