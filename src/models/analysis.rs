//! 分析请求与结果模型
//!
//! 与评分后端交换的全部数据形状都定义在这里

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::language::Language;

/// 五个评分维度
///
/// 后端缺失的维度反序列化为 0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ScoreSet {
    #[serde(default)]
    pub pronunciation: f64,
    #[serde(default)]
    pub grammar: f64,
    #[serde(default)]
    pub syntax: f64,
    #[serde(default)]
    pub vocabulary: f64,
    #[serde(default)]
    pub overall: f64,
}

/// 后端返回的分析结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub scores: ScoreSet,
    #[serde(default)]
    pub corrections: Vec<String>,
    #[serde(default)]
    pub advice: Vec<String>,
}

impl AnalysisResult {
    /// 传输失败时合成的降级结果
    ///
    /// 全部维度为 0，错误信息放入 corrections 首项
    pub fn degraded(message: &str) -> Self {
        Self {
            scores: ScoreSet::default(),
            corrections: vec![format!("Error: {}", message)],
            advice: vec!["Please check your connection and try again.".to_string()],
        }
    }
}

/// 请求元数据
///
/// 固定已知字段 + 开放键值（flatten 进同一层）
#[derive(Debug, Clone, Serialize, Default)]
pub struct RequestMetadata {
    pub timestamp: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_final: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 发往评分后端的请求载荷
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRequest {
    pub text: String,
    pub lang: String,
    pub metadata: RequestMetadata,
}

/// submit 的可选项
#[derive(Debug, Clone, Default)]
pub struct SubmitOptions {
    /// 分析语言，未指定时使用编排器的默认语言
    pub lang: Option<Language>,
    /// 附加元数据，原样合并进请求载荷
    pub metadata: Map<String, Value>,
}

/// 语音转写元数据
#[derive(Debug, Clone)]
pub struct SpeechMetadata {
    pub confidence: f64,
    pub duration: f64,
    pub is_final: bool,
    pub extra: Map<String, Value>,
}

impl Default for SpeechMetadata {
    fn default() -> Self {
        Self {
            confidence: 0.85,
            duration: 1.0,
            is_final: false,
            extra: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 后端缺失维度时必须补 0，五个维度始终齐全
    #[test]
    fn missing_score_dimensions_default_to_zero() {
        let body = r#"{"scores":{"grammar":72,"overall":68},"corrections":[],"advice":["ok"]}"#;
        let result: AnalysisResult = serde_json::from_str(body).unwrap();

        assert_eq!(result.scores.grammar, 72.0);
        assert_eq!(result.scores.overall, 68.0);
        assert_eq!(result.scores.pronunciation, 0.0);
        assert_eq!(result.scores.syntax, 0.0);
        assert_eq!(result.scores.vocabulary, 0.0);
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let body = r#"{"scores":{"overall":50}}"#;
        let result: AnalysisResult = serde_json::from_str(body).unwrap();

        assert!(result.corrections.is_empty());
        assert!(result.advice.is_empty());
    }

    #[test]
    fn degraded_result_shape() {
        let result = AnalysisResult::degraded("connection refused");

        assert_eq!(result.scores.overall, 0.0);
        assert_eq!(result.corrections[0], "Error: connection refused");
        assert_eq!(
            result.advice[0],
            "Please check your connection and try again."
        );
    }

    #[test]
    fn request_metadata_flattens_extra_fields() {
        let mut extra = Map::new();
        extra.insert("session_id".to_string(), serde_json::json!("abc-123"));

        let metadata = RequestMetadata {
            timestamp: "2026-01-01T00:00:00+00:00".to_string(),
            source: "tutorium_client".to_string(),
            confidence: None,
            duration: None,
            is_final: None,
            extra,
        };

        let value = serde_json::to_value(&metadata).unwrap();
        assert_eq!(value["session_id"], "abc-123");
        assert!(value.get("confidence").is_none());
    }
}
