//! API 客户端层
//!
//! 封装所有与评分后端的网络交互，只暴露传输能力

pub mod scoring_client;

pub use scoring_client::ScoringClient;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{AnalysisRequest, AnalysisResult};

/// 评分传输协作者
///
/// 评分计算发生在远端服务，对本核心完全不透明。
/// 非成功状态码一律视为传输错误；测试中可用桩实现替换。
#[async_trait]
pub trait ScoringTransport: Send + Sync {
    /// 文本分析
    async fn analyze_text(&self, request: &AnalysisRequest) -> AppResult<AnalysisResult>;

    /// 语音转写分析
    async fn analyze_speech(&self, request: &AnalysisRequest) -> AppResult<AnalysisResult>;

    /// 后端健康检查
    async fn check_health(&self) -> bool;
}
