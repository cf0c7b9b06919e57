/// 评分 API 客户端
///
/// 封装所有与评分后端 API 相关的调用逻辑
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::clients::ScoringTransport;
use crate::config::Config;
use crate::error::{ApiError, AppError, AppResult};
use crate::models::{AnalysisRequest, AnalysisResult};

/// 评分 API 客户端
pub struct ScoringClient {
    http: Client,
    base_url: String,
}

impl ScoringClient {
    /// 创建新的评分客户端
    ///
    /// # 参数
    /// - `config`: 程序配置（后端地址与请求超时）
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::Other(format!("HTTP客户端构建失败: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 向指定端点 POST 请求载荷并解析分析结果
    ///
    /// # 参数
    /// - `endpoint`: 端点路径（不含基础 URL）
    /// - `request`: 请求载荷
    ///
    /// # 返回
    /// 返回解析后的分析结果
    async fn post_analysis(
        &self,
        endpoint: &str,
        request: &AnalysisRequest,
    ) -> AppResult<AnalysisResult> {
        let url = format!("{}/{}", self.base_url, endpoint);

        debug!("POST {} 文本长度: {} 字符", url, request.text.chars().count());

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::api_bad_status(&url, status.as_u16()));
        }

        let result: AnalysisResult = response
            .json()
            .await
            .map_err(|e| AppError::Api(ApiError::JsonParseFailed { source: Box::new(e) }))?;

        debug!("分析结果 overall: {}", result.scores.overall);

        Ok(result)
    }
}

#[async_trait]
impl ScoringTransport for ScoringClient {
    async fn analyze_text(&self, request: &AnalysisRequest) -> AppResult<AnalysisResult> {
        self.post_analysis("analyze-language", request).await
    }

    async fn analyze_speech(&self, request: &AnalysisRequest) -> AppResult<AnalysisResult> {
        self.post_analysis("analyze-speech", request).await
    }

    async fn check_health(&self) -> bool {
        let url = format!("{}/healthz", self.base_url);

        match self.http.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                warn!("⚠️ 后端健康检查失败: {}", e);
                false
            }
        }
    }
}
