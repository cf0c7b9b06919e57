//! 分析请求编排 - 流程层
//!
//! 核心职责：定义"一次分析"的完整处理流程
//!
//! 流程顺序：
//! 1. 前置校验（长度 → 指纹去重 → 在途防抖）
//! 2. 远端分析（文本 / 语音，语音失败降级为文本分析）
//! 3. 成功入历史，传输失败合成降级结果

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::clients::ScoringTransport;
use crate::models::{
    AnalysisRequest, AnalysisResult, Language, RequestMetadata, SpeechMetadata, SubmitOptions,
};
use crate::services::duplicate_guard::{fingerprint, DuplicateGuard};
use crate::services::session_history::{AttemptRow, SessionHistory};
use crate::utils::clock::Clock;
use crate::utils::logging::truncate_text;

/// 最短可分析文本长度（字符数）
const MIN_TEXT_CHARS: usize = 3;

/// 请求来源标记
const SOURCE_TAG: &str = "tutorium_client";

/// 提交处理结果
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// 后端评分成功，已记入会话历史
    Scored(AnalysisResult),
    /// 传输失败，合成降级结果（不入历史）
    Degraded(AnalysisResult),
    /// 请求被前置校验拦截（无网络调用，无副作用）
    Skipped(SkipReason),
}

/// 拦截原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// 文本过短（不足 3 个字符）
    TooShort,
    /// 时间窗口内的重复文本
    Duplicate,
    /// 已有分析请求在途
    Busy,
}

impl SubmitOutcome {
    /// 借用结果（Skipped 为 None）
    pub fn result(&self) -> Option<&AnalysisResult> {
        match self {
            SubmitOutcome::Scored(result) | SubmitOutcome::Degraded(result) => Some(result),
            SubmitOutcome::Skipped(_) => None,
        }
    }

    /// 取出结果（Skipped 为 None）
    pub fn into_result(self) -> Option<AnalysisResult> {
        match self {
            SubmitOutcome::Scored(result) | SubmitOutcome::Degraded(result) => Some(result),
            SubmitOutcome::Skipped(_) => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, SubmitOutcome::Skipped(_))
    }
}

/// 分析请求编排器
///
/// - 编排完整的单次分析流程
/// - 独占持有 DuplicateGuard 与 SessionHistory
/// - 不持有任何展示面
/// - 只依赖传输与时钟协作者（构造时注入）
pub struct AnalysisOrchestrator {
    transport: Arc<dyn ScoringTransport>,
    clock: Arc<dyn Clock>,
    default_lang: Language,
    guard: Mutex<DuplicateGuard>,
    history: Mutex<SessionHistory>,
    in_flight: AtomicBool,
}

impl AnalysisOrchestrator {
    /// 创建新的编排器
    ///
    /// # 参数
    /// - `transport`: 评分传输协作者
    /// - `clock`: 时钟协作者
    /// - `default_lang`: 未指定时使用的分析语言
    /// - `duplicate_ttl`: 指纹存活窗口
    pub fn new(
        transport: Arc<dyn ScoringTransport>,
        clock: Arc<dyn Clock>,
        default_lang: Language,
        duplicate_ttl: Duration,
    ) -> Self {
        Self {
            transport,
            clock,
            default_lang,
            guard: Mutex::new(DuplicateGuard::new(duplicate_ttl)),
            history: Mutex::new(SessionHistory::new()),
            in_flight: AtomicBool::new(false),
        }
    }

    /// 提交文本分析
    ///
    /// # 参数
    /// - `text`: 学习者原始文本（内部使用去除首尾空白后的版本）
    /// - `options`: 语言与附加元数据
    ///
    /// # 返回
    /// 返回提交处理结果（评分 / 降级 / 拦截）
    pub async fn submit(&self, text: &str, options: &SubmitOptions) -> SubmitOutcome {
        let trimmed = text.trim();

        if let Err(reason) = self.admit(trimmed) {
            return SubmitOutcome::Skipped(reason);
        }

        let request = self.build_text_request(trimmed, options);

        info!("📤 正在提交文本分析: {}", truncate_text(trimmed, 80));

        let outcome = match self.transport.analyze_text(&request).await {
            Ok(result) => {
                self.record_attempt(trimmed, &result);
                info!("✓ 分析完成 (overall: {})", result.scores.overall);
                SubmitOutcome::Scored(result)
            }
            Err(e) => {
                warn!("⚠️ 文本分析失败: {}", e);
                SubmitOutcome::Degraded(AnalysisResult::degraded(&e.to_string()))
            }
        };

        self.in_flight.store(false, Ordering::Release);
        outcome
    }

    /// 提交语音转写分析
    ///
    /// 与 `submit` 相同的前置契约。语音端点传输失败时，
    /// 在同一次提交内降级为通用文本分析，而不是直接合成本地错误；
    /// 两个端点都失败才返回降级结果。
    ///
    /// # 参数
    /// - `text`: 语音转写文本
    /// - `speech`: 语音元数据（置信度、时长、是否最终结果）
    pub async fn submit_speech(&self, text: &str, speech: &SpeechMetadata) -> SubmitOutcome {
        let trimmed = text.trim();

        if let Err(reason) = self.admit(trimmed) {
            return SubmitOutcome::Skipped(reason);
        }

        let request = self.build_speech_request(trimmed, speech);

        info!("🎤 正在提交语音分析: {}", truncate_text(trimmed, 80));

        let outcome = match self.transport.analyze_speech(&request).await {
            Ok(result) => {
                self.record_attempt(trimmed, &result);
                info!("✓ 语音分析完成 (overall: {})", result.scores.overall);
                SubmitOutcome::Scored(result)
            }
            Err(speech_err) => {
                warn!("⚠️ 语音分析失败: {}，降级为文本分析", speech_err);

                match self.transport.analyze_text(&request).await {
                    Ok(result) => {
                        self.record_attempt(trimmed, &result);
                        info!("✓ 降级文本分析完成 (overall: {})", result.scores.overall);
                        SubmitOutcome::Scored(result)
                    }
                    Err(text_err) => {
                        warn!("⚠️ 降级文本分析同样失败: {}", text_err);
                        SubmitOutcome::Degraded(AnalysisResult::degraded(&text_err.to_string()))
                    }
                }
            }
        };

        self.in_flight.store(false, Ordering::Release);
        outcome
    }

    /// 会话平均分
    ///
    /// 历史为空时返回 0；纯读取，无副作用
    pub fn session_average(&self) -> u32 {
        self.lock_history().average_overall()
    }

    /// 历史记录条数
    pub fn history_len(&self) -> usize {
        self.lock_history().len()
    }

    /// 最近尝试记录（新的在前，用于展示表格）
    pub fn recent_attempts(&self, limit: usize) -> Vec<AttemptRow> {
        self.lock_history().recent_rows(limit)
    }

    /// 清空会话
    ///
    /// 历史与指纹一并清空；窗口内指纹随之失效，
    /// 残留的到期清理在空表上自然成为无操作
    pub fn clear_session(&self) {
        let mut history = self.lock_history();
        let mut guard = self.lock_guard();
        history.clear();
        guard.clear();
        info!("🧹 会话已清空");
    }

    // ========== 内部流程 ==========

    /// 前置校验：长度 → 指纹去重 → 在途防抖
    ///
    /// 全部通过后进入在途状态并登记指纹；
    /// 被拦截时不产生任何状态变更
    fn admit(&self, trimmed: &str) -> Result<(), SkipReason> {
        if trimmed.chars().count() < MIN_TEXT_CHARS {
            debug!("❌ 文本过短，跳过分析");
            return Err(SkipReason::TooShort);
        }

        let fp = fingerprint(trimmed);
        let now = self.clock.now();

        {
            let mut guard = self.lock_guard();
            guard.evict_expired(now);
            if guard.contains(fp) {
                debug!("🔄 检测到窗口内重复文本，跳过分析");
                return Err(SkipReason::Duplicate);
            }
        }

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("⏳ 已有分析请求在途，跳过本次提交");
            return Err(SkipReason::Busy);
        }

        // 指纹无论本次成败都存活整个窗口
        self.lock_guard().insert(fp, now);

        Ok(())
    }

    /// 构建文本分析请求载荷
    fn build_text_request(&self, trimmed: &str, options: &SubmitOptions) -> AnalysisRequest {
        let lang = options.lang.unwrap_or(self.default_lang);

        AnalysisRequest {
            text: trimmed.to_string(),
            lang: lang.tag().to_string(),
            metadata: RequestMetadata {
                timestamp: self.clock.timestamp().to_rfc3339(),
                source: SOURCE_TAG.to_string(),
                confidence: None,
                duration: None,
                is_final: None,
                extra: options.metadata.clone(),
            },
        }
    }

    /// 构建语音分析请求载荷
    fn build_speech_request(&self, trimmed: &str, speech: &SpeechMetadata) -> AnalysisRequest {
        AnalysisRequest {
            text: trimmed.to_string(),
            lang: self.default_lang.tag().to_string(),
            metadata: RequestMetadata {
                timestamp: self.clock.timestamp().to_rfc3339(),
                source: SOURCE_TAG.to_string(),
                confidence: Some(speech.confidence),
                duration: Some(speech.duration),
                is_final: Some(speech.is_final),
                extra: speech.extra.clone(),
            },
        }
    }

    /// 把成功结果记入会话历史
    fn record_attempt(&self, text: &str, result: &AnalysisResult) {
        let timestamp = self.clock.timestamp();
        self.lock_history()
            .push(text.to_string(), result.clone(), timestamp);
    }

    fn lock_guard(&self) -> std::sync::MutexGuard<'_, DuplicateGuard> {
        self.guard.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn lock_history(&self) -> std::sync::MutexGuard<'_, SessionHistory> {
        self.history.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, AppResult};
    use crate::utils::clock::SystemClock;
    use async_trait::async_trait;
    use std::sync::atomic::AtomicUsize;

    /// 永远失败的传输桩，同时统计调用次数
    struct FailingTransport {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ScoringTransport for FailingTransport {
        async fn analyze_text(&self, _request: &AnalysisRequest) -> AppResult<AnalysisResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(AppError::Other("unreachable backend".to_string()))
        }

        async fn analyze_speech(&self, _request: &AnalysisRequest) -> AppResult<AnalysisResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(AppError::Other("unreachable backend".to_string()))
        }

        async fn check_health(&self) -> bool {
            false
        }
    }

    fn failing_orchestrator() -> (AnalysisOrchestrator, Arc<FailingTransport>) {
        let transport = Arc::new(FailingTransport {
            calls: AtomicUsize::new(0),
        });
        let orchestrator = AnalysisOrchestrator::new(
            transport.clone(),
            Arc::new(SystemClock),
            Language::English,
            Duration::from_secs(30),
        );
        (orchestrator, transport)
    }

    #[test]
    fn short_text_is_skipped_without_transport_call() {
        let (orchestrator, transport) = failing_orchestrator();

        let outcome = tokio_test::block_on(orchestrator.submit("  hi ", &SubmitOptions::default()));

        assert_eq!(outcome, SubmitOutcome::Skipped(SkipReason::TooShort));
        assert_eq!(transport.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn skipped_outcome_carries_no_result() {
        let outcome = SubmitOutcome::Skipped(SkipReason::Busy);
        assert!(outcome.is_skipped());
        assert!(outcome.result().is_none());
        assert!(outcome.into_result().is_none());
    }

    #[test]
    fn degraded_outcome_exposes_its_result() {
        let outcome = SubmitOutcome::Degraded(AnalysisResult::degraded("boom"));
        assert!(!outcome.is_skipped());
        assert!(outcome.into_result().is_some());
    }

    /// 失败路径也必须释放在途标志
    #[test]
    fn in_flight_flag_is_released_after_failure() {
        let (orchestrator, transport) = failing_orchestrator();

        let first =
            tokio_test::block_on(orchestrator.submit("first phrase", &SubmitOptions::default()));
        assert!(matches!(first, SubmitOutcome::Degraded(_)));

        let second =
            tokio_test::block_on(orchestrator.submit("second phrase", &SubmitOptions::default()));
        assert!(matches!(second, SubmitOutcome::Degraded(_)));

        assert_eq!(transport.calls.load(Ordering::SeqCst), 2);
    }
}
