use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::{info, warn};

use crate::clients::{ScoringClient, ScoringTransport};
use crate::config::Config;
use crate::models::{load_phrase_set, Language, PracticePhrase, SubmitOptions};
use crate::orchestrator::{AnalysisOrchestrator, SubmitOutcome};
use crate::services::local_estimate;
use crate::services::session_history::AttemptRow;
use crate::utils::clock::SystemClock;
use crate::utils::logging::{log_phrases_loaded, log_session_summary, log_startup, truncate_text};
use crate::view;

/// 应用主结构
pub struct App {
    config: Config,
    orchestrator: AnalysisOrchestrator,
    transport: Arc<ScoringClient>,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        log_startup(&config.api_base_url);

        let transport = Arc::new(ScoringClient::new(&config)?);
        let default_lang = Language::find(&config.default_lang).unwrap_or(Language::English);

        let orchestrator = AnalysisOrchestrator::new(
            transport.clone(),
            Arc::new(SystemClock),
            default_lang,
            Duration::from_secs(config.duplicate_ttl_secs),
        );

        Ok(Self {
            config,
            orchestrator,
            transport,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        // 加载练习短语
        let set = load_phrase_set(Path::new(&self.config.phrases_file)).await?;

        if set.phrases.is_empty() {
            warn!("⚠️ 没有找到待分析的练习短语，程序结束");
            return Ok(());
        }

        log_phrases_loaded(set.phrases.len());
        info!("📚 练习集: {}", set.title);

        // 后端可用性只影响提示，不影响流程
        if self.transport.check_health().await {
            info!("🟢 评分后端在线");
        } else {
            warn!("🔴 评分后端不可用，失败的短语将附带本地估算");
        }

        let mut stats = SessionStats::default();
        for (idx, phrase) in set.phrases.iter().enumerate() {
            self.process_phrase(idx + 1, phrase, &mut stats).await;
        }

        // 输出最终统计
        log_session_summary(
            stats.scored,
            stats.degraded,
            stats.skipped,
            self.orchestrator.session_average(),
        );
        print_attempt_table(&self.orchestrator.recent_attempts(self.config.history_display_limit));

        Ok(())
    }

    /// 处理单条练习短语
    async fn process_phrase(&self, index: usize, phrase: &PracticePhrase, stats: &mut SessionStats) {
        info!("[短语 {}] 文本: {}", index, truncate_text(&phrase.text, 80));

        let options = SubmitOptions {
            lang: phrase.lang.as_deref().and_then(Language::find),
            ..SubmitOptions::default()
        };

        match self.orchestrator.submit(&phrase.text, &options).await {
            SubmitOutcome::Scored(result) => {
                stats.scored += 1;
                view::print_board(&view::render(&result));
            }
            SubmitOutcome::Degraded(result) => {
                stats.degraded += 1;
                view::print_board(&view::render(&result));

                // 后端失败时附带本地估算，仅供参考展示
                let estimate = local_estimate::estimate(&phrase.text);
                info!(
                    "[短语 {}] 📐 本地估算 (overall: {:.0})",
                    index, estimate.scores.overall
                );
            }
            SubmitOutcome::Skipped(reason) => {
                stats.skipped += 1;
                info!("[短语 {}] ⏭ 请求被拦截: {:?}", index, reason);
            }
        }
    }
}

/// 会话处理统计
#[derive(Debug, Default)]
struct SessionStats {
    scored: usize,
    degraded: usize,
    skipped: usize,
}

// ========== 展示辅助函数 ==========

/// 打印历史尝试表格
fn print_attempt_table(rows: &[AttemptRow]) {
    if rows.is_empty() {
        return;
    }

    println!("\n  {:>2} | {:<33} | {:>7} | {}", "#", "text", "overall", "time");
    println!("  {}", "-".repeat(60));
    for row in rows {
        println!(
            "  {:>2} | {:<33} | {:>7.0} | {}",
            row.attempt, row.text, row.overall, row.time
        );
    }
}
