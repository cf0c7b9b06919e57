//! # Tutorium Scorer
//!
//! Tutorium 语言学习平台的评分客户端
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 传输层（Clients）
//! - `clients/` - 持有 HTTP 连接，只暴露传输能力
//! - `ScoringClient` - 评分后端的唯一调用入口
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单条文本
//! - `DuplicateGuard` - 时间窗口内文本去重能力
//! - `SessionHistory` - 会话历史与平均分能力
//! - `local_estimate` - 后端不可用时的本地估算能力
//!
//! ### ③ 流程层（Orchestrator）
//! - `orchestrator/` - 定义"一次分析"的完整处理流程
//! - `AnalysisOrchestrator` - 流程编排（校验 → 去重 → 远端分析 → 历史）
//!
//! ### ④ 应用层（App）
//! - `app` - 会话驱动器，遍历练习短语并展示评分结果
//!
//! ## 模块结构

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod view;

// 重新导出常用类型
pub use app::App;
pub use clients::{ScoringClient, ScoringTransport};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{AnalysisRequest, AnalysisResult, Language, ScoreSet, SpeechMetadata, SubmitOptions};
pub use orchestrator::{AnalysisOrchestrator, SkipReason, SubmitOutcome};
pub use utils::clock::{Clock, SystemClock};
