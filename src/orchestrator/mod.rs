//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责单次分析请求的完整流程调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `analysis_orchestrator` - 分析请求编排器
//! - 前置校验（长度 → 指纹去重 → 在途防抖）
//! - 独占持有 DuplicateGuard 与 SessionHistory
//! - 调用传输协作者并规整结果（成功 / 降级 / 拦截）
//! - 提供会话统计与清空操作
//!
//! ## 层次关系
//!
//! ```text
//! app (处理 Vec<PracticePhrase>)
//!     ↓
//! orchestrator::AnalysisOrchestrator (处理单条文本)
//!     ↓
//! services (能力层：duplicate_guard / session_history / local_estimate)
//!     ↓
//! clients (传输层：ScoringTransport)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一在途**：同一编排器同一时刻最多一个网络请求在途
//! 2. **资源独占**：只有编排器持有防护与历史，二者随会话一并清空
//! 3. **向下依赖**：编排层 → services → clients
//! 4. **无展示逻辑**：只产出结果值，不触碰任何展示面

pub mod analysis_orchestrator;

// 重新导出主要类型
pub use analysis_orchestrator::{AnalysisOrchestrator, SkipReason, SubmitOutcome};
