//! 时钟协作者
//!
//! 编排器通过本抽象获取时间：
//! 单调时钟用于指纹过期判定，墙上时钟用于请求与历史时间戳。
//! 测试中可替换为手动推进的时钟，避免真实等待 30 秒窗口。

use std::time::Instant;

use chrono::{DateTime, Utc};

/// 时钟协作者
pub trait Clock: Send + Sync {
    /// 单调时钟
    fn now(&self) -> Instant;

    /// 墙上时钟
    fn timestamp(&self) -> DateTime<Utc>;
}

/// 系统时钟
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn timestamp(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
