//! 重复提交防护 - 业务能力层
//!
//! 只负责"同一文本在时间窗口内去重"能力，不关心流程
//!
//! - 指纹在窗口内存活，期间同一文本直接拒绝
//! - 到期后指纹失效，同一文本可以重新提交

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// 计算文本指纹
///
/// 32 位有符号多项式滚动哈希（hash = hash * 31 + code），
/// 按 UTF-16 码元逐个累加，溢出回绕。
/// 长文本存在碰撞概率，这是接受的取舍。
pub fn fingerprint(text: &str) -> i32 {
    let mut hash: i32 = 0;
    for unit in text.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    hash
}

/// 重复提交防护
///
/// 指纹 → 过期时刻 的映射；到期清理在受理入口统一执行，
/// 清空会话后残留的到期动作自然成为无操作
pub struct DuplicateGuard {
    ttl: Duration,
    entries: HashMap<i32, Instant>,
}

impl DuplicateGuard {
    /// 创建新的防护，指定指纹存活窗口
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// 清除所有已到期的指纹
    pub fn evict_expired(&mut self, now: Instant) {
        self.entries.retain(|_, deadline| *deadline > now);
    }

    /// 指纹是否仍在窗口内
    pub fn contains(&self, fp: i32) -> bool {
        self.entries.contains_key(&fp)
    }

    /// 登记指纹，过期时刻为 now + ttl
    pub fn insert(&mut self, fp: i32, now: Instant) {
        self.entries.insert(fp, now + self.ttl);
    }

    /// 清空全部指纹
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 已知输入的哈希回归值
    #[test]
    fn fingerprint_known_value() {
        assert_eq!(fingerprint("abc"), 96354);
        assert_eq!(fingerprint(""), 0);
    }

    #[test]
    fn fingerprint_is_deterministic_and_discriminates() {
        assert_eq!(fingerprint("Hello world"), fingerprint("Hello world"));
        assert_ne!(fingerprint("Hello world"), fingerprint("Hello world!"));
        assert_ne!(fingerprint("hola"), fingerprint("adiós"));
    }

    /// 长文本必须回绕而不是溢出崩溃
    #[test]
    fn fingerprint_wraps_on_long_input() {
        let long_text = "practice makes perfect ".repeat(500);
        let _ = fingerprint(&long_text);
    }

    #[test]
    fn entry_lives_inside_window_and_dies_at_deadline() {
        let mut guard = DuplicateGuard::new(Duration::from_secs(30));
        let t0 = Instant::now();
        let fp = fingerprint("Hello world");

        guard.insert(fp, t0);
        assert!(guard.contains(fp));

        guard.evict_expired(t0 + Duration::from_secs(29));
        assert!(guard.contains(fp));

        guard.evict_expired(t0 + Duration::from_secs(30));
        assert!(!guard.contains(fp));
    }

    #[test]
    fn clear_empties_all_entries() {
        let mut guard = DuplicateGuard::new(Duration::from_secs(30));
        let t0 = Instant::now();
        guard.insert(fingerprint("uno"), t0);
        guard.insert(fingerprint("dos"), t0);
        assert_eq!(guard.len(), 2);

        guard.clear();
        assert!(guard.is_empty());

        // 清空后再执行到期清理必须安全无副作用
        guard.evict_expired(t0 + Duration::from_secs(60));
        assert!(guard.is_empty());
    }
}
