//! 連番 ID 生成（AtomicU64）

use crate::ports::outbound::IdGenerator;
use std::sync::atomic::{AtomicU64, Ordering};

/// 指定値から始まる単調増加 ID を返す IdGenerator 実装
#[derive(Debug)]
pub struct SeqIdGenerator {
    next: AtomicU64,
}

impl SeqIdGenerator {
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl IdGenerator for SeqIdGenerator {
    fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}
