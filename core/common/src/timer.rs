//! キャンセル可能なタイマーキュー
//!
//! setTimeout 相当の疑似非同期を明示的なタスクとして保持する。ハンドラは
//! `schedule` で (遅延, ペイロード) を登録し、ホスト側が `pop_due` で期限の
//! 来たものを取り出して実行する（run-to-completion）。`TimerHandle` で
//! 発火前のタスクを取り消せるため、再トリガ時に前回分と競合しない。
//!
//! 同時刻のタイマーは登録順（seq 順）に発火する。

/// 発火前のタイマーを指すハンドル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Entry<T> {
    id: u64,
    deadline_ms: u64,
    payload: T,
}

/// 単一スレッド前提のタイマーキュー
#[derive(Debug)]
pub struct TimerQueue<T> {
    entries: Vec<Entry<T>>,
    seq: u64,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            seq: 0,
        }
    }

    /// now から delay_ms 後に発火するタイマーを登録する
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64, payload: T) -> TimerHandle {
        self.seq += 1;
        let id = self.seq;
        self.entries.push(Entry {
            id,
            deadline_ms: now_ms.saturating_add(delay_ms),
            payload,
        });
        TimerHandle(id)
    }

    /// 発火前のタイマーを取り消す。既に発火済み・取り消し済みなら false。
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != handle.0);
        before != self.entries.len()
    }

    /// 期限の来たペイロードを (deadline, 登録順) で取り出す
    pub fn pop_due(&mut self, now_ms: u64) -> Vec<T> {
        let mut due: Vec<Entry<T>> = Vec::new();
        let mut rest: Vec<Entry<T>> = Vec::new();
        for e in self.entries.drain(..) {
            if e.deadline_ms <= now_ms {
                due.push(e);
            } else {
                rest.push(e);
            }
        }
        self.entries = rest;
        due.sort_by_key(|e| (e.deadline_ms, e.id));
        due.into_iter().map(|e| e.payload).collect()
    }

    /// 次に発火するタイマーの期限（なければ None）
    pub fn next_deadline(&self) -> Option<u64> {
        self.entries.iter().map(|e| e.deadline_ms).min()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_and_pop_due() {
        let mut q = TimerQueue::new();
        q.schedule(0, 1000, "reply");
        assert!(q.pop_due(999).is_empty());
        assert_eq!(q.pop_due(1000), vec!["reply"]);
        assert!(q.is_empty());
    }

    #[test]
    fn test_same_deadline_fires_in_schedule_order() {
        let mut q = TimerQueue::new();
        q.schedule(0, 100, "a");
        q.schedule(0, 100, "b");
        q.schedule(0, 50, "c");
        assert_eq!(q.pop_due(100), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_cancel_pending() {
        let mut q = TimerQueue::new();
        let h1 = q.schedule(0, 100, "old");
        q.schedule(0, 100, "new");
        assert!(q.cancel(h1));
        assert!(!q.cancel(h1));
        assert_eq!(q.pop_due(100), vec!["new"]);
    }

    #[test]
    fn test_next_deadline() {
        let mut q: TimerQueue<u8> = TimerQueue::new();
        assert_eq!(q.next_deadline(), None);
        q.schedule(10, 1000, 1);
        q.schedule(10, 500, 2);
        assert_eq!(q.next_deadline(), Some(510));
    }

    #[test]
    fn test_pop_due_keeps_later_timers() {
        let mut q = TimerQueue::new();
        q.schedule(0, 100, "first");
        q.schedule(0, 2000, "second");
        assert_eq!(q.pop_due(100), vec!["first"]);
        assert_eq!(q.len(), 1);
        assert_eq!(q.pop_due(2000), vec!["second"]);
    }
}
