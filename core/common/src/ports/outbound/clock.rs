//! 時刻 Outbound ポート
//!
//! usecase は Clock を注入し、テストでは固定時刻を返す実装を渡せる。

use chrono::{Local, TimeZone};

/// 現在時刻を返す抽象（Outbound ポート）
pub trait Clock: Send + Sync {
    /// UNIX エポックからのミリ秒
    fn now_ms(&self) -> u64;
}

/// ミリ秒をユーザー表示用の `YYYY-MM-DD HH:MM`（ローカル時刻）に整形する
pub fn format_minute(ms: u64) -> String {
    match Local.timestamp_millis_opt(ms as i64) {
        chrono::LocalResult::Single(dt) | chrono::LocalResult::Ambiguous(dt, _) => {
            dt.format("%Y-%m-%d %H:%M").to_string()
        }
        chrono::LocalResult::None => String::new(),
    }
}
