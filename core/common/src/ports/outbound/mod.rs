//! Outbound ポート: アプリが外界（時刻・ID・ログ）を使うための trait

pub mod clock;
pub mod id_generator;
pub mod log;

pub use clock::{format_minute, Clock};
pub use id_generator::IdGenerator;
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
