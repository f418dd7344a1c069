//! 人間向けログ実装（stderr へ要点のみ出力）
//!
//! 既存のロガー（tracing / log）には接続せず、`-v` 指定時に stderr へ
//! 整形済みの 1 行を出す。fields の全量は出さず要点のみ（巨大化防止）。

use crate::error::Error;
use crate::ports::outbound::{Log, LogLevel, LogRecord};

const FIELDS_SUMMARY_MAX: usize = 200;

/// fields の要点だけを短い文字列にする
fn fields_summary(record: &LogRecord) -> String {
    let Some(fields) = &record.fields else {
        return String::new();
    };
    let s = serde_json::to_string(fields).unwrap_or_default();
    if s.len() <= FIELDS_SUMMARY_MAX {
        return s;
    }
    let truncated: String = s.chars().take(FIELDS_SUMMARY_MAX).collect();
    format!("{}... (len={})", truncated, s.len())
}

/// stderr へ人間向けの 1 行を出す Log 実装
#[derive(Debug, Clone, Default)]
pub struct StderrLog;

impl StderrLog {
    pub fn new() -> Self {
        Self
    }
}

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        let level = match record.level {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        let summary = fields_summary(record);
        if summary.is_empty() {
            eprintln!("[advisor] {} {}: {}", record.ts, level, record.message);
        } else {
            eprintln!(
                "[advisor] {} {}: {} {}",
                record.ts, level, record.message, summary
            );
        }
        Ok(())
    }
}
