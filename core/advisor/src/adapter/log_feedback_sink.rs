//! フィードバック送信のスタブ実装（構造化ログへ記録）
//!
//! 実エンドポイントへは送らず、ペイロードをそのまま JSONL ログに落とす。

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::ports::outbound::{FeedbackPayload, FeedbackSink};
use common::error::Error;
use common::ports::outbound::{now_iso8601, Log, LogLevel, LogRecord};

pub struct LogFeedbackSink {
    logger: Arc<dyn Log>,
}

impl LogFeedbackSink {
    pub fn new(logger: Arc<dyn Log>) -> Self {
        Self { logger }
    }
}

impl FeedbackSink for LogFeedbackSink {
    fn submit(&self, payload: &FeedbackPayload) -> Result<(), Error> {
        let value = serde_json::to_value(payload)
            .map_err(|e| Error::system_error(format!("feedback serialize failed: {}", e)))?;
        let mut fields = BTreeMap::new();
        fields.insert("payload".to_string(), value);
        self.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: "feedback submitted".to_string(),
            layer: Some("adapter".to_string()),
            kind: Some("feedback".to_string()),
            fields: Some(fields),
        })
    }
}
