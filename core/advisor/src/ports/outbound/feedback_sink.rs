//! フィードバック送信エンドポイントの Outbound ポート

use crate::domain::chat::MessageId;
use crate::domain::judgment::JudgmentId;
use crate::domain::project::ProjectId;
use common::error::Error;
use serde::Serialize;

/// 送信ペイロード（judgment 単位とメッセージ単位の両方）
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeedbackPayload {
    JudgmentAccepted {
        project: ProjectId,
        message: MessageId,
        judgment: JudgmentId,
    },
    JudgmentRejected {
        project: ProjectId,
        message: MessageId,
        judgment: JudgmentId,
        #[serde(skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
    },
    MessageAccepted {
        project: ProjectId,
        message: MessageId,
    },
    /// 修正フォームの自由記述
    MessageFeedback {
        project: ProjectId,
        message: MessageId,
        text: String,
    },
}

/// フィードバック送信エンドポイントの抽象（Outbound ポート）
pub trait FeedbackSink: Send + Sync {
    fn submit(&self, payload: &FeedbackPayload) -> Result<(), Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_serializes_with_kind_tag() {
        let p = FeedbackPayload::JudgmentRejected {
            project: ProjectId(1),
            message: MessageId(4),
            judgment: JudgmentId(2),
            reason: Some("过于激进".to_string()),
        };
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"kind\":\"judgment_rejected\""));
        assert!(json.contains("过于激进"));

        let p = FeedbackPayload::JudgmentAccepted {
            project: ProjectId(1),
            message: MessageId(4),
            judgment: JudgmentId(1),
        };
        let json = serde_json::to_string(&p).unwrap();
        assert!(!json.contains("reason"));
    }
}
