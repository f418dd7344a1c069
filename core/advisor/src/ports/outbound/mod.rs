//! Outbound ポート: アプリが外部コラボレータを使うための trait
//!
//! ここにあるのは「本体が実装しない」契約のみ。実装はすべてスタブアダプタ
//! （adapter/）で、実サービス接続はこのシステムのスコープ外。

pub mod advisor_service;
pub mod feedback_sink;
pub mod project_directory;
pub mod prompt;

pub use advisor_service::{Advice, AdviceRequest, AdvisorService};
pub use feedback_sink::{FeedbackPayload, FeedbackSink};
pub use project_directory::ProjectDirectory;
pub use prompt::Prompt;
