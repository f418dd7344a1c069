//! アダプタ層: Outbound ポートのスタブ実装と入出力ドライバ
//!
//! 実サービス接続はスコープ外のため、推奨サービス・プロジェクト作成・
//! フィードバック送信はすべて決め打ち/ログのスタブで賄う。

pub(crate) mod canned_advisor;
pub(crate) mod console_prompt;
pub(crate) mod log_feedback_sink;
pub(crate) mod render;
pub(crate) mod seed;
pub(crate) mod stub_directory;
pub(crate) mod terminal;

pub(crate) use canned_advisor::CannedAdvisor;
pub(crate) use console_prompt::ConsolePrompt;
pub(crate) use log_feedback_sink::LogFeedbackSink;
pub(crate) use stub_directory::StubProjectDirectory;
