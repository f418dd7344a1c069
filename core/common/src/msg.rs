//! 型付きチャットメッセージ（Msg）
//!
//! 会話ログは Vec<Msg> 相当の追記専用列として保持し、表示層が各形式に変換する。
//! content は生テキストのまま持ち、エスケープは投影時に行う。

use serde::{Deserialize, Serialize};

/// 会話メッセージ（ユーザー・アシスタント）
///
/// `time` は `YYYY-MM-DD HH:MM`（ローカル時刻）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    User { content: String, time: String },
    Assistant { content: String, time: String },
}

impl Msg {
    pub fn user(content: impl Into<String>, time: impl Into<String>) -> Self {
        Msg::User {
            content: content.into(),
            time: time.into(),
        }
    }

    pub fn assistant(content: impl Into<String>, time: impl Into<String>) -> Self {
        Msg::Assistant {
            content: content.into(),
            time: time.into(),
        }
    }

    pub fn is_user(&self) -> bool {
        matches!(self, Msg::User { .. })
    }

    pub fn content(&self) -> &str {
        match self {
            Msg::User { content, .. } | Msg::Assistant { content, .. } => content,
        }
    }

    pub fn time(&self) -> &str {
        match self {
            Msg::User { time, .. } | Msg::Assistant { time, .. } => time,
        }
    }
}
