//! 会話ログ（ChatLog）のドメイン型
//!
//! user / AI メッセージの追記専用列。削除も並べ替えもしない。
//! 応答待ちはカウンタで表現し、多重送信はそれぞれ独立のタイマーを積む
//! （送信ごとに必ず 1 応答、という仕様上の性質を保つ）。

use crate::domain::feedback::FeedbackWidget;
use crate::domain::judgment::{JudgmentCard, JudgmentId};
use common::msg::Msg;
use serde::{Deserialize, Serialize};
use std::fmt;

/// AI メッセージ ID（IdGenerator が採番）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub u64);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// AI 応答メッセージ（判断カード 3 枚 + プロジェクト文脈 + フィードバック行）
#[derive(Debug, Clone)]
pub struct AdviceMessage {
    pub id: MessageId,
    pub time: String,
    /// メッセージヘッダのラベル（例: 结构化分析）
    pub label: String,
    pub cards: Vec<JudgmentCard>,
    /// 末尾のプロジェクト文脈ブロック（信頼済み HTML フラグメント）
    pub context_html: String,
    pub feedback: FeedbackWidget,
    /// メッセージ全体の再生成中フラグ（本文をローディング表示に差し替える）
    pub regenerating: bool,
}

impl AdviceMessage {
    pub fn card(&self, id: JudgmentId) -> Option<&JudgmentCard> {
        self.cards.iter().find(|c| c.content.id == id)
    }

    pub fn card_mut(&mut self, id: JudgmentId) -> Option<&mut JudgmentCard> {
        self.cards.iter_mut().find(|c| c.content.id == id)
    }
}

/// 会話エントリ
#[derive(Debug, Clone)]
pub enum ChatEntry {
    User(Msg),
    Advice(AdviceMessage),
}

/// 追記専用の会話ログ
#[derive(Debug, Clone)]
pub struct ChatLog {
    entries: Vec<ChatEntry>,
    /// 送信済みで応答待ちの件数（Idle ⇔ AwaitingResponse の判定）
    pending_replies: usize,
}

impl ChatLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            pending_replies: 0,
        }
    }

    pub fn with_entries(entries: Vec<ChatEntry>) -> Self {
        Self {
            entries,
            pending_replies: 0,
        }
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn push_user(&mut self, msg: Msg) {
        self.entries.push(ChatEntry::User(msg));
    }

    pub fn push_advice(&mut self, advice: AdviceMessage) {
        self.entries.push(ChatEntry::Advice(advice));
    }

    pub fn begin_await(&mut self) {
        self.pending_replies += 1;
    }

    pub fn end_await(&mut self) {
        self.pending_replies = self.pending_replies.saturating_sub(1);
    }

    pub fn is_awaiting(&self) -> bool {
        self.pending_replies > 0
    }

    /// 指定 ID の AI メッセージを探す
    pub fn advice_mut(&mut self, id: MessageId) -> Option<&mut AdviceMessage> {
        self.entries.iter_mut().find_map(|e| match e {
            ChatEntry::Advice(a) if a.id == id => Some(a),
            _ => None,
        })
    }

    pub fn advice(&self, id: MessageId) -> Option<&AdviceMessage> {
        self.entries.iter().find_map(|e| match e {
            ChatEntry::Advice(a) if a.id == id => Some(a),
            _ => None,
        })
    }

    /// 最後の AI メッセージの ID（端末ドライバの省略記法用）
    pub fn latest_advice_id(&self) -> Option<MessageId> {
        self.entries.iter().rev().find_map(|e| match e {
            ChatEntry::Advice(a) => Some(a.id),
            _ => None,
        })
    }
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}
