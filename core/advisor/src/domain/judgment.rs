//! 判断カード（Judgment）の状態機械
//!
//! 1 回の AI 応答につき 3 枚生成される推奨カード。可変なのは展開状態と
//! フィードバック状態のみで、どちらもクライアントローカル。
//! フィードバックは `None → Accepted` / `None → Rejected` の一方向のみ遷移し、
//! 二度目以降の呼び出しは冪等な no-op。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 判断カード ID（1..=3 固定）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JudgmentId(pub u32);

impl fmt::Display for JudgmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// カードの静的コンテンツ（AdvisorService が返す単位）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JudgmentContent {
    pub id: JudgmentId,
    pub title: String,
    pub subtitle: String,
    /// 本文は信頼済みの HTML フラグメント
    pub body_html: String,
}

/// 展開状態（デフォルトは折りたたみ）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expansion {
    Collapsed,
    Expanded,
}

/// カード単位のフィードバック状態
#[derive(Debug, Clone, PartialEq)]
pub enum CardFeedback {
    None,
    Accepted,
    Rejected { reason: Option<String> },
}

/// 判断カード（コンテンツ + クライアントローカル状態）
#[derive(Debug, Clone)]
pub struct JudgmentCard {
    pub content: JudgmentContent,
    pub expansion: Expansion,
    pub feedback: CardFeedback,
    /// 再生成中はローディングプレースホルダを表示する
    pub regenerating: bool,
    /// 再生成が失敗した場合のインラインエラー（本文の代わりに表示）
    pub regen_error: Option<String>,
}

impl JudgmentCard {
    pub fn new(content: JudgmentContent) -> Self {
        Self {
            content,
            expansion: Expansion::Collapsed,
            feedback: CardFeedback::None,
            regenerating: false,
            regen_error: None,
        }
    }

    /// 展開状態を反転する（クリックごとに flip）
    pub fn toggle(&mut self) {
        self.expansion = match self.expansion {
            Expansion::Collapsed => Expansion::Expanded,
            Expansion::Expanded => Expansion::Collapsed,
        };
    }

    /// 採納する。遷移済みなら no-op で false を返す。
    pub fn accept(&mut self) -> bool {
        if self.feedback != CardFeedback::None {
            return false;
        }
        self.feedback = CardFeedback::Accepted;
        true
    }

    /// 不採納にする（理由は任意）。遷移済みなら no-op で false を返す。
    pub fn reject(&mut self, reason: Option<String>) -> bool {
        if self.feedback != CardFeedback::None {
            return false;
        }
        self.feedback = CardFeedback::Rejected { reason };
        true
    }

    /// 再生成を開始する（本文をローディング表示に差し替える）
    pub fn begin_regeneration(&mut self) {
        self.regenerating = true;
        self.regen_error = None;
    }

    /// 再生成結果を反映する
    pub fn finish_regeneration(&mut self, content: JudgmentContent) {
        self.content = content;
        self.regenerating = false;
        self.regen_error = None;
    }

    /// 再生成の失敗をインラインエラーとして反映する
    pub fn fail_regeneration(&mut self, message: impl Into<String>) {
        self.regenerating = false;
        self.regen_error = Some(message.into());
    }

    /// アクション行（✓ ✗ 🔄）を表示すべきか
    pub fn actions_visible(&self) -> bool {
        self.feedback == CardFeedback::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> JudgmentCard {
        JudgmentCard::new(JudgmentContent {
            id: JudgmentId(1),
            title: "判断1".to_string(),
            subtitle: "副标题".to_string(),
            body_html: "<p>正文</p>".to_string(),
        })
    }

    #[test]
    fn test_default_is_collapsed_with_actions() {
        let c = card();
        assert_eq!(c.expansion, Expansion::Collapsed);
        assert_eq!(c.feedback, CardFeedback::None);
        assert!(c.actions_visible());
    }

    #[test]
    fn test_toggle_twice_returns_to_original() {
        let mut c = card();
        c.toggle();
        assert_eq!(c.expansion, Expansion::Expanded);
        c.toggle();
        assert_eq!(c.expansion, Expansion::Collapsed);
    }

    #[test]
    fn test_accept_transitions_once() {
        let mut c = card();
        assert!(c.accept());
        assert_eq!(c.feedback, CardFeedback::Accepted);
        assert!(!c.actions_visible());
        // 二度目は冪等な no-op
        assert!(!c.accept());
        assert!(!c.reject(None));
        assert_eq!(c.feedback, CardFeedback::Accepted);
    }

    #[test]
    fn test_reject_keeps_reason() {
        let mut c = card();
        assert!(c.reject(Some("理由".to_string())));
        assert_eq!(
            c.feedback,
            CardFeedback::Rejected {
                reason: Some("理由".to_string())
            }
        );
        assert!(!c.accept());
    }

    #[test]
    fn test_regeneration_restores_content() {
        let mut c = card();
        let original = c.content.clone();
        c.begin_regeneration();
        assert!(c.regenerating);
        c.finish_regeneration(original.clone());
        assert!(!c.regenerating);
        assert_eq!(c.content, original);
    }

    #[test]
    fn test_regeneration_failure_is_inline() {
        let mut c = card();
        c.begin_regeneration();
        c.fail_regeneration("服务暂不可用");
        assert!(!c.regenerating);
        assert_eq!(c.regen_error.as_deref(), Some("服务暂不可用"));
        // 次の再生成開始でエラーはクリアされる
        c.begin_regeneration();
        assert!(c.regen_error.is_none());
    }
}
