//! 型付きビューモデル（model → render の一方向データフロー）
//!
//! Workbench::view() が状態から純粋に投影する読み取り専用の構造。
//! レンダラ（端末・テスト）はここだけを見る。ユーザー由来のテキストは
//! 投影時にエスケープ済み、AI 側コンテンツは信頼済みのフラグメントのまま。

use crate::domain::chat::MessageId;
use crate::domain::judgment::JudgmentId;

/// 画面全体のスナップショット
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    /// ヘッダに出す選択中プロジェクト名
    pub header_title: String,
    /// 選択中プロジェクトのタイムライン（表示専用）
    pub timeline: Vec<TimelineItemView>,
    pub projects: Vec<ProjectItemView>,
    pub chat: ChatView,
    /// 入力欄の現在値
    pub input: String,
    /// アラート・確認などの通知（ドライバが表示して破棄する）
    pub notices: Vec<String>,
}

/// タイムラインの 1 項目（ヘッダ下に並べる）
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineItemView {
    pub title: String,
    pub meta: String,
}

/// プロジェクト一覧の 1 項目
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectItemView {
    pub name: String,
    pub subtitle: String,
    pub status_label: &'static str,
    pub date: String,
    /// 排他的な選択マーク
    pub active: bool,
    /// 検索フィルタによる表示/非表示
    pub visible: bool,
}

/// チャットパネル
#[derive(Debug, Clone, PartialEq)]
pub struct ChatView {
    pub bubbles: Vec<BubbleView>,
    /// 追記のたびに最下部へ固定する
    pub follow_bottom: bool,
    /// 応答待ち（送信済みでまだ AI 応答が届いていない）
    pub awaiting_reply: bool,
}

/// 吹き出し 1 件
#[derive(Debug, Clone, PartialEq)]
pub enum BubbleView {
    User {
        /// エスケープ済みの表示用フラグメント
        content_html: String,
        time: String,
    },
    Advice(AdviceView),
}

/// AI 応答の吹き出し
#[derive(Debug, Clone, PartialEq)]
pub struct AdviceView {
    pub message: MessageId,
    pub label: String,
    pub time: String,
    /// メッセージ全体の再生成中（カード列の代わりにローディングを出す）
    pub loading: bool,
    pub cards: Vec<CardView>,
    pub context_html: String,
    pub feedback: FeedbackRowView,
    pub form: Option<FormView>,
}

/// 判断カード 1 枚
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub judgment: JudgmentId,
    pub title: String,
    pub subtitle: String,
    pub expanded: bool,
    /// 展開時の本文。再生成中 (`loading`) やエラー時は None。
    pub body_html: Option<String>,
    /// カード単体の再生成中プレースホルダ
    pub loading: bool,
    /// 再生成失敗時のインラインエラー
    pub error: Option<String>,
    pub badge: Option<BadgeView>,
    /// ✓ ✗ 🔄 のアクション行
    pub actions_visible: bool,
}

/// カードのステータスバッジ（高々 1 つ）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeView {
    Accepted,
    Rejected,
}

impl BadgeView {
    pub fn label(&self) -> &'static str {
        match self {
            BadgeView::Accepted => "✓ 已采纳",
            BadgeView::Rejected => "✗ 未采纳",
        }
    }
}

/// メッセージ単位のフィードバック行
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackRowView {
    /// 采纳 / 修改 / 重新生成 のボタン行
    Actions,
    /// 「✓ 已采纳此建议」の固定表示（終端状態）
    AcceptedIndicator,
}

/// 修正フォーム（高々 1 つ）
#[derive(Debug, Clone, PartialEq)]
pub enum FormView {
    /// 入力中
    Editing { draft: String },
    /// 「✓ 反馈已提交，AI将根据您的建议改进」の通知（自動消灯）
    Notice,
}

impl ViewModel {
    /// 表示中のアクティブ項目の個数（不変条件の検証用）
    pub fn active_count(&self) -> usize {
        self.projects.iter().filter(|p| p.active).count()
    }
}
