//! 入力イベントとタイマーペイロード
//!
//! 制御フロー: 入力イベント → Workbench::update → 状態遷移（+ タイマー登録）
//! → view() の再投影。ハンドラが DOM 相当を直接いじることはない。

use crate::domain::chat::MessageId;
use crate::domain::judgment::JudgmentId;
use crate::domain::project::ProjectId;

/// ユーザー入力イベント（クリック・入力・送信に相当する閉じたアルファベット）
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// プロジェクト一覧の項目クリック（0 始まりの添字）
    SelectProject { index: usize },
    /// 検索ボックスの入力
    SearchChanged { query: String },
    /// 新規プロジェクトボタン（名前はブロッキングプロンプトで聞く）
    CreateProject,
    /// メッセージ入力欄の変更
    InputChanged { text: String },
    /// 送信ボタン / Enter
    Send,
    /// 判断カードのヘッダクリック（展開/折りたたみ）
    ToggleJudgment { message: MessageId, judgment: JudgmentId },
    /// 判断カードの ✓（採納）
    AcceptJudgment { message: MessageId, judgment: JudgmentId },
    /// 判断カードの ✗（不採納、理由は任意入力）
    RejectJudgment { message: MessageId, judgment: JudgmentId },
    /// 判断カードの 🔄（再生成）
    RegenerateJudgment { message: MessageId, judgment: JudgmentId },
    /// フィードバック行の採納
    AcceptMessage { message: MessageId },
    /// フィードバック行の修正（フォームを開く）
    ModifyMessage { message: MessageId },
    /// 修正フォームの下書き変更
    FeedbackDraftChanged { message: MessageId, text: String },
    /// 修正フォームの送信
    SubmitFeedback { message: MessageId },
    /// 修正フォームの取消
    CancelFeedback { message: MessageId },
    /// フィードバック行の再生成
    RegenerateMessage { message: MessageId },
}

/// タイマー発火時に実行される遅延アクション
///
/// setTimeout 相当はすべてここを経由する。プロジェクト ID を持つのは、
/// 発火までに選択が切り替わっても元の会話へ届けるため。
#[derive(Debug, Clone, PartialEq)]
pub enum PendingAction {
    /// 送信から 1000ms 後: AdvisorService へ問い合わせて AI 応答を追加
    DeliverReply { project: ProjectId, query: String },
    /// 再生成開始から 1500ms 後: カード本文を復元
    RestoreJudgment {
        project: ProjectId,
        message: MessageId,
        judgment: JudgmentId,
    },
    /// メッセージ全体の再生成から 1500ms 後: 本文を復元
    RestoreMessage { project: ProjectId, message: MessageId },
    /// 送信成功通知から 3000ms 後: 通知を自動で消す
    DismissNotice { project: ProjectId, message: MessageId },
}
