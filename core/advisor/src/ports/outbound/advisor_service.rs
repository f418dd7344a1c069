//! 推奨サービス Outbound ポート
//!
//! 会話文脈を渡すと構造化された判断レコード列を返す、推論エンドポイントの契約。
//! UI ロジックはコンテンツを一切埋め込まず、必ずこのポート経由で受け取る。

use crate::domain::judgment::{JudgmentContent, JudgmentId};
use crate::domain::project::ProjectId;
use common::error::Error;

/// 推奨リクエスト（会話文脈）
#[derive(Debug, Clone)]
pub struct AdviceRequest {
    pub project: ProjectId,
    pub project_name: String,
    /// 送信されたユーザーメッセージ
    pub query: String,
}

/// 推奨レスポンス（順序付き判断レコード + プロジェクト文脈ブロック）
#[derive(Debug, Clone)]
pub struct Advice {
    /// メッセージヘッダのラベル（例: 结构化分析）
    pub label: String,
    pub cards: Vec<JudgmentContent>,
    pub context_html: String,
}

/// 推論・推奨エンドポイントの抽象（Outbound ポート）
pub trait AdvisorService: Send + Sync {
    /// 会話文脈から判断カード一式を生成する
    fn advise(&self, req: &AdviceRequest) -> Result<Advice, Error>;

    /// 単一の判断を再生成する（project + judgment id がキー）
    fn regenerate(
        &self,
        project: ProjectId,
        judgment: JudgmentId,
    ) -> Result<JudgmentContent, Error>;
}
