//! プロジェクト作成エンドポイントの Outbound ポート
//!
//! 名前を受け取り識別子を返す REST 風の外部コラボレータ。本体は実装しない。

use crate::domain::project::ProjectId;
use common::error::Error;

/// プロジェクト作成エンドポイントの抽象（Outbound ポート）
pub trait ProjectDirectory: Send + Sync {
    fn create_project(&self, name: &str) -> Result<ProjectId, Error>;
}
