//! プロジェクト作成エンドポイントのスタブ実装
//!
//! 実サービスは呼ばず、採番して成功を返すだけ。作成結果は一覧に反映されない。

use std::sync::Arc;

use crate::domain::ProjectId;
use crate::ports::outbound::ProjectDirectory;
use common::error::Error;
use common::ports::outbound::IdGenerator;

pub struct StubProjectDirectory {
    ids: Arc<dyn IdGenerator>,
}

impl StubProjectDirectory {
    pub fn new(ids: Arc<dyn IdGenerator>) -> Self {
        Self { ids }
    }
}

impl ProjectDirectory for StubProjectDirectory {
    fn create_project(&self, name: &str) -> Result<ProjectId, Error> {
        if name.trim().is_empty() {
            return Err(Error::invalid_argument("project name must not be empty"));
        }
        Ok(ProjectId(self.ids.next_id()))
    }
}
