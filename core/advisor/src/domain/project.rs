//! プロジェクト（案件）のドメイン型
//!
//! プロジェクト一覧は起動時に静的データから構築され、実行中は選択マーク以外
//! 読み取り専用。新規作成は外部コラボレータ（ProjectDirectory）への通知のみで、
//! 一覧には追加されない。

use crate::domain::chat::ChatLog;
use serde::{Deserialize, Serialize};
use std::fmt;

/// プロジェクト ID（一意）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectId(pub u64);

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// プロジェクトの状態ラベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    /// 進行中の案件
    Active,
    /// パイプライン上の案件
    Pipeline,
    /// クローズ済みの案件
    Closed,
}

impl ProjectStatus {
    /// ユーザー表示用ラベル（元データの表記のまま）
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "进行中",
            ProjectStatus::Pipeline => "首页",
            ProjectStatus::Closed => "已结束",
        }
    }
}

/// タイムライン項目の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimelineKind {
    Application,
    DueDiligence,
    Interview,
}

/// タイムライン項目（表示専用・不変）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub kind: TimelineKind,
    pub title: String,
    pub meta: String,
}

/// プロジェクト本体
#[derive(Debug, Clone)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub subtitle: String,
    pub status: ProjectStatus,
    /// ISO 形式の日付文字列（例: 2024-01-15）
    pub date: String,
    pub timeline: Vec<TimelineEntry>,
    pub chat: ChatLog,
}

impl Project {
    /// 検索クエリに一致するか（name / subtitle の部分一致、大文字小文字はそのまま）
    pub fn matches(&self, query: &str) -> bool {
        query.is_empty() || self.name.contains(query) || self.subtitle.contains(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(name: &str, subtitle: &str) -> Project {
        Project {
            id: ProjectId(1),
            name: name.to_string(),
            subtitle: subtitle.to_string(),
            status: ProjectStatus::Active,
            date: "2024-01-15".to_string(),
            timeline: Vec::new(),
            chat: ChatLog::new(),
        }
    }

    #[test]
    fn test_matches_name_substring() {
        let p = project("智能物流系统", "基于IoT的智能仓储管理");
        assert!(p.matches("物流"));
        assert!(p.matches("IoT"));
        assert!(!p.matches("医疗"));
    }

    #[test]
    fn test_matches_is_case_preserving() {
        let p = project("AI医疗诊断平台", "基于深度学习的医疗影像诊断新系统");
        assert!(p.matches("AI"));
        // 大文字小文字の正規化は行わない
        assert!(!p.matches("ai"));
    }

    #[test]
    fn test_empty_query_matches_all() {
        let p = project("区块链金融", "去中心化借贷平台");
        assert!(p.matches(""));
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ProjectStatus::Active.label(), "进行中");
        assert_eq!(ProjectStatus::Pipeline.label(), "首页");
        assert_eq!(ProjectStatus::Closed.label(), "已结束");
    }
}
