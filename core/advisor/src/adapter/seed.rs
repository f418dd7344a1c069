//! 起動時にロードする静的プロジェクトデータ

use common::msg::Msg;
use crate::domain::{
    ChatEntry, ChatLog, Project, ProjectId, ProjectStatus, TimelineEntry, TimelineKind,
};

/// プロジェクト一覧のシード（実行中は選択マーク以外読み取り専用）
pub fn seed_projects() -> Vec<Project> {
    vec![
        Project {
            id: ProjectId(1),
            name: "AI医疗诊断平台".to_string(),
            subtitle: "基于深度学习的医疗影像诊断新系统".to_string(),
            status: ProjectStatus::Active,
            date: "2024-01-15".to_string(),
            timeline: vec![
                TimelineEntry {
                    kind: TimelineKind::Application,
                    title: "项目申请表".to_string(),
                    meta: "2024-01-10 提交".to_string(),
                },
                TimelineEntry {
                    kind: TimelineKind::DueDiligence,
                    title: "DD材料".to_string(),
                    meta: "财务模型、市场分析、技术架构".to_string(),
                },
                TimelineEntry {
                    kind: TimelineKind::Interview,
                    title: "面试记录".to_string(),
                    meta: "2024-01-12 技术面试、结构面试".to_string(),
                },
            ],
            chat: ChatLog::with_entries(vec![ChatEntry::User(Msg::user(
                "我们的AI医疗诊断平台目前在技术实验阶段了，但遇到了数据标注量的问题。\
                 请帮我分析一下这个问题，并给出解决方案。",
                "2024-01-15 14:30",
            ))]),
        },
        Project {
            id: ProjectId(2),
            name: "智能物流系统".to_string(),
            subtitle: "基于IoT的智能仓储管理".to_string(),
            status: ProjectStatus::Pipeline,
            date: "2023-12-20".to_string(),
            timeline: Vec::new(),
            chat: ChatLog::new(),
        },
        Project {
            id: ProjectId(3),
            name: "区块链金融".to_string(),
            subtitle: "去中心化借贷平台".to_string(),
            status: ProjectStatus::Closed,
            date: "2023-11-30".to_string(),
            timeline: Vec::new(),
            chat: ChatLog::new(),
        },
    ]
}
