//! ビューモデルの端末向けレンダリング（読み取り専用）
//!
//! Workbench::view() の ViewModel だけを入力とし、状態には一切触らない。
//! HTML フラグメントはタグを落とした素のテキストにして表示する。

use crate::domain::{BubbleView, FeedbackRowView, FormView, ViewModel};

/// 画面全体を 1 つの文字列に組み立てる
pub fn render(view: &ViewModel) -> String {
    let mut out = String::new();
    out.push_str(&format!("=== {} ===\n", view.header_title));
    for entry in &view.timeline {
        out.push_str(&format!("  • {} — {}\n", entry.title, entry.meta));
    }

    out.push_str(&render_project_list(view));
    out.push('\n');

    for bubble in &view.chat.bubbles {
        match bubble {
            BubbleView::User { content_html, time } => {
                out.push_str(&format!("你 ({}):\n  {}\n", time, content_html));
            }
            BubbleView::Advice(advice) => {
                out.push_str(&format!("🤖 {} ({}):\n", advice.label, advice.time));
                if advice.loading {
                    out.push_str("  🔄 正在重新生成...\n");
                    continue;
                }
                for card in &advice.cards {
                    let marker = if card.expanded { "▲" } else { "▼" };
                    out.push_str(&format!("  [{}] {} {}\n", card.judgment, marker, card.title));
                    if let Some(badge) = &card.badge {
                        out.push_str(&format!("      {}\n", badge.label()));
                    }
                    out.push_str(&format!("      {}\n", card.subtitle));
                    if card.loading {
                        out.push_str("      🔄 正在重新生成此判断...\n");
                    } else if let Some(error) = &card.error {
                        out.push_str(&format!("      {}\n", error));
                    } else if let Some(body) = &card.body_html {
                        for line in strip_tags(body).lines().filter(|l| !l.trim().is_empty()) {
                            out.push_str(&format!("      {}\n", line.trim()));
                        }
                    }
                    if card.actions_visible {
                        out.push_str("      [✓ 采纳] [✗ 不采纳] [🔄 重新生成]\n");
                    }
                }
                for line in strip_tags(&advice.context_html)
                    .lines()
                    .filter(|l| !l.trim().is_empty())
                {
                    out.push_str(&format!("  {}\n", line.trim()));
                }
                match advice.feedback {
                    FeedbackRowView::Actions => {
                        out.push_str("  [采纳建议] [修改] [重新生成]\n");
                    }
                    FeedbackRowView::AcceptedIndicator => {
                        out.push_str("  ✓ 已采纳此建议\n");
                    }
                }
                match &advice.form {
                    Some(FormView::Editing { draft }) => {
                        out.push_str(&format!("  👨‍🏫 班主任反馈: {}\n", draft));
                    }
                    Some(FormView::Notice) => {
                        out.push_str("  ✓ 反馈已提交，AI将根据您的建议改进\n");
                    }
                    None => {}
                }
            }
        }
    }

    if view.chat.awaiting_reply {
        out.push_str("… AI 正在分析\n");
    }
    out
}

/// プロジェクト一覧だけを組み立てる（--list-projects と画面上部）
pub fn render_project_list(view: &ViewModel) -> String {
    let mut out = String::new();
    for (i, p) in view.projects.iter().enumerate() {
        if !p.visible {
            continue;
        }
        let marker = if p.active { "▸" } else { " " };
        out.push_str(&format!(
            "{} {}. {} — {} [{}] {}\n",
            marker,
            i + 1,
            p.name,
            p.subtitle,
            p.status_label,
            p.date
        ));
    }
    out
}

/// HTML フラグメントから素のテキストを抜き出す（表示専用の雑な除去）
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => {
                in_tag = false;
                // ブロック境界を行に変換する
                if !out.ends_with('\n') {
                    out.push('\n');
                }
            }
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChatView, ProjectItemView, TimelineItemView};

    fn view() -> ViewModel {
        ViewModel {
            header_title: "AI医疗诊断平台".to_string(),
            timeline: vec![TimelineItemView {
                title: "项目申请".to_string(),
                meta: "2024-01-15 · 已提交".to_string(),
            }],
            projects: vec![
                ProjectItemView {
                    name: "AI医疗诊断平台".to_string(),
                    subtitle: "基于深度学习的医疗影像诊断新系统".to_string(),
                    status_label: "进行中",
                    date: "2024-01-15".to_string(),
                    active: true,
                    visible: true,
                },
                ProjectItemView {
                    name: "智能物流系统".to_string(),
                    subtitle: "基于IoT的智能仓储管理".to_string(),
                    status_label: "首页",
                    date: "2023-12-20".to_string(),
                    active: false,
                    visible: false,
                },
            ],
            chat: ChatView {
                bubbles: Vec::new(),
                follow_bottom: true,
                awaiting_reply: false,
            },
            input: String::new(),
            notices: Vec::new(),
        }
    }

    #[test]
    fn test_hidden_projects_are_not_rendered() {
        let text = render_project_list(&view());
        assert!(text.contains("AI医疗诊断平台"));
        assert!(!text.contains("智能物流系统"));
    }

    #[test]
    fn test_active_project_is_marked() {
        let text = render_project_list(&view());
        assert!(text.starts_with("▸ 1."));
    }

    #[test]
    fn test_strip_tags_unescapes_entities() {
        let text = strip_tags("<p>保证&lt;200ms延迟</p>");
        assert!(text.contains("保证<200ms延迟"));
        assert!(!text.contains("<p>"));
    }

    #[test]
    fn test_render_shows_timeline_under_header() {
        let text = render(&view());
        assert!(text.contains("• 项目申请 — 2024-01-15 · 已提交"));
    }

    #[test]
    fn test_render_shows_awaiting_marker() {
        let mut v = view();
        v.chat.awaiting_reply = true;
        assert!(render(&v).contains("AI 正在分析"));
    }
}
