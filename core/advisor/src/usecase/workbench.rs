//! Workbench: 画面全体の状態と更新ループ
//!
//! プロジェクト一覧・チャット・判断カード・フィードバック行のすべての状態を
//! コンポーネントローカルに持ち、入力イベント（UiEvent）を run-to-completion で
//! 処理して view() で型付きビューモデルに投影する。疑似非同期（応答遅延・
//! 再生成・通知の自動消灯）は TimerQueue 上の PendingAction として明示し、
//! 再生成の再トリガは前回のタイマーをキャンセルして競合を防ぐ。

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::sync::Arc;

use common::error::Error;
use common::html;
use common::msg::Msg;
use common::ports::outbound::{format_minute, now_iso8601, Clock, IdGenerator, Log, LogLevel, LogRecord};
use common::timer::{TimerHandle, TimerQueue};

use crate::domain::{
    AdviceMessage, AdviceView, BadgeView, BubbleView, CardFeedback, CardView, ChatEntry, ChatView,
    Expansion, FeedbackRowView, FeedbackWidget, FormPhase, FormView, JudgmentCard, JudgmentId,
    MessageId, PendingAction, Project, ProjectId, ProjectItemView, SubmitOutcome,
    TimelineItemView, UiEvent, ViewModel,
};
use crate::ports::outbound::{
    AdviceRequest, AdvisorService, FeedbackPayload, FeedbackSink, ProjectDirectory, Prompt,
};

/// 送信から AI 応答までの疑似レイテンシ
pub const RESPONSE_DELAY_MS: u64 = 1000;
/// 再生成のローディング時間（カード単位・メッセージ単位とも）
pub const REGENERATE_DELAY_MS: u64 = 1500;
/// 送信成功通知の自動消灯までの時間
pub const NOTICE_DISMISS_MS: u64 = 3000;

/// Workbench が注入される依存一式（wiring が組み立てる）
pub struct WorkbenchDeps {
    pub advisor: Arc<dyn AdvisorService>,
    pub directory: Arc<dyn ProjectDirectory>,
    pub feedback: Arc<dyn FeedbackSink>,
    pub prompt: Arc<dyn Prompt>,
    pub clock: Arc<dyn Clock>,
    pub ids: Arc<dyn IdGenerator>,
    pub logger: Arc<dyn Log>,
}

/// 再生成タイマーのキー（None はメッセージ全体）
type RegenKey = (MessageId, Option<JudgmentId>);

/// 画面全体の状態を持つコンポーネント
pub struct Workbench {
    deps: WorkbenchDeps,
    projects: Vec<Project>,
    /// 選択中プロジェクトの添字。不変条件: 常に projects の範囲内。
    current: usize,
    search: String,
    input: String,
    notices: Vec<String>,
    timers: TimerQueue<PendingAction>,
    /// 再トリガ時に前回分をキャンセルするための帳簿
    regen_timers: HashMap<RegenKey, TimerHandle>,
}

impl Workbench {
    /// プロジェクト列からワークベンチを組み立てる。先頭が選択状態になる。
    pub fn new(deps: WorkbenchDeps, projects: Vec<Project>) -> Result<Self, Error> {
        if projects.is_empty() {
            return Err(Error::invalid_argument("no projects seeded"));
        }
        Ok(Self {
            deps,
            projects,
            current: 0,
            search: String::new(),
            input: String::new(),
            notices: Vec::new(),
            timers: TimerQueue::new(),
            regen_timers: HashMap::new(),
        })
    }

    // --- 参照系（ドライバ向け）

    pub fn current_project(&self) -> &Project {
        &self.projects[self.current]
    }

    pub fn latest_advice_id(&self) -> Option<MessageId> {
        self.current_project().chat.latest_advice_id()
    }

    /// 次のタイマー期限（ドライバが sleep するため）
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    pub fn has_pending_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    /// 通知を取り出して空にする（ドライバが表示したら破棄）
    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }

    // --- 更新ループ

    /// 入力イベントを 1 件処理する（run-to-completion）
    pub fn update(&mut self, event: UiEvent) -> Result<(), Error> {
        match event {
            UiEvent::SelectProject { index } => self.select_project(index),
            UiEvent::SearchChanged { query } => {
                self.search = query;
                Ok(())
            }
            UiEvent::CreateProject => self.create_project(),
            UiEvent::InputChanged { text } => {
                self.input = text;
                Ok(())
            }
            UiEvent::Send => self.send(),
            UiEvent::ToggleJudgment { message, judgment } => {
                self.card_mut(message, judgment)?.toggle();
                Ok(())
            }
            UiEvent::AcceptJudgment { message, judgment } => self.accept_judgment(message, judgment),
            UiEvent::RejectJudgment { message, judgment } => self.reject_judgment(message, judgment),
            UiEvent::RegenerateJudgment { message, judgment } => {
                self.regenerate_judgment(message, judgment)
            }
            UiEvent::AcceptMessage { message } => self.accept_message(message),
            UiEvent::ModifyMessage { message } => {
                self.advice_mut(message)?.feedback.open_form();
                Ok(())
            }
            UiEvent::FeedbackDraftChanged { message, text } => {
                self.advice_mut(message)?.feedback.set_draft(text);
                Ok(())
            }
            UiEvent::SubmitFeedback { message } => self.submit_feedback(message),
            UiEvent::CancelFeedback { message } => {
                self.advice_mut(message)?.feedback.cancel();
                Ok(())
            }
            UiEvent::RegenerateMessage { message } => self.regenerate_message(message),
        }
    }

    /// 期限の来たタイマーをすべて発火する
    pub fn pump(&mut self) -> Result<(), Error> {
        let now = self.deps.clock.now_ms();
        for action in self.timers.pop_due(now) {
            self.apply(action)?;
        }
        Ok(())
    }

    // --- ProjectStore / 選択

    fn select_project(&mut self, index: usize) -> Result<(), Error> {
        if index >= self.projects.len() {
            return Err(Error::invalid_argument(format!(
                "project index out of range: {} (1..={})",
                index + 1,
                self.projects.len()
            )));
        }
        self.current = index;
        Ok(())
    }

    fn create_project(&mut self) -> Result<(), Error> {
        let Some(name) = self.deps.prompt.ask("请输入项目名称：") else {
            return Ok(());
        };
        let name = name.trim().to_string();
        if name.is_empty() {
            return Ok(());
        }
        // 作成は外部コラボレータへの通知のみ。一覧には追加しない。
        match self.deps.directory.create_project(&name) {
            Ok(id) => {
                self.log_event("project created", &[("project", format!("{}", id))]);
                self.notices.push(format!("项目 \"{}\" 已创建！", name));
            }
            Err(e) => {
                self.log_warn("project create failed", &e);
                self.notices.push(format!("项目创建失败：{}", e));
            }
        }
        Ok(())
    }

    // --- ChatPanel

    fn send(&mut self) -> Result<(), Error> {
        let text = self.input.trim().to_string();
        if text.is_empty() {
            return Ok(());
        }
        let now = self.deps.clock.now_ms();
        let project = self.current_project().id;
        {
            let chat = &mut self.projects[self.current].chat;
            chat.push_user(Msg::user(text.clone(), format_minute(now)));
            chat.begin_await();
        }
        self.input.clear();
        self.timers.schedule(
            now,
            RESPONSE_DELAY_MS,
            PendingAction::DeliverReply {
                project,
                query: text,
            },
        );
        self.log_event("message sent", &[("project", format!("{}", project))]);
        Ok(())
    }

    fn deliver_reply(&mut self, project: ProjectId, query: String) -> Result<(), Error> {
        let now = self.deps.clock.now_ms();
        let (name, exists) = match self.project_index(project) {
            Some(i) => (self.projects[i].name.clone(), true),
            None => (String::new(), false),
        };
        if !exists {
            // プロジェクト列は縮まないので通常到達しない
            return Ok(());
        }
        let req = AdviceRequest {
            project,
            project_name: name,
            query,
        };
        let advice = self.deps.advisor.advise(&req);
        let index = match self.project_index(project) {
            Some(i) => i,
            None => return Ok(()),
        };
        let chat = &mut self.projects[index].chat;
        chat.end_await();
        match advice {
            Ok(advice) => {
                let msg = AdviceMessage {
                    id: MessageId(self.deps.ids.next_id()),
                    time: format_minute(now),
                    label: advice.label,
                    cards: advice.cards.into_iter().map(JudgmentCard::new).collect(),
                    context_html: advice.context_html,
                    feedback: FeedbackWidget::new(),
                    regenerating: false,
                };
                let id = msg.id;
                chat.push_advice(msg);
                self.log_event("reply delivered", &[("message", format!("{}", id))]);
            }
            Err(e) => {
                self.log_warn("advise failed", &e);
                self.notices.push(format!("AI 服务暂不可用：{}", e));
            }
        }
        Ok(())
    }

    // --- JudgmentCardSet

    fn accept_judgment(&mut self, message: MessageId, judgment: JudgmentId) -> Result<(), Error> {
        let project = self.current_project().id;
        if !self.card_mut(message, judgment)?.accept() {
            return Ok(());
        }
        self.submit_to_sink(FeedbackPayload::JudgmentAccepted {
            project,
            message,
            judgment,
        });
        Ok(())
    }

    fn reject_judgment(&mut self, message: MessageId, judgment: JudgmentId) -> Result<(), Error> {
        let project = self.current_project().id;
        if !self.card_mut(message, judgment)?.actions_visible() {
            return Ok(());
        }
        // 理由は任意。キャンセルや空入力でも不採納自体は成立する。
        let reason = self
            .deps
            .prompt
            .ask("请简述不采纳的原因（可选）：")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        if !self.card_mut(message, judgment)?.reject(reason.clone()) {
            return Ok(());
        }
        self.submit_to_sink(FeedbackPayload::JudgmentRejected {
            project,
            message,
            judgment,
            reason,
        });
        Ok(())
    }

    fn regenerate_judgment(&mut self, message: MessageId, judgment: JudgmentId) -> Result<(), Error> {
        let project = self.current_project().id;
        self.card_mut(message, judgment)?.begin_regeneration();
        let key = (message, Some(judgment));
        // 再トリガは前回の発火待ちをキャンセルする（競合させない）
        if let Some(prev) = self.regen_timers.remove(&key) {
            self.timers.cancel(prev);
        }
        let now = self.deps.clock.now_ms();
        let handle = self.timers.schedule(
            now,
            REGENERATE_DELAY_MS,
            PendingAction::RestoreJudgment {
                project,
                message,
                judgment,
            },
        );
        self.regen_timers.insert(key, handle);
        Ok(())
    }

    fn restore_judgment(
        &mut self,
        project: ProjectId,
        message: MessageId,
        judgment: JudgmentId,
    ) -> Result<(), Error> {
        self.regen_timers.remove(&(message, Some(judgment)));
        let result = self.deps.advisor.regenerate(project, judgment);
        let Some(index) = self.project_index(project) else {
            return Ok(());
        };
        let Some(card) = self.projects[index]
            .chat
            .advice_mut(message)
            .and_then(|a| a.card_mut(judgment))
        else {
            return Ok(());
        };
        match result {
            Ok(content) => card.finish_regeneration(content),
            Err(e) => {
                card.fail_regeneration(format!("重新生成失败：{}", e));
                self.log_warn("judgment regenerate failed", &e);
            }
        }
        Ok(())
    }

    // --- FeedbackWidget（メッセージ単位）

    fn accept_message(&mut self, message: MessageId) -> Result<(), Error> {
        let project = self.current_project().id;
        if !self.advice_mut(message)?.feedback.accept() {
            return Ok(());
        }
        self.submit_to_sink(FeedbackPayload::MessageAccepted { project, message });
        Ok(())
    }

    fn submit_feedback(&mut self, message: MessageId) -> Result<(), Error> {
        let project = self.current_project().id;
        match self.advice_mut(message)?.feedback.submit() {
            SubmitOutcome::EmptyInput => {
                // ブロッキングアラート相当
                self.notices.push("请输入反馈内容".to_string());
            }
            SubmitOutcome::Submitted { text } => {
                self.submit_to_sink(FeedbackPayload::MessageFeedback {
                    project,
                    message,
                    text,
                });
                let now = self.deps.clock.now_ms();
                self.timers.schedule(
                    now,
                    NOTICE_DISMISS_MS,
                    PendingAction::DismissNotice { project, message },
                );
            }
            SubmitOutcome::NotOpen => {}
        }
        Ok(())
    }

    fn regenerate_message(&mut self, message: MessageId) -> Result<(), Error> {
        let project = self.current_project().id;
        self.advice_mut(message)?.regenerating = true;
        let key = (message, None);
        if let Some(prev) = self.regen_timers.remove(&key) {
            self.timers.cancel(prev);
        }
        let now = self.deps.clock.now_ms();
        let handle = self.timers.schedule(
            now,
            REGENERATE_DELAY_MS,
            PendingAction::RestoreMessage { project, message },
        );
        self.regen_timers.insert(key, handle);
        Ok(())
    }

    // --- タイマー発火

    fn apply(&mut self, action: PendingAction) -> Result<(), Error> {
        match action {
            PendingAction::DeliverReply { project, query } => self.deliver_reply(project, query),
            PendingAction::RestoreJudgment {
                project,
                message,
                judgment,
            } => self.restore_judgment(project, message, judgment),
            PendingAction::RestoreMessage { project, message } => {
                self.regen_timers.remove(&(message, None));
                if let Some(index) = self.project_index(project) {
                    if let Some(advice) = self.projects[index].chat.advice_mut(message) {
                        // 元コンテンツは保持したままなので復元は解除のみ
                        advice.regenerating = false;
                    }
                }
                Ok(())
            }
            PendingAction::DismissNotice { project, message } => {
                if let Some(index) = self.project_index(project) {
                    if let Some(advice) = self.projects[index].chat.advice_mut(message) {
                        advice.feedback.dismiss_notice();
                    }
                }
                Ok(())
            }
        }
    }

    // --- 投影

    /// 状態から型付きビューモデルへ純粋に投影する
    pub fn view(&self) -> ViewModel {
        let projects = self
            .projects
            .iter()
            .enumerate()
            .map(|(i, p)| ProjectItemView {
                name: p.name.clone(),
                subtitle: p.subtitle.clone(),
                status_label: p.status.label(),
                date: p.date.clone(),
                active: i == self.current,
                visible: p.matches(&self.search),
            })
            .collect();

        let current = self.current_project();
        let bubbles = current
            .chat
            .entries()
            .iter()
            .map(|entry| match entry {
                ChatEntry::User(msg) => BubbleView::User {
                    // ユーザー由来のテキストはここで必ずエスケープする
                    content_html: html::escape(msg.content()),
                    time: msg.time().to_string(),
                },
                ChatEntry::Advice(advice) => BubbleView::Advice(project_advice(advice)),
            })
            .collect();

        let timeline = current
            .timeline
            .iter()
            .map(|entry| TimelineItemView {
                title: entry.title.clone(),
                meta: entry.meta.clone(),
            })
            .collect();

        ViewModel {
            header_title: current.name.clone(),
            timeline,
            projects,
            chat: ChatView {
                bubbles,
                follow_bottom: true,
                awaiting_reply: current.chat.is_awaiting(),
            },
            input: self.input.clone(),
            notices: self.notices.clone(),
        }
    }

    // --- 内部ヘルパ

    fn project_index(&self, id: ProjectId) -> Option<usize> {
        self.projects.iter().position(|p| p.id == id)
    }

    fn advice_mut(&mut self, message: MessageId) -> Result<&mut AdviceMessage, Error> {
        self.projects[self.current]
            .chat
            .advice_mut(message)
            .ok_or_else(|| Error::invalid_argument(format!("message not found: {}", message)))
    }

    fn card_mut(
        &mut self,
        message: MessageId,
        judgment: JudgmentId,
    ) -> Result<&mut JudgmentCard, Error> {
        self.advice_mut(message)?
            .card_mut(judgment)
            .ok_or_else(|| Error::invalid_argument(format!("judgment not found: {}", judgment)))
    }

    /// 送信失敗は通知に落として状態遷移は維持する（best-effort）
    fn submit_to_sink(&mut self, payload: FeedbackPayload) {
        if let Err(e) = self.deps.feedback.submit(&payload) {
            self.log_warn("feedback submit failed", &e);
            self.notices.push(format!("反馈提交失败：{}", e));
        }
    }

    fn log_event(&self, message: &str, fields: &[(&str, String)]) {
        let _ = self.deps.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: message.to_string(),
            layer: Some("usecase".to_string()),
            kind: Some("event".to_string()),
            fields: {
                let mut m = BTreeMap::new();
                for (k, v) in fields {
                    m.insert(k.to_string(), serde_json::json!(v));
                }
                Some(m)
            },
        });
    }

    fn log_warn(&self, message: &str, e: &Error) {
        let _ = self.deps.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Warn,
            message: format!("{}: {}", message, e),
            layer: Some("usecase".to_string()),
            kind: Some("error".to_string()),
            fields: None,
        });
    }
}

/// AdviceMessage → AdviceView の投影
fn project_advice(advice: &AdviceMessage) -> AdviceView {
    let cards = advice
        .cards
        .iter()
        .map(|card| {
            let expanded = card.expansion == Expansion::Expanded;
            let body_html = if expanded && !card.regenerating && card.regen_error.is_none() {
                Some(card.content.body_html.clone())
            } else {
                None
            };
            CardView {
                judgment: card.content.id,
                title: card.content.title.clone(),
                subtitle: card.content.subtitle.clone(),
                expanded,
                body_html,
                loading: card.regenerating,
                error: card.regen_error.clone(),
                badge: match &card.feedback {
                    CardFeedback::None => None,
                    CardFeedback::Accepted => Some(BadgeView::Accepted),
                    CardFeedback::Rejected { .. } => Some(BadgeView::Rejected),
                },
                actions_visible: card.actions_visible(),
            }
        })
        .collect();

    AdviceView {
        message: advice.id,
        label: advice.label.clone(),
        time: advice.time.clone(),
        loading: advice.regenerating,
        cards,
        context_html: advice.context_html.clone(),
        feedback: if advice.feedback.is_accepted() {
            FeedbackRowView::AcceptedIndicator
        } else {
            FeedbackRowView::Actions
        },
        form: match advice.feedback.form() {
            FormPhase::Hidden => None,
            FormPhase::Open { draft } => Some(FormView::Editing {
                draft: draft.clone(),
            }),
            FormPhase::Notice => Some(FormView::Notice),
        },
    }
}
