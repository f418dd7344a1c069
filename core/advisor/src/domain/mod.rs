//! advisor 固有のドメイン型（型と不変条件）

pub mod chat;
pub mod command;
pub mod event;
pub mod feedback;
pub mod judgment;
pub mod project;
pub mod view;

pub use chat::{AdviceMessage, ChatEntry, ChatLog, MessageId};
pub use command::AdvisorCommand;
pub use event::{PendingAction, UiEvent};
pub use feedback::{FeedbackWidget, FormPhase, SubmitOutcome};
pub use judgment::{CardFeedback, Expansion, JudgmentCard, JudgmentContent, JudgmentId};
pub use project::{Project, ProjectId, ProjectStatus, TimelineEntry, TimelineKind};
pub use view::{
    AdviceView, BadgeView, BubbleView, CardView, ChatView, FeedbackRowView, FormView,
    ProjectItemView, TimelineItemView, ViewModel,
};
