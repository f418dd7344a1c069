//! 判断カード: 展開・採納・不採納・再生成

use super::{harness, Harness, ScriptedPrompt};
use crate::domain::{BadgeView, BubbleView, JudgmentId, MessageId, UiEvent};
use crate::ports::outbound::FeedbackPayload;
use crate::usecase::workbench::{REGENERATE_DELAY_MS, RESPONSE_DELAY_MS};

/// 2 番目のプロジェクトで 1 往復して最新 AI メッセージの ID を返す
fn deliver_reply(h: &mut Harness) -> MessageId {
    h.workbench
        .update(UiEvent::SelectProject { index: 1 })
        .unwrap();
    h.workbench
        .update(UiEvent::InputChanged {
            text: "测试".to_string(),
        })
        .unwrap();
    h.workbench.update(UiEvent::Send).unwrap();
    h.clock.advance(RESPONSE_DELAY_MS);
    h.workbench.pump().unwrap();
    h.workbench.latest_advice_id().unwrap()
}

fn card<'a>(
    view: &'a crate::domain::ViewModel,
    judgment: JudgmentId,
) -> &'a crate::domain::CardView {
    let BubbleView::Advice(advice) = view.chat.bubbles.last().unwrap() else {
        panic!("expected AI bubble");
    };
    advice
        .cards
        .iter()
        .find(|c| c.judgment == judgment)
        .unwrap()
}

#[test]
fn test_toggle_expands_and_collapses_independently() {
    let mut h = harness(ScriptedPrompt::new(vec![]));
    let message = deliver_reply(&mut h);

    h.workbench
        .update(UiEvent::ToggleJudgment {
            message,
            judgment: JudgmentId(2),
        })
        .unwrap();
    let view = h.workbench.view();
    assert!(!card(&view, JudgmentId(1)).expanded);
    assert!(card(&view, JudgmentId(2)).expanded);
    assert!(card(&view, JudgmentId(2)).body_html.is_some());
    assert!(card(&view, JudgmentId(1)).body_html.is_none());

    h.workbench
        .update(UiEvent::ToggleJudgment {
            message,
            judgment: JudgmentId(2),
        })
        .unwrap();
    let view = h.workbench.view();
    assert!(!card(&view, JudgmentId(2)).expanded);
    assert!(card(&view, JudgmentId(2)).body_html.is_none());
}

#[test]
fn test_accept_sets_badge_and_submits_feedback() {
    let mut h = harness(ScriptedPrompt::new(vec![]));
    let message = deliver_reply(&mut h);

    h.workbench
        .update(UiEvent::AcceptJudgment {
            message,
            judgment: JudgmentId(1),
        })
        .unwrap();

    let view = h.workbench.view();
    assert_eq!(card(&view, JudgmentId(1)).badge, Some(BadgeView::Accepted));
    assert!(!card(&view, JudgmentId(1)).actions_visible);
    // 他のカードには影響しない
    assert_eq!(card(&view, JudgmentId(2)).badge, None);
    assert!(card(&view, JudgmentId(2)).actions_visible);

    let payloads = h.sink.collected();
    assert_eq!(payloads.len(), 1);
    assert!(matches!(
        &payloads[0],
        FeedbackPayload::JudgmentAccepted { judgment, .. } if *judgment == JudgmentId(1)
    ));
}

#[test]
fn test_accept_is_idempotent() {
    let mut h = harness(ScriptedPrompt::new(vec![]));
    let message = deliver_reply(&mut h);

    for _ in 0..2 {
        h.workbench
            .update(UiEvent::AcceptJudgment {
                message,
                judgment: JudgmentId(1),
            })
            .unwrap();
    }
    // 二度目はペイロードを送らない
    assert_eq!(h.sink.collected().len(), 1);
}

#[test]
fn test_reject_with_reason() {
    let mut h = harness(ScriptedPrompt::new(vec![Some("过于激进")]));
    let message = deliver_reply(&mut h);

    h.workbench
        .update(UiEvent::RejectJudgment {
            message,
            judgment: JudgmentId(2),
        })
        .unwrap();

    let view = h.workbench.view();
    assert_eq!(card(&view, JudgmentId(2)).badge, Some(BadgeView::Rejected));
    assert!(!card(&view, JudgmentId(2)).actions_visible);

    let payloads = h.sink.collected();
    assert!(matches!(
        &payloads[0],
        FeedbackPayload::JudgmentRejected { reason: Some(r), .. } if r == "过于激进"
    ));
}

#[test]
fn test_reject_cancel_still_rejects_without_reason() {
    let mut h = harness(ScriptedPrompt::new(vec![None]));
    let message = deliver_reply(&mut h);

    h.workbench
        .update(UiEvent::RejectJudgment {
            message,
            judgment: JudgmentId(2),
        })
        .unwrap();

    let view = h.workbench.view();
    assert_eq!(card(&view, JudgmentId(2)).badge, Some(BadgeView::Rejected));
    assert!(matches!(
        &h.sink.collected()[0],
        FeedbackPayload::JudgmentRejected { reason: None, .. }
    ));
}

#[test]
fn test_decided_card_ignores_further_decisions() {
    let mut h = harness(ScriptedPrompt::new(vec![Some("理由")]));
    let message = deliver_reply(&mut h);

    h.workbench
        .update(UiEvent::AcceptJudgment {
            message,
            judgment: JudgmentId(3),
        })
        .unwrap();
    // 採納済みカードへの不採納は無視される（プロンプトも出ない）
    h.workbench
        .update(UiEvent::RejectJudgment {
            message,
            judgment: JudgmentId(3),
        })
        .unwrap();

    let view = h.workbench.view();
    assert_eq!(card(&view, JudgmentId(3)).badge, Some(BadgeView::Accepted));
    assert_eq!(h.sink.collected().len(), 1);
}

#[test]
fn test_regenerate_shows_loading_then_restores() {
    let mut h = harness(ScriptedPrompt::new(vec![]));
    let message = deliver_reply(&mut h);

    h.workbench
        .update(UiEvent::ToggleJudgment {
            message,
            judgment: JudgmentId(1),
        })
        .unwrap();
    h.workbench
        .update(UiEvent::RegenerateJudgment {
            message,
            judgment: JudgmentId(1),
        })
        .unwrap();

    let view = h.workbench.view();
    assert!(card(&view, JudgmentId(1)).loading);
    assert!(card(&view, JudgmentId(1)).body_html.is_none());

    h.clock.advance(REGENERATE_DELAY_MS);
    h.workbench.pump().unwrap();

    let view = h.workbench.view();
    let c = card(&view, JudgmentId(1));
    assert!(!c.loading);
    assert!(c.expanded);
    assert!(c.body_html.is_some());
}

#[test]
fn test_regenerate_retrigger_cancels_previous_timer() {
    let mut h = harness(ScriptedPrompt::new(vec![]));
    let message = deliver_reply(&mut h);

    h.workbench
        .update(UiEvent::RegenerateJudgment {
            message,
            judgment: JudgmentId(1),
        })
        .unwrap();
    h.clock.advance(500);
    // 発火前に再トリガ
    h.workbench
        .update(UiEvent::RegenerateJudgment {
            message,
            judgment: JudgmentId(1),
        })
        .unwrap();

    // 最初の期限（あと 1000ms）では復元しない
    h.clock.advance(1000);
    h.workbench.pump().unwrap();
    assert!(card(&h.workbench.view(), JudgmentId(1)).loading);

    // 再トリガの期限で復元する
    h.clock.advance(500);
    h.workbench.pump().unwrap();
    assert!(!card(&h.workbench.view(), JudgmentId(1)).loading);
}
