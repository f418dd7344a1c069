//! 一連の操作を通しで検証するシナリオ

use super::{harness, ScriptedPrompt};
use crate::domain::{BadgeView, BubbleView, JudgmentId, UiEvent};
use crate::usecase::workbench::RESPONSE_DELAY_MS;

/// 選択 → 送信 → 応答 → カード採納 → 空フィードバック、の通し確認
#[test]
fn test_full_walkthrough() {
    let mut h = harness(ScriptedPrompt::new(vec![]));

    // 2 番目のプロジェクトを選択するとヘッダが切り替わる
    h.workbench
        .update(UiEvent::SelectProject { index: 1 })
        .unwrap();
    assert_eq!(h.workbench.view().header_title, "智能物流系统");

    // 「测试」を送信すると user 吹き出しが即時に付く
    h.workbench
        .update(UiEvent::InputChanged {
            text: "测试".to_string(),
        })
        .unwrap();
    h.workbench.update(UiEvent::Send).unwrap();
    let view = h.workbench.view();
    assert!(matches!(
        &view.chat.bubbles[0],
        BubbleView::User { content_html, .. } if content_html == "测试"
    ));
    assert!(view.chat.awaiting_reply);

    // 約 1 秒後に判断カード 3 枚の AI 応答が届く
    h.clock.advance(RESPONSE_DELAY_MS);
    h.workbench.pump().unwrap();
    let view = h.workbench.view();
    let BubbleView::Advice(advice) = &view.chat.bubbles[1] else {
        panic!("expected AI bubble");
    };
    assert_eq!(advice.cards.len(), 3);

    // 判断 1 を採納するとバッジが付き、他のカードは変わらない
    let message = advice.message;
    h.workbench
        .update(UiEvent::AcceptJudgment {
            message,
            judgment: JudgmentId(1),
        })
        .unwrap();
    let view = h.workbench.view();
    let BubbleView::Advice(advice) = &view.chat.bubbles[1] else {
        panic!("expected AI bubble");
    };
    assert_eq!(advice.cards[0].badge, Some(BadgeView::Accepted));
    assert!(!advice.cards[0].actions_visible);
    assert_eq!(advice.cards[1].badge, None);
    assert!(advice.cards[1].actions_visible);
    assert_eq!(advice.cards[2].badge, None);

    // 修正フォームを開いて空のまま送信するとアラートが出てフォームは残る
    h.workbench
        .update(UiEvent::ModifyMessage { message })
        .unwrap();
    h.workbench
        .update(UiEvent::SubmitFeedback { message })
        .unwrap();
    assert_eq!(
        h.workbench.take_notices(),
        vec!["请输入反馈内容".to_string()]
    );
    let view = h.workbench.view();
    let BubbleView::Advice(advice) = &view.chat.bubbles[1] else {
        panic!("expected AI bubble");
    };
    assert!(advice.form.is_some());
}

/// 応答待ち中も他の操作（検索・選択）がブロックされない
#[test]
fn test_ui_stays_responsive_while_awaiting() {
    let mut h = harness(ScriptedPrompt::new(vec![]));
    h.workbench
        .update(UiEvent::SelectProject { index: 1 })
        .unwrap();
    h.workbench
        .update(UiEvent::InputChanged {
            text: "测试".to_string(),
        })
        .unwrap();
    h.workbench.update(UiEvent::Send).unwrap();

    // 応答待ちのまま検索と選択ができる
    h.workbench
        .update(UiEvent::SearchChanged {
            query: "区块链".to_string(),
        })
        .unwrap();
    h.workbench
        .update(UiEvent::SelectProject { index: 2 })
        .unwrap();
    assert_eq!(h.workbench.view().header_title, "区块链金融");

    h.clock.advance(RESPONSE_DELAY_MS);
    h.workbench.pump().unwrap();
    // 応答は元のプロジェクトに届いている
    h.workbench
        .update(UiEvent::SelectProject { index: 1 })
        .unwrap();
    assert_eq!(h.workbench.view().chat.bubbles.len(), 2);
}
