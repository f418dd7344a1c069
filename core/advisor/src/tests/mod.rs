//! 結合テスト（ワークベンチをフェイクの時計・ポートで駆動する）

mod judgment_tests;
mod scenario_tests;

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use common::adapter::{NoopLog, SeqIdGenerator};
use common::error::Error;
use common::ports::outbound::Clock;

use crate::adapter::{seed, CannedAdvisor, StubProjectDirectory};
use crate::ports::outbound::{
    Advice, AdviceRequest, AdvisorService, FeedbackPayload, FeedbackSink, Prompt,
};
use crate::usecase::{Workbench, WorkbenchDeps};

/// 任意の時刻を指す時計（テストが advance で進める）
pub(crate) struct FakeClock {
    ms: AtomicU64,
}

impl FakeClock {
    pub(crate) fn new() -> Self {
        Self {
            ms: AtomicU64::new(0),
        }
    }

    pub(crate) fn advance(&self, delta_ms: u64) {
        self.ms.fetch_add(delta_ms, Ordering::SeqCst);
    }
}

impl Clock for FakeClock {
    fn now_ms(&self) -> u64 {
        self.ms.load(Ordering::SeqCst)
    }
}

/// 送信されたフィードバックを貯めるシンク
#[derive(Default)]
pub(crate) struct CollectSink {
    payloads: Mutex<Vec<FeedbackPayload>>,
}

impl CollectSink {
    pub(crate) fn collected(&self) -> Vec<FeedbackPayload> {
        self.payloads.lock().unwrap().clone()
    }
}

impl FeedbackSink for CollectSink {
    fn submit(&self, payload: &FeedbackPayload) -> Result<(), Error> {
        self.payloads.lock().unwrap().push(payload.clone());
        Ok(())
    }
}

/// 台本どおりに答えるプロンプト（尽きたらキャンセル）
pub(crate) struct ScriptedPrompt {
    answers: Mutex<VecDeque<Option<String>>>,
}

impl ScriptedPrompt {
    pub(crate) fn new(answers: Vec<Option<&str>>) -> Self {
        Self {
            answers: Mutex::new(
                answers
                    .into_iter()
                    .map(|a| a.map(|s| s.to_string()))
                    .collect(),
            ),
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn ask(&self, _message: &str) -> Option<String> {
        self.answers.lock().unwrap().pop_front().flatten()
    }
}

/// 常に失敗する推奨サービス（エラー経路の検証用）
pub(crate) struct FailingAdvisor;

impl AdvisorService for FailingAdvisor {
    fn advise(&self, _req: &AdviceRequest) -> Result<Advice, Error> {
        Err(Error::system_error("advisor unavailable"))
    }

    fn regenerate(
        &self,
        _project: crate::domain::ProjectId,
        _judgment: crate::domain::JudgmentId,
    ) -> Result<crate::domain::JudgmentContent, Error> {
        Err(Error::system_error("advisor unavailable"))
    }
}

pub(crate) struct Harness {
    pub(crate) clock: Arc<FakeClock>,
    pub(crate) sink: Arc<CollectSink>,
    pub(crate) workbench: Workbench,
}

/// 標準のテスト環境（決め打ちアドバイザ + シードプロジェクト）を組み立てる
pub(crate) fn harness(prompt: ScriptedPrompt) -> Harness {
    harness_with_advisor(prompt, Arc::new(CannedAdvisor))
}

pub(crate) fn harness_with_advisor(
    prompt: ScriptedPrompt,
    advisor: Arc<dyn AdvisorService>,
) -> Harness {
    let clock = Arc::new(FakeClock::new());
    let sink = Arc::new(CollectSink::default());
    let deps = WorkbenchDeps {
        advisor,
        directory: Arc::new(StubProjectDirectory::new(Arc::new(
            SeqIdGenerator::starting_at(100),
        ))),
        feedback: Arc::clone(&sink) as Arc<dyn FeedbackSink>,
        prompt: Arc::new(prompt),
        clock: Arc::clone(&clock) as Arc<dyn Clock>,
        ids: Arc::new(SeqIdGenerator::starting_at(1)),
        logger: Arc::new(NoopLog),
    };
    let workbench = Workbench::new(deps, seed::seed_projects()).unwrap();
    Harness {
        clock,
        sink,
        workbench,
    }
}
