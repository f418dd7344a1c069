//! advisor のユースケース（コマンド分岐とワンショット実行）
//!
//! CLI の Config を AdvisorCommand に落とし、ワークベンチを組み立てて
//! 各コマンドを実行する。対話モードのループ本体は adapter/terminal.rs。

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use common::error::Error;
use common::ports::outbound::{Clock, IdGenerator, Log};

use crate::adapter::{render, seed, terminal};
use crate::cli::{config_to_command, Config};
use crate::domain::{AdvisorCommand, UiEvent};
use crate::ports::outbound::{AdvisorService, FeedbackSink, ProjectDirectory, Prompt};
use crate::usecase::{Workbench, WorkbenchDeps};

/// advisor のユースケース（ポート経由で外界とやり取りする）
pub struct AdvisorUseCase {
    pub advisor: Arc<dyn AdvisorService>,
    pub directory: Arc<dyn ProjectDirectory>,
    pub feedback: Arc<dyn FeedbackSink>,
    pub prompt: Arc<dyn Prompt>,
    pub clock: Arc<dyn Clock>,
    pub ids: Arc<dyn IdGenerator>,
    pub logger: Arc<dyn Log>,
}

impl AdvisorUseCase {
    pub fn run(&self, config: Config) -> Result<i32, Error> {
        let command = config_to_command(&config)?;

        if command == AdvisorCommand::Help {
            print_help();
            return Ok(0);
        }

        let mut workbench = self.build_workbench()?;

        match command {
            AdvisorCommand::Help => Ok(0),
            AdvisorCommand::ListProjects => {
                print!("{}", render::render_project_list(&workbench.view()));
                Ok(0)
            }
            AdvisorCommand::Query { project, message } => {
                self.run_query(&mut workbench, project, message)
            }
            AdvisorCommand::Chat { project } => {
                if let Some(index) = project {
                    workbench.update(UiEvent::SelectProject { index })?;
                }
                terminal::run_terminal(&mut workbench, self.clock.as_ref())
            }
            AdvisorCommand::Demo => self.run_demo(&mut workbench),
        }
    }

    fn build_workbench(&self) -> Result<Workbench, Error> {
        let deps = WorkbenchDeps {
            advisor: Arc::clone(&self.advisor),
            directory: Arc::clone(&self.directory),
            feedback: Arc::clone(&self.feedback),
            prompt: Arc::clone(&self.prompt),
            clock: Arc::clone(&self.clock),
            ids: Arc::clone(&self.ids),
            logger: Arc::clone(&self.logger),
        };
        Workbench::new(deps, seed::seed_projects())
    }

    /// 1 メッセージを送って応答まで待ち、画面を出力して終了する
    fn run_query(
        &self,
        workbench: &mut Workbench,
        project: Option<usize>,
        message: String,
    ) -> Result<i32, Error> {
        if let Some(index) = project {
            workbench.update(UiEvent::SelectProject { index })?;
        }
        workbench.update(UiEvent::InputChanged { text: message })?;
        workbench.update(UiEvent::Send)?;
        self.run_to_idle(workbench)?;
        print!("{}", render::render(&workbench.view()));
        for notice in workbench.take_notices() {
            println!("! {}", notice);
        }
        Ok(0)
    }

    /// 一通りの操作を順に実行して見せる（採納・不採納・再生成・修正フォーム）
    fn run_demo(&self, workbench: &mut Workbench) -> Result<i32, Error> {
        use crate::domain::JudgmentId;

        workbench.update(UiEvent::SelectProject { index: 1 })?;
        workbench.update(UiEvent::InputChanged {
            text: "配送延迟问题应该如何解决？".to_string(),
        })?;
        workbench.update(UiEvent::Send)?;
        self.run_to_idle(workbench)?;

        let Some(message) = workbench.latest_advice_id() else {
            return Err(Error::system_error("demo: no reply delivered"));
        };
        workbench.update(UiEvent::ToggleJudgment {
            message,
            judgment: JudgmentId(1),
        })?;
        workbench.update(UiEvent::AcceptJudgment {
            message,
            judgment: JudgmentId(1),
        })?;
        workbench.update(UiEvent::RejectJudgment {
            message,
            judgment: JudgmentId(2),
        })?;
        workbench.update(UiEvent::RegenerateJudgment {
            message,
            judgment: JudgmentId(3),
        })?;
        self.run_to_idle(workbench)?;

        workbench.update(UiEvent::ModifyMessage { message })?;
        workbench.update(UiEvent::FeedbackDraftChanged {
            message,
            text: "建议补充一个更保守的过渡方案".to_string(),
        })?;
        workbench.update(UiEvent::SubmitFeedback { message })?;
        self.run_to_idle(workbench)?;

        print!("{}", render::render(&workbench.view()));
        for notice in workbench.take_notices() {
            println!("! {}", notice);
        }
        Ok(0)
    }

    /// タイマーが空になるまで期限まで眠って発火を繰り返す
    fn run_to_idle(&self, workbench: &mut Workbench) -> Result<(), Error> {
        while let Some(deadline) = workbench.next_deadline() {
            let now = self.clock.now_ms();
            if deadline > now {
                thread::sleep(Duration::from_millis(deadline - now));
            }
            workbench.pump()?;
        }
        Ok(())
    }
}

/// 標準アダプターで AdvisorUseCase を組み立てて run する（テスト用の入口）
#[allow(dead_code)] // テストで使用
pub fn run_app(config: Config) -> Result<i32, Error> {
    let non_interactive = config.non_interactive;
    let verbose = config.verbose;
    let log_file = config.log_file.clone();
    crate::wiring::wire_advisor(non_interactive, verbose, log_file).run(config)
}

fn print_help() {
    println!("Usage: advisor [-h] [--list-projects] [--demo] [-p|--project N] [--no-interactive] [-v|--verbose] [--log-file file] [message...]");
    println!("  -h, --help            Display this help message.");
    println!("  --list-projects       Print the seeded project list and exit.");
    println!("  --demo                Run a scripted walkthrough (send, accept, reject, regenerate, feedback).");
    println!("  -p, --project N       Select project N (1-based) before running.");
    println!("  --no-interactive      Never block on prompts; dialogs are treated as cancelled.");
    println!("  -v, --verbose         Log events to stderr as well.");
    println!("  --log-file file       Append structured JSONL logs to the given file.");
    println!("  [message...]          Send this message and print the reply. Omit to start the interactive session.");
}

/// 引数不正時に stderr へ出力する usage 行（main から呼ぶ）
pub fn print_usage() {
    eprintln!("Usage: advisor [-h] [--list-projects] [--demo] [-p|--project N] [--no-interactive] [message...]");
}
