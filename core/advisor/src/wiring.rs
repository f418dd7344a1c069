//! 配線: スタブアダプタで AdvisorUseCase を組み立てる

use std::sync::Arc;

use common::adapter::{FileJsonLog, NoopLog, SeqIdGenerator, StdClock, StderrLog};
use common::error::Error;
use common::ports::outbound::{Log, LogRecord};

use crate::adapter::{CannedAdvisor, ConsolePrompt, LogFeedbackSink, StubProjectDirectory};
use crate::usecase::app::AdvisorUseCase;

/// 複数の Log 実装へ同じレコードを流す（--log-file と -v の併用時）
struct FanoutLog {
    sinks: Vec<Arc<dyn Log>>,
}

impl Log for FanoutLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        // 片方の失敗で残りのシンクを飛ばさない（ベストエフォート）
        for sink in &self.sinks {
            if let Err(e) = sink.log(record) {
                eprintln!("advisor: log sink error: {}", e);
            }
        }
        Ok(())
    }
}

/// 配線: スタブアダプタで AdvisorUseCase を組み立てる
pub fn wire_advisor(
    non_interactive: bool,
    verbose: bool,
    log_file: Option<String>,
) -> AdvisorUseCase {
    let mut sinks: Vec<Arc<dyn Log>> = Vec::new();
    if let Some(path) = log_file {
        sinks.push(Arc::new(FileJsonLog::new(path)));
    }
    if verbose {
        sinks.push(Arc::new(StderrLog::new()));
    }
    let logger: Arc<dyn Log> = match sinks.len() {
        0 => Arc::new(NoopLog),
        1 => sinks.remove(0),
        _ => Arc::new(FanoutLog { sinks }),
    };

    // シードは ProjectId 1..=3 を使うので採番は 4 から
    let ids: Arc<dyn common::ports::outbound::IdGenerator> =
        Arc::new(SeqIdGenerator::starting_at(4));

    AdvisorUseCase {
        advisor: Arc::new(CannedAdvisor),
        directory: Arc::new(StubProjectDirectory::new(Arc::clone(&ids))),
        feedback: Arc::new(LogFeedbackSink::new(Arc::clone(&logger))),
        prompt: Arc::new(ConsolePrompt::new(non_interactive)),
        clock: Arc::new(StdClock),
        ids,
        logger,
    }
}
