mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::process;

use cli::{parse_args, print_completion, Config, ParseOutcome};
use common::error::Error;
use common::ports::outbound::{now_iso8601, Log, LogLevel, LogRecord};
use ports::inbound::UseCaseRunner;
use usecase::app::AdvisorUseCase;

/// 実行本体（lifecycle ログは main レイヤーに集約）
struct Runner {
    app: AdvisorUseCase,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let command = cmd_name_for_log(&config);
        self.log_lifecycle("command started", command);
        let result = self.app.run(config);
        match &result {
            Ok(code) => self.log_lifecycle("command finished", &format!("{} ({})", command, code)),
            Err(e) => self.log_error(command, e),
        }
        result
    }
}

impl Runner {
    fn log_lifecycle(&self, message: &str, command: &str) {
        let _ = self.app.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: message.to_string(),
            layer: Some("cli".to_string()),
            kind: Some("lifecycle".to_string()),
            fields: {
                let mut m = std::collections::BTreeMap::new();
                m.insert("command".to_string(), serde_json::json!(command));
                Some(m)
            },
        });
    }

    fn log_error(&self, command: &str, e: &Error) {
        let _ = self.app.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Error,
            message: format!("command failed: {}", e),
            layer: Some("cli".to_string()),
            kind: Some("error".to_string()),
            fields: {
                let mut m = std::collections::BTreeMap::new();
                m.insert("command".to_string(), serde_json::json!(command));
                m.insert("exit_code".to_string(), serde_json::json!(e.exit_code()));
                Some(m)
            },
        });
    }
}

/// ログに出すコマンド名（引数の中身は含めない）
fn cmd_name_for_log(config: &Config) -> &'static str {
    if config.help {
        "help"
    } else if config.list_projects {
        "list-projects"
    } else if config.demo {
        "demo"
    } else if config.message_args.is_empty() {
        "chat"
    } else {
        "query"
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                usecase::app::print_usage();
            }
            eprintln!("advisor: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let outcome = parse_args()?;
    let config = match &outcome {
        ParseOutcome::Config(c) => c.clone(),
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(*shell);
            return Ok(0);
        }
    };
    let app = wiring::wire_advisor(
        config.non_interactive,
        config.verbose,
        config.log_file.clone(),
    );
    let runner = Runner { app };
    runner.run(config)
}
