use crate::domain::AdvisorCommand;
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;

/// CLI から受け取った生の設定
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub help: bool,
    pub list_projects: bool,
    pub demo: bool,
    /// 起動時に選択するプロジェクト番号（1 始まり）
    pub project: Option<usize>,
    pub non_interactive: bool,
    pub verbose: bool,
    pub log_file: Option<String>,
    /// 末尾の平文引数。空なら対話モード、あれば結合してワンショット送信。
    pub message_args: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            help: false,
            list_projects: false,
            demo: false,
            project: None,
            non_interactive: false,
            verbose: false,
            log_file: None,
            message_args: Vec::new(),
        }
    }
}

/// 解析結果: 通常の Config または補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("advisor")
        .about("Investment advisor workbench (project list, chat, judgment cards)")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Print help")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("list-projects")
                .long("list-projects")
                .help("Print the seeded project list and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("demo")
                .long("demo")
                .help("Run a scripted walkthrough and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("project")
                .short('p')
                .long("project")
                .value_name("N")
                .help("Select project N (1-based) before running")
                .value_parser(value_parser!(usize))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("no-interactive")
                .long("no-interactive")
                .help("Never block on prompts; dialogs are treated as cancelled")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Log events to stderr as well")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("log-file")
                .long("log-file")
                .value_name("file")
                .help("Append structured JSONL logs to the given file")
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("message")
                .value_name("message")
                .help("Message to send (omit to start the interactive session)")
                .num_args(0..)
                .trailing_var_arg(true),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    Config {
        help: matches.get_flag("help"),
        list_projects: matches.get_flag("list-projects"),
        demo: matches.get_flag("demo"),
        project: matches.get_one::<usize>("project").copied(),
        non_interactive: matches.get_flag("no-interactive"),
        verbose: matches.get_flag("verbose"),
        log_file: matches.get_one::<String>("log-file").cloned(),
        message_args: matches
            .get_many::<String>("message")
            .map(|v| v.cloned().collect())
            .unwrap_or_default(),
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    parse_args_from(std::env::args().collect())
}

/// 引数列から解析する（テストからも使う）
pub fn parse_args_from(args: Vec<String>) -> Result<ParseOutcome, Error> {
    let cmd = build_clap_command();
    let matches = cmd
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// 補完スクリプトを標準出力に出力する。
/// 注: clap_complete::generate は当コマンド構成でパニックするため、簡易フォールバックを常に使用する。
pub fn print_completion(shell: Shell) {
    emit_fallback_completion(shell);
}

fn emit_fallback_completion(shell: Shell) {
    let flags = [
        "--help",
        "--list-projects",
        "--demo",
        "--project",
        "--no-interactive",
        "--verbose",
        "--log-file",
        "--generate",
    ];
    match shell {
        Shell::Bash => {
            println!(
                r#"# Fallback completion for advisor (flags only)
_advisor() {{
  local cur="${{COMP_WORDS[COMP_CWORD]}}"
  COMPREPLY=($(compgen -W "{}" -- "$cur"))
}}
complete -F _advisor advisor
"#,
                flags.join(" ")
            );
        }
        Shell::Zsh => {
            println!(
                r#"# Fallback completion for advisor (flags only)
#compdef advisor
local flags
flags=({})
_describe 'flag' flags
"#,
                flags
                    .iter()
                    .map(|s| format!("\"{}\"", s))
                    .collect::<Vec<_>>()
                    .join(" ")
            );
        }
        Shell::Fish => {
            println!(
                r#"# Fallback completion for advisor (flags only)
complete -c advisor -a "{}"
"#,
                flags.join(" ")
            );
        }
        _ => {}
    }
}

/// Config を AdvisorCommand に変換する（プロジェクト番号は 1 始まり → 0 始まり）
pub fn config_to_command(config: &Config) -> Result<AdvisorCommand, Error> {
    if config.help {
        return Ok(AdvisorCommand::Help);
    }
    if config.list_projects {
        return Ok(AdvisorCommand::ListProjects);
    }
    if config.demo {
        return Ok(AdvisorCommand::Demo);
    }
    let project = match config.project {
        Some(0) => return Err(Error::invalid_argument("project numbers start at 1")),
        Some(n) => Some(n - 1),
        None => None,
    };
    if config.message_args.is_empty() {
        Ok(AdvisorCommand::Chat { project })
    } else {
        Ok(AdvisorCommand::Query {
            project,
            message: config.message_args.join(" "),
        })
    }
}
