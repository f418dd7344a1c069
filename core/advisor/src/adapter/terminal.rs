//! 対話モードの端末ドライバ
//!
//! 1 行読んでイベントに変換し、Workbench を更新して再描画する。平文は送信、
//! `/` 始まりはコマンド。各入力のあとはタイマーが空になるまで期限まで眠って
//! 発火させる（疑似レイテンシの消化）。

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use common::error::Error;
use common::ports::outbound::Clock;

use crate::adapter::render;
use crate::domain::{JudgmentId, MessageId, UiEvent};
use crate::usecase::Workbench;

/// 対話ループ本体。EOF または /quit で 0 を返す。
pub fn run_terminal(workbench: &mut Workbench, clock: &dyn Clock) -> Result<i32, Error> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    print!("{}", render::render(&workbench.view()));
    print_command_help();

    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => return Err(e.into()),
            None => return Ok(0),
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "/quit" || line == "/exit" {
            return Ok(0);
        }
        if line == "/help" {
            print_command_help();
            continue;
        }

        match dispatch(workbench, line) {
            Ok(()) => {}
            // 使い方の誤りはその場で伝えてループを続ける
            Err(e) if e.is_usage() => {
                eprintln!("{}", e);
                continue;
            }
            Err(e) => return Err(e),
        }

        drain_timers(workbench, clock)?;
        print!("{}", render::render(&workbench.view()));
        for notice in workbench.take_notices() {
            println!("! {}", notice);
        }
    }
}

fn dispatch(workbench: &mut Workbench, line: &str) -> Result<(), Error> {
    if !line.starts_with('/') {
        workbench.update(UiEvent::InputChanged {
            text: line.to_string(),
        })?;
        return workbench.update(UiEvent::Send);
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((c, r)) => (c, r.trim()),
        None => (line, ""),
    };

    match command {
        "/select" => {
            let n: usize = rest
                .parse()
                .map_err(|_| Error::invalid_argument(format!("invalid project number: {}", rest)))?;
            if n == 0 {
                return Err(Error::invalid_argument("project numbers start at 1"));
            }
            workbench.update(UiEvent::SelectProject { index: n - 1 })
        }
        "/search" => workbench.update(UiEvent::SearchChanged {
            query: rest.to_string(),
        }),
        "/new" => workbench.update(UiEvent::CreateProject),
        "/toggle" => {
            let (message, judgment) = latest_card(workbench, rest)?;
            workbench.update(UiEvent::ToggleJudgment { message, judgment })
        }
        "/accept" => {
            let (message, judgment) = latest_card(workbench, rest)?;
            workbench.update(UiEvent::AcceptJudgment { message, judgment })
        }
        "/reject" => {
            let (message, judgment) = latest_card(workbench, rest)?;
            workbench.update(UiEvent::RejectJudgment { message, judgment })
        }
        "/regen" => {
            let (message, judgment) = latest_card(workbench, rest)?;
            workbench.update(UiEvent::RegenerateJudgment { message, judgment })
        }
        "/msg-accept" => {
            let message = latest_message(workbench)?;
            workbench.update(UiEvent::AcceptMessage { message })
        }
        "/modify" => {
            let message = latest_message(workbench)?;
            workbench.update(UiEvent::ModifyMessage { message })
        }
        "/submit" => {
            let message = latest_message(workbench)?;
            workbench.update(UiEvent::FeedbackDraftChanged {
                message,
                text: rest.to_string(),
            })?;
            workbench.update(UiEvent::SubmitFeedback { message })
        }
        "/cancel" => {
            let message = latest_message(workbench)?;
            workbench.update(UiEvent::CancelFeedback { message })
        }
        "/msg-regen" => {
            let message = latest_message(workbench)?;
            workbench.update(UiEvent::RegenerateMessage { message })
        }
        other => Err(Error::invalid_argument(format!(
            "unknown command: {} (try /help)",
            other
        ))),
    }
}

/// 判断カード系コマンドは最新の AI メッセージに対して動く
fn latest_card(workbench: &Workbench, rest: &str) -> Result<(MessageId, JudgmentId), Error> {
    let message = latest_message(workbench)?;
    let n: u32 = rest
        .parse()
        .map_err(|_| Error::invalid_argument(format!("invalid judgment number: {}", rest)))?;
    Ok((message, JudgmentId(n)))
}

fn latest_message(workbench: &Workbench) -> Result<MessageId, Error> {
    workbench
        .latest_advice_id()
        .ok_or_else(|| Error::invalid_argument("no AI message yet; send a message first"))
}

/// タイマーが空になるまで期限まで眠って発火する
fn drain_timers(workbench: &mut Workbench, clock: &dyn Clock) -> Result<(), Error> {
    while let Some(deadline) = workbench.next_deadline() {
        let now = clock.now_ms();
        if deadline > now {
            thread::sleep(Duration::from_millis(deadline - now));
        }
        workbench.pump()?;
    }
    Ok(())
}

fn print_command_help() {
    println!("输入消息直接发送；命令：");
    println!("  /select N      选择第 N 个项目");
    println!("  /search 关键词  过滤项目列表（留空清除）");
    println!("  /new           新建项目");
    println!("  /toggle N      展开/收起判断 N    /accept N  采纳    /reject N  不采纳    /regen N  重新生成");
    println!("  /msg-accept    采纳整条建议       /modify    打开反馈表单    /submit 内容  提交    /cancel  取消");
    println!("  /msg-regen     重新生成整条消息   /help      帮助            /quit  退出");
}
