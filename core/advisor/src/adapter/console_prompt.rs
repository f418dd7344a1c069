//! 標準入力から読むブロッキングプロンプト
//!
//! `--no-interactive` 時は常にキャンセル扱い（None）。EOF もキャンセル。

use std::io::{self, BufRead, Write};

use crate::ports::outbound::Prompt;

pub struct ConsolePrompt {
    non_interactive: bool,
}

impl ConsolePrompt {
    pub fn new(non_interactive: bool) -> Self {
        Self { non_interactive }
    }
}

impl Prompt for ConsolePrompt {
    fn ask(&self, message: &str) -> Option<String> {
        if self.non_interactive {
            return None;
        }
        eprint!("{} ", message);
        let _ = io::stderr().flush();
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_interactive_always_cancels() {
        let prompt = ConsolePrompt::new(true);
        assert_eq!(prompt.ask("请输入项目名称："), None);
    }
}
