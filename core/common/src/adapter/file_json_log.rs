//! 構造化ログの標準実装（JSONL ファイル追記）と NoopLog

use crate::error::Error;
use crate::ports::outbound::{Log, LogRecord};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

/// ログを 1 行 1 JSON でファイルに追記する Log 実装
pub struct FileJsonLog {
    path: PathBuf,
    // 追記は open→write の 2 段なので単一プロセス内の交錯だけ防ぐ
    lock: Mutex<()>,
}

impl FileJsonLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }
}

impl Log for FileJsonLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        let line = serde_json::to_string(record)
            .map_err(|e| Error::system_error(format!("log serialize: {}", e)))?;
        let _guard = self
            .lock
            .lock()
            .map_err(|_| Error::system_error("log lock poisoned"))?;
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
        let mut f = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(f, "{}", line)?;
        Ok(())
    }
}

/// 何も書かない Log 実装（デフォルト・テスト用）
#[derive(Debug, Clone, Default)]
pub struct NoopLog;

impl Log for NoopLog {
    fn log(&self, _record: &LogRecord) -> Result<(), Error> {
        Ok(())
    }
}
