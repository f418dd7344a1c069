//! エラーハンドリング
//!
//! 全レイヤー共通のエラー型。メッセージと BSD 風の終了コードを持ち、
//! main はこれをそのまま exit code に変換する。

use thiserror::Error;

/// エラー分類（終了コードの根拠）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 引数不正・使い方の誤り（exit 64）
    InvalidArgument,
    /// 内部エラー（exit 70)
    System,
    /// I/O エラー（exit 74）
    Io,
}

/// 共通エラー型
///
/// `Error::invalid_argument("...")` 等のコンストラクタで生成し、`?` で伝播する。
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct Error {
    message: String,
    kind: ErrorKind,
}

impl Error {
    /// 引数不正エラー
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            kind: ErrorKind::InvalidArgument,
        }
    }

    /// システムエラー
    pub fn system_error(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            kind: ErrorKind::System,
        }
    }

    /// I/O エラー
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
            kind: ErrorKind::Io,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// 使い方の誤りなら true（main が usage を表示する判断に使う）
    pub fn is_usage(&self) -> bool {
        self.kind == ErrorKind::InvalidArgument
    }

    /// プロセス終了コード
    pub fn exit_code(&self) -> i32 {
        match self.kind {
            ErrorKind::InvalidArgument => 64,
            ErrorKind::System => 70,
            ErrorKind::Io => 74,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::io_error(e.to_string())
    }
}
