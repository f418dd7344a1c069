//! 標準アダプタ実装

pub mod file_json_log;
pub mod seq_id_generator;
pub mod std_clock;
pub mod stderr_log;

pub use file_json_log::{FileJsonLog, NoopLog};
pub use seq_id_generator::SeqIdGenerator;
pub use std_clock::StdClock;
pub use stderr_log::StderrLog;
