//! ブロッキングダイアログの Outbound ポート
//!
//! プロジェクト名や不採納理由の入力に使う。`--no-interactive` 時は常に
//! キャンセル扱いにする実装を渡す（CI で止まらない）。

/// ブロッキングプロンプトの抽象（Outbound ポート）
///
/// 戻り値 None はキャンセル。空文字は「入力したが空」で、扱いは呼び出し側の責務。
pub trait Prompt: Send + Sync {
    fn ask(&self, message: &str) -> Option<String>;
}
