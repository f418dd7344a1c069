//! ユーザー入力の HTML エスケープ
//!
//! ユーザー由来のテキストは表示用フラグメントへ挿入する前に必ずエスケープする。
//! アシスタント側の静的コンテンツは信頼済みとしてそのまま扱う（投影側の責務）。

/// `& < > " '` の 5 文字を実体参照に置換する
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
