//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース
//! - outbound: アプリが外部コラボレータ（推奨サービス・作成エンドポイント・
//!   フィードバック送信・ダイアログ）を使うための trait

pub mod inbound;
pub mod outbound;
