//! advisor 共通ライブラリ
//!
//! `advisor` アプリ本体と共有される基盤（エラー・メッセージ型・タイマー等）を提供します。

/// エラーハンドリング
pub mod error;

/// 型付きチャットメッセージ
pub mod msg;

/// ユーザー入力の HTML エスケープ
pub mod html;

/// キャンセル可能なタイマーキュー（疑似非同期の明示化）
pub mod timer;

/// Outbound ポート定義（Clock・IdGenerator・Log）
pub mod ports;

/// 標準アダプタ実装
pub mod adapter;
