//! Ports & Adapters のポート定義（共通分）

pub mod outbound;
