//! CLI コマンドのドメイン型

/// advisor のトップレベルコマンド
#[derive(Debug, Clone, PartialEq)]
pub enum AdvisorCommand {
    Help,
    /// シードされたプロジェクト一覧を表示
    ListProjects,
    /// 仕様の一連のシナリオを再生する
    Demo,
    /// 対話モード（スラッシュコマンド + 平文送信）
    Chat { project: Option<usize> },
    /// ワンショット: 1 メッセージ送って応答を表示して終了
    Query {
        project: Option<usize>,
        message: String,
    },
}
