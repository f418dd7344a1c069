//! メッセージ単位のフィードバック行（FeedbackWidget）の状態機械
//!
//! 判断カード単位の操作（judgment.rs）とは別系統の、AI メッセージ全体に対する
//! 採納・修正・再生成のコントロール。採納は取り消し不可、修正フォームは
//! 同時に 1 つだけ、送信成功の通知は一定時間後に自動で消える。

/// 修正フォームの段階
#[derive(Debug, Clone, PartialEq)]
pub enum FormPhase {
    /// フォーム非表示
    Hidden,
    /// 入力中（draft は送信前の自由記述）
    Open { draft: String },
    /// 送信成功の通知を表示中（タイマーで自動消灯）
    Notice,
}

/// submit の結果
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// 空入力のためブロック（アラートを出し、フォームは閉じない）
    EmptyInput,
    /// 送信成功（通知へ遷移）
    Submitted { text: String },
    /// フォームが開いていない（プログラム的な呼び出しに対する no-op）
    NotOpen,
}

/// メッセージ単位のフィードバック行
#[derive(Debug, Clone)]
pub struct FeedbackWidget {
    accepted: bool,
    form: FormPhase,
}

impl FeedbackWidget {
    pub fn new() -> Self {
        Self {
            accepted: false,
            form: FormPhase::Hidden,
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    pub fn form(&self) -> &FormPhase {
        &self.form
    }

    /// 行全体を「已采纳」表示に置き換える。二度目以降は no-op で false。
    pub fn accept(&mut self) -> bool {
        if self.accepted {
            return false;
        }
        self.accepted = true;
        true
    }

    /// 修正フォームを開く。既に開いている・通知中・採納済みなら no-op。
    pub fn open_form(&mut self) -> bool {
        if self.accepted || self.form != FormPhase::Hidden {
            return false;
        }
        self.form = FormPhase::Open {
            draft: String::new(),
        };
        true
    }

    /// 入力中の下書きを更新する（フォームが開いていなければ無視）
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let FormPhase::Open { draft } = &mut self.form {
            *draft = text.into();
        }
    }

    /// フォームを送信する。trim 後に空ならブロックし、フォームは開いたまま。
    pub fn submit(&mut self) -> SubmitOutcome {
        let FormPhase::Open { draft } = &self.form else {
            return SubmitOutcome::NotOpen;
        };
        let text = draft.trim().to_string();
        if text.is_empty() {
            return SubmitOutcome::EmptyInput;
        }
        self.form = FormPhase::Notice;
        SubmitOutcome::Submitted { text }
    }

    /// フォームを破棄する（下書きは捨てる）。開いていなければ false。
    pub fn cancel(&mut self) -> bool {
        if matches!(self.form, FormPhase::Open { .. }) {
            self.form = FormPhase::Hidden;
            return true;
        }
        false
    }

    /// 送信成功通知を消す（タイマー発火時）。通知中でなければ false。
    pub fn dismiss_notice(&mut self) -> bool {
        if self.form == FormPhase::Notice {
            self.form = FormPhase::Hidden;
            return true;
        }
        false
    }
}

impl Default for FeedbackWidget {
    fn default() -> Self {
        Self::new()
    }
}
