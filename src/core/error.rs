// Custom error types for the worker pool simulation
// シミュレーション専用のカスタムエラー型定義

use thiserror::Error;

/// シミュレーション固有のエラー型
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("チャンネルエラー: {message}")]
    ChannelError { message: String },

    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("タスクエラー: {source}")]
    TaskError {
        #[source]
        source: tokio::task::JoinError,
    },
}

impl SimulationError {
    /// チャンネルエラーの作成
    pub fn channel(message: impl Into<String>) -> Self {
        Self::ChannelError {
            message: message.into(),
        }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// タスクエラーの作成
    pub fn task(source: tokio::task::JoinError) -> Self {
        Self::TaskError { source }
    }

    /// エラーが回復可能かどうかを判定
    pub fn is_recoverable(&self) -> bool {
        match self {
            // Closed後のinsertや二重closeはプログラミングエラー扱い
            Self::ChannelError { .. } => false,
            Self::ConfigurationError { .. } => false,
            Self::TaskError { .. } => false,
        }
    }
}

/// シミュレーション用のResult型エイリアス
pub type SimulationResult<T> = std::result::Result<T, SimulationError>;
