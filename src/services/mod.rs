// サービス層 - 注入可能なサービスの具象実装
// 各サービスは特定の責任を持ち、疎結合で設計されている

pub mod clock;
pub mod config;
pub mod monitoring;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use clock::{InstantClock, TokioClock};
pub use config::{DefaultFanOutConfig, DefaultPoolConfig};
pub use monitoring::{ConsoleProgressReporter, NoOpProgressReporter};
