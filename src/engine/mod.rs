// エンジン層 - 並列実行とオーケストレーション
// サービス層を組み合わせて2つのシミュレーションバリアントを提供

pub mod api;
pub mod fanout;
pub mod pipeline;
pub mod producer;
pub mod worker;

// 公開API - 主要エンジンクラス
pub use api::{
    create_default_fan_out, create_default_pipeline, create_quiet_fan_out, create_quiet_pipeline,
    generate_tasks, run_fan_out_with_runner, run_pool_with_pipeline,
};
pub use fanout::FanOutRunner;
pub use pipeline::WorkerPipeline;
pub use producer::spawn_producer;
pub use worker::{spawn_worker, spawn_worker_pool};
