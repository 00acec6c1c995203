// 高レベル公開API
// WorkerPipeline / FanOutRunnerを簡単に使用できるようにするための便利な関数

use super::{fanout::FanOutRunner, pipeline::WorkerPipeline};
use crate::{
    core::{
        Clock, FanOutConfig, FanOutSummary, PoolConfig, PoolSummary, ProgressReporter,
        SimulationResult, Task,
    },
    services::{ConsoleProgressReporter, InstantClock, NoOpProgressReporter, TokioClock},
};
use std::sync::Arc;

/// コーディネーターが投入するタスク列を生成
///
/// id 1..=count、payload = 2×id
pub fn generate_tasks(count: usize) -> Vec<Task> {
    (1..=count).map(|id| Task::new(id, (2 * id) as u64)).collect()
}

/// デフォルト構成のワーカープールパイプラインを作成（コンソール出力）
pub fn create_default_pipeline() -> WorkerPipeline<ConsoleProgressReporter, TokioClock> {
    WorkerPipeline::new(
        Arc::new(ConsoleProgressReporter::new()),
        Arc::new(TokioClock::new()),
    )
}

/// 静音構成のワーカープールパイプラインを作成（テスト・バックグラウンド用）
///
/// 報告なし、模擬処理時間なしで即座に完走する
pub fn create_quiet_pipeline() -> WorkerPipeline<NoOpProgressReporter, InstantClock> {
    WorkerPipeline::new(
        Arc::new(NoOpProgressReporter::new()),
        Arc::new(InstantClock::new()),
    )
}

/// デフォルト構成のFan-out実行器を作成（コンソール出力）
pub fn create_default_fan_out() -> FanOutRunner<ConsoleProgressReporter, TokioClock> {
    FanOutRunner::new(
        Arc::new(ConsoleProgressReporter::new()),
        Arc::new(TokioClock::new()),
    )
}

/// 静音構成のFan-out実行器を作成（テスト・バックグラウンド用）
pub fn create_quiet_fan_out() -> FanOutRunner<NoOpProgressReporter, InstantClock> {
    FanOutRunner::new(
        Arc::new(NoOpProgressReporter::new()),
        Arc::new(InstantClock::new()),
    )
}

/// 設定済みパイプラインでタスク列を処理
pub async fn run_pool_with_pipeline<R, K, C>(
    tasks: Vec<Task>,
    pipeline: &WorkerPipeline<R, K>,
    config: &C,
) -> SimulationResult<PoolSummary>
where
    R: ProgressReporter + 'static,
    K: Clock + 'static,
    C: PoolConfig,
{
    pipeline.execute(tasks, config).await
}

/// 設定済み実行器でFan-outを実行
pub async fn run_fan_out_with_runner<R, K, C>(
    runner: &FanOutRunner<R, K>,
    config: &C,
) -> SimulationResult<FanOutSummary>
where
    R: ProgressReporter + 'static,
    K: Clock + 'static,
    C: FanOutConfig,
{
    runner.execute(config).await
}
