pub mod core;
pub mod engine;
pub mod services;

use crate::core::{
    Clock, FanOutConfig, FanOutSummary, PoolConfig, PoolSummary, ProgressReporter,
    SimulationResult, Task,
};
use engine::{FanOutRunner, WorkerPipeline};
use std::sync::Arc;

// DIコンテナの役割を果たすジェネリックなApp構造体
// 注入されたサービス（Reporter/Clock）を所有し、2つのバリアントを提供する
pub struct SimulatorApp<R, K>
where
    R: ProgressReporter + 'static,
    K: Clock + 'static,
{
    reporter: Arc<R>,
    clock: Arc<K>,
}

impl<R, K> SimulatorApp<R, K>
where
    R: ProgressReporter + 'static,
    K: Clock + 'static,
{
    /// 新しいAppインスタンスを作成（コンストラクタインジェクション）
    pub fn new(reporter: R, clock: K) -> Self {
        Self {
            reporter: Arc::new(reporter),
            clock: Arc::new(clock),
        }
    }

    /// Fan-outバリアントを実行
    ///
    /// N個の独立ワーカーを起動し、全完了までブロックする
    pub async fn run_fan_out<C>(&self, config: &C) -> SimulationResult<FanOutSummary>
    where
        C: FanOutConfig,
    {
        let runner = FanOutRunner::new(Arc::clone(&self.reporter), Arc::clone(&self.clock));
        runner.execute(config).await
    }

    /// ワーカープールバリアントを実行
    ///
    /// タスク列をM個のワーカーへ分配し、結果を集計する
    pub async fn run_worker_pool<C>(
        &self,
        tasks: Vec<Task>,
        config: &C,
    ) -> SimulationResult<PoolSummary>
    where
        C: PoolConfig,
    {
        let pipeline = WorkerPipeline::new(Arc::clone(&self.reporter), Arc::clone(&self.clock));
        pipeline.execute(tasks, config).await
    }
}
