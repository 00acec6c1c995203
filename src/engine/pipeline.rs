// Pipeline - Producer-Consumer ワーカープールのオーケストレーション

use super::{producer::spawn_producer, worker::spawn_worker_pool};
use crate::core::{
    Clock, PoolConfig, PoolSummary, ProgressReporter, SimulationError, SimulationResult, Task,
    TaskResult,
};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// 責任が明確に分離されたワーカープールパイプライン
///
/// キューのClose遷移は両方ともこのコーディネーターだけが行う:
/// タスクキューはProducerのSenderドロップで、結果キューはワーカー全員の
/// 終了を確認した後のSenderドロップでCloseされる。
pub struct WorkerPipeline<R, K> {
    reporter: Arc<R>,
    clock: Arc<K>,
}

impl<R, K> WorkerPipeline<R, K>
where
    R: ProgressReporter + 'static,
    K: Clock + 'static,
{
    /// 新しいパイプラインを作成
    pub fn new(reporter: Arc<R>, clock: Arc<K>) -> Self {
        Self { reporter, clock }
    }

    /// タスクリストをワーカープールで処理し、出力の合計を集計する
    pub async fn execute<C>(&self, tasks: Vec<Task>, config: &C) -> SimulationResult<PoolSummary>
    where
        C: PoolConfig,
    {
        let start_time = Instant::now();
        let total_tasks = tasks.len();
        let worker_count = config.worker_count();

        if worker_count == 0 {
            return Err(SimulationError::configuration(
                "worker_count must be >= 1",
            ));
        }

        // Producer-Consumerチャンネル構築
        // 容量はタスク数以上にして送信側のブロックを避ける
        let capacity = config.channel_capacity().max(total_tasks).max(1);
        let (task_tx, task_rx) = mpsc::channel::<Task>(capacity);
        let (result_tx, mut result_rx) = mpsc::channel::<TaskResult>(capacity);

        self.reporter.report_started(total_tasks, worker_count).await;

        // Worker Pool起動
        let worker_handles = spawn_worker_pool(
            worker_count,
            config.task_latency(),
            Arc::clone(&self.clock),
            Arc::clone(&self.reporter),
            task_rx,
            result_tx.clone(),
        );

        // Producer起動
        let producer_handle = spawn_producer(tasks, task_tx);

        // Producer完了を待機（Senderドロップでタスクキューが閉じる）
        producer_handle.await.map_err(SimulationError::task)??;

        // 全ワーカーの完了を待機
        for handle in worker_handles {
            handle.await.map_err(SimulationError::task)??;
        }

        // result_txをドロップして結果キューを閉じる
        drop(result_tx);

        // 結果キューをDrainして集計
        let mut completed_tasks = 0usize;
        let mut output_sum = 0u64;
        while let Some(result) = result_rx.recv().await {
            self.reporter.report_result(&result).await;
            completed_tasks += 1;
            output_sum += result.output;
        }

        self.reporter.report_completed(completed_tasks, output_sum).await;

        let total_time_ms = start_time.elapsed().as_millis() as u64;
        let average_time_per_task_ms = if total_tasks > 0 {
            total_time_ms as f64 / total_tasks as f64
        } else {
            0.0
        };

        Ok(PoolSummary {
            total_tasks,
            completed_tasks,
            output_sum,
            total_time_ms,
            average_time_per_task_ms,
        })
    }
}
