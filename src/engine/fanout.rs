// Fan-out - 固定ワーカー数の並列実行機能

use crate::core::{
    Clock, FanOutConfig, FanOutSummary, ProgressReporter, SimulationError, SimulationResult,
};
use std::sync::Arc;
use std::time::Instant;

/// Fan-outバリアントの実行器
///
/// N個の独立したワーカーを起動し、全員の完了を待つ。共有ワークキューは
/// 持たず、結果の中央集約も行わない（観測はreporter経由のみ）。
/// 完了待ちはJoinHandleの集合で行う: ハンドルはワーカー本体がどう
/// 終了しても（パニック含め）ちょうど1回完了するため、離脱シグナルの
/// 取りこぼしが構造的に起きない。
pub struct FanOutRunner<R, K> {
    reporter: Arc<R>,
    clock: Arc<K>,
}

impl<R, K> FanOutRunner<R, K>
where
    R: ProgressReporter + 'static,
    K: Clock + 'static,
{
    /// 新しい実行器を作成
    pub fn new(reporter: Arc<R>, clock: Arc<K>) -> Self {
        Self { reporter, clock }
    }

    /// N個のワーカーを起動して全完了まで待機する
    ///
    /// ワーカーiは `base + i × step` だけ待機した後 `i × i` を計算して
    /// 完了を報告する。N = 0 の場合は即座に返る。
    pub async fn execute<C>(&self, config: &C) -> SimulationResult<FanOutSummary>
    where
        C: FanOutConfig,
    {
        let start_time = Instant::now();
        let worker_count = config.worker_count();

        self.reporter.report_started(worker_count, worker_count).await;

        let mut handles = Vec::with_capacity(worker_count);
        for worker_id in 1..=worker_count {
            // idはspawn時に値でキャプチャする（共有ループ変数のキャプチャは
            // 全ワーカーが同じidを見る典型的なバグになる）
            let reporter = Arc::clone(&self.reporter);
            let clock = Arc::clone(&self.clock);
            let latency = config.base_latency() + config.latency_step() * (worker_id as u32);

            handles.push(tokio::spawn(async move {
                reporter.report_worker_started(worker_id, worker_id).await;

                clock.sleep(latency).await;

                let output = (worker_id as u64) * (worker_id as u64);
                reporter
                    .report_worker_finished(worker_id, worker_id, output)
                    .await;

                Ok::<(), SimulationError>(())
            }));
        }

        // 全ワーカーの完了を待機
        for handle in handles {
            handle.await.map_err(SimulationError::task)??;
        }

        Ok(FanOutSummary {
            worker_count,
            total_time_ms: start_time.elapsed().as_millis() as u64,
        })
    }
}
