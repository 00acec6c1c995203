// Worker - 並列ワーカープール機能

use crate::core::{Clock, ProgressReporter, SimulationError, SimulationResult, Task, TaskResult};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// 単一ワーカー
///
/// タスクキューから1件ずつTaskを取り出し、模擬処理時間だけ待機してから
/// `payload × payload` を計算し、TaskResultを結果キューへ送信する。
/// タスクキューがDrained（`recv()`が`None`）になったらループを終了する。
pub fn spawn_worker<R, K>(
    worker_id: usize,
    task_latency: Duration,
    clock: Arc<K>,
    reporter: Arc<R>,
    task_rx: Arc<tokio::sync::Mutex<mpsc::Receiver<Task>>>,
    result_tx: mpsc::Sender<TaskResult>,
) -> tokio::task::JoinHandle<SimulationResult<()>>
where
    R: ProgressReporter + 'static,
    K: Clock + 'static,
{
    tokio::spawn(async move {
        loop {
            // 次のタスクを取得
            let task = {
                let mut rx = task_rx.lock().await;
                match rx.recv().await {
                    Some(task) => task,
                    None => break, // キューがClosedかつ空（Drained）
                }
            };

            reporter.report_worker_started(worker_id, task.id).await;

            // 模擬的な処理時間
            clock.sleep(task_latency).await;

            let output = task.payload * task.payload;

            reporter
                .report_worker_finished(worker_id, task.id, output)
                .await;

            // 結果送信
            let result = TaskResult {
                task,
                output,
                worker_id,
            };
            if (result_tx.send(result).await).is_err() {
                // 結果チャンネルが閉じられた場合は終了
                break;
            }
        }
        Ok::<(), SimulationError>(())
    })
}

/// Worker Pool: 同一のタスクキューを共有する並列ワーカー群
///
/// Receiverは`Arc<Mutex>`で共有し、各ワーカーが取り合う。
/// ワーカーidは1始まりで、spawn時に値渡しでキャプチャする
/// （ループ変数の共有可変キャプチャは別ワーカーのidが混ざるバグの元）。
pub fn spawn_worker_pool<R, K>(
    worker_count: usize,
    task_latency: Duration,
    clock: Arc<K>,
    reporter: Arc<R>,
    task_rx: mpsc::Receiver<Task>,
    result_tx: mpsc::Sender<TaskResult>,
) -> Vec<tokio::task::JoinHandle<SimulationResult<()>>>
where
    R: ProgressReporter + 'static,
    K: Clock + 'static,
{
    let task_rx = Arc::new(tokio::sync::Mutex::new(task_rx));
    let mut handles = Vec::new();

    for worker_id in 1..=worker_count {
        let handle = spawn_worker(
            worker_id,
            task_latency,
            Arc::clone(&clock),
            Arc::clone(&reporter),
            Arc::clone(&task_rx),
            result_tx.clone(),
        );
        handles.push(handle);
    }

    handles
}
