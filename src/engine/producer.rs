// Producer - タスク配信機能

use crate::core::{SimulationError, SimulationResult, Task};
use tokio::sync::mpsc;

/// Producer: Taskをid昇順でタスクキューへ配信
///
/// 送信完了後にSenderをドロップすることがキューのClose遷移になる。
/// Closeを行うのはこのProducerだけ（single-writer-closes）。
pub fn spawn_producer(
    tasks: Vec<Task>,
    task_tx: mpsc::Sender<Task>,
) -> tokio::task::JoinHandle<SimulationResult<()>> {
    tokio::spawn(async move {
        for task in tasks {
            if (task_tx.send(task).await).is_err() {
                // 受信側が全て終了している場合は送信を打ち切る
                break;
            }
        }
        // task_txをドロップしてチャンネル終了シグナル
        Ok::<(), SimulationError>(())
    })
}
