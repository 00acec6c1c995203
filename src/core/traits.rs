// ワーカープールシミュレーションのトレイト定義
// 全ての抽象化インターフェースを定義

use super::types::TaskResult;
use async_trait::async_trait;
use mockall::automock;
use std::time::Duration;

/// ワーカープールの設定を抽象化するトレイト
#[automock]
pub trait PoolConfig: Send + Sync {
    /// ワーカー数を取得
    fn worker_count(&self) -> usize;

    /// チャンネル容量を取得
    fn channel_capacity(&self) -> usize;

    /// 1タスクあたりの模擬処理時間を取得
    fn task_latency(&self) -> Duration;

    /// 進捗報告を有効にするかどうか
    fn enable_progress_reporting(&self) -> bool;
}

// PoolConfig for Box<dyn PoolConfig>
impl PoolConfig for Box<dyn PoolConfig> {
    fn worker_count(&self) -> usize {
        self.as_ref().worker_count()
    }

    fn channel_capacity(&self) -> usize {
        self.as_ref().channel_capacity()
    }

    fn task_latency(&self) -> Duration {
        self.as_ref().task_latency()
    }

    fn enable_progress_reporting(&self) -> bool {
        self.as_ref().enable_progress_reporting()
    }
}

/// Fan-outバリアントの設定を抽象化するトレイト
///
/// 各ワーカーの模擬処理時間は `base + id × step` で決定論的に計算される
#[automock]
pub trait FanOutConfig: Send + Sync {
    /// ワーカー数を取得
    fn worker_count(&self) -> usize;

    /// 模擬処理時間のベース値を取得
    fn base_latency(&self) -> Duration;

    /// ワーカーidごとの増分を取得
    fn latency_step(&self) -> Duration;
}

// FanOutConfig for Box<dyn FanOutConfig>
impl FanOutConfig for Box<dyn FanOutConfig> {
    fn worker_count(&self) -> usize {
        self.as_ref().worker_count()
    }

    fn base_latency(&self) -> Duration {
        self.as_ref().base_latency()
    }

    fn latency_step(&self) -> Duration {
        self.as_ref().latency_step()
    }
}

/// 進捗報告の抽象化トレイト
///
/// コンソール出力はこのトレイト経由でのみ行う（テスト時に差し替え可能）
#[automock]
#[async_trait]
pub trait ProgressReporter: Send + Sync {
    /// 実行開始時の報告
    async fn report_started(&self, total_tasks: usize, worker_count: usize);

    /// ワーカーがタスクに着手した時の報告
    async fn report_worker_started(&self, worker_id: usize, task_id: usize);

    /// ワーカーがタスクを完了した時の報告
    async fn report_worker_finished(&self, worker_id: usize, task_id: usize, output: u64);

    /// ドレイン中に1件の結果を観測した時の報告
    async fn report_result(&self, result: &TaskResult);

    /// 実行完了時の報告
    async fn report_completed(&self, completed: usize, output_sum: u64);
}

// ProgressReporter for Box<dyn ProgressReporter>
#[async_trait]
impl ProgressReporter for Box<dyn ProgressReporter> {
    async fn report_started(&self, total_tasks: usize, worker_count: usize) {
        self.as_ref().report_started(total_tasks, worker_count).await
    }

    async fn report_worker_started(&self, worker_id: usize, task_id: usize) {
        self.as_ref().report_worker_started(worker_id, task_id).await
    }

    async fn report_worker_finished(&self, worker_id: usize, task_id: usize, output: u64) {
        self.as_ref()
            .report_worker_finished(worker_id, task_id, output)
            .await
    }

    async fn report_result(&self, result: &TaskResult) {
        self.as_ref().report_result(result).await
    }

    async fn report_completed(&self, completed: usize, output_sum: u64) {
        self.as_ref().report_completed(completed, output_sum).await
    }
}

/// 時刻・待機の抽象化トレイト
///
/// 模擬処理時間のsleepをテストから切り離すための注入ポイント
#[automock]
#[async_trait]
pub trait Clock: Send + Sync {
    /// 指定時間だけ呼び出し元を待機させる
    async fn sleep(&self, duration: Duration);
}

// Clock for Box<dyn Clock>
#[async_trait]
impl Clock for Box<dyn Clock> {
    async fn sleep(&self, duration: Duration) {
        self.as_ref().sleep(duration).await
    }
}
