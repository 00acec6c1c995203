// 進捗監視の具象実装

use crate::core::{ProgressReporter, TaskResult};
use async_trait::async_trait;

/// コンソール出力による進捗報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleProgressReporter {
    quiet: bool,
}

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

#[async_trait]
impl ProgressReporter for ConsoleProgressReporter {
    async fn report_started(&self, total_tasks: usize, worker_count: usize) {
        if !self.quiet {
            println!("🚀 Starting {worker_count} workers to process {total_tasks} tasks...");
        }
    }

    async fn report_worker_started(&self, worker_id: usize, task_id: usize) {
        if !self.quiet {
            println!("Worker {worker_id}: started job {task_id}");
        }
    }

    async fn report_worker_finished(&self, worker_id: usize, task_id: usize, output: u64) {
        if !self.quiet {
            println!("Worker {worker_id}: finished job {task_id} (output: {output})");
        }
    }

    async fn report_result(&self, result: &TaskResult) {
        if !self.quiet {
            println!(
                "📊 Result from Worker {} for Task {}: Input={}, Output={}",
                result.worker_id, result.task.id, result.task.payload, result.output
            );
        }
    }

    async fn report_completed(&self, completed: usize, output_sum: u64) {
        if !self.quiet {
            println!("✅ Completed! Tasks: {completed}, Sum: {output_sum}");
        }
    }
}

/// 何もしない進捗報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpProgressReporter;

impl NoOpProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProgressReporter for NoOpProgressReporter {
    async fn report_started(&self, _total_tasks: usize, _worker_count: usize) {
        // 何もしない
    }

    async fn report_worker_started(&self, _worker_id: usize, _task_id: usize) {
        // 何もしない
    }

    async fn report_worker_finished(&self, _worker_id: usize, _task_id: usize, _output: u64) {
        // 何もしない
    }

    async fn report_result(&self, _result: &TaskResult) {
        // 何もしない
    }

    async fn report_completed(&self, _completed: usize, _output_sum: u64) {
        // 何もしない
    }
}
