// シミュレーションに関連するデータ型定義

/// ワーカーが処理する1件のジョブ
///
/// コーディネーターが生成し、ちょうど1つのワーカーがちょうど1回消費する
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Task {
    pub id: usize,
    pub payload: u64,
}

impl Task {
    pub fn new(id: usize, payload: u64) -> Self {
        Self { id, payload }
    }
}

/// 1件のTaskを処理した結果
///
/// 生成したワーカーのidでタグ付けされる
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskResult {
    pub task: Task,
    pub output: u64,
    pub worker_id: usize,
}

/// ワーカープール実行全体のサマリー
#[derive(Debug, Clone, PartialEq)]
pub struct PoolSummary {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub output_sum: u64,
    pub total_time_ms: u64,
    pub average_time_per_task_ms: f64,
}

/// Fan-out実行のサマリー
///
/// このバリアントは結果を中央に集約しない（進捗報告のみ）
#[derive(Debug, Clone, PartialEq)]
pub struct FanOutSummary {
    pub worker_count: usize,
    pub total_time_ms: u64,
}
