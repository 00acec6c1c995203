// エンドツーエンド統合テスト
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::timeout;
use worker_sim::{
    core::{ProgressReporter, TaskResult},
    engine::{generate_tasks, FanOutRunner, WorkerPipeline},
    services::{DefaultFanOutConfig, DefaultPoolConfig, InstantClock, NoOpProgressReporter},
    SimulatorApp,
};

/// 報告を全件記録するテスト用Reporter
#[derive(Debug, Default)]
struct RecordingReporter {
    finished: Mutex<Vec<(usize, usize, u64)>>,
    results: Mutex<Vec<TaskResult>>,
}

#[async_trait]
impl ProgressReporter for RecordingReporter {
    async fn report_started(&self, _total_tasks: usize, _worker_count: usize) {}

    async fn report_worker_started(&self, _worker_id: usize, _task_id: usize) {}

    async fn report_worker_finished(&self, worker_id: usize, task_id: usize, output: u64) {
        self.finished.lock().unwrap().push((worker_id, task_id, output));
    }

    async fn report_result(&self, result: &TaskResult) {
        self.results.lock().unwrap().push(*result);
    }

    async fn report_completed(&self, _completed: usize, _output_sum: u64) {}
}

fn fast_pool_config(worker_count: usize) -> DefaultPoolConfig {
    DefaultPoolConfig::new(1)
        .with_worker_count(worker_count)
        .with_task_latency(Duration::ZERO)
        .with_progress_reporting(false)
}

fn fast_fan_out_config(worker_count: usize) -> DefaultFanOutConfig {
    DefaultFanOutConfig::new(worker_count)
        .with_base_latency(Duration::ZERO)
        .with_latency_step(Duration::ZERO)
}

#[tokio::test]
async fn test_pool_demo_scenario_sum_is_1540() {
    // J=10, M=3 のデモシナリオ
    let reporter = Arc::new(RecordingReporter::default());
    let pipeline = WorkerPipeline::new(Arc::clone(&reporter), Arc::new(InstantClock::new()));

    let summary = pipeline
        .execute(generate_tasks(10), &fast_pool_config(3))
        .await
        .unwrap();

    assert_eq!(summary.total_tasks, 10);
    assert_eq!(summary.completed_tasks, 10);
    assert_eq!(summary.output_sum, 1540);

    // (task id, output) のマルチセットは {(i, (2i)²)} に一致する
    let results = reporter.results.lock().unwrap().clone();
    assert_eq!(results.len(), 10);

    let pairs: HashSet<(usize, u64)> = results.iter().map(|r| (r.task.id, r.output)).collect();
    let expected: HashSet<(usize, u64)> = (1..=10)
        .map(|i| (i, ((2 * i) * (2 * i)) as u64))
        .collect();
    assert_eq!(pairs, expected);

    let output_set: HashSet<u64> = results.iter().map(|r| r.output).collect();
    assert_eq!(
        output_set,
        HashSet::from([4, 16, 36, 64, 100, 144, 196, 256, 324, 400])
    );
}

#[tokio::test]
async fn test_pool_no_loss_no_duplication_across_worker_counts() {
    for worker_count in [1, 3, 8] {
        let reporter = Arc::new(RecordingReporter::default());
        let pipeline = WorkerPipeline::new(Arc::clone(&reporter), Arc::new(InstantClock::new()));

        let summary = pipeline
            .execute(generate_tasks(25), &fast_pool_config(worker_count))
            .await
            .unwrap();

        assert_eq!(summary.completed_tasks, 25);

        // タスクidに欠落も重複もない
        let results = reporter.results.lock().unwrap().clone();
        let ids: Vec<usize> = results.iter().map(|r| r.task.id).collect();
        let unique_ids: HashSet<usize> = ids.iter().copied().collect();
        assert_eq!(ids.len(), 25);
        assert_eq!(unique_ids, (1..=25).collect::<HashSet<_>>());
    }
}

#[tokio::test]
async fn test_pool_sum_is_order_independent() {
    // スケジューリングが変わっても合計は決定的
    let mut sums = Vec::new();
    for worker_count in [1, 2, 3, 5, 8] {
        let pipeline = WorkerPipeline::new(
            Arc::new(NoOpProgressReporter::new()),
            Arc::new(InstantClock::new()),
        );
        let summary = pipeline
            .execute(generate_tasks(10), &fast_pool_config(worker_count))
            .await
            .unwrap();
        sums.push(summary.output_sum);
    }

    assert!(sums.iter().all(|&sum| sum == 1540));
}

#[tokio::test]
async fn test_fan_out_demo_scenario_reports_squares() {
    // N=8 のデモシナリオ
    let reporter = Arc::new(RecordingReporter::default());
    let runner = FanOutRunner::new(Arc::clone(&reporter), Arc::new(InstantClock::new()));

    let summary = runner.execute(&fast_fan_out_config(8)).await.unwrap();

    assert_eq!(summary.worker_count, 8);

    // executeが返った時点で8件全ての完了報告が揃っている
    let finished = reporter.finished.lock().unwrap().clone();
    assert_eq!(finished.len(), 8);

    let outputs: HashSet<u64> = finished.iter().map(|(_, _, output)| *output).collect();
    assert_eq!(outputs, HashSet::from([1, 4, 9, 16, 25, 36, 49, 64]));
}

#[tokio::test]
async fn test_empty_task_set_completes_without_hanging() {
    let app = SimulatorApp::new(NoOpProgressReporter::new(), InstantClock::new());

    let summary = timeout(
        Duration::from_secs(5),
        app.run_worker_pool(vec![], &fast_pool_config(3)),
    )
    .await
    .expect("empty task set must not hang")
    .unwrap();

    assert_eq!(summary.completed_tasks, 0);
    assert_eq!(summary.output_sum, 0);
}

#[tokio::test]
async fn test_app_demo_matches_binary_scenario() {
    // main.rsが実行するのと同じ2つのシナリオをAppで通す
    let app = SimulatorApp::new(NoOpProgressReporter::new(), InstantClock::new());

    let fan_out_summary = app.run_fan_out(&fast_fan_out_config(8)).await.unwrap();
    assert_eq!(fan_out_summary.worker_count, 8);

    let pool_summary = app
        .run_worker_pool(generate_tasks(10), &fast_pool_config(3))
        .await
        .unwrap();
    assert_eq!(pool_summary.output_sum, 1540);
}
