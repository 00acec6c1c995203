use anyhow::Result;

// シミュレーションAPIをインポート
use worker_sim::{
    engine::generate_tasks,
    services::{ConsoleProgressReporter, DefaultFanOutConfig, DefaultPoolConfig, TokioClock},
    SimulatorApp,
};

// 引数・フラグは受け取らない（デモは固定シナリオで実行する）
#[tokio::main]
async fn main() -> Result<()> {
    println!("🚀 ワーカープールシミュレーター");

    let app = SimulatorApp::new(ConsoleProgressReporter::new(), TokioClock::new());

    // 1. Fan-outバリアント: 8ワーカー、待機時間は 100 + id×50 ms
    println!("\n--- Fan-out: 8 independent workers ---");
    let fan_out_config = DefaultFanOutConfig::new(8);

    let fan_out_summary = app.run_fan_out(&fan_out_config).await?;
    println!(
        "✅ Fan-out完了! ワーカー数: {}, 実行時間: {}ms",
        fan_out_summary.worker_count, fan_out_summary.total_time_ms
    );

    // 2. ワーカープールバリアント: 10タスクを3ワーカーで処理
    println!("\n--- Worker pool: 10 jobs, 3 workers ---");
    let pool_config = DefaultPoolConfig::default().with_worker_count(3);
    let tasks = generate_tasks(10);

    let pool_summary = app.run_worker_pool(tasks, &pool_config).await?;
    println!("\n📊 処理結果:");
    println!("   - タスク数: {}", pool_summary.total_tasks);
    println!("   - 完了数: {}", pool_summary.completed_tasks);
    println!("   - 出力合計: {}", pool_summary.output_sum);
    println!("   - 実行時間: {}ms", pool_summary.total_time_ms);
    println!(
        "   - 平均処理時間: {:.1}ms/タスク",
        pool_summary.average_time_per_task_ms
    );

    Ok(())
}
