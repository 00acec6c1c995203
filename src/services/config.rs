// 設定管理の具象実装

use crate::core::{FanOutConfig, PoolConfig};
use std::time::Duration;

/// ワーカープールのデフォルト設定実装
#[derive(Debug, Clone)]
pub struct DefaultPoolConfig {
    worker_count: usize,
    channel_capacity: usize,
    task_latency: Duration,
    enable_progress: bool,
}

impl DefaultPoolConfig {
    pub fn new(cpu_count: usize) -> Self {
        Self {
            worker_count: cpu_count.max(1),
            channel_capacity: 100,
            task_latency: Duration::from_millis(500),
            enable_progress: true,
        }
    }

    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    pub fn with_channel_capacity(mut self, channel_capacity: usize) -> Self {
        self.channel_capacity = channel_capacity;
        self
    }

    pub fn with_task_latency(mut self, task_latency: Duration) -> Self {
        self.task_latency = task_latency;
        self
    }

    pub fn with_progress_reporting(mut self, enable: bool) -> Self {
        self.enable_progress = enable;
        self
    }
}

impl Default for DefaultPoolConfig {
    fn default() -> Self {
        Self::new(num_cpus::get())
    }
}

impl PoolConfig for DefaultPoolConfig {
    fn worker_count(&self) -> usize {
        self.worker_count
    }

    fn channel_capacity(&self) -> usize {
        self.channel_capacity
    }

    fn task_latency(&self) -> Duration {
        self.task_latency
    }

    fn enable_progress_reporting(&self) -> bool {
        self.enable_progress
    }
}

/// Fan-outバリアントのデフォルト設定実装
///
/// ワーカーiの模擬処理時間は `base + i × step`
#[derive(Debug, Clone)]
pub struct DefaultFanOutConfig {
    worker_count: usize,
    base_latency: Duration,
    latency_step: Duration,
}

impl DefaultFanOutConfig {
    pub fn new(worker_count: usize) -> Self {
        Self {
            worker_count,
            base_latency: Duration::from_millis(100),
            latency_step: Duration::from_millis(50),
        }
    }

    pub fn with_base_latency(mut self, base_latency: Duration) -> Self {
        self.base_latency = base_latency;
        self
    }

    pub fn with_latency_step(mut self, latency_step: Duration) -> Self {
        self.latency_step = latency_step;
        self
    }
}

impl Default for DefaultFanOutConfig {
    fn default() -> Self {
        Self::new(8)
    }
}

impl FanOutConfig for DefaultFanOutConfig {
    fn worker_count(&self) -> usize {
        self.worker_count
    }

    fn base_latency(&self) -> Duration {
        self.base_latency
    }

    fn latency_step(&self) -> Duration {
        self.latency_step
    }
}
