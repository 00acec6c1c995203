// 時刻・待機サービスの具象実装

use crate::core::Clock;
use async_trait::async_trait;
use std::time::Duration;

/// tokioランタイムのタイマーによるClock実装
#[derive(Debug, Default, Clone)]
pub struct TokioClock;

impl TokioClock {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// 待機しないClock実装（テスト・ベンチマーク用）
///
/// 模擬処理時間をゼロにしてシミュレーションを即座に進める
#[derive(Debug, Default, Clone)]
pub struct InstantClock;

impl InstantClock {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Clock for InstantClock {
    async fn sleep(&self, _duration: Duration) {
        // 何もしない
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_tokio_clock_sleeps() {
        let clock = TokioClock::new();
        let start = Instant::now();

        clock.sleep(Duration::from_millis(20)).await;

        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_instant_clock_returns_immediately() {
        let clock = InstantClock::new();
        let start = Instant::now();

        // 実時間なら1時間のsleepでも即座に返る
        clock.sleep(Duration::from_secs(3600)).await;

        assert!(start.elapsed() < Duration::from_millis(100));
    }
}
