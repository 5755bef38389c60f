//! Tempo clock seam.
//!
//! The only suspension point in a performance is the tempo-derived wait.
//! Hiding it behind [`TempoClock`] lets tests swap the tokio timer for a
//! clock that returns immediately without touching the performer logic.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

/// Source of tempo-derived delays.
#[async_trait]
pub trait TempoClock: Send + Sync {
    /// Suspends the current task for `duration`.
    async fn wait(&self, duration: Duration);
}

/// Production clock backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[async_trait]
impl TempoClock for TokioClock {
    async fn wait(&self, duration: Duration) {
        debug!(ms = duration.as_millis() as u64, "tempo sync");
        tokio::time::sleep(duration).await;
    }
}

/// Clock that completes immediately. Used in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantClock;

#[async_trait]
impl TempoClock for InstantClock {
    async fn wait(&self, _duration: Duration) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn instant_clock_does_not_sleep() {
        let start = Instant::now();
        InstantClock.wait(Duration::from_secs(60)).await;
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
