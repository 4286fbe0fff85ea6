//! Pause between seasons.
//!
//! The stats API has informal rate limits; the ingest job waits a fixed delay after
//! finishing each season. The wait goes through [`Pacer`] so tests can record pauses
//! instead of sleeping.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;

#[async_trait]
pub trait Pacer {
    async fn pause(&self, duration: Duration);
}

/// Sleeps on the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioPacer;

#[async_trait]
impl Pacer for TokioPacer {
    async fn pause(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Records requested pauses and returns immediately.
#[derive(Debug, Default, Clone)]
pub struct RecordingPacer {
    pauses: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingPacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Pacer for RecordingPacer {
    async fn pause(&self, duration: Duration) {
        if let Ok(mut p) = self.pauses.lock() {
            p.push(duration);
        }
    }
}
