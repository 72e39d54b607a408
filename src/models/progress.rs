use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};

/// Point-in-time view of one ingestion run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadProgress {
    pub successful: usize,
    pub failed: usize,
    pub total: usize,
}

impl ReadProgress {
    pub fn completed(&self) -> usize {
        self.successful + self.failed
    }

    pub fn is_complete(&self) -> bool {
        self.completed() >= self.total
    }
}

/// Live counters for a run. Each run owns its own tracker, shared through an `Arc`
/// with whoever polls it; reads never block the run.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    successful: AtomicUsize,
    failed: AtomicUsize,
    total: AtomicUsize,
}

impl ProgressTracker {
    pub fn new(total: usize) -> Self {
        Self {
            total: AtomicUsize::new(total),
            ..Self::default()
        }
    }

    pub fn record_success(&self) {
        self.successful.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> ReadProgress {
        ReadProgress {
            successful: self.successful.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            total: self.total.load(Ordering::Relaxed),
        }
    }
}
