use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use tracing::{error, info, warn};

use crate::error::ReaderError;
use crate::models::{IngestionResult, ProgressTracker};
use crate::reader::Reader;

/// Reads every file on its own thread and returns the reader's totals once all
/// of them have reported back.
///
/// `progress` is updated as each file completes and may be polled from other
/// threads while the run is in flight.
pub fn read_times(
    reader: &dyn Reader,
    files: &[PathBuf],
    progress: &ProgressTracker,
) -> IngestionResult {
    let started = Instant::now();
    info!(reader = reader.id(), files = files.len(), "reading flight logs");

    let mut failures = Vec::new();
    let (done_tx, done_rx) = mpsc::channel::<Result<(), ReaderError>>();

    thread::scope(|scope| {
        for (index, path) in files.iter().enumerate() {
            let done_tx = done_tx.clone();
            let spawned = thread::Builder::new()
                .name(format!("acmi-reader-{index}"))
                .spawn_scoped(scope, move || {
                    // The receiver outlives every sender in this scope
                    let _ = done_tx.send(reader.read_file(path));
                });
            if let Err(e) = spawned {
                error!(path = %path.display(), error = %e, "failed to start reader thread");
                failures.push(format!("failed '{}': {}", path.display(), e));
                progress.record_failure();
            }
        }
        drop(done_tx);

        for outcome in done_rx.iter() {
            match outcome {
                Ok(()) => progress.record_success(),
                Err(e) => {
                    warn!(kind = ?e.kind(), "{e}");
                    failures.push(e.to_string());
                    progress.record_failure();
                }
            }
        }
    });

    let aircraft = reader.aircraft_stats();
    let summary = progress.snapshot();
    info!(
        successful = summary.successful,
        failed = summary.failed,
        aircraft = aircraft.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "finished reading flight logs"
    );

    IngestionResult { aircraft, failures }
}
