use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};

use tracing::debug;

use crate::error::AppError;
use crate::log::read_times;
use crate::models::{IngestionResult, ProgressTracker, ReadProgress};
use crate::reader::{Reader, TacviewReader};

struct ReaderSlot {
    reader: Arc<dyn Reader>,
    running: AtomicBool,
    // Progress of the current (or last) run; swapped at the start of each run
    progress: Mutex<Arc<ProgressTracker>>,
    result: Mutex<Option<IngestionResult>>,
}

impl ReaderSlot {
    fn new(reader: Arc<dyn Reader>) -> Self {
        Self {
            reader,
            running: AtomicBool::new(false),
            progress: Mutex::new(Arc::new(ProgressTracker::default())),
            result: Mutex::new(None),
        }
    }

    fn begin_run(&self, total: usize) -> Result<Arc<ProgressTracker>, AppError> {
        if self.running.swap(true, Ordering::AcqRel) {
            return Err(AppError::AlreadyRunning(self.reader.id()));
        }
        let progress = Arc::new(ProgressTracker::new(total));
        *self.progress.lock().unwrap_or_else(PoisonError::into_inner) = Arc::clone(&progress);
        Ok(progress)
    }

    fn run(&self, files: &[PathBuf], progress: &ProgressTracker) -> IngestionResult {
        // Cleared on drop, so a panicking reader thread does not wedge the slot
        let _running = RunningGuard(&self.running);
        let result = read_times(self.reader.as_ref(), files, progress);
        *self.result.lock().unwrap_or_else(PoisonError::into_inner) = Some(result.clone());
        result
    }
}

struct RunningGuard<'a>(&'a AtomicBool);

impl Drop for RunningGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Entry point for a front end: one slot per log format, each remembering the
/// progress and result of its latest analysis.
pub struct FlightTrackerApp {
    readers: Vec<Arc<ReaderSlot>>,
}

impl Default for FlightTrackerApp {
    fn default() -> Self {
        Self::new(vec![Arc::new(TacviewReader::new())])
    }
}

impl FlightTrackerApp {
    pub fn new(readers: Vec<Arc<dyn Reader>>) -> Self {
        Self {
            readers: readers
                .into_iter()
                .map(|reader| Arc::new(ReaderSlot::new(reader)))
                .collect(),
        }
    }

    fn slot(&self, index: usize) -> Result<&Arc<ReaderSlot>, AppError> {
        self.readers.get(index).ok_or(AppError::UnknownReader(index))
    }

    pub fn reader_ids(&self) -> Vec<&'static str> {
        self.readers.iter().map(|slot| slot.reader.id()).collect()
    }

    pub fn valid_files(&self, index: usize, dir: &Path) -> Result<Vec<PathBuf>, AppError> {
        let files = self.slot(index)?.reader.valid_files(dir)?;
        debug!(dir = %dir.display(), files = files.len(), "found recordings");
        Ok(files)
    }

    /// Analyses `files` on a background thread. Poll [`Self::progress`] while it
    /// runs and collect the outcome with [`Self::result`].
    pub fn start_ingestion(
        &self,
        index: usize,
        files: Vec<PathBuf>,
    ) -> Result<JoinHandle<()>, AppError> {
        let slot = Arc::clone(self.slot(index)?);
        let progress = slot.begin_run(files.len())?;

        let worker = Arc::clone(&slot);
        thread::Builder::new()
            .name(format!("{}-analysis", slot.reader.id()))
            .spawn(move || {
                worker.run(&files, &progress);
            })
            .map_err(|e| {
                slot.running.store(false, Ordering::Release);
                AppError::Spawn(e)
            })
    }

    /// Analyses `files` on the calling thread.
    pub fn analyse(
        &self,
        index: usize,
        files: &[PathBuf],
    ) -> Result<IngestionResult, AppError> {
        let slot = self.slot(index)?;
        let progress = slot.begin_run(files.len())?;
        Ok(slot.run(files, &progress))
    }

    /// Counters of the latest run; zeroed if nothing has run yet. Never waits on
    /// the run.
    pub fn progress(&self, index: usize) -> ReadProgress {
        match self.readers.get(index) {
            Some(slot) => slot
                .progress
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .snapshot(),
            None => ReadProgress::default(),
        }
    }

    pub fn is_running(&self, index: usize) -> bool {
        self.readers
            .get(index)
            .is_some_and(|slot| slot.running.load(Ordering::Acquire))
    }

    pub fn result(&self, index: usize) -> Option<IngestionResult> {
        self.readers
            .get(index)?
            .result
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
