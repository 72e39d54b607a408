pub mod aggregator;
pub mod tacview;

use std::path::{Path, PathBuf};

use crate::error::ReaderError;
use crate::models::AircraftStat;

pub use aggregator::Aggregator;
pub use tacview::TacviewReader;

/// A source of flight recordings in one log format.
///
/// Implementations are shared between the parse threads of a run, so
/// `read_file` must be safe to call concurrently.
pub trait Reader: Send + Sync {
    fn id(&self) -> &'static str;

    /// Recordings of this format found directly inside `dir`.
    fn valid_files(&self, dir: &Path) -> Result<Vec<PathBuf>, ReaderError>;

    /// Reads a file and adds its flight time to the reader's totals. Reading a
    /// path that was already processed is a no-op.
    fn read_file(&self, path: &Path) -> Result<(), ReaderError>;

    /// Totals so far, longest flown aircraft first.
    fn aircraft_stats(&self) -> Vec<AircraftStat>;
}
