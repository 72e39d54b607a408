use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ReaderError;
use crate::log::archive::with_acmi_stream;
use crate::log::finder::list_acmi_files;
use crate::models::AircraftStat;
use crate::parsing::parse_flight_log;
use crate::reader::{Aggregator, Reader};

/// Reads zipped Tacview ACMI recordings.
#[derive(Debug, Default)]
pub struct TacviewReader {
    aggregator: Aggregator,
}

impl TacviewReader {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Reader for TacviewReader {
    fn id(&self) -> &'static str {
        "Tacview_acmi"
    }

    fn valid_files(&self, dir: &Path) -> Result<Vec<PathBuf>, ReaderError> {
        list_acmi_files(dir).map_err(|source| ReaderError::Directory {
            path: dir.to_path_buf(),
            source,
        })
    }

    fn read_file(&self, path: &Path) -> Result<(), ReaderError> {
        if self.aggregator.already_processed(path) {
            debug!(path = %path.display(), "already read, skipping");
            return Ok(());
        }

        let tally = with_acmi_stream(path, |stream| parse_flight_log(stream))?;
        let aircraft = tally.aircraft.len();
        if self.aggregator.merge(path, tally) {
            debug!(path = %path.display(), aircraft, "merged recording");
        } else {
            debug!(path = %path.display(), "read concurrently elsewhere, discarded");
        }
        Ok(())
    }

    fn aircraft_stats(&self) -> Vec<AircraftStat> {
        self.aggregator.snapshot()
    }
}
