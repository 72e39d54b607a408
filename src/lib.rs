//! Flight time statistics for one pilot, extracted from Tacview ACMI recordings.

pub mod app;
pub mod error;
pub mod log;
pub mod logging;
pub mod models;
pub mod parsing;
pub mod reader;
pub mod utils;


pub use app::FlightTrackerApp;
pub use error::{AppError, ErrorKind, ParseError, ReaderError};
pub use log::{list_acmi_files, read_times};
pub use models::{
    AircraftStat, IngestionResult, MissionTime, ProgressTracker, ReadProgress, TrackerSettings,
};
pub use reader::{Aggregator, Reader, TacviewReader};
