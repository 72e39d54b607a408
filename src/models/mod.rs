pub mod aircraft;
pub mod progress;
pub mod result;
pub mod settings;

pub use aircraft::{AircraftStat, MissionTime};
pub use progress::{ProgressTracker, ReadProgress};
pub use result::IngestionResult;
pub use settings::TrackerSettings;
