pub mod settings_persistence;
pub mod stats_export;
pub mod time;

pub use settings_persistence::{
    auto_save_tracker_settings, load_tracker_settings, save_tracker_settings,
};
pub use stats_export::save_ingestion_result;
pub use time::format_duration;
