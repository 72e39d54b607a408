use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::models::TrackerSettings;

const SETTINGS_FILE: &str = "settings.json";

pub fn get_settings_file_path() -> PathBuf {
    PathBuf::from(SETTINGS_FILE)
}

pub fn load_tracker_settings(file_path: &Path) -> TrackerSettings {
    if !file_path.exists() {
        debug!(path = %file_path.display(), "no existing settings found, using defaults");
        return TrackerSettings::default();
    }

    match fs::read_to_string(file_path) {
        Ok(content) => match serde_json::from_str::<TrackerSettings>(&content) {
            Ok(settings) => {
                info!(
                    directory = ?settings.tacview_directory,
                    export = ?settings.export_path,
                    "loaded settings"
                );
                settings
            }
            Err(e) => {
                warn!(error = %e, "error parsing settings JSON, using defaults");
                TrackerSettings::default()
            }
        },
        Err(e) => {
            warn!(error = %e, "error reading settings file, using defaults");
            TrackerSettings::default()
        }
    }
}

pub fn save_tracker_settings(file_path: &Path, settings: &TrackerSettings) -> io::Result<()> {
    let json_content = serde_json::to_string_pretty(settings).map_err(io::Error::other)?;

    let mut file = fs::File::create(file_path)?;
    file.write_all(json_content.as_bytes())?;
    file.flush()?;

    debug!(path = %file_path.display(), "saved settings");
    Ok(())
}

pub fn auto_save_tracker_settings(file_path: &Path, settings: &TrackerSettings) {
    if let Err(e) = save_tracker_settings(file_path, settings) {
        warn!(error = %e, "failed to auto-save settings");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);

        let mut settings = TrackerSettings::default();
        assert!(settings.remember_directory(PathBuf::from("/recordings")));
        assert!(!settings.remember_directory(PathBuf::from("/recordings")));
        save_tracker_settings(&path, &settings).unwrap();

        assert_eq!(load_tracker_settings(&path), settings);
    }

    #[test]
    fn falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        assert_eq!(load_tracker_settings(&missing), TrackerSettings::default());

        let corrupt = dir.path().join(SETTINGS_FILE);
        fs::write(&corrupt, "{ not json").unwrap();
        assert_eq!(load_tracker_settings(&corrupt), TrackerSettings::default());

        // Unknown and missing fields are tolerated
        fs::write(&corrupt, r#"{"export_path": "out.json", "theme": "dark"}"#).unwrap();
        assert_eq!(
            load_tracker_settings(&corrupt).export_path,
            Some(PathBuf::from("out.json"))
        );
    }
}
