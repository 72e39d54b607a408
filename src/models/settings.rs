use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerSettings {
    /// Directory holding Tacview recordings, remembered from the last analysis
    pub tacview_directory: Option<PathBuf>,
    /// When set, every analysis result is also written here as JSON
    pub export_path: Option<PathBuf>,
}

impl TrackerSettings {
    pub fn remember_directory(&mut self, dir: PathBuf) -> bool {
        if self.tacview_directory.as_ref() == Some(&dir) {
            return false;
        }
        self.tacview_directory = Some(dir);
        true
    }
}
