use serde::{Deserialize, Serialize};

use crate::models::AircraftStat;

/// Outcome of an ingestion run: sorted aircraft and one message per failed file.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestionResult {
    pub aircraft: Vec<AircraftStat>,
    pub failures: Vec<String>,
}

impl IngestionResult {
    pub fn aircraft(&self, name: &str) -> Option<&AircraftStat> {
        self.aircraft.iter().find(|a| a.name == name)
    }

    pub fn total_seconds(&self) -> f64 {
        self.aircraft.iter().map(|a| a.total_seconds).sum()
    }
}
