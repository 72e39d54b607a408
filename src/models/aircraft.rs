use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::time::format_duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionTime {
    /// Mission title, empty when the recording had none.
    pub name: String,
    pub seconds: f64,
}

/// Flight time accumulated with one aircraft type across every processed recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftStat {
    pub name: String,
    pub total_seconds: f64,
    /// Time spent without position changes. Computed independently of
    /// `total_seconds`, so it is not guaranteed to be smaller.
    pub ground_seconds: f64,
    pub flights: u32,
    pub missions: Vec<MissionTime>,
}

impl AircraftStat {
    pub fn mission(&self, name: &str) -> Option<&MissionTime> {
        self.missions.iter().find(|m| m.name == name)
    }
}

impl fmt::Display for AircraftStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, format_duration(self.total_seconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(total_seconds: f64) -> AircraftStat {
        AircraftStat {
            name: "F-14B".to_string(),
            total_seconds,
            ground_seconds: 0.0,
            flights: 1,
            missions: Vec::new(),
        }
    }

    #[test]
    fn display_picks_unit() {
        assert_eq!(stat(42.5).to_string(), "F-14B: 42.50 secs");
        assert_eq!(stat(90.0).to_string(), "F-14B: 1.50 mins");
        assert_eq!(stat(5400.0).to_string(), "F-14B: 1.50 hours");
    }
}
