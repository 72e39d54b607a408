use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::models::{AircraftStat, MissionTime};
use crate::parsing::FileTally;

#[derive(Debug, Default)]
struct AircraftTotals {
    total_seconds: f64,
    ground_seconds: f64,
    flights: u32,
    // Mission title -> seconds
    missions: HashMap<String, f64>,
}

#[derive(Debug, Default)]
struct AggregateState {
    aircraft: HashMap<String, AircraftTotals>,
    processed: HashSet<PathBuf>,
}

/// Global per-aircraft totals for one reader. Every mutation, including the
/// processed-file bookkeeping, happens under the same lock.
#[derive(Debug, Default)]
pub struct Aggregator {
    state: Mutex<AggregateState>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, AggregateState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn already_processed(&self, path: &Path) -> bool {
        self.lock().processed.contains(path)
    }

    /// Returns `false` when the path had already been marked.
    pub fn mark_processed(&self, path: &Path) -> bool {
        self.lock().processed.insert(path.to_path_buf())
    }

    /// Adds one file's tally to the totals. A path is merged at most once;
    /// later merges for the same path are ignored and return `false`.
    pub fn merge(&self, path: &Path, tally: FileTally) -> bool {
        let mut state = self.lock();
        if !state.processed.insert(path.to_path_buf()) {
            return false;
        }

        let FileTally { mission, aircraft } = tally;
        for (name, file_totals) in aircraft {
            let totals = state.aircraft.entry(name).or_default();
            totals.total_seconds += file_totals.airborne_seconds;
            totals.ground_seconds += file_totals.ground_seconds;
            totals.flights += file_totals.flights;
            *totals.missions.entry(mission.clone()).or_default() += file_totals.airborne_seconds;
        }
        true
    }

    pub fn processed_count(&self) -> usize {
        self.lock().processed.len()
    }

    /// Aircraft ordered by total seconds, longest first; missions likewise.
    pub fn snapshot(&self) -> Vec<AircraftStat> {
        let state = self.lock();
        let mut aircraft: Vec<AircraftStat> = state
            .aircraft
            .iter()
            .map(|(name, totals)| {
                let mut missions: Vec<MissionTime> = totals
                    .missions
                    .iter()
                    .map(|(mission, seconds)| MissionTime {
                        name: mission.clone(),
                        seconds: *seconds,
                    })
                    .collect();
                missions.sort_by(|a, b| b.seconds.total_cmp(&a.seconds));

                AircraftStat {
                    name: name.clone(),
                    total_seconds: totals.total_seconds,
                    ground_seconds: totals.ground_seconds,
                    flights: totals.flights,
                    missions,
                }
            })
            .collect();
        drop(state);

        aircraft.sort_by(|a, b| b.total_seconds.total_cmp(&a.total_seconds));
        aircraft
    }
}
