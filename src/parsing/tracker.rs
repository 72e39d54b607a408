use std::collections::HashMap;
use std::io::BufRead;

use tracing::trace;

use crate::error::ParseError;
use crate::parsing::header::{Preamble, read_preamble};
use crate::parsing::line_parser::{PilotMatcher, match_despawn, match_position, parse_timestamp};

/// Time flown with one aircraft type within a single file.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AircraftTally {
    pub airborne_seconds: f64,
    pub ground_seconds: f64,
    pub flights: u32,
}

/// Everything one recording contributes to the aggregate.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FileTally {
    pub mission: String,
    pub aircraft: HashMap<String, AircraftTally>,
}

impl FileTally {
    pub fn is_empty(&self) -> bool {
        self.aircraft.is_empty()
    }
}

#[derive(Debug)]
struct TrackedAircraft {
    object_id: String,
    name: String,
    spawned_at: f64,
    ground_since: Option<f64>,
}

#[derive(Debug)]
enum LifecycleState {
    Idle,
    Tracking(TrackedAircraft),
}

/// Follows the lifecycle of the pilot's aircraft through one recording.
pub struct LifecycleTracker {
    matcher: PilotMatcher,
    state: LifecycleState,
    current_timestamp: f64,
    line_number: usize,
    tally: FileTally,
}

impl LifecycleTracker {
    pub fn new(preamble: &Preamble) -> Result<Self, ParseError> {
        Ok(Self {
            matcher: PilotMatcher::new(&preamble.author)?,
            state: LifecycleState::Idle,
            current_timestamp: 0.0,
            line_number: preamble.lines,
            tally: FileTally {
                mission: preamble.title.clone(),
                aircraft: HashMap::new(),
            },
        })
    }

    pub fn process_line(&mut self, raw: &str) -> Result<(), ParseError> {
        self.line_number += 1;
        let line = raw.trim_end_matches('\r');

        if let Some(timestamp) = parse_timestamp(line, self.line_number)? {
            self.current_timestamp = timestamp;
            return Ok(());
        }

        match self.state {
            LifecycleState::Idle => self.try_spawn(line),
            LifecycleState::Tracking(ref mut aircraft) => {
                if match_despawn(line, &aircraft.object_id) {
                    trace!(
                        object_id = %aircraft.object_id,
                        at = self.current_timestamp,
                        "aircraft removed"
                    );
                    self.close_flight();
                } else if let Some(position) =
                    match_position(line, &aircraft.object_id, self.line_number)?
                {
                    let now = self.current_timestamp;
                    match (position.is_unchanged(), aircraft.ground_since) {
                        (true, None) => aircraft.ground_since = Some(now),
                        (false, Some(since)) => {
                            aircraft.ground_since = None;
                            let name = aircraft.name.clone();
                            let tally = self.tally.aircraft.entry(name).or_default();
                            tally.ground_seconds += now - since;
                        }
                        _ => {}
                    }
                }
            }
        }
        Ok(())
    }

    fn try_spawn(&mut self, line: &str) {
        let Some((object_id, name)) = self.matcher.match_spawn(line) else {
            return;
        };
        trace!(object_id, name, at = self.current_timestamp, "aircraft spawned");
        // Counted on spawn so flights that are never removed still count
        self.tally.aircraft.entry(name.to_string()).or_default().flights += 1;
        self.state = LifecycleState::Tracking(TrackedAircraft {
            object_id: object_id.to_string(),
            name: name.to_string(),
            spawned_at: self.current_timestamp,
            ground_since: None,
        });
    }

    /// Closes any open flight at the last seen timestamp and returns the tally.
    pub fn finish(mut self) -> FileTally {
        self.close_flight();
        self.tally
    }

    fn close_flight(&mut self) {
        let LifecycleState::Tracking(aircraft) =
            std::mem::replace(&mut self.state, LifecycleState::Idle)
        else {
            return;
        };
        let now = self.current_timestamp;
        let tally = self.tally.aircraft.entry(aircraft.name).or_default();
        tally.airborne_seconds += now - aircraft.spawned_at;
        if let Some(since) = aircraft.ground_since {
            tally.ground_seconds += now - since;
        }
    }
}

/// Parses one decompressed ACMI recording.
pub fn parse_flight_log<R: BufRead>(reader: R) -> Result<FileTally, ParseError> {
    let mut lines = reader.lines().peekable();
    let preamble = read_preamble(&mut lines)?;
    let mut tracker = LifecycleTracker::new(&preamble)?;
    for line in lines {
        tracker.process_line(&line?)?;
    }
    Ok(tracker.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::io::Cursor;

    const HEADER: &str =
        "FileType=text/acmi/tacview\nFileVersion=2.2\n0,Title=Caucasus CAS\n0,Author=Viper\n";

    fn parse(body: &str) -> Result<FileTally, ParseError> {
        parse_flight_log(Cursor::new(format!("{HEADER}{body}")))
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn no_pilot_aircraft_is_empty() {
        let tally = parse("#0\n5,T=1|2|3,Name=Su-25T,Pilot=Someone\n#10\n-5\n").unwrap();
        assert!(tally.is_empty());
        assert_eq!(tally.mission, "Caucasus CAS");
    }

    #[test]
    fn spawn_and_despawn() {
        let tally = parse(
            "#0\n#5\n101,T=1|2|3,Name=F-16C_50,Pilot=Viper\n#6\n101,T=1.1|2|3\n#65.5\n-101\n#80\n",
        )
        .unwrap();
        let f16 = &tally.aircraft["F-16C_50"];
        assert_eq!(f16.flights, 1);
        assert!(close(f16.airborne_seconds, 60.5));
        assert_eq!(f16.ground_seconds, 0.0);
    }

    #[test]
    fn unterminated_flight_counted_once() {
        let tally =
            parse("#1\n101,T=1|2|3,Name=AH-64D,Pilot=Viper\n#41\n101,T=1.2|2|3\n#51\n").unwrap();
        let apache = &tally.aircraft["AH-64D"];
        assert_eq!(apache.flights, 1);
        assert!(close(apache.airborne_seconds, 50.0));
    }

    #[test]
    fn open_ground_interval_closed_at_end_of_stream() {
        let tally =
            parse("#1\n101,T=1|2|3,Name=Mi-24P,Pilot=Viper\n#10\n101,T=||\n#25\n").unwrap();
        let hind = &tally.aircraft["Mi-24P"];
        assert_eq!(hind.flights, 1);
        assert!(close(hind.airborne_seconds, 24.0));
        assert!(close(hind.ground_seconds, 15.0));
    }

    #[test]
    fn ground_time_from_unchanged_positions() {
        let tally = parse(
            "#0\n101,T=1|2|3,Name=OH58D,Pilot=Viper\n\
             #10\n101,T=||\n#12\n101,T=||\n#20\n101,T=1.5||\n\
             #30\n101,T=||\n#45\n-101\n",
        )
        .unwrap();
        let kiowa = &tally.aircraft["OH58D"];
        // 10..20 stationary, then 30..45 closed by despawn
        assert!(close(kiowa.ground_seconds, 25.0));
        assert!(close(kiowa.airborne_seconds, 45.0));
        assert!(kiowa.ground_seconds <= kiowa.airborne_seconds);
    }

    #[test]
    fn other_objects_do_not_disturb_tracking() {
        let tally = parse(
            "#0\n101,T=1|2|3,Name=OH58D,Pilot=Viper\n\
             #5\n202,T=||\n-202\n303,T=1|2|3,Name=UH-1H,Pilot=Viper\n#9\n-101\n",
        )
        .unwrap();
        assert_eq!(tally.aircraft.len(), 1);
        assert!(close(tally.aircraft["OH58D"].airborne_seconds, 9.0));
        assert_eq!(tally.aircraft["OH58D"].ground_seconds, 0.0);
    }

    #[test]
    fn respawn_counts_second_flight() {
        let tally = parse(
            "#0\n101,T=1|2|3,Name=OH58D,Pilot=Viper\n#100\n-101\n\
             #200\n1a2,T=4|5|6,Name=OH58D,Pilot=Viper\n#250\n-1a2\n",
        )
        .unwrap();
        let kiowa = &tally.aircraft["OH58D"];
        assert_eq!(kiowa.flights, 2);
        assert!(close(kiowa.airborne_seconds, 150.0));
    }

    #[test]
    fn malformed_lines_abort_the_file() {
        assert_eq!(parse("#0\n#1.2.3\n").unwrap_err().kind(), ErrorKind::Format);
        assert_eq!(
            parse("#0\n101,T=1|2|3,Name=OH58D,Pilot=Viper\n#1\n101,T=1|2\n")
                .unwrap_err()
                .kind(),
            ErrorKind::Format
        );
        let missing = parse_flight_log(Cursor::new("0,Title=X\n#0\n")).unwrap_err();
        assert_eq!(missing.kind(), ErrorKind::Header);
    }
}
