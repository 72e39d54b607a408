pub mod regex;
pub mod line_parser;
pub mod header;
pub mod tracker;

pub use header::{Preamble, read_preamble};
pub use line_parser::{PilotMatcher, Position, match_despawn, match_position, parse_timestamp};
pub use tracker::{AircraftTally, FileTally, LifecycleTracker, parse_flight_log};
