use regex::Regex;

use crate::error::ParseError;
use crate::parsing::regex::*;

/// Global-object metadata record from the file preamble.
#[derive(Debug, PartialEq)]
pub enum Metadata<'a> {
    Author(&'a str),
    Title(&'a str),
    Other,
}

/// First three transform components of an object update. Empty means unchanged
/// since the previous update of that object.
#[derive(Debug, PartialEq)]
pub struct Position<'a> {
    pub longitude: &'a str,
    pub latitude: &'a str,
    pub altitude: &'a str,
}

impl Position<'_> {
    pub fn is_unchanged(&self) -> bool {
        self.longitude.is_empty() && self.latitude.is_empty() && self.altitude.is_empty()
    }
}

pub fn is_file_header(line: &str) -> bool {
    RE_FILE_HEADER.is_match(line)
}

pub fn parse_metadata(line: &str) -> Option<Metadata<'_>> {
    let caps = RE_METADATA.captures(line)?;
    let value = caps.name("value").map_or("", |m| m.as_str());
    Some(match &caps["key"] {
        "Author" => Metadata::Author(value),
        "Title" => Metadata::Title(value),
        _ => Metadata::Other,
    })
}

/// `#<seconds>` clock line. Any other line is `Ok(None)`.
pub fn parse_timestamp(line: &str, line_number: usize) -> Result<Option<f64>, ParseError> {
    let Some(caps) = RE_TIMESTAMP.captures(line) else {
        return Ok(None);
    };
    let raw = &caps["seconds"];
    match raw.trim().parse::<f64>() {
        Ok(seconds) if seconds.is_finite() && seconds >= 0.0 => Ok(Some(seconds)),
        _ => Err(ParseError::MalformedTimestamp {
            line: line_number,
            value: raw.to_string(),
        }),
    }
}

/// Recognizes update lines for aircraft flown by one pilot.
#[derive(Debug)]
pub struct PilotMatcher {
    pattern: Regex,
}

impl PilotMatcher {
    pub fn new(author: &str) -> Result<Self, ParseError> {
        let pattern = pilot_pattern(author).map_err(|source| ParseError::InvalidAuthor {
            author: author.to_string(),
            source,
        })?;
        Ok(Self { pattern })
    }

    /// Returns `(object_id, aircraft_name)` when the line attributes an object to the pilot.
    pub fn match_spawn<'a>(&self, line: &'a str) -> Option<(&'a str, &'a str)> {
        let caps = self.pattern.captures(line)?;
        let object_id = caps.name("id")?.as_str();
        let name = RE_OBJECT_NAME.captures(line)?.name("name")?.as_str();
        Some((object_id, name))
    }
}

pub fn match_despawn(line: &str, object_id: &str) -> bool {
    RE_OBJECT_REMOVAL
        .captures(line)
        .is_some_and(|caps| &caps["id"] == object_id)
}

pub fn match_position<'a>(
    line: &'a str,
    object_id: &str,
    line_number: usize,
) -> Result<Option<Position<'a>>, ParseError> {
    let Some(caps) = RE_OBJECT_UPDATE.captures(line) else {
        return Ok(None);
    };
    if &caps["id"] != object_id {
        return Ok(None);
    }
    let transform = caps.name("transform").map_or("", |m| m.as_str());

    let malformed = || ParseError::MalformedPosition {
        line: line_number,
        value: transform.to_string(),
    };
    let mut components = transform.split('|');
    let mut next_coordinate = || -> Result<&'a str, ParseError> {
        let value = components.next().ok_or_else(malformed)?;
        if !value.is_empty() && value.parse::<f64>().is_err() {
            return Err(malformed());
        }
        Ok(value)
    };

    Ok(Some(Position {
        longitude: next_coordinate()?,
        latitude: next_coordinate()?,
        altitude: next_coordinate()?,
    }))
}
