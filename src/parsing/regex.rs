use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // File header that precedes the global object block
    pub static ref RE_FILE_HEADER: Regex = Regex::new(r"^File(?:Type|Version)=").unwrap();
    pub static ref RE_METADATA: Regex =
        Regex::new(r"^0,(?P<key>[A-Za-z]+)=(?P<value>.*)$").unwrap();

    pub static ref RE_TIMESTAMP: Regex = Regex::new(r"^#(?P<seconds>.*)$").unwrap();

    // Object update carrying a transform: "<id>,T=lon|lat|alt|...,Key=Value,..."
    pub static ref RE_OBJECT_UPDATE: Regex =
        Regex::new(r"^(?P<id>[0-9A-Za-z]+),T=(?P<transform>[^,]*)").unwrap();
    pub static ref RE_OBJECT_NAME: Regex = Regex::new(r",Name=(?P<name>[^,]+)").unwrap();
    pub static ref RE_OBJECT_REMOVAL: Regex = Regex::new(r"^-(?P<id>[0-9A-Za-z]+)$").unwrap();
}

/// Builds the matcher for update lines owned by `author`.
///
/// The author comes from the file itself, so it is escaped and bounded to avoid
/// matching pilots whose name merely starts with it.
pub fn pilot_pattern(author: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"^(?P<id>[0-9A-Za-z]+),T=.*,Pilot={}(?:,|$)",
        regex::escape(author)
    ))
}
