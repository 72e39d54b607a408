use std::io;
use std::iter::Peekable;

use crate::error::ParseError;
use crate::parsing::line_parser::{Metadata, is_file_header, parse_metadata};

const BOM: char = '\u{feff}';

/// Pilot and mission recorded in the file preamble.
#[derive(Debug, Clone, PartialEq)]
pub struct Preamble {
    pub author: String,
    pub title: String,
    /// Number of lines consumed from the stream.
    pub lines: usize,
}

fn preamble_line(raw: &str, first: bool) -> &str {
    let line = raw.trim_end_matches('\r');
    if first {
        line.strip_prefix(BOM).unwrap_or(line)
    } else {
        line
    }
}

/// Consumes the metadata preamble and leaves the cursor on the first event line.
pub fn read_preamble<I>(lines: &mut Peekable<I>) -> Result<Preamble, ParseError>
where
    I: Iterator<Item = io::Result<String>>,
{
    let mut author: Option<String> = None;
    let mut title: Option<String> = None;
    let mut consumed = 0;

    loop {
        let belongs = match lines.peek() {
            None => break,
            Some(Err(_)) => {
                if let Some(Err(e)) = lines.next() {
                    return Err(ParseError::Io(e));
                }
                break;
            }
            Some(Ok(raw)) => {
                let line = preamble_line(raw, consumed == 0);
                if is_file_header(line) {
                    true
                } else {
                    match parse_metadata(line) {
                        Some(Metadata::Author(value)) => {
                            author.get_or_insert_with(|| value.to_string());
                            true
                        }
                        Some(Metadata::Title(value)) => {
                            title.get_or_insert_with(|| value.to_string());
                            true
                        }
                        Some(Metadata::Other) => true,
                        None => false,
                    }
                }
            }
        };
        if !belongs {
            break;
        }
        lines.next();
        consumed += 1;
    }

    match author {
        Some(author) if !author.is_empty() => Ok(Preamble {
            author,
            title: title.unwrap_or_default(),
            lines: consumed,
        }),
        _ => Err(ParseError::MissingAuthor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn lines(text: &str) -> Peekable<impl Iterator<Item = io::Result<String>>> {
        text.lines()
            .map(|l| Ok(l.to_string()))
            .collect::<Vec<_>>()
            .into_iter()
            .peekable()
    }

    #[test]
    fn reads_author_and_title() {
        let mut stream = lines(
            "\u{feff}FileType=text/acmi/tacview\nFileVersion=2.2\n\
             0,ReferenceTime=2024-05-01T10:00:00Z\n0,Title=TestMission\n0,Author=Viper\n\
             #0\n102,T=1|2|3",
        );
        let preamble = read_preamble(&mut stream).unwrap();
        assert_eq!(preamble.author, "Viper");
        assert_eq!(preamble.title, "TestMission");
        assert_eq!(preamble.lines, 5);

        // Cursor is left on the first event line
        assert_eq!(stream.next().unwrap().unwrap(), "#0");
    }

    #[test]
    fn first_definition_wins() {
        let mut stream = lines("0,Author=First\r\n0,Author=Second\n0,Title=A\n0,Title=B\n#1");
        let preamble = read_preamble(&mut stream).unwrap();
        assert_eq!(preamble.author, "First");
        assert_eq!(preamble.title, "A");
    }

    #[test]
    fn title_is_optional() {
        let mut stream = lines("0,Author=Viper\n#0");
        assert_eq!(read_preamble(&mut stream).unwrap().title, "");
    }

    #[test]
    fn author_after_preamble_is_ignored() {
        let mut stream = lines("0,Title=Late\n#0\n0,Author=Viper");
        let err = read_preamble(&mut stream).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Header);
    }

    #[test]
    fn missing_or_empty_author() {
        assert!(matches!(
            read_preamble(&mut lines("")),
            Err(ParseError::MissingAuthor)
        ));
        assert!(matches!(
            read_preamble(&mut lines("0,Author=\n#0")),
            Err(ParseError::MissingAuthor)
        ));
    }
}
