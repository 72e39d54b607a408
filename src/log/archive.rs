use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use zip::ZipArchive;

use crate::error::{ParseError, ReaderError};

/// Opens a zipped ACMI recording and hands its decompressed text to `parse`.
///
/// Tacview archives hold a single entry; only the first one is read.
pub fn with_acmi_stream<T, F>(path: &Path, parse: F) -> Result<T, ReaderError>
where
    F: FnOnce(&mut dyn BufRead) -> Result<T, ParseError>,
{
    let file = File::open(path).map_err(|source| ReaderError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let archive_error = |source| ReaderError::Archive {
        path: path.to_path_buf(),
        source,
    };

    let mut archive = ZipArchive::new(file).map_err(archive_error)?;
    if archive.len() == 0 {
        return Err(ReaderError::EmptyArchive {
            path: path.to_path_buf(),
        });
    }
    let entry = archive.by_index(0).map_err(archive_error)?;

    let mut stream = BufReader::new(entry);
    parse(&mut stream).map_err(|source| ReaderError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    #[test]
    fn reads_first_entry() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("track.zip.acmi");
        let mut zip = zip::ZipWriter::new(File::create(&path).unwrap());
        zip.start_file("track.txt.acmi", SimpleFileOptions::default()).unwrap();
        zip.write_all(b"0,Author=Viper\n#0\n").unwrap();
        zip.finish().unwrap();

        let lines = with_acmi_stream(&path, |stream| {
            Ok(stream.lines().collect::<Result<Vec<_>, _>>()?)
        })
        .unwrap();
        assert_eq!(lines, vec!["0,Author=Viper", "#0"]);
    }

    #[test]
    fn rejects_unreadable_archives() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.zip.acmi");
        let err = with_acmi_stream(&missing, |_| Ok(())).unwrap_err();
        assert!(matches!(err, ReaderError::Open { .. }));
        assert_eq!(err.kind(), ErrorKind::Io);

        let corrupt = dir.path().join("corrupt.zip.acmi");
        std::fs::write(&corrupt, b"definitely not a zip archive").unwrap();
        let err = with_acmi_stream(&corrupt, |_| Ok(())).unwrap_err();
        assert!(matches!(err, ReaderError::Archive { .. }));
        assert!(err.to_string().contains("corrupt.zip.acmi"));

        let empty = dir.path().join("empty.zip.acmi");
        zip::ZipWriter::new(File::create(&empty).unwrap()).finish().unwrap();
        let err = with_acmi_stream(&empty, |_| Ok(())).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
