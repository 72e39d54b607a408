use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tracing::info;

use crate::models::IngestionResult;

pub fn save_ingestion_result(file_path: &Path, result: &IngestionResult) -> io::Result<()> {
    let json_content = serde_json::to_string_pretty(result).map_err(io::Error::other)?;

    let mut file = fs::File::create(file_path)?;
    file.write_all(json_content.as_bytes())?;
    file.flush()?;

    info!(path = %file_path.display(), aircraft = result.aircraft.len(), "exported flight times");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AircraftStat, MissionTime};

    #[test]
    fn writes_readable_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        let result = IngestionResult {
            aircraft: vec![AircraftStat {
                name: "Ka-50".to_string(),
                total_seconds: 120.5,
                ground_seconds: 10.0,
                flights: 1,
                missions: vec![MissionTime { name: "Training".to_string(), seconds: 120.5 }],
            }],
            failures: vec!["failed 'x.zip.acmi': author not found".to_string()],
        };

        save_ingestion_result(&path, &result).unwrap();

        let written: IngestionResult =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, result);
    }
}
