use std::error::Error;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Parser;
use tracing::{info, warn};

use dcs_flight_tracker::FlightTrackerApp;
use dcs_flight_tracker::log::find_default_tacview_dir;
use dcs_flight_tracker::logging::init_logging;
use dcs_flight_tracker::utils::{
    auto_save_tracker_settings, format_duration, load_tracker_settings, save_ingestion_result,
};
use dcs_flight_tracker::utils::settings_persistence::get_settings_file_path;

const TACVIEW_READER: usize = 0;

/// Totals the time you flew each aircraft in your Tacview recordings.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Directory containing *.zip.acmi recordings (defaults to the last one used)
    directory: Option<PathBuf>,

    /// Also write the result as JSON to this file
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Settings file
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    let args = Args::parse();

    let settings_path = args.settings.unwrap_or_else(get_settings_file_path);
    let mut settings = load_tracker_settings(&settings_path);

    let directory = args
        .directory
        .or_else(|| settings.tacview_directory.clone())
        .or_else(find_default_tacview_dir)
        .ok_or("no Tacview directory given and none found in the usual locations")?;

    let app = FlightTrackerApp::default();
    let files = app.valid_files(TACVIEW_READER, &directory)?;
    info!(directory = %directory.display(), files = files.len(), "analysing recordings");

    let handle = app.start_ingestion(TACVIEW_READER, files)?;
    let mut last_reported = 0;
    while !handle.is_finished() {
        let progress = app.progress(TACVIEW_READER);
        if progress.completed() != last_reported {
            last_reported = progress.completed();
            info!(
                "read {}/{} files ({} failed)",
                last_reported, progress.total, progress.failed
            );
        }
        thread::sleep(Duration::from_millis(100));
    }
    handle.join().map_err(|_| "analysis thread panicked")?;

    let result = app.result(TACVIEW_READER).unwrap_or_default();
    for failure in &result.failures {
        warn!("{failure}");
    }
    for aircraft in &result.aircraft {
        println!(
            "{} ({} flights, {} on the ground)",
            aircraft,
            aircraft.flights,
            format_duration(aircraft.ground_seconds)
        );
        for mission in &aircraft.missions {
            let name = if mission.name.is_empty() {
                "(untitled)"
            } else {
                mission.name.as_str()
            };
            println!("    {}: {}", name, format_duration(mission.seconds));
        }
    }
    if !result.aircraft.is_empty() {
        println!("Total: {}", format_duration(result.total_seconds()));
    }

    if let Some(path) = args.json.or_else(|| settings.export_path.clone()) {
        save_ingestion_result(&path, &result)?;
    }

    if settings.remember_directory(directory) {
        auto_save_tracker_settings(&settings_path, &settings);
    }

    Ok(())
}
