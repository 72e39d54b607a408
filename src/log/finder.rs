use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const ACMI_ARCHIVE_SUFFIX: &str = ".zip.acmi";

/// Zipped ACMI recordings directly inside `dir`, sorted by file name.
pub fn list_acmi_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .file_name()
                    .and_then(|s| s.to_str())
                    .is_some_and(|s| s.ends_with(ACMI_ARCHIVE_SUFFIX))
        })
        .collect();
    files.sort();
    Ok(files)
}

/// First existing Tacview recording directory among the usual locations.
pub fn find_default_tacview_dir() -> Option<PathBuf> {
    tacview_dir_candidates().into_iter().find(|dir| dir.is_dir())
}

pub fn tacview_dir_candidates() -> Vec<PathBuf> {
    if cfg!(windows) {
        // OneDrive redirects Documents on many installs
        vec![get_onedrive_tacview_path(), get_documents_tacview_path()]
    } else {
        vec![get_documents_tacview_path()]
    }
}

fn home_dir() -> PathBuf {
    let home = if cfg!(windows) {
        std::env::var("USERPROFILE").unwrap_or_else(|_| {
            std::env::var("USERNAME")
                .map(|username| format!("C:\\Users\\{}", username))
                .unwrap_or_else(|_| "C:\\Users\\Default".to_string())
        })
    } else {
        std::env::var("HOME").unwrap_or_else(|_| {
            std::env::var("USER")
                .map(|user| format!("/home/{}", user))
                .unwrap_or_else(|_| "/home/default".to_string())
        })
    };
    PathBuf::from(home)
}

pub fn get_onedrive_tacview_path() -> PathBuf {
    let mut path = home_dir();
    path.push("OneDrive");
    path.push("Documents");
    path.push("Tacview");
    path
}

pub fn get_documents_tacview_path() -> PathBuf {
    let mut path = home_dir();
    path.push("Documents");
    path.push("Tacview");
    path
}
