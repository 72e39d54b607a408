pub mod archive;
pub mod finder;
pub mod ingest;

pub use archive::with_acmi_stream;
pub use finder::{find_default_tacview_dir, list_acmi_files};
pub use ingest::read_times;
