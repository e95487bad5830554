pub mod helpers;

pub use helpers::{ensure_directory_exists, sanitize_path_for_filename, write_to_file};
