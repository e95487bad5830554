// This file contains small filesystem and naming helpers shared by the generator.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

/// Creates a directory (and its parents) if it doesn't exist
pub fn ensure_directory_exists<P: AsRef<Path>>(path: P) -> io::Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Sanitizes an API path for use in filenames: `/pets/{id}` becomes `pets-id`
pub fn sanitize_path_for_filename(path: &str) -> String {
    path.replace('/', "-")
        .replace(['{', '}'], "")
        .trim_matches('-')
        .to_string()
}

/// Writes content to a file, replacing whatever was there before
pub fn write_to_file<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, content: C) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_ref())?;
    Ok(())
}
