use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Reads one key per line, trimming whitespace and skipping blank lines.
pub fn read_keys<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut keys = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            keys.push(trimmed.to_owned());
        }
    }
    Ok(keys)
}

pub fn read_keys_from_path(path: &Path) -> io::Result<Vec<String>> {
    read_keys(BufReader::new(File::open(path)?))
}
