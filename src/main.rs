mod reader;
mod report;

use std::env;
use std::path::Path;

use collections::{HashTable, SumOfCodepoints, WellMixedStringHash};
use log::trace;

const TABLE_CAPACITY: usize = 32;
const DEFAULT_FILE: &str = "female_names.txt";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::builder().init();

    let mut path = DEFAULT_FILE.to_string();
    let mut full_details = false;
    for arg in env::args().skip(1) {
        if arg == "--details" {
            full_details = true;
        } else {
            path = arg;
        }
    }

    trace!("reading keys from {path}");
    let keys = reader::read_keys_from_path(Path::new(&path))?;
    if keys.is_empty() {
        println!("no keys read from {path}, check the path and the file contents");
        return Ok(());
    }
    println!("{} keys read from {path}", keys.len());

    println!("\n=== testing sum-of-codepoints hash ===");
    let mut table = HashTable::new(TABLE_CAPACITY, SumOfCodepoints)?;
    report::perform_and_report(&mut table, &keys, "sum-of-codepoints", full_details);

    println!("\n=== testing well-mixed string hash ===");
    let mut table = HashTable::new(TABLE_CAPACITY, WellMixedStringHash)?;
    report::perform_and_report(&mut table, &keys, "well-mixed", full_details);

    println!("\ncomparison complete");
    Ok(())
}
