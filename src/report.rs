use std::time::Instant;

use collections::{HashStrategy, HashTable};
use log::trace;

/// Timed insert and search passes over `keys`, a warmed re-run on the
/// grown table, then either the distribution summary or the full
/// per-position dumps.
///
/// All timing wraps the table calls from outside; the table itself has
/// no clocks.
pub fn perform_and_report<S: HashStrategy>(
    table: &mut HashTable<S>,
    keys: &[String],
    label: &str,
    full_details: bool,
) {
    let start = Instant::now();
    for key in keys {
        table.insert(key.as_str());
    }
    let insert_elapsed = start.elapsed();

    println!("\n--- report for {label} ---");
    println!("total insert time: {} ms", insert_elapsed.as_millis());
    println!("total collisions: {}", table.collision_count());
    println!("elements in table: {}", table.len());
    println!("final table capacity: {}", table.capacity());

    let start = Instant::now();
    let mut found = 0usize;
    for key in keys {
        if table.search(key) {
            found += 1;
        }
    }
    let search_elapsed = start.elapsed();
    println!(
        "total search time (for {} keys): {} ms",
        keys.len(),
        search_elapsed.as_millis()
    );
    println!("{found} of {} keys were found", keys.len());

    // Re-run the insert pass on the already-grown table so the number is
    // free of growth cost.
    table.reset();
    trace!(target: "report", "table reset at capacity {}", table.capacity());
    let start = Instant::now();
    for key in keys {
        table.insert(key.as_str());
    }
    println!(
        "warmed insert time (capacity {}): {} ms",
        table.capacity(),
        start.elapsed().as_millis()
    );

    if full_details {
        print_key_distribution(table);
        print_collision_distribution(table);
    } else {
        println!("\n--- distribution summary ({label}) ---");
        println!("{}", table.distribution_summary());
    }
    println!("------------------------------------------");
}

fn print_key_distribution<S: HashStrategy>(table: &HashTable<S>) {
    println!("--- key distribution (capacity: {}) ---", table.capacity());
    for (i, count) in table.bucket_key_counts().iter().enumerate() {
        println!("position [{i:02}]: {count} keys");
    }
    println!("--------------------------------------------------");
}

fn print_collision_distribution<S: HashStrategy>(table: &HashTable<S>) {
    println!("--- clustering (collisions per position) ---");
    for (i, count) in table.bucket_key_counts().iter().enumerate() {
        let collisions = count.saturating_sub(1);
        println!("position [{i:02}]: {count} keys, {collisions} collisions at this position");
    }
    println!("--------------------------------------------");
}
