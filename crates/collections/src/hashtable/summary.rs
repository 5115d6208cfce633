use std::fmt;

/// Read-only snapshot of how keys are spread across the buckets.
///
/// Computed fresh on every call to [`HashTable::distribution_summary`];
/// nothing here is cached in the table.
///
/// [`HashTable::distribution_summary`]: super::HashTable::distribution_summary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionSummary {
    pub final_capacity: usize,
    pub occupied_positions: usize,
    pub occupied_percentage: f64,
    pub max_keys_in_bucket: usize,
    pub total_elements: usize,
}

impl DistributionSummary {
    pub(crate) fn new(
        final_capacity: usize,
        occupied_positions: usize,
        max_keys_in_bucket: usize,
        total_elements: usize,
    ) -> Self {
        let occupied_percentage = if final_capacity > 0 {
            occupied_positions as f64 / final_capacity as f64 * 100.0
        } else {
            0.0
        };
        Self {
            final_capacity,
            occupied_positions,
            occupied_percentage,
            max_keys_in_bucket,
            total_elements,
        }
    }
}

impl fmt::Display for DistributionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "final table capacity: {}", self.final_capacity)?;
        writeln!(f, "total elements inserted: {}", self.total_elements)?;
        writeln!(
            f,
            "occupied positions: {} of {} ({:.2}%)",
            self.occupied_positions, self.final_capacity, self.occupied_percentage
        )?;
        write!(
            f,
            "largest cluster (most keys in one position): {}",
            self.max_keys_in_bucket
        )
    }
}
