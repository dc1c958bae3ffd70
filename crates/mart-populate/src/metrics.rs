//! Metrics reported by the populate sinks.

use std::time::Duration;

/// Outcome of one populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Record sets handled.
    pub record_sets: u64,
    /// Individual table rows written (11 per record set).
    pub rows_written: u64,
    /// Time spent writing.
    pub write_duration: Duration,
    /// Bytes written across all output files.
    pub bytes_written: u64,
}

impl PopulateMetrics {
    /// Rows written per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.write_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.write_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_per_second() {
        let metrics = PopulateMetrics {
            record_sets: 10,
            rows_written: 110,
            write_duration: Duration::from_secs(2),
            bytes_written: 4096,
        };
        assert!((metrics.rows_per_second() - 55.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_duration_does_not_divide() {
        let metrics = PopulateMetrics::default();
        assert_eq!(metrics.rows_per_second(), 0.0);
    }
}
