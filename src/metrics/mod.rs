pub mod parser;
pub mod source;

/// Values extracted from one run of the status tool. Produced fresh on every
/// invocation and never persisted.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MetricSnapshot {
    pub bytes_in: u64,
    pub bytes_out: u64,
    pub advertised_routes: u64,
    pub approved_routes: u64,
}

// bytes -> bits, then bits -> megabits
const BITS_PER_BYTE: f64 = 8.0;
const BITS_PER_MEGABIT: f64 = 1_000_000.0;

fn bytes_to_mbps(bytes: u64) -> f64 {
    bytes as f64 * BITS_PER_BYTE / BITS_PER_MEGABIT
}

impl MetricSnapshot {
    pub fn mbps_in(&self) -> f64 {
        bytes_to_mbps(self.bytes_in)
    }

    pub fn mbps_out(&self) -> f64 {
        bytes_to_mbps(self.bytes_out)
    }

    pub fn mbps_total(&self) -> f64 {
        self.mbps_in() + self.mbps_out()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_megabit_conversion() {
        let snapshot = MetricSnapshot {
            bytes_in: 1_000_000,
            ..Default::default()
        };
        assert!((snapshot.mbps_in() - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_total_is_sum_of_directions() {
        let snapshot = MetricSnapshot {
            bytes_in: 62_500_000,
            bytes_out: 125_000_000,
            ..Default::default()
        };
        let total = snapshot.mbps_in() + snapshot.mbps_out();
        assert!((snapshot.mbps_total() - total).abs() < 1e-9);
        assert!((snapshot.mbps_in() - 500.0).abs() < 1e-9);
        assert!((snapshot.mbps_out() - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_snapshot_is_zero() {
        let snapshot = MetricSnapshot::default();
        assert_eq!(snapshot.mbps_total(), 0.0);
        assert_eq!(snapshot.advertised_routes, 0);
    }
}
