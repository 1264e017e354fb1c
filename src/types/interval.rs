//! Longitudinal position intervals.

use serde::{Deserialize, Serialize};

/// `[start, stop)` interval occupied by a top-level element along the
/// lattice, in meters from the lattice origin.
///
/// Intervals are assigned at model construction and are non-decreasing
/// across the top-level sequence. Child elements have no interval of their
/// own; they inherit the owning element's.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionInterval {
    /// Start position.
    pub start: f64,
    /// Stop position.
    pub stop: f64,
}

impl PositionInterval {
    /// Create a new interval.
    pub fn new(start: f64, stop: f64) -> Self {
        Self { start, stop }
    }

    /// Length of the interval.
    pub fn length(&self) -> f64 {
        self.stop - self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length() {
        let interval = PositionInterval::new(1.5, 4.0);
        assert_eq!(interval.length(), 2.5);
    }

    #[test]
    fn test_zero_length() {
        let interval = PositionInterval::new(3.0, 3.0);
        assert_eq!(interval.length(), 0.0);
    }
}
