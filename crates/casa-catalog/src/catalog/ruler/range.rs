use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed integer interval `[lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntRange {
    pub lower: i64,
    pub upper: i64,
}

impl IntRange {
    pub const fn new(lower: i64, upper: i64) -> Self {
        Self { lower, upper }
    }

    pub fn contains(&self, value: i64) -> bool {
        self.lower <= value && value <= self.upper
    }

    pub fn is_ordered(&self) -> bool {
        self.lower <= self.upper
    }
}

impl fmt::Display for IntRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

/// Closed floating point interval `[lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloatRange {
    pub lower: f64,
    pub upper: f64,
}

impl FloatRange {
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }

    pub fn is_ordered(&self) -> bool {
        self.lower <= self.upper
    }
}

impl fmt::Display for FloatRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_range_is_inclusive_on_both_ends() {
        let range = IntRange::new(1, 14);
        assert!(range.contains(1));
        assert!(range.contains(14));
        assert!(!range.contains(0));
        assert!(!range.contains(15));
    }

    #[test]
    fn float_range_is_inclusive_on_both_ends() {
        let range = FloatRange::new(-90.0, 90.0);
        assert!(range.contains(-90.0));
        assert!(range.contains(90.0));
        assert!(!range.contains(90.0000001));
        assert!(!range.contains(f64::NAN));
    }

    #[test]
    fn reversed_ranges_are_not_ordered() {
        assert!(!IntRange::new(5, 1).is_ordered());
        assert!(IntRange::new(3, 3).is_ordered());
        assert!(!FloatRange::new(1.5, -1.5).is_ordered());
    }
}
