use serde::{Deserialize, Serialize};

pub mod dispatch;
pub mod travel;

pub type Time = i64;
pub type Id = u64;

/// fleet start-of-shift
pub const INITIAL_TIME: Time = 360;
/// time spent at every stop on top of the travel itself
pub const FIXED_HANDLING_TIME: Time = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub x: i64,
    pub y: i64,
}

impl Location {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
    pub fn manhattan_distance(&self, other: &Location) -> i64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub from: Time,
    pub to: Time,
}

impl TimeWindow {
    pub fn new(from: Time, to: Time) -> Self {
        Self { from, to }
    }
    pub fn is_inverted(&self) -> bool {
        self.from > self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance_is_symmetric() {
        let a = Location::new(-3, 4);
        let b = Location::new(2, -1);
        assert_eq!(a.manhattan_distance(&b), 10);
        assert_eq!(b.manhattan_distance(&a), 10);
        assert_eq!(a.manhattan_distance(&a), 0);
    }

    #[test]
    fn inverted_windows_are_detected() {
        let tw = TimeWindow::new(360, 400);
        assert!(!tw.is_inverted());
        assert!(!TimeWindow::new(400, 400).is_inverted());
        assert!(TimeWindow::new(5, 0).is_inverted());
    }
}
