use crate::problem::{Location, Time, FIXED_HANDLING_TIME};

pub trait TravelModel {
    /// time from leaving `from` until the stop at `to` is handled
    fn travel_time(&self, from: &Location, to: &Location) -> Time;
}

/// Grid travel: one time unit per unit of manhattan distance plus a fixed
/// handling time per stop.
#[derive(Debug, Clone, Copy)]
pub struct ManhattanTravel {
    pub handling_time: Time,
}

impl ManhattanTravel {
    pub fn with_handling_time(handling_time: Time) -> Self {
        Self { handling_time }
    }
}

impl Default for ManhattanTravel {
    fn default() -> Self {
        Self::with_handling_time(FIXED_HANDLING_TIME)
    }
}

impl TravelModel for ManhattanTravel {
    fn travel_time(&self, from: &Location, to: &Location) -> Time {
        self.handling_time + from.manhattan_distance(to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handling_time_is_charged_without_distance() {
        let travel = ManhattanTravel::default();
        let at = Location::new(4, 4);
        assert_eq!(travel.travel_time(&at, &at), FIXED_HANDLING_TIME);
        assert_eq!(travel.travel_time(&at, &Location::new(0, 10)), 20);
    }
}
