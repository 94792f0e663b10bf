//! Arrival times at the stops of an order. `None` means the stop cannot be
//! reached within its window.

use crate::problem::dispatch::Order;
use crate::problem::travel::TravelModel;
use crate::problem::{Time, TimeWindow};
use crate::solution::CourierState;

/// Departing at `departure`, the stop is handled `travel_time` later. Arriving
/// before the window opens means waiting until it does.
#[inline(always)]
fn arrival_within(departure: Time, travel_time: Time, window: &TimeWindow) -> Option<Time> {
    if departure > window.to {
        return None;
    }
    let arrival = departure + travel_time;
    if arrival > window.to {
        None
    } else {
        Some(arrival.max(window.from))
    }
}

pub fn pickup_arrival(
    travel: &impl TravelModel,
    courier: &CourierState,
    order: &Order,
) -> Option<Time> {
    arrival_within(
        courier.time,
        travel.travel_time(&courier.location, &order.pickup.location),
        &order.pickup.window,
    )
}

pub fn dropoff_arrival(
    travel: &impl TravelModel,
    pickup_completion: Time,
    order: &Order,
) -> Option<Time> {
    arrival_within(
        pickup_completion,
        travel.travel_time(&order.pickup.location, &order.dropoff.location),
        &order.dropoff.window,
    )
}

#[cfg(test)]
mod tests {
    use crate::problem::dispatch::tests::order;
    use crate::problem::travel::ManhattanTravel;
    use crate::problem::Location;

    use super::*;

    fn at(time: Time, x: i64, y: i64) -> CourierState {
        CourierState {
            time,
            location: Location::new(x, y),
        }
    }

    #[test]
    fn arrival_inside_window_is_not_clamped() {
        let travel = ManhattanTravel::default();
        // 360 + 10 + 7
        let o = order(1, (3, 4, 370, 400), (3, 4, 0, 1000), 10.0);
        assert_eq!(pickup_arrival(&travel, &at(360, 0, 0), &o), Some(377));
        let o = order(1, (3, 4, 377, 377), (3, 4, 0, 1000), 10.0);
        assert_eq!(pickup_arrival(&travel, &at(360, 0, 0), &o), Some(377));
    }

    #[test]
    fn early_arrival_waits_for_window() {
        let travel = ManhattanTravel::default();
        let o = order(1, (0, 0, 420, 480), (0, 5, 500, 600), 10.0);
        assert_eq!(pickup_arrival(&travel, &at(360, 0, 0), &o), Some(420));
        assert_eq!(dropoff_arrival(&travel, 420, &o), Some(500));
    }

    #[test]
    fn late_courier_is_infeasible_regardless_of_distance() {
        let travel = ManhattanTravel::with_handling_time(0);
        let o = order(1, (0, 0, 0, 400), (0, 0, 0, 1000), 10.0);
        assert_eq!(pickup_arrival(&travel, &at(401, 0, 0), &o), None);
        assert_eq!(pickup_arrival(&travel, &at(400, 0, 0), &o), Some(400));
        assert_eq!(dropoff_arrival(&travel, 1001, &o), None);
    }

    #[test]
    fn arrival_after_window_closes_is_infeasible() {
        let travel = ManhattanTravel::default();
        let o = order(1, (20, 0, 360, 389), (20, 0, 0, 1000), 10.0);
        assert_eq!(pickup_arrival(&travel, &at(360, 0, 0), &o), None);
        let o = order(1, (20, 0, 360, 390), (40, 0, 0, 419), 10.0);
        assert_eq!(pickup_arrival(&travel, &at(360, 0, 0), &o), Some(390));
        assert_eq!(dropoff_arrival(&travel, 390, &o), None);
    }

    #[test]
    fn inverted_window_degenerates_to_its_opening() {
        let travel = ManhattanTravel::default();
        let o = order(1, (0, 0, 400, 380), (0, 0, 0, 1000), 10.0);
        assert_eq!(pickup_arrival(&travel, &at(360, 0, 0), &o), Some(400));
        assert_eq!(pickup_arrival(&travel, &at(371, 0, 0), &o), None);
    }
}
