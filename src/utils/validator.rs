use fixedbitset::FixedBitSet;
use itertools::Itertools;

use crate::config::DispatchConfig;
use crate::objective::timing::pickup_arrival;
use crate::objective::RevenueModel;
use crate::problem::dispatch::DispatchInstance;
use crate::problem::Id;
use crate::solution::{Action, CourierState, RouteEvent};

#[derive(Debug, PartialEq)]
pub enum Violation {
    UnknownCourier(Id),
    UnknownOrder(Id),
    PointMismatch { order: Id, point: Id },
    ServedTwice(Id),
    /// the courier's next event is not the dropoff of the order just picked up
    MissingDropoff(Id),
    DropoffWithoutPickup(Id),
    PickupWindow(Id),
    DropoffWindow(Id),
}

#[derive(Debug, PartialEq)]
pub enum ValidatorResult {
    Valid(f64),
    ConstraintViolation(Violation),
}

impl ValidatorResult {
    pub fn total_revenue(&self) -> Option<f64> {
        match self {
            Self::Valid(revenue) => Some(*revenue),
            _ => None,
        }
    }

    pub fn assert_valid(&self) {
        match self {
            Self::Valid(_) => {}
            Self::ConstraintViolation(violation) => panic!("{:?}", violation),
        }
    }
}

/// Replays the route of every courier from its initial state. Each order has
/// to be picked up and dropped off by one courier in consecutive events and
/// both stops must be reachable within their windows. Yields the total
/// revenue of the route.
pub fn validate_route(
    instance: &DispatchInstance,
    config: &DispatchConfig,
    events: &[RouteEvent],
) -> ValidatorResult {
    use ValidatorResult::*;
    use Violation::*;

    let model = RevenueModel::with_config(config);

    for event in events {
        if instance.courier_index_of(event.courier_id).is_none() {
            return ConstraintViolation(UnknownCourier(event.courier_id));
        }
        match instance.order_index_of(event.order_id) {
            None => return ConstraintViolation(UnknownOrder(event.order_id)),
            Some(o) if instance.orders[o].point_id_of(event.action) != event.point_id => {
                return ConstraintViolation(PointMismatch {
                    order: event.order_id,
                    point: event.point_id,
                })
            }
            _ => {}
        }
    }

    let by_courier = events.iter().into_group_map_by(|e| e.courier_id);
    let mut served = FixedBitSet::with_capacity(instance.num_orders());
    let mut total_revenue = 0.0;

    for courier in &instance.couriers {
        let route = match by_courier.get(&courier.id) {
            Some(route) => route,
            None => continue,
        };
        let mut state = CourierState::initial(courier, config.initial_time);

        for chunk in route.chunks(2) {
            let pickup = chunk[0];
            if pickup.action != Action::Pickup {
                return ConstraintViolation(DropoffWithoutPickup(pickup.order_id));
            }
            let dropoff = match chunk.get(1) {
                Some(dropoff)
                    if dropoff.action == Action::Dropoff && dropoff.order_id == pickup.order_id =>
                {
                    dropoff
                }
                _ => return ConstraintViolation(MissingDropoff(pickup.order_id)),
            };

            let idx = match instance.order_index_of(dropoff.order_id) {
                Some(idx) => idx,
                None => return ConstraintViolation(UnknownOrder(dropoff.order_id)),
            };
            if served.put(idx) {
                return ConstraintViolation(ServedTwice(pickup.order_id));
            }

            let order = &instance.orders[idx];
            match model.evaluate(&state, order) {
                Some((trip, revenue)) => {
                    total_revenue += revenue;
                    state.advance(trip.dropoff_at, order.dropoff.location);
                }
                None if pickup_arrival(&model.travel, &state, order).is_none() => {
                    return ConstraintViolation(PickupWindow(order.id))
                }
                None => return ConstraintViolation(DropoffWindow(order.id)),
            }
        }
    }

    Valid(total_revenue)
}
