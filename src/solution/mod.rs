use crate::problem::dispatch::{Courier, DispatchInstance};
use crate::problem::{Location, Time};

pub use crate::solution::description::{Action, RouteEvent};
pub use crate::solution::order_pool::OrderPool;

mod description;
mod order_pool;

/// Cursor of a courier while orders are committed to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourierState {
    pub time: Time,
    pub location: Location,
}

impl CourierState {
    pub fn initial(courier: &Courier, initial_time: Time) -> Self {
        Self {
            time: initial_time,
            location: courier.location,
        }
    }

    pub fn initial_states(instance: &DispatchInstance, initial_time: Time) -> Vec<Self> {
        instance
            .couriers
            .iter()
            .map(|c| Self::initial(c, initial_time))
            .collect()
    }

    pub(crate) fn advance(&mut self, time: Time, location: Location) {
        debug_assert!(time >= self.time, "courier time must not go backwards");
        self.time = time;
        self.location = location;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Commitment {
    pub courier: usize,
    pub order: usize,
    pub revenue: f64,
    pub pickup_at: Time,
    pub dropoff_at: Time,
}

/// Commitments in the order they were made. Round based strategies
/// additionally record the number of commitments at the end of each round.
#[derive(Debug, Clone, Default)]
pub struct Dispatch {
    pub(crate) commitments: Vec<Commitment>,
    pub(crate) round_ends: Vec<usize>,
}

impl Dispatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commit(&mut self, commitment: Commitment) {
        self.commitments.push(commitment);
    }

    pub fn close_round(&mut self) {
        self.round_ends.push(self.commitments.len());
    }

    pub fn commitments(&self) -> &[Commitment] {
        &self.commitments
    }

    pub fn round_ends(&self) -> &[usize] {
        &self.round_ends
    }

    pub fn number_of_served_orders(&self) -> usize {
        self.commitments.len()
    }

    pub fn number_of_couriers_used(&self, instance: &DispatchInstance) -> usize {
        let mut used = vec![false; instance.num_couriers()];
        self.commitments.iter().for_each(|c| used[c.courier] = true);
        used.into_iter().filter(|it| *it).count()
    }

    pub fn total_revenue(&self) -> f64 {
        self.commitments.iter().map(|c| c.revenue).sum()
    }

    pub fn route_events(&self, instance: &DispatchInstance) -> Vec<RouteEvent> {
        Self::events_of(&self.commitments, instance)
    }

    /// events of all commitments made up to (including) the given round
    pub fn route_events_until_round(
        &self,
        round: usize,
        instance: &DispatchInstance,
    ) -> Vec<RouteEvent> {
        let end = self
            .round_ends
            .get(round)
            .copied()
            .unwrap_or(self.commitments.len());
        Self::events_of(&self.commitments[..end], instance)
    }

    fn events_of(commitments: &[Commitment], instance: &DispatchInstance) -> Vec<RouteEvent> {
        let mut events = Vec::with_capacity(commitments.len() * 2);
        for c in commitments {
            let courier = &instance.couriers[c.courier];
            let order = &instance.orders[c.order];
            events.push(RouteEvent::of(courier, order, Action::Pickup));
            events.push(RouteEvent::of(courier, order, Action::Dropoff));
        }
        events
    }
}
