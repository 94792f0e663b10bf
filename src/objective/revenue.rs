use crate::config::DispatchConfig;
use crate::objective::timing::{dropoff_arrival, pickup_arrival};
use crate::objective::Objective;
use crate::problem::dispatch::Order;
use crate::problem::travel::ManhattanTravel;
use crate::problem::Time;
use crate::solution::CourierState;

/// Value of assigning an order to a courier in its current state.
///
/// `Infeasible` orders below every feasible value, so the maximum over a set of
/// candidates is `Infeasible` only if no candidate can be served at all.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Revenue {
    Infeasible,
    Feasible(f64),
}

impl Revenue {
    pub fn value(&self) -> Option<f64> {
        match self {
            Revenue::Feasible(v) => Some(*v),
            Revenue::Infeasible => None,
        }
    }
    pub fn is_feasible(&self) -> bool {
        matches!(self, Revenue::Feasible(_))
    }
}

/// Completion times of a single order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trip {
    pub pickup_at: Time,
    pub dropoff_at: Time,
}

#[derive(Debug, Clone)]
pub struct RevenueModel {
    pub travel: ManhattanTravel,
    pub objective: Objective,
    pub time_cost_factor: f64,
}

impl RevenueModel {
    pub fn new(travel: ManhattanTravel, objective: Objective, time_cost_factor: f64) -> Self {
        Self {
            travel,
            objective,
            time_cost_factor,
        }
    }

    pub fn with_config(config: &DispatchConfig) -> Self {
        Self::new(
            ManhattanTravel::with_handling_time(config.handling_time),
            config.objective,
            config.time_cost_factor,
        )
    }

    pub fn trip(&self, courier: &CourierState, order: &Order) -> Option<Trip> {
        let pickup_at = pickup_arrival(&self.travel, courier, order)?;
        let dropoff_at = dropoff_arrival(&self.travel, pickup_at, order)?;
        Some(Trip {
            pickup_at,
            dropoff_at,
        })
    }

    fn value_of(&self, courier: &CourierState, order: &Order, trip: &Trip) -> f64 {
        let time_cost = self.time_cost_factor * (trip.dropoff_at - courier.time) as f64;
        match self.objective {
            Objective::NetPayment => order.payment - time_cost,
            Objective::TimeCost => time_cost,
        }
    }

    pub fn evaluate(&self, courier: &CourierState, order: &Order) -> Option<(Trip, f64)> {
        self.trip(courier, order)
            .map(|trip| (trip, self.value_of(courier, order, &trip)))
    }

    pub fn revenue(&self, courier: &CourierState, order: &Order) -> Revenue {
        match self.evaluate(courier, order) {
            Some((_, value)) => Revenue::Feasible(value),
            None => Revenue::Infeasible,
        }
    }

    /// Moves the courier to the dropoff of `order`. An infeasible order leaves
    /// the courier untouched and yields `None`.
    pub fn commit(&self, courier: &mut CourierState, order: &Order) -> Option<Trip> {
        let trip = self.trip(courier, order)?;
        courier.advance(trip.dropoff_at, order.dropoff.location);
        Some(trip)
    }
}

impl Default for RevenueModel {
    fn default() -> Self {
        Self::with_config(&DispatchConfig::default())
    }
}
