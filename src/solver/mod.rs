use log::{debug, info};
use rand::Rng;
use took::{Timer, Took};

use crate::cli::Strategy;
use crate::config::DispatchConfig;
use crate::objective::{Revenue, RevenueModel};
use crate::problem::dispatch::{DispatchInstance, Order};
use crate::problem::Time;
use crate::solution::{Commitment, CourierState, Dispatch, OrderPool};
use crate::solver::global_greedy::GlobalGreedy;
use crate::solver::lookahead::PerCourierLookahead;
use crate::solver::per_courier_greedy::PerCourierGreedy;
use crate::solver::round_matching::RoundRobinMatching;
use crate::utils::{create_seeded_rng, Random};

pub mod early_stop;
pub mod global_greedy;
pub mod lookahead;
pub mod per_courier_greedy;
pub mod round_matching;

pub struct SolverResult {
    pub strategy: &'static str,
    pub dispatch: Dispatch,
    pub time: Took,
}

/// Selection policy over the shared revenue objective.
pub trait AssignmentStrategy {
    fn name(&self) -> &'static str;

    fn assign(
        &mut self,
        instance: &DispatchInstance,
        model: &RevenueModel,
        initial_time: Time,
    ) -> Dispatch;
}

/// Strategies that process couriers one after another get their own rng
/// derived from `rng`, so a fixed seed fixes the courier order.
pub fn create_strategy(strategy: Strategy, rng: &mut Random) -> Box<dyn AssignmentStrategy> {
    match strategy {
        Strategy::GlobalGreedy => Box::new(GlobalGreedy),
        Strategy::PerCourierGreedy => {
            Box::new(PerCourierGreedy::with_rng(create_seeded_rng(rng.gen())))
        }
        Strategy::PerCourierLookahead => {
            Box::new(PerCourierLookahead::with_rng(create_seeded_rng(rng.gen())))
        }
        Strategy::RoundRobinMatching => Box::new(RoundRobinMatching::new()),
    }
}

pub fn solve(
    instance: &DispatchInstance,
    config: &DispatchConfig,
    strategy: Strategy,
    rng: &mut Random,
) -> SolverResult {
    let timer = Timer::new();
    let model = RevenueModel::with_config(config);
    let mut strategy = create_strategy(strategy, rng);

    info!(
        "starting {} on {} couriers and {} orders",
        strategy.name(),
        instance.num_couriers(),
        instance.num_orders()
    );
    let dispatch = strategy.assign(instance, &model, config.initial_time);

    #[cfg(feature = "route-asserts")]
    crate::utils::validator::validate_route(instance, config, &dispatch.route_events(instance))
        .assert_valid();

    let time = timer.took();
    info!("{} finished after {}", strategy.name(), time);

    SolverResult {
        strategy: strategy.name(),
        dispatch,
        time,
    }
}

/// Mutable state of a single assignment run: courier cursors, the pool of
/// available orders and the commitments made so far.
pub(crate) struct AssignmentState<'a> {
    instance: &'a DispatchInstance,
    model: &'a RevenueModel,
    pub(crate) states: Vec<CourierState>,
    pub(crate) pool: OrderPool,
    pub(crate) dispatch: Dispatch,
    passes: usize,
}

impl<'a> AssignmentState<'a> {
    pub(crate) fn new(
        instance: &'a DispatchInstance,
        model: &'a RevenueModel,
        initial_time: Time,
    ) -> Self {
        Self {
            instance,
            model,
            states: CourierState::initial_states(instance, initial_time),
            pool: OrderPool::with_instance(instance),
            dispatch: Dispatch::new(),
            passes: 0,
        }
    }

    /// Counts one pass of a strategy loop. A pass either commits at least one
    /// order or ends the loop of its courier (or the whole run), so no run
    /// needs more than orders + couriers + 1 passes.
    pub(crate) fn next_pass(&mut self) {
        self.passes += 1;
        debug_assert!(
            self.passes <= self.instance.num_orders() + self.instance.num_couriers() + 1,
            "assignment loop does not terminate after {} passes",
            self.passes
        );
    }

    pub(crate) fn order(&self, order: usize) -> &'a Order {
        &self.instance.orders[order]
    }

    pub(crate) fn revenue_for(&self, state: &CourierState, order: usize) -> Revenue {
        self.model.revenue(state, &self.instance.orders[order])
    }

    pub(crate) fn revenue(&self, courier: usize, order: usize) -> Revenue {
        self.revenue_for(&self.states[courier], order)
    }

    /// Feasible available order with the highest revenue for `state`, the
    /// lowest order index wins ties.
    pub(crate) fn best_order_for(
        &self,
        state: &CourierState,
        skip: Option<usize>,
    ) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for order in self.pool.iter_order_ids() {
            if skip == Some(order) {
                continue;
            }
            if let Revenue::Feasible(revenue) = self.revenue_for(state, order) {
                if best.map_or(true, |(_, r)| revenue > r) {
                    best = Some((order, revenue));
                }
            }
        }
        best
    }

    pub(crate) fn best_order(&self, courier: usize) -> Option<(usize, f64)> {
        self.best_order_for(&self.states[courier], None)
    }

    /// Assigns `order` to `courier`. Returns false, without touching any
    /// state, if the pair is not feasible.
    pub(crate) fn commit(&mut self, courier: usize, order: usize) -> bool {
        let o = &self.instance.orders[order];
        let revenue = self.model.revenue(&self.states[courier], o);
        match (revenue, self.model.commit(&mut self.states[courier], o)) {
            (Revenue::Feasible(revenue), Some(trip)) => {
                self.pool.remove(order);
                debug!(
                    "courier {} takes order {} (pickup at {}, dropoff at {}, revenue {})",
                    self.instance.couriers[courier].id,
                    o.id,
                    trip.pickup_at,
                    trip.dropoff_at,
                    revenue
                );
                self.dispatch.commit(Commitment {
                    courier,
                    order,
                    revenue,
                    pickup_at: trip.pickup_at,
                    dropoff_at: trip.dropoff_at,
                });
                true
            }
            _ => false,
        }
    }

    pub(crate) fn into_dispatch(self) -> Dispatch {
        self.dispatch
    }
}
