use log::{debug, info};
use rand::seq::SliceRandom;

use crate::objective::{Revenue, RevenueModel};
use crate::problem::dispatch::DispatchInstance;
use crate::problem::Time;
use crate::solution::Dispatch;
use crate::solver::{AssignmentState, AssignmentStrategy};
use crate::utils::Random;

/// Chain of at most two orders starting at a courier's current state.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Chain {
    first: usize,
    second: Option<usize>,
    revenue: f64,
}

/// Like the per courier greedy, but every candidate is rated together with
/// the best follow-up order it leaves the courier with.
pub struct PerCourierLookahead {
    rng: Random,
}

impl PerCourierLookahead {
    pub fn with_rng(rng: Random) -> Self {
        Self { rng }
    }

    /// The probe runs on a copy of the courier state, neither the courier nor
    /// the pool are changed by it.
    fn best_chain(state: &AssignmentState, courier: usize) -> Option<Chain> {
        let current = state.states[courier];
        let mut best: Option<Chain> = None;

        for first in state.pool.iter_order_ids() {
            let revenue = match state.revenue_for(&current, first) {
                Revenue::Feasible(revenue) => revenue,
                Revenue::Infeasible => continue,
            };
            let mut probe = current;
            if state.model.commit(&mut probe, state.order(first)).is_none() {
                continue;
            }

            let chain = match state.best_order_for(&probe, Some(first)) {
                Some((second, follow_up)) if follow_up >= 0.0 => Chain {
                    first,
                    second: Some(second),
                    revenue: revenue + follow_up,
                },
                _ => Chain {
                    first,
                    second: None,
                    revenue,
                },
            };
            if best.map_or(true, |b| chain.revenue > b.revenue) {
                best = Some(chain);
            }
        }
        best
    }
}

impl AssignmentStrategy for PerCourierLookahead {
    fn name(&self) -> &'static str {
        "per courier lookahead"
    }

    fn assign(
        &mut self,
        instance: &DispatchInstance,
        model: &RevenueModel,
        initial_time: Time,
    ) -> Dispatch {
        let mut state = AssignmentState::new(instance, model, initial_time);
        let mut couriers: Vec<usize> = (0..instance.num_couriers()).collect();
        couriers.shuffle(&mut self.rng);

        for (idx, &courier) in couriers.iter().enumerate() {
            let served_before = state.dispatch.number_of_served_orders();
            loop {
                state.next_pass();
                let chain = match Self::best_chain(&state, courier) {
                    Some(chain) if chain.revenue >= 0.0 => chain,
                    _ => break,
                };
                // the rest of the lookahead is recomputed after every commit
                let committed = state.commit(courier, chain.first);
                debug_assert!(committed);
                if let Some(second) = chain.second {
                    let committed = state.commit(courier, second);
                    debug_assert!(committed);
                }
            }
            debug!(
                "processed courier {} ({}), num orders: {}",
                idx,
                instance.couriers[courier].id,
                state.dispatch.number_of_served_orders() - served_before
            );
            if state.pool.is_empty() {
                break;
            }
        }

        info!(
            "per courier lookahead served {} of {} orders",
            state.dispatch.number_of_served_orders(),
            instance.num_orders()
        );
        state.into_dispatch()
    }
}
