use log::info;

use crate::objective::{Revenue, RevenueModel};
use crate::problem::dispatch::DispatchInstance;
use crate::problem::Time;
use crate::solution::Dispatch;
use crate::solver::early_stop::EarlyStop;
use crate::solver::{AssignmentState, AssignmentStrategy};

/// Commits the best (courier, order) pair over all couriers at a time.
/// Deterministic, ties go to the lower courier and then the lower order index.
#[derive(Debug, Default)]
pub struct GlobalGreedy;

impl AssignmentStrategy for GlobalGreedy {
    fn name(&self) -> &'static str {
        "global greedy"
    }

    fn assign(
        &mut self,
        instance: &DispatchInstance,
        model: &RevenueModel,
        initial_time: Time,
    ) -> Dispatch {
        let mut state = AssignmentState::new(instance, model, initial_time);
        let mut early_stop = EarlyStop::default();

        loop {
            state.next_pass();
            let mut best: Option<(usize, usize, f64)> = None;
            for courier in 0..instance.num_couriers() {
                if let Some((order, revenue)) = state.best_order(courier) {
                    if best.map_or(true, |(_, _, r)| revenue > r) {
                        best = Some((courier, order, revenue));
                    }
                }
            }

            let (courier, order) = match best {
                Some((c, o, r)) if early_stop.admits(Revenue::Feasible(r)) => (c, o),
                _ => break,
            };
            let committed = state.commit(courier, order);
            debug_assert!(committed);
        }

        info!(
            "global greedy served {} of {} orders",
            state.dispatch.number_of_served_orders(),
            instance.num_orders()
        );
        state.into_dispatch()
    }
}
