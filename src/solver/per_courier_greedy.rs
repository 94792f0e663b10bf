use log::{debug, info};
use rand::seq::SliceRandom;

use crate::objective::{Revenue, RevenueModel};
use crate::problem::dispatch::DispatchInstance;
use crate::problem::Time;
use crate::solution::Dispatch;
use crate::solver::early_stop::EarlyStop;
use crate::solver::{AssignmentState, AssignmentStrategy};
use crate::utils::Random;

/// Builds the chain of one courier at a time, always taking its best
/// remaining order. Couriers are visited in random order.
pub struct PerCourierGreedy {
    rng: Random,
}

impl PerCourierGreedy {
    pub fn with_rng(rng: Random) -> Self {
        Self { rng }
    }
}

impl AssignmentStrategy for PerCourierGreedy {
    fn name(&self) -> &'static str {
        "per courier greedy"
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
            let mut early_stop = EarlyStop::default();
            loop {
                state.next_pass();
                let order = match state.best_order(courier) {
                    Some((o, r)) if early_stop.admits(Revenue::Feasible(r)) => o,
                    _ => break,
                };
                let committed = state.commit(courier, order);
                debug_assert!(committed);
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
            "per courier greedy served {} of {} orders",
            state.dispatch.number_of_served_orders(),
            instance.num_orders()
        );
        state.into_dispatch()
    }
}

#[cfg(test)]
mod tests {
    use crate::problem::dispatch::create_instance_with;
    use crate::problem::dispatch::tests::{courier, order};
    use crate::problem::INITIAL_TIME;
    use crate::utils::create_seeded_rng;

    use super::*;

    #[test]
    fn chains_orders_of_a_single_courier() -> anyhow::Result<()> {
        let instance = create_instance_with(
            "chain",
            vec![courier(1, 0, 0)],
            vec![
                order(1, (0, 0, 360, 400), (0, 10, 370, 500), 100.0),
                order(2, (0, 10, 390, 420), (0, 20, 400, 500), 100.0),
                order(3, (0, 20, 400, 430), (0, 30, 400, 500), 100.0),
            ],
        )?;
        let mut strategy = PerCourierGreedy::with_rng(create_seeded_rng(0));
        let dispatch = strategy.assign(&instance, &RevenueModel::default(), INITIAL_TIME);
        let orders: Vec<usize> = dispatch.commitments().iter().map(|c| c.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
        assert_eq!(dispatch.commitments()[2].dropoff_at, 450);
        assert_eq!(dispatch.total_revenue(), 3.0 * 40.0);
        Ok(())
    }

    #[test]
    fn every_courier_has_its_own_stop_flag() -> anyhow::Result<()> {
        let instance = create_instance_with(
            "flags",
            vec![courier(1, 0, 0), courier(2, 0, 0)],
            vec![
                order(1, (0, 0, 360, 1000), (0, 10, 0, 1000), 50.0),
                order(2, (0, 0, 360, 1000), (0, 10, 0, 1000), 55.0),
            ],
        )?;
        let mut strategy = PerCourierGreedy::with_rng(create_seeded_rng(1));
        let dispatch = strategy.assign(&instance, &RevenueModel::default(), INITIAL_TIME);
        // the first courier takes one loss, then stops at the second loss,
        // the second courier may again take a loss
        assert_eq!(dispatch.number_of_served_orders(), 2);
        assert_eq!(dispatch.number_of_couriers_used(&instance), 2);
        Ok(())
    }
}
