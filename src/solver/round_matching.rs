use log::{debug, info};

use crate::matching::{BipartiteMatcher, HungarianMatcher, RevenueMatrix};
use crate::objective::RevenueModel;
use crate::problem::dispatch::DispatchInstance;
use crate::problem::Time;
use crate::solution::Dispatch;
use crate::solver::{AssignmentState, AssignmentStrategy};

/// Every round matches the active couriers with the available orders such
/// that the total revenue of the round is maximal, then commits all matched
/// pairs at once. Couriers without any feasible order left retire.
#[derive(Debug)]
pub struct RoundRobinMatching<M = HungarianMatcher> {
    matcher: M,
}

impl RoundRobinMatching {
    pub fn new() -> Self {
        Self::with_matcher(HungarianMatcher)
    }
}

impl<M: BipartiteMatcher> RoundRobinMatching<M> {
    pub fn with_matcher(matcher: M) -> Self {
        Self { matcher }
    }
}

impl<M: BipartiteMatcher> AssignmentStrategy for RoundRobinMatching<M> {
    fn name(&self) -> &'static str {
        "round robin matching"
    }

    fn assign(
        &mut self,
        instance: &DispatchInstance,
        model: &RevenueModel,
        initial_time: Time,
    ) -> Dispatch {
        let mut state = AssignmentState::new(instance, model, initial_time);
        let mut active: Vec<usize> = (0..instance.num_couriers()).collect();

        loop {
            state.next_pass();
            let matrix = RevenueMatrix::build(instance, model, &state.states, &active, &state.pool);
            if matrix.is_empty() {
                break;
            }
            let pairs = self.matcher.solve(&matrix);
            if pairs.is_empty() {
                break;
            }

            // pairs share neither courier nor order, each is still feasible
            for pair in &pairs {
                let committed = state.commit(
                    matrix.courier_of_row(pair.row),
                    matrix.order_of_column(pair.column),
                );
                debug_assert!(committed);
            }
            state.dispatch.close_round();

            let num_active = active.len();
            active.retain(|&courier| {
                state
                    .pool
                    .iter_order_ids()
                    .any(|order| state.revenue(courier, order).is_feasible())
            });
            debug!("{} couriers retired", num_active - active.len());
            info!(
                "rounds completed: {} ({} matched, {} couriers active, {} orders left)",
                state.dispatch.round_ends().len(),
                pairs.len(),
                active.len(),
                state.pool.count()
            );
        }

        state.into_dispatch()
    }
}

#[cfg(test)]
mod tests {
    use crate::matching::MatchedPair;
    use crate::problem::dispatch::create_instance_with;
    use crate::problem::dispatch::tests::{courier, order};
    use crate::problem::INITIAL_TIME;

    use super::*;

    #[test]
    fn matches_all_couriers_in_one_round() -> anyhow::Result<()> {
        let instance = create_instance_with(
            "round",
            vec![courier(1, 0, 0), courier(2, 0, 0)],
            vec![
                order(1, (0, 0, 360, 400), (0, 10, 370, 500), 100.0),
                order(2, (0, 0, 360, 400), (0, 10, 370, 500), 90.0),
                order(3, (0, 0, 360, 400), (0, 10, 370, 500), 80.0),
            ],
        )?;
        let dispatch =
            RoundRobinMatching::new().assign(&instance, &RevenueModel::default(), INITIAL_TIME);
        // the third order expires while the first two are served
        assert_eq!(dispatch.round_ends(), &[2]);
        let mut orders: Vec<usize> = dispatch.commitments().iter().map(|c| c.order).collect();
        orders.sort();
        assert_eq!(orders, vec![0, 1]);
        assert_eq!(dispatch.number_of_couriers_used(&instance), 2);
        Ok(())
    }

    #[test]
    fn continues_with_later_rounds() -> anyhow::Result<()> {
        let instance = create_instance_with(
            "rounds",
            vec![courier(1, 0, 0)],
            vec![
                order(1, (0, 0, 360, 400), (0, 10, 370, 500), 100.0),
                order(2, (0, 10, 390, 420), (0, 20, 400, 500), 100.0),
            ],
        )?;
        let dispatch =
            RoundRobinMatching::new().assign(&instance, &RevenueModel::default(), INITIAL_TIME);
        assert_eq!(dispatch.round_ends(), &[1, 2]);
        assert_eq!(dispatch.total_revenue(), 80.0);
        Ok(())
    }

    #[test]
    fn negative_pairs_are_not_committed() -> anyhow::Result<()> {
        let instance = create_instance_with(
            "losses",
            vec![courier(1, 0, 0)],
            vec![order(1, (0, 0, 360, 400), (0, 10, 370, 500), 10.0)],
        )?;
        let dispatch =
            RoundRobinMatching::new().assign(&instance, &RevenueModel::default(), INITIAL_TIME);
        assert_eq!(dispatch.number_of_served_orders(), 0);
        assert!(dispatch.round_ends().is_empty());
        Ok(())
    }

    struct NoMatch;

    impl BipartiteMatcher for NoMatch {
        fn solve(&self, _matrix: &RevenueMatrix) -> Vec<MatchedPair> {
            Vec::new()
        }
    }

    #[test]
    fn empty_match_ends_the_run() -> anyhow::Result<()> {
        let instance = create_instance_with(
            "nomatch",
            vec![courier(1, 0, 0)],
            vec![order(1, (0, 0, 360, 400), (0, 10, 370, 500), 100.0)],
        )?;
        let dispatch = RoundRobinMatching::with_matcher(NoMatch).assign(
            &instance,
            &RevenueModel::default(),
            INITIAL_TIME,
        );
        assert_eq!(dispatch.number_of_served_orders(), 0);
        Ok(())
    }

    #[test]
    fn rounds_are_exclusive() {
        use crate::solver::tests::random_instance;
        use crate::utils::create_seeded_rng;

        let mut rng = create_seeded_rng(21);
        let instance = random_instance(&mut rng, 6, 50);
        let dispatch =
            RoundRobinMatching::new().assign(&instance, &RevenueModel::default(), INITIAL_TIME);
        let mut begin = 0;
        for &end in dispatch.round_ends() {
            let round = &dispatch.commitments()[begin..end];
            assert!(!round.is_empty());
            for (i, a) in round.iter().enumerate() {
                for b in round.iter().skip(i + 1) {
                    assert_ne!(a.courier, b.courier);
                    assert_ne!(a.order, b.order);
                }
            }
            begin = end;
        }
        assert!(dispatch.round_ends().len() <= instance.num_orders());
    }
}
