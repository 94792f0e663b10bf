use crate::objective::Revenue;

/// Termination rule of the greedy chains: an infeasible best stops at once,
/// the first non-positive best is still taken, any later one stops. The flag
/// is never reset, not even by positive bests in between.
#[derive(Debug, Default, Clone)]
pub struct EarlyStop {
    seen_non_positive: bool,
}

impl EarlyStop {
    /// whether the best candidate of the current iteration may be committed
    pub fn admits(&mut self, best: Revenue) -> bool {
        match best {
            Revenue::Infeasible => false,
            Revenue::Feasible(value) if value > 0.0 => true,
            Revenue::Feasible(_) if self.seen_non_positive => false,
            Revenue::Feasible(_) => {
                self.seen_non_positive = true;
                true
            }
        }
    }
}
