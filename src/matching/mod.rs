#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::objective::{Revenue, RevenueModel};
use crate::problem::dispatch::DispatchInstance;
use crate::solution::{CourierState, OrderPool};

pub use crate::matching::hungarian::HungarianMatcher;

mod hungarian;

/// Revenues of all active couriers (rows) against all available orders
/// (columns). `Revenue::Infeasible` cells are never matched.
#[derive(Debug, Clone)]
pub struct RevenueMatrix {
    couriers: Vec<usize>,
    orders: Vec<usize>,
    cells: Vec<Revenue>,
}

impl RevenueMatrix {
    pub fn build(
        instance: &DispatchInstance,
        model: &RevenueModel,
        states: &[CourierState],
        couriers: &[usize],
        pool: &OrderPool,
    ) -> Self {
        let orders: Vec<usize> = pool.iter_order_ids().collect();

        #[cfg(feature = "parallel")]
            let iter = couriers.par_iter();
        #[cfg(not(feature = "parallel"))]
            let iter = couriers.iter();

        let rows = iter
            .map(|&c| {
                orders
                    .iter()
                    .map(|&o| model.revenue(&states[c], &instance.orders[o]))
                    .collect::<Vec<Revenue>>()
            })
            .collect::<Vec<Vec<Revenue>>>();

        Self {
            couriers: couriers.to_vec(),
            orders,
            cells: rows.concat(),
        }
    }

    #[cfg(test)]
    pub fn from_rows(couriers: Vec<usize>, orders: Vec<usize>, rows: Vec<Vec<Revenue>>) -> Self {
        debug_assert_eq!(couriers.len(), rows.len());
        debug_assert!(rows.iter().all(|r| r.len() == orders.len()));
        Self {
            couriers,
            orders,
            cells: rows.concat(),
        }
    }

    pub fn num_rows(&self) -> usize {
        self.couriers.len()
    }
    pub fn num_columns(&self) -> usize {
        self.orders.len()
    }
    pub fn is_empty(&self) -> bool {
        self.couriers.is_empty() || self.orders.is_empty()
    }
    pub fn at(&self, row: usize, column: usize) -> Revenue {
        self.cells[row * self.orders.len() + column]
    }
    pub fn courier_of_row(&self, row: usize) -> usize {
        self.couriers[row]
    }
    pub fn order_of_column(&self, column: usize) -> usize {
        self.orders[column]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchedPair {
    pub row: usize,
    pub column: usize,
    pub revenue: f64,
}

pub trait BipartiteMatcher {
    /// Returns pairs with pairwise distinct rows and columns, each on a
    /// feasible cell with non-negative revenue, maximizing the total revenue.
    fn solve(&self, matrix: &RevenueMatrix) -> Vec<MatchedPair>;
}
