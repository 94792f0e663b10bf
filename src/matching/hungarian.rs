//! Kuhn-Munkres assignment on the revenue matrix.
//!
//! The assignment is solved as a maximization on integer weights. A feasible
//! cell with non-negative revenue `r` weighs `round(r * SCALE) * (n + 1) + 1`
//! where `n` is the smaller side of the matrix, every other cell weighs 0.
//! At most `n` pairs are matched, so the `+ 1` per pair never outweighs a
//! single revenue unit. The total revenue is maximal, and among matchings of
//! equal revenue the one serving more orders wins. Because all weights are non-negative, an
//! optimal complete assignment restricted to its positive cells is such a
//! matching.

use pathfinding::kuhn_munkres::{kuhn_munkres, Weights};

use crate::matching::{BipartiteMatcher, MatchedPair, RevenueMatrix};
use crate::objective::Revenue;

/// Revenues are compared with a resolution of 1 / SCALE.
const SCALE: f64 = 1_000_000.0;

/// Weight of cells that must not be matched.
const EXCLUDED: i128 = 0;

/// Row-major weights, rows <= columns as required by kuhn_munkres.
struct I128Weights {
    rows: usize,
    columns: usize,
    data: Vec<i128>,
}

impl Weights<i128> for I128Weights {
    fn rows(&self) -> usize {
        self.rows
    }

    fn columns(&self) -> usize {
        self.columns
    }

    fn at(&self, row: usize, col: usize) -> i128 {
        self.data[row * self.columns + col]
    }

    fn neg(&self) -> Self {
        I128Weights {
            rows: self.rows,
            columns: self.columns,
            data: self.data.iter().map(|x| x.saturating_neg()).collect(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HungarianMatcher;

impl HungarianMatcher {
    fn weight(revenue: Revenue, rows: usize) -> i128 {
        match revenue {
            Revenue::Feasible(value) if value >= 0.0 => {
                (value * SCALE).round() as i128 * (rows as i128 + 1) + 1
            }
            _ => EXCLUDED,
        }
    }
}

impl BipartiteMatcher for HungarianMatcher {
    fn solve(&self, matrix: &RevenueMatrix) -> Vec<MatchedPair> {
        if matrix.is_empty() {
            return Vec::new();
        }

        // couriers are rows unless there are more couriers than orders
        let transposed = matrix.num_rows() > matrix.num_columns();
        let (rows, columns) = if transposed {
            (matrix.num_columns(), matrix.num_rows())
        } else {
            (matrix.num_rows(), matrix.num_columns())
        };
        let cell = |r: usize, c: usize| {
            if transposed {
                (c, r)
            } else {
                (r, c)
            }
        };

        let mut data = Vec::with_capacity(rows * columns);
        for r in 0..rows {
            for c in 0..columns {
                let (row, column) = cell(r, c);
                data.push(Self::weight(matrix.at(row, column), rows));
            }
        }
        if data.iter().all(|w| *w == EXCLUDED) {
            return Vec::new();
        }
        let weights = I128Weights {
            rows,
            columns,
            data,
        };

        let (_total, assignment) = kuhn_munkres(&weights);

        assignment
            .into_iter()
            .enumerate()
            .filter(|&(r, c)| weights.at(r, c) > EXCLUDED)
            .filter_map(|(r, c)| {
                let (row, column) = cell(r, c);
                matrix.at(row, column).value().map(|revenue| MatchedPair {
                    row,
                    column,
                    revenue,
                })
            })
            .collect()
    }
}
