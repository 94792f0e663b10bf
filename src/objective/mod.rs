use clap::ValueEnum;
use serde::Deserialize;

pub use crate::objective::revenue::{Revenue, RevenueModel};

pub mod revenue;
pub mod timing;

/// What a completed order is worth to the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Objective {
    /// payment minus the time cost of the trip
    #[default]
    NetPayment,
    /// the time cost of the trip alone
    TimeCost,
}
