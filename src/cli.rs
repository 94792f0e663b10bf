use clap::{Parser, ValueEnum};

use crate::objective::Objective;
use crate::problem::Time;

#[derive(Parser, Debug)]
#[command(version)]
pub struct ProgramArguments {
    #[arg(long, help = "rng seed")]
    pub seed: Option<i128>,

    #[arg(short, long, help = "snapshot file path")]
    pub instance: String,

    #[arg(short, long, help = "route file path")]
    pub solution: Option<String>,

    #[arg(long, help = "TOML file with the dispatch model constants")]
    pub config: Option<String>,

    #[arg(
        long,
        help = "directory to store the accumulated route after every matching round"
    )]
    pub round_snapshot_directory: Option<String>,

    #[command(flatten)]
    pub solver: SolverArguments,

    #[arg(long, help = "skip re-simulating the produced route", default_value = "false")]
    pub skip_validation: bool,

    #[arg(long, help = "print summary to stdout", default_value = "false")]
    pub print_summary_to_stdout: bool,
}

#[derive(Clone, Copy, ValueEnum, Debug, PartialEq, Eq)]
pub enum Strategy {
    GlobalGreedy,
    PerCourierGreedy,
    PerCourierLookahead,
    RoundRobinMatching,
}

#[derive(clap::Args, Clone, Debug)]
pub struct SolverArguments {
    #[arg(long = "strategy", value_enum, default_value = "round-robin-matching")]
    pub strategy: Strategy,
    #[arg(long, help = "overrides the objective of the config")]
    pub objective: Option<Objective>,
    #[arg(long, help = "time at which every courier becomes available")]
    pub initial_time: Option<Time>,
    #[arg(long, help = "time spent at every pickup and dropoff")]
    pub handling_time: Option<Time>,
    #[arg(long, help = "cost per time unit charged against the payment")]
    pub time_cost_factor: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        ProgramArguments::command().debug_assert()
    }

    #[test]
    fn strategy_defaults_to_matching() {
        let args = ProgramArguments::parse_from(["courier-dispatch", "--instance", "in.json"]);
        assert_eq!(args.solver.strategy, Strategy::RoundRobinMatching);
        assert!(args.solver.objective.is_none());
        assert!(args.seed.is_none());

        let args = ProgramArguments::parse_from([
            "courier-dispatch",
            "-i",
            "in.json",
            "--strategy",
            "per-courier-lookahead",
            "--seed",
            "42",
        ]);
        assert_eq!(args.solver.strategy, Strategy::PerCourierLookahead);
        assert_eq!(args.seed, Some(42));
    }
}
