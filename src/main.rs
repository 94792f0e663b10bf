#![allow(dead_code)]

use std::path::Path;

use clap::Parser;
use log::{debug, info, warn};
use rand::random;
use took::Timer;

use crate::config::{read_config, DispatchConfig};
use crate::io::load_instance;
use crate::io::route_writer::{load_route, write_route};
use crate::utils::create_seeded_rng;
use crate::utils::logging::{format_log_method_dispatch_timed, format_summary_line};
use crate::utils::validator::{validate_route, ValidatorResult};

mod cli;
mod config;
mod io;
mod matching;
mod objective;
mod problem;
mod solution;
mod solver;
mod utils;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = argfile::expand_args_from(
        std::env::args_os(),
        argfile::parse_fromfile,
        argfile::PREFIX,
    )?;
    let args = cli::ProgramArguments::parse_from(args);
    info!("{:?}", &args);

    let mut rng = {
        let seed_value = args.seed.unwrap_or_else(|| random::<i128>().abs());
        info!("seed: {}", seed_value);
        create_seeded_rng(seed_value)
    };

    let config = match &args.config {
        Some(path) => read_config(path.as_str())?,
        None => DispatchConfig::default(),
    }
    .with_overrides(&args.solver);
    info!("{:?}", &config);

    let load_timer = Timer::new();
    let instance = load_instance(&args.instance)?;
    info!("instance loaded after {}", load_timer.took());

    let res = solver::solve(&instance, &config, args.solver.strategy, &mut rng);
    let events = res.dispatch.route_events(&instance);

    let written;
    let route = match &args.solution {
        Some(path) => {
            write_route(path.as_str(), &events)?;
            info!("route with {} events written to {}", events.len(), path);
            // the file is what gets validated
            written = load_route(path.as_str())?;
            &written
        }
        None => &events,
    };

    if !args.skip_validation {
        match validate_route(&instance, &config, route) {
            ValidatorResult::Valid(revenue) => info!("route is valid, revenue {:.2}", revenue),
            ValidatorResult::ConstraintViolation(violation) => {
                warn!("route violates {:?}", violation)
            }
        }
    }

    if let Some(dir) = &args.round_snapshot_directory {
        std::fs::create_dir_all(dir)?;
        let mut begin = 0;
        for (round, &end) in res.dispatch.round_ends().iter().enumerate() {
            let committed = &res.dispatch.commitments()[begin..end];
            debug!(
                "round {}: {} orders, revenue {:.2}",
                round + 1,
                committed.len(),
                committed.iter().map(|c| c.revenue).sum::<f64>()
            );
            begin = end;

            let path = Path::new(dir).join(format!("route_{}.json", round + 1));
            write_route(
                path.to_string_lossy(),
                &res.dispatch.route_events_until_round(round, &instance),
            )?;
        }
        info!(
            "{} round snapshots written to {}",
            res.dispatch.round_ends().len(),
            dir
        );
    }

    if args.print_summary_to_stdout {
        println!(
            "{}",
            format_summary_line(res.strategy, &res.dispatch, &instance, &res.time)
        );
    }

    info!(
        "{}",
        format_log_method_dispatch_timed(res.strategy, &res.dispatch, &instance, &res.time)
    );
    Ok(())
}
