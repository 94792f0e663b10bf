use std::fs::File;
use std::io::Read;

use anyhow::Context;
use serde::Deserialize;

use crate::cli::SolverArguments;
use crate::objective::Objective;
use crate::problem::{Time, FIXED_HANDLING_TIME, INITIAL_TIME};

/// Constants of the dispatch model. Loaded from an optional TOML file, the
/// command line overrides single values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DispatchConfig {
    pub initial_time: Time,
    pub handling_time: Time,
    pub time_cost_factor: f64,
    pub objective: Objective,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            initial_time: INITIAL_TIME,
            handling_time: FIXED_HANDLING_TIME,
            time_cost_factor: 2.0,
            objective: Objective::default(),
        }
    }
}

impl DispatchConfig {
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn with_overrides(mut self, args: &SolverArguments) -> Self {
        if let Some(initial_time) = args.initial_time {
            self.initial_time = initial_time;
        }
        if let Some(handling_time) = args.handling_time {
            self.handling_time = handling_time;
        }
        if let Some(factor) = args.time_cost_factor {
            self.time_cost_factor = factor;
        }
        if let Some(objective) = args.objective {
            self.objective = objective;
        }
        self
    }
}

pub fn read_config(path: impl Into<String>) -> anyhow::Result<DispatchConfig> {
    let path = path.into();
    let mut s = String::new();
    File::open(&path)
        .with_context(|| format!("cannot open config {}", path))?
        .read_to_string(&mut s)?;
    DispatchConfig::from_toml_str(s.as_str()).with_context(|| format!("invalid config {}", path))
}
