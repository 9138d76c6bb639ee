// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::path::Path;

use rune_cfg::RuneConfig;

use crate::{
    config::model::{LapwatchConfig, clamp_tick_ms},
    core::laps::LapOrder,
    sdebug, swarn,
};

#[derive(Debug)]
pub enum ConfigParseError {
    RuneConfig(String),
    InvalidValue { key: &'static str, value: String },
}

impl fmt::Display for ConfigParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigParseError::RuneConfig(msg) =>
                write!(f, "Configuration error: {}", msg),
            ConfigParseError::InvalidValue { key, value } =>
                write!(f, "Invalid value for {}: '{}'", key, value),
        }
    }
}

impl std::error::Error for ConfigParseError {}

pub fn load_file(path: &Path) -> Result<LapwatchConfig, ConfigParseError> {
    let config = RuneConfig::from_file(path).map_err(|e| {
        ConfigParseError::RuneConfig(format!("failed to load {}: {}", path.display(), e))
    })?;

    sdebug!("Config", "Loaded config from: {}", path.display());
    parse_config(&config)
}

/// Reads the `lapwatch` block. Keys accept snake_case or kebab-case.
pub fn parse_config(config: &RuneConfig) -> Result<LapwatchConfig, ConfigParseError> {
    let defaults = LapwatchConfig::default();

    let tick_ms = config
        .get::<u64>("lapwatch.tick_ms")
        .or_else(|_| config.get::<u64>("lapwatch.tick-ms"))
        .map(|ms| {
            let clamped = clamp_tick_ms(ms);
            if clamped != ms {
                swarn!("Config", "tick_ms {} out of range, using {}", ms, clamped);
            }
            clamped
        })
        .unwrap_or(defaults.tick_ms);

    let lap_order = match config
        .get::<String>("lapwatch.lap_order")
        .or_else(|_| config.get::<String>("lapwatch.lap-order"))
        .ok()
    {
        Some(raw) => parse_lap_order(&raw)?,
        None => defaults.lap_order,
    };

    let verbose = config
        .get::<bool>("lapwatch.verbose")
        .unwrap_or(defaults.verbose);

    Ok(LapwatchConfig {
        tick_ms,
        lap_order,
        verbose,
    })
}

pub fn parse_lap_order(raw: &str) -> Result<LapOrder, ConfigParseError> {
    LapOrder::parse(raw).ok_or_else(|| ConfigParseError::InvalidValue {
        key: "lap_order",
        value: raw.to_string(),
    })
}
