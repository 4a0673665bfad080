//! Global defaults shared by the model layer and the analyses
use std::sync::{LazyLock, RwLock};

pub static CONFIGURATION: LazyLock<RwLock<Configuration>> =
    LazyLock::new(|| RwLock::new(Configuration::default()));

pub struct Configuration {
    /// Default lower bound for new reactions
    pub lower_bound: f64,
    /// Default upper bound for new reactions
    pub upper_bound: f64,
    /// Fluxes with a magnitude at or below this are treated as zero in summaries
    pub tolerance: f64,
    /// Substring identifying exchange reactions in FVA results
    pub exchange_marker: String,
    /// Value used to pad short columns of an exchange table
    pub filler: String,
    /// Number of steps used by the uptake growth sweep when not specified
    pub sweep_steps: usize,
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration {
            lower_bound: -1000.,
            upper_bound: 1000.,
            tolerance: 1e-07,
            exchange_marker: "EX_".to_string(),
            filler: "na".to_string(),
            sweep_steps: 100,
        }
    }
}

/// Read the default lower bound, falling back to the built in default if the lock is poisoned
pub(crate) fn default_lower_bound() -> f64 {
    CONFIGURATION
        .read()
        .map(|c| c.lower_bound)
        .unwrap_or(-1000.)
}

/// Read the default upper bound, falling back to the built in default if the lock is poisoned
pub(crate) fn default_upper_bound() -> f64 {
    CONFIGURATION.read().map(|c| c.upper_bound).unwrap_or(1000.)
}

pub(crate) fn tolerance() -> f64 {
    CONFIGURATION.read().map(|c| c.tolerance).unwrap_or(1e-07)
}

pub(crate) fn exchange_marker() -> String {
    CONFIGURATION
        .read()
        .map(|c| c.exchange_marker.clone())
        .unwrap_or_else(|_| "EX_".to_string())
}

pub(crate) fn filler() -> String {
    CONFIGURATION
        .read()
        .map(|c| c.filler.clone())
        .unwrap_or_else(|_| "na".to_string())
}

pub(crate) fn sweep_steps() -> usize {
    CONFIGURATION.read().map(|c| c.sweep_steps).unwrap_or(100)
}
