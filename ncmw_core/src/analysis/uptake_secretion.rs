//! Classify the exchange reactions of a model as uptake or secretion
use crate::analysis::AnalysisError;
use crate::configuration::exchange_marker;
use crate::metabolic_model::model::Model;
use crate::optimize::solvers::FluxSolver;
use crate::optimize::{FvaTable, OptimizationStatus};

use log::debug;
use serde::Serialize;

/// Exchange reaction ids a model imports (uptake) and exports (secretion)
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UptakeSecretion {
    pub uptake: Vec<String>,
    pub secretion: Vec<String>,
}

/// Uptake and secretion reactions of a single flux balance solution
///
/// # Note:
/// A flux balance optimum is generally not unique, so a different solver (or even a different
/// run) can report different exchanges. Use [`secretion_uptake_fva`] when the result needs
/// to be reproducible.
pub fn secretion_uptake_fba<S: FluxSolver + ?Sized>(
    model: &Model,
    solver: &S,
) -> Result<UptakeSecretion, AnalysisError> {
    let solution = model.optimize(solver)?;
    if solution.status != OptimizationStatus::Optimal {
        return Err(AnalysisError::NotOptimal {
            model: model.id.clone().unwrap_or_default(),
            status: solution.status,
        });
    }
    let summary = model.summary(&solution);
    let uptake: Vec<String> = summary
        .uptake_flux
        .iter()
        .filter(|(_, flux)| **flux > 0f64)
        .map(|(id, _)| id.clone())
        .collect();
    let secretion: Vec<String> = summary
        .secretion_flux
        .iter()
        .filter(|(_, flux)| **flux < 0f64)
        .map(|(id, _)| id.clone())
        .collect();
    debug!(
        "FBA: model {} takes up {} and secretes {} metabolites",
        model.id.as_deref().unwrap_or_default(),
        uptake.len(),
        secretion.len()
    );
    Ok(UptakeSecretion { uptake, secretion })
}

/// Uptake and secretion reactions from the results of a flux variability analysis
///
/// Only reactions whose id contains the exchange marker (`EX_` by default) are considered.
/// A reaction is an uptake if its minimum flux is negative, and a secretion if its maximum
/// flux is positive.
///
/// # Note:
/// A reaction whose range spans zero is listed as both uptake and secretion.
pub fn secretion_uptake_fva(fva: &FvaTable) -> UptakeSecretion {
    let marker = exchange_marker();
    let exchanges: Vec<_> = fva
        .iter()
        .filter(|(id, _)| id.contains(marker.as_str()))
        .collect();
    let uptake = exchanges
        .iter()
        .filter(|(_, range)| range.minimum < 0f64)
        .map(|(id, _)| (*id).clone())
        .collect();
    let secretion = exchanges
        .iter()
        .filter(|(_, range)| range.maximum > 0f64)
        .map(|(id, _)| (*id).clone())
        .collect();
    UptakeSecretion { uptake, secretion }
}
