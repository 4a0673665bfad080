//! Analyses comparing the metabolite exchanges of metabolic models
//!
//! - [`transport`]: find reactions moving metabolites between compartments
//! - [`coverage`]: check which medium metabolites have a transporter, per compartment
//! - [`uptake_secretion`]: which exchanges a model imports or exports
//! - [`exchange_table`]: side by side uptake/secretion tables for pairs of models
//! - [`sensitivity`]: how growth responds to restricting a single medium component
pub mod coverage;
pub mod exchange_table;
pub mod sensitivity;
pub mod transport;
pub mod uptake_secretion;

#[cfg(test)]
pub(crate) mod test_support;

use crate::metabolic_model::model::ModelError;
use crate::optimize::solvers::SolverError;
use crate::optimize::OptimizationStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Model error: {0}")]
    Model(#[from] ModelError),
    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),
    #[error("Unable to build metabolite pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("Model {model} could not be optimized, status {status:?}")]
    NotOptimal {
        model: String,
        status: OptimizationStatus,
    },
}
