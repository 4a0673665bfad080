//! Analyses of the metabolite exchanges between genome scale metabolic models.
//!
//! Models are represented by [`metabolic_model::model::Model`], while optimization is left to
//! an external solver implementing [`optimize::solvers::FluxSolver`].

pub mod analysis;
pub mod configuration;
pub mod io;
pub mod metabolic_model;
pub mod optimize;
pub mod table;
mod utils;
