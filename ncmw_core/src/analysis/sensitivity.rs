//! Sensitivity of growth to the availability of single medium components
use crate::analysis::AnalysisError;
use crate::configuration::sweep_steps;
use crate::metabolic_model::model::{Model, ModelError};
use crate::optimize::solvers::FluxSolver;
use crate::utils::spacing::linspace;

use derive_builder::Builder;
use log::{debug, warn};
use serde::Serialize;

/// Options for [`compute_uptake_growth_relationship`]
#[derive(Builder, Clone, Debug, PartialEq)]
pub struct SweepConfig {
    /// Number of evenly spaced import bounds to evaluate, from the current bound down to 0
    #[builder(default = "sweep_steps()")]
    pub steps: usize,
    /// Import bounds to use instead of the evenly spaced ones, used as is for every reaction
    #[builder(default = "None")]
    pub custom_flux: Option<Vec<f64>>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            steps: sweep_steps(),
            custom_flux: None,
        }
    }
}

/// Import bounds and the resulting growth rates, one entry per swept reaction
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct SweepResult {
    /// Swept exchange reaction ids
    pub ids: Vec<String>,
    /// Import bounds evaluated for each reaction
    pub fluxes: Vec<Vec<f64>>,
    /// Growth rate at each of the bounds, NaN where the solver found no optimum
    pub growths: Vec<Vec<f64>>,
}

/// Temporary change of the import bound of a single exchange reaction
///
/// The bounds of the reaction are recorded when the override is acquired and put back when
/// it is dropped, no matter how the scope is left.
pub struct MediumOverride<'a> {
    model: &'a mut Model,
    reaction_id: String,
    original_bounds: (f64, f64),
    original_medium_bound: f64,
}

impl<'a> MediumOverride<'a> {
    /// Start overriding the import bound of `reaction_id`
    pub fn acquire(model: &'a mut Model, reaction_id: &str) -> Result<Self, ModelError> {
        model.check_exchange(reaction_id)?;
        let reaction = &model.reactions[reaction_id];
        let original_bounds = (reaction.lower_bound, reaction.upper_bound);
        let original_medium_bound = model.medium().get(reaction_id).copied().unwrap_or(0f64);
        Ok(MediumOverride {
            model,
            reaction_id: reaction_id.to_string(),
            original_bounds,
            original_medium_bound,
        })
    }

    /// Medium value of the reaction before the override, 0 if it wasn't part of the medium
    pub fn original_medium_bound(&self) -> f64 {
        self.original_medium_bound
    }

    /// Set the import bound, the rest of the medium is left untouched
    pub fn set(&mut self, value: f64) -> Result<(), ModelError> {
        self.model.set_medium_bound(&self.reaction_id, value)
    }

    /// The model with the override in place
    pub fn model(&self) -> &Model {
        &*self.model
    }
}

impl Drop for MediumOverride<'_> {
    fn drop(&mut self) {
        if let Some(reaction) = self.model.reactions.get_mut(&self.reaction_id) {
            (reaction.lower_bound, reaction.upper_bound) = self.original_bounds;
        }
    }
}

/// Compute how growth responds to lowering the import bound of each of the given exchanges
///
/// For every id, the import bound is moved from its current medium value (0 if absent) down
/// to 0 in `config.steps` evenly spaced values, or through `config.custom_flux` if given,
/// and the model is optimized at every value. All other medium components are kept constant,
/// and the original bound is restored once the reaction has been swept, including when the
/// solver fails part way.
///
/// This can be used for a sensitivity analysis: medium components which are important for
/// the model are expected to strongly influence growth.
///
/// # Note:
/// Growth values where the solver finds no optimum are recorded as NaN. Errors raised by the
/// solver abort the sweep.
pub fn compute_uptake_growth_relationship<I, S>(
    model: &mut Model,
    solver: &S,
    ids: &[I],
    config: &SweepConfig,
) -> Result<SweepResult, AnalysisError>
where
    I: AsRef<str>,
    S: FluxSolver + ?Sized,
{
    let mut result = SweepResult::default();
    for id in ids {
        let id = id.as_ref();
        let mut medium_override = MediumOverride::acquire(model, id)?;
        let flux = match &config.custom_flux {
            Some(custom) => custom.clone(),
            None => linspace(medium_override.original_medium_bound(), 0f64, config.steps),
        };
        debug!("Sweeping {} over {} import bounds", id, flux.len());
        let mut growth = Vec::with_capacity(flux.len());
        for &f in &flux {
            medium_override.set(f)?;
            let value = solver.slim_optimize(medium_override.model())?;
            if value.is_nan() {
                warn!("No optimum found with the import bound of {} set to {}", id, f);
            }
            growth.push(value);
        }
        drop(medium_override);
        result.ids.push(id.to_string());
        result.fluxes.push(flux);
        result.growths.push(growth);
    }
    Ok(result)
}
