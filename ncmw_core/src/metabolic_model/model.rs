//! This module provides the Model struct for representing an entire metabolic model
use crate::configuration::tolerance;
use crate::metabolic_model::metabolite::Metabolite;
use crate::metabolic_model::reaction::Reaction;
use crate::optimize::solvers::{FluxSolver, SolverError};
use crate::optimize::{FluxSolution, FvaTable};

use indexmap::IndexMap;
use thiserror::Error;

/// Represents a Genome Scale Metabolic Model
#[derive(Clone, Debug, Default)]
pub struct Model {
    /// Map of reaction ids to Reaction Objects
    pub reactions: IndexMap<String, Reaction>,
    /// Map of metabolite ids to Metabolite Objects
    pub metabolites: IndexMap<String, Metabolite>,
    /// Map of reaction ids to objective function coefficients
    pub objective: IndexMap<String, f64>,
    /// Id associated with the Model
    pub id: Option<String>,
    /// Compartments in the model
    ///
    /// An IndexMap<String, String> of {short name: long name}
    pub compartments: IndexMap<String, String>,
    /// A version identifier for the Model, stored as a string
    pub version: Option<String>,
}

impl Model {
    pub fn new_empty() -> Self {
        Model::default()
    }

    /// Add a reaction to the model
    ///
    /// # Parameters
    /// - reaction: Reaction to add
    ///
    /// # Examples
    /// ```rust
    /// use ncmw_core::metabolic_model::model::Model;
    /// use ncmw_core::metabolic_model::reaction::{Reaction, ReactionBuilder};
    /// let mut model = Model::new_empty();
    /// let new_reaction = ReactionBuilder::default()
    ///     .id("new_reaction".to_string())
    ///     .build()
    ///     .unwrap();
    /// model.add_reaction(new_reaction);
    /// ```
    pub fn add_reaction(&mut self, reaction: Reaction) {
        let id = reaction.id.clone();
        self.reactions.insert(id, reaction);
    }

    /// Add a metabolite to the model
    ///
    /// # Examples
    /// ```rust
    /// use ncmw_core::metabolic_model::metabolite::Metabolite;
    /// use ncmw_core::metabolic_model::model::Model;
    /// let mut model = Model::new_empty();
    /// model.add_metabolite(Metabolite::new("glc__D_e", "e"));
    /// ```
    pub fn add_metabolite(&mut self, metabolite: Metabolite) {
        let id = metabolite.id.clone();
        self.metabolites.insert(id, metabolite);
    }

    /// Add a compartment, given its short id and a descriptive label
    pub fn add_compartment(&mut self, id: &str, label: &str) {
        self.compartments.insert(id.to_string(), label.to_string());
    }

    /// Boundary reactions of the model, in model order
    pub fn exchanges(&self) -> impl Iterator<Item = &Reaction> {
        self.reactions.values().filter(|r| r.is_boundary())
    }

    /// Ids of the reactions a metabolite takes part in
    pub fn metabolite_reactions(&self, metabolite_id: &str) -> Vec<&str> {
        self.reactions
            .values()
            .filter(|r| r.metabolites.contains_key(metabolite_id))
            .map(|r| r.id.as_str())
            .collect()
    }

    /// The growth medium, a map of exchange reaction ids to their maximum import flux
    ///
    /// Only exchanges which currently allow an import are included.
    pub fn medium(&self) -> IndexMap<String, f64> {
        self.exchanges()
            .filter_map(|r| match r.uptake_bound() {
                Some(bound) if bound > 0f64 => Some((r.id.clone(), bound)),
                _ => None,
            })
            .collect()
    }

    /// Replace the growth medium
    ///
    /// Every exchange in `medium` gets the given import bound, every other exchange
    /// has its import closed.
    pub fn set_medium(&mut self, medium: &IndexMap<String, f64>) -> Result<(), ModelError> {
        for id in medium.keys() {
            self.check_exchange(id)?;
        }
        for reaction in self.reactions.values_mut().filter(|r| r.is_boundary()) {
            let bound = medium.get(&reaction.id).copied().unwrap_or(0f64);
            reaction.set_uptake_bound(bound);
        }
        Ok(())
    }

    /// Set the import bound of a single exchange, leaving the rest of the medium alone
    pub fn set_medium_bound(&mut self, reaction_id: &str, value: f64) -> Result<(), ModelError> {
        self.check_exchange(reaction_id)?;
        if let Some(reaction) = self.reactions.get_mut(reaction_id) {
            reaction.set_uptake_bound(value);
        }
        Ok(())
    }

    pub(crate) fn check_exchange(&self, reaction_id: &str) -> Result<(), ModelError> {
        match self.reactions.get(reaction_id) {
            None => Err(ModelError::ReactionNotFound(reaction_id.to_string())),
            Some(r) if !r.is_boundary() => {
                Err(ModelError::NotAnExchange(reaction_id.to_string()))
            }
            Some(_) => Ok(()),
        }
    }

    /// Optimize the model objective with the given solver
    pub fn optimize<S: FluxSolver + ?Sized>(
        &self,
        solver: &S,
    ) -> Result<FluxSolution, SolverError> {
        solver.optimize(self)
    }

    /// Optimize the model, only returning the objective value (NaN if no optimum was found)
    pub fn slim_optimize<S: FluxSolver + ?Sized>(&self, solver: &S) -> Result<f64, SolverError> {
        solver.slim_optimize(self)
    }

    /// Compute the minimum and maximum flux through every reaction
    pub fn flux_variability<S: FluxSolver + ?Sized>(
        &self,
        solver: &S,
    ) -> Result<FvaTable, SolverError> {
        solver.flux_variability(self)
    }

    /// Summarize the exchange fluxes of a solution
    ///
    /// Fluxes are converted to uptake orientation, so imports are listed with positive
    /// values under `uptake_flux` and exports with negative values under `secretion_flux`.
    pub fn summary(&self, solution: &FluxSolution) -> FluxSummary {
        let tol = tolerance();
        let mut uptake_flux = IndexMap::new();
        let mut secretion_flux = IndexMap::new();
        for reaction in self.exchanges() {
            let flux = match solution.fluxes.get(&reaction.id) {
                Some(f) => *f,
                None => continue,
            };
            let oriented = match reaction.uptake_oriented_flux(flux) {
                Some(o) => o,
                None => continue,
            };
            if oriented > tol {
                uptake_flux.insert(reaction.id.clone(), oriented);
            } else if oriented < -tol {
                secretion_flux.insert(reaction.id.clone(), oriented);
            }
        }
        FluxSummary {
            objective_value: solution.objective_value,
            uptake_flux,
            secretion_flux,
        }
    }
}

/// Exchange fluxes of a solution, split by direction
#[derive(Clone, Debug, PartialEq)]
pub struct FluxSummary {
    pub objective_value: Option<f64>,
    /// Imported fluxes (positive)
    pub uptake_flux: IndexMap<String, f64>,
    /// Exported fluxes (negative)
    pub secretion_flux: IndexMap<String, f64>,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("Reaction {0} is not present in the model")]
    ReactionNotFound(String),
    #[error("Reaction {0} is not an exchange reaction")]
    NotAnExchange(String),
}
