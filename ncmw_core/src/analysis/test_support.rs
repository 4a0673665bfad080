//! Small models and a deterministic solver used by the analysis tests
use crate::metabolic_model::metabolite::Metabolite;
use crate::metabolic_model::model::Model;
use crate::metabolic_model::reaction::ReactionBuilder;
use crate::optimize::solvers::{FluxSolver, SolverError};
use crate::optimize::{FluxSolution, FvaTable, OptimizationStatus};
use indexmap::IndexMap;

pub(crate) fn add_reaction(
    model: &mut Model,
    id: &str,
    stoichiometry: &[(&str, f64)],
    lower_bound: f64,
    upper_bound: f64,
) {
    let metabolites: IndexMap<String, f64> = stoichiometry
        .iter()
        .map(|(m, c)| (m.to_string(), *c))
        .collect();
    model.add_reaction(
        ReactionBuilder::default()
            .id(id.to_string())
            .metabolites(metabolites)
            .lower_bound(lower_bound)
            .upper_bound(upper_bound)
            .build()
            .unwrap(),
    );
}

/// A glucose consuming, acetate secreting model with a cytosol and an extracellular space
///
/// Oxygen can be imported but has no transporter into the cytosol.
pub(crate) fn glucose_model(id: &str) -> Model {
    let mut model = Model::new_empty();
    model.id = Some(id.to_string());
    model.add_compartment("c", "cytosol");
    model.add_compartment("e", "extracellular space");
    for (met, comp) in [
        ("glc__D_e", "e"),
        ("glc__D_c", "c"),
        ("ac_e", "e"),
        ("ac_c", "c"),
        ("o2_e", "e"),
    ] {
        model.add_metabolite(Metabolite::new(met, comp));
    }
    add_reaction(&mut model, "EX_glc__D_e", &[("glc__D_e", -1.)], -10., 1000.);
    add_reaction(&mut model, "EX_ac_e", &[("ac_e", -1.)], 0., 1000.);
    add_reaction(&mut model, "EX_o2_e", &[("o2_e", -1.)], -20., 1000.);
    add_reaction(&mut model, "GLCt", &[("glc__D_e", -1.), ("glc__D_c", 1.)], 0., 1000.);
    add_reaction(&mut model, "ACt", &[("ac_c", -1.), ("ac_e", 1.)], -1000., 1000.);
    add_reaction(&mut model, "GLYC", &[("glc__D_c", -1.), ("ac_c", 3.)], 0., 1000.);
    model.objective.insert("GLYC".to_string(), 1.);
    model
}

/// Solver whose growth is proportional to the import bound of one limiting exchange
///
/// The limiting exchange is fully used, and every listed secreted exchange exports
/// `rate * growth`.
pub(crate) struct LinearGrowthSolver {
    pub limiting: String,
    pub growth_yield: f64,
    pub secreted: Vec<(String, f64)>,
    /// Import bounds strictly below this make the solver fail outright
    pub fail_below: Option<f64>,
    /// Import bounds strictly below this give an infeasible problem
    pub infeasible_below: Option<f64>,
}

impl LinearGrowthSolver {
    pub(crate) fn new(limiting: &str, growth_yield: f64) -> Self {
        LinearGrowthSolver {
            limiting: limiting.to_string(),
            growth_yield,
            secreted: Vec::new(),
            fail_below: None,
            infeasible_below: None,
        }
    }

    pub(crate) fn secreting(mut self, id: &str, rate: f64) -> Self {
        self.secreted.push((id.to_string(), rate));
        self
    }

    fn limiting_bound(&self, model: &Model) -> f64 {
        model.medium().get(&self.limiting).copied().unwrap_or(0.)
    }
}

impl FluxSolver for LinearGrowthSolver {
    fn optimize(&self, model: &Model) -> Result<FluxSolution, SolverError> {
        let bound = self.limiting_bound(model);
        if matches!(self.fail_below, Some(limit) if bound < limit) {
            return Err(SolverError::Failed(format!("no solution at bound {}", bound)));
        }
        if matches!(self.infeasible_below, Some(limit) if bound < limit) {
            return Ok(FluxSolution::failed(OptimizationStatus::Infeasible));
        }
        let growth = self.growth_yield * bound;
        let mut fluxes = IndexMap::new();
        for reaction in model.reactions.values() {
            fluxes.insert(reaction.id.clone(), 0.);
        }
        fluxes.insert(self.limiting.clone(), -bound);
        for (id, rate) in &self.secreted {
            fluxes.insert(id.clone(), rate * growth);
        }
        Ok(FluxSolution {
            status: OptimizationStatus::Optimal,
            objective_value: Some(growth),
            fluxes,
        })
    }

    fn flux_variability(&self, model: &Model) -> Result<FvaTable, SolverError> {
        let solution = self.optimize(model)?;
        let mut table = FvaTable::new();
        for (id, flux) in solution.fluxes {
            table.insert(&id, flux.min(0.), flux.max(0.));
        }
        Ok(table)
    }
}
