//! Shared models and solvers for the integration tests
use indexmap::IndexMap;
use ncmw_core::metabolic_model::model::Model;
use ncmw_core::optimize::solvers::{FluxSolver, SolverError};
use ncmw_core::optimize::{FluxSolution, FvaTable, OptimizationStatus};

/// Glucose fermenting model secreting acetate
pub const FERMENTER: &str = r#"{
"id":"fermenter",
"compartments":{"c":"cytosol","e":"extracellular space"},
"metabolites":[
{"id":"glc__D_e","compartment":"e"},
{"id":"glc__D_c","compartment":"c"},
{"id":"ac_e","compartment":"e"},
{"id":"ac_c","compartment":"c"},
{"id":"nh4_e","compartment":"e"}
],
"reactions":[
{"id":"EX_glc__D_e","metabolites":{"glc__D_e":-1.0},"lower_bound":-10.0,"upper_bound":1000.0},
{"id":"EX_ac_e","metabolites":{"ac_e":-1.0},"lower_bound":0.0,"upper_bound":1000.0},
{"id":"EX_nh4_e","metabolites":{"nh4_e":-1.0},"lower_bound":-5.0,"upper_bound":1000.0},
{"id":"GLCt","metabolites":{"glc__D_e":-1.0,"glc__D_c":1.0},"lower_bound":0.0,"upper_bound":1000.0},
{"id":"ACt","metabolites":{"ac_c":-1.0,"ac_e":1.0},"lower_bound":-1000.0,"upper_bound":1000.0},
{"id":"FERM","metabolites":{"glc__D_c":-1.0,"ac_c":2.0},"lower_bound":0.0,"upper_bound":1000.0,
 "objective_coefficient":1.0}
]
}"#;

/// Acetate consuming model secreting formate
pub const SCAVENGER: &str = r#"{
"id":"scavenger",
"compartments":{"c":"cytosol","e":"extracellular space"},
"metabolites":[
{"id":"ac_e","compartment":"e"},
{"id":"ac_c","compartment":"c"},
{"id":"for_e","compartment":"e"},
{"id":"for_c","compartment":"c"}
],
"reactions":[
{"id":"EX_ac_e","metabolites":{"ac_e":-1.0},"lower_bound":-8.0,"upper_bound":1000.0},
{"id":"EX_for_e","metabolites":{"for_e":-1.0},"lower_bound":0.0,"upper_bound":1000.0},
{"id":"ACt","metabolites":{"ac_e":-1.0,"ac_c":1.0},"lower_bound":-1000.0,"upper_bound":1000.0},
{"id":"FORt","metabolites":{"for_c":-1.0,"for_e":1.0},"lower_bound":0.0,"upper_bound":1000.0},
{"id":"GROW","metabolites":{"ac_c":-1.0,"for_c":1.0},"lower_bound":0.0,"upper_bound":1000.0,
 "objective_coefficient":1.0}
]
}"#;

/// Growth limited by a single exchange per model, with fixed secretion per unit growth
#[derive(Default)]
pub struct LimitingSubstrateSolver {
    /// model id -> (limiting exchange, growth yield, secreted exchanges with their rate)
    pub behaviour: IndexMap<String, (String, f64, Vec<(String, f64)>)>,
}

impl LimitingSubstrateSolver {
    pub fn with(
        mut self,
        model: &str,
        limiting: &str,
        growth_yield: f64,
        secreted: &[(&str, f64)],
    ) -> Self {
        self.behaviour.insert(
            model.to_string(),
            (
                limiting.to_string(),
                growth_yield,
                secreted.iter().map(|(id, r)| (id.to_string(), *r)).collect(),
            ),
        );
        self
    }
}

impl FluxSolver for LimitingSubstrateSolver {
    fn optimize(&self, model: &Model) -> Result<FluxSolution, SolverError> {
        let id = model.id.clone().unwrap_or_default();
        let (limiting, growth_yield, secreted) = self
            .behaviour
            .get(&id)
            .ok_or_else(|| SolverError::Failed(format!("unknown model {}", id)))?;
        let bound = model.medium().get(limiting).copied().unwrap_or(0.);
        if bound <= 0. {
            return Ok(FluxSolution::failed(OptimizationStatus::Infeasible));
        }
        let growth = growth_yield * bound;
        let mut fluxes: IndexMap<String, f64> =
            model.reactions.keys().map(|r| (r.clone(), 0.)).collect();
        fluxes.insert(limiting.clone(), -bound);
        for (rxn, rate) in secreted {
            fluxes.insert(rxn.clone(), rate * growth);
        }
        Ok(FluxSolution {
            status: OptimizationStatus::Optimal,
            objective_value: Some(growth),
            fluxes,
        })
    }

    fn flux_variability(&self, model: &Model) -> Result<FvaTable, SolverError> {
        let solution = self.optimize(model)?;
        let mut fva = FvaTable::new();
        for (id, flux) in solution.fluxes {
            fva.insert(&id, flux.min(0.), flux.max(0.));
        }
        Ok(fva)
    }
}

pub fn community_solver() -> LimitingSubstrateSolver {
    LimitingSubstrateSolver::default()
        .with("fermenter", "EX_glc__D_e", 0.1, &[("EX_ac_e", 15.)])
        .with("scavenger", "EX_ac_e", 0.05, &[("EX_for_e", 10.)])
}
