//! Interface to the external solvers used for flux balance and flux variability analysis
use crate::metabolic_model::model::Model;
use crate::optimize::{FluxSolution, FvaTable, OptimizationStatus};

use thiserror::Error;

/// A backend able to optimize a [`Model`]
///
/// Implementations read the reaction bounds (and therefore the medium) directly from the
/// model, so changes to the medium are picked up on the next call.
pub trait FluxSolver {
    /// Solve the flux balance problem, maximizing the model objective
    ///
    /// An infeasible or unbounded problem is not an error, it is reported through the
    /// status of the returned solution.
    fn optimize(&self, model: &Model) -> Result<FluxSolution, SolverError>;

    /// Compute the minimum and maximum flux through each reaction at the optimum
    fn flux_variability(&self, model: &Model) -> Result<FvaTable, SolverError>;

    /// Optimize and only return the objective value
    ///
    /// If no optimum was found, NaN is returned instead.
    fn slim_optimize(&self, model: &Model) -> Result<f64, SolverError> {
        let solution = self.optimize(model)?;
        Ok(match (solution.status, solution.objective_value) {
            (OptimizationStatus::Optimal, Some(value)) => value,
            _ => f64::NAN,
        })
    }
}

impl<S: FluxSolver + ?Sized> FluxSolver for &S {
    fn optimize(&self, model: &Model) -> Result<FluxSolution, SolverError> {
        (**self).optimize(model)
    }

    fn flux_variability(&self, model: &Model) -> Result<FvaTable, SolverError> {
        (**self).flux_variability(model)
    }

    fn slim_optimize(&self, model: &Model) -> Result<f64, SolverError> {
        (**self).slim_optimize(model)
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SolverError {
    #[error("Solver failed: {0}")]
    Failed(String),
}

#[cfg(test)]
mod solver_tests {
    use super::*;
    use indexmap::IndexMap;

    struct FixedSolver {
        status: OptimizationStatus,
    }

    impl FluxSolver for FixedSolver {
        fn optimize(&self, _model: &Model) -> Result<FluxSolution, SolverError> {
            Ok(FluxSolution {
                status: self.status,
                objective_value: Some(0.5),
                fluxes: IndexMap::new(),
            })
        }

        fn flux_variability(&self, _model: &Model) -> Result<FvaTable, SolverError> {
            Ok(FvaTable::new())
        }
    }

    #[test]
    fn slim_optimize() {
        let model = Model::new_empty();
        let optimal = FixedSolver {
            status: OptimizationStatus::Optimal,
        };
        assert_eq!(optimal.slim_optimize(&model).unwrap(), 0.5);
        let infeasible = FixedSolver {
            status: OptimizationStatus::Infeasible,
        };
        assert!(infeasible.slim_optimize(&model).unwrap().is_nan());
        // Borrowed solvers work the same way
        assert!(model.slim_optimize(&&infeasible).unwrap().is_nan());
    }
}
