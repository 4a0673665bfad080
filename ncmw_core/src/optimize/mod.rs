//! Module describing the results produced by a flux solver
//!
//! The solvers themselves live outside of this crate, they are plugged in through the
//! [`solvers::FluxSolver`] trait.

pub mod solvers;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Struct representing the solution of a flux balance problem
#[derive(Clone, Debug, PartialEq)]
pub struct FluxSolution {
    /// The status of the optimization problem, representing if the optimization was
    /// completed successfully
    pub status: OptimizationStatus,
    /// Optimized value of the objective
    ///
    /// Some(f64) if the optimization was completed successfully, None otherwise
    pub objective_value: Option<f64>,
    /// Flux through each reaction at the optimum, keyed by reaction id
    pub fluxes: IndexMap<String, f64>,
}

impl FluxSolution {
    /// Create a solution for a problem which could not be solved
    pub fn failed(status: OptimizationStatus) -> Self {
        FluxSolution {
            status,
            objective_value: None,
            fluxes: IndexMap::new(),
        }
    }
}

/// Status of an optimization problem
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum OptimizationStatus {
    /// Problem has not yet attempted to be optimized
    Unoptimized,
    /// Problem has been optimized
    Optimal,
    /// Problem can't be optimized because objective value is not bounded
    Unbounded,
    /// Problem can't be solved because it is infeasible (conflicting constraints)
    Infeasible,
    /// An approximate solution has been found
    AlmostOptimal,
    /// A numerical error occurred during solving
    NumericalError,
    /// The solver hit the maximum allowed iterations, or max time, or made insufficient progress
    SolverHalted,
}

/// Feasible flux range of a single reaction
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FluxRange {
    pub minimum: f64,
    pub maximum: f64,
}

/// Result of a flux variability analysis, the flux range of each reaction keyed by reaction id
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FvaTable {
    pub ranges: IndexMap<String, FluxRange>,
}

/// A single row of an FVA table, as found in record oriented data
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FvaRecord {
    pub id: String,
    pub minimum: f64,
    pub maximum: f64,
}

impl FvaTable {
    pub fn new() -> Self {
        FvaTable::default()
    }

    /// Build a table from row records, later records with a repeated id replace earlier ones
    pub fn from_records<I: IntoIterator<Item = FvaRecord>>(records: I) -> Self {
        let ranges = records
            .into_iter()
            .map(|r| {
                (
                    r.id,
                    FluxRange {
                        minimum: r.minimum,
                        maximum: r.maximum,
                    },
                )
            })
            .collect();
        FvaTable { ranges }
    }

    pub fn insert(&mut self, id: &str, minimum: f64, maximum: f64) {
        self.ranges
            .insert(id.to_string(), FluxRange { minimum, maximum });
    }

    pub fn get(&self, id: &str) -> Option<&FluxRange> {
        self.ranges.get(id)
    }

    /// Iterate over (reaction id, range) pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FluxRange)> {
        self.ranges.iter()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}
