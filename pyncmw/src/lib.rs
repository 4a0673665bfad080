use ncmw_core::analysis::coverage::exchange_transport_table;
use ncmw_core::analysis::exchange_table;
use ncmw_core::analysis::transport::transport_reactions;
use ncmw_core::analysis::uptake_secretion;
use ncmw_core::metabolic_model::model::Model;
use ncmw_core::optimize::{FvaRecord, FvaTable};

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

#[pyclass]
struct PyModel {
    inner: Model,
}

#[pymethods]
impl PyModel {
    /// Read a COBRA style JSON model
    #[staticmethod]
    fn read_json(path: String) -> PyResult<Self> {
        let inner = Model::read_json(&path).map_err(|e| PyIOError::new_err(e.to_string()))?;
        Ok(PyModel { inner })
    }

    /// Parse a COBRA style JSON model from a string
    #[staticmethod]
    fn from_json_str(model_str: &str) -> PyResult<Self> {
        let inner =
            Model::from_json_str(model_str).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(PyModel { inner })
    }

    #[getter]
    fn get_id(&self) -> Option<String> {
        self.inner.id.clone()
    }

    /// The medium as a list of (exchange id, import bound) pairs
    fn medium(&self) -> Vec<(String, f64)> {
        self.inner.medium().into_iter().collect()
    }

    fn transport_reactions(&self) -> Vec<String> {
        transport_reactions(&self.inner)
    }

    /// Returns (row labels, column labels, rows of 0/1 indicators)
    fn exchange_transport_table(&self) -> PyResult<(Vec<String>, Vec<String>, Vec<Vec<i64>>)> {
        let table = exchange_transport_table(&self.inner)
            .map_err(|e| PyValueError::new_err(e.to_string()))?;
        let data = table
            .data
            .iter()
            .map(|row| row.iter().map(|v| i64::from(*v)).collect())
            .collect();
        Ok((table.index, table.columns, data))
    }
}

/// Build the uptake/secretion table for a pair of models, as a list of (column name, values)
#[pyfunction]
fn compute_uptake_secretion_table(
    model_name1: &str,
    model_name2: &str,
    uptake1: Vec<String>,
    uptake2: Vec<String>,
    secretion1: Vec<String>,
    secretion2: Vec<String>,
) -> Vec<(String, Vec<String>)> {
    exchange_table::compute_uptake_secretion_table(
        model_name1,
        model_name2,
        &uptake1,
        &uptake2,
        &secretion1,
        &secretion2,
    )
    .columns()
    .map(|(name, values)| (name.to_string(), values.to_vec()))
    .collect()
}

/// Uptake and secretion reactions from FVA results given as parallel columns
#[pyfunction]
fn secretion_uptake_fva(
    ids: Vec<String>,
    minimum: Vec<f64>,
    maximum: Vec<f64>,
) -> PyResult<(Vec<String>, Vec<String>)> {
    if ids.len() != minimum.len() || ids.len() != maximum.len() {
        return Err(PyValueError::new_err(
            "ids, minimum and maximum must have the same length",
        ));
    }
    let fva = FvaTable::from_records(
        ids.into_iter()
            .zip(minimum.into_iter().zip(maximum))
            .map(|(id, (minimum, maximum))| FvaRecord {
                id,
                minimum,
                maximum,
            }),
    );
    let result = uptake_secretion::secretion_uptake_fva(&fva);
    Ok((result.uptake, result.secretion))
}

/// A Python module implemented in Rust. The name of this function must match
/// the `lib.name` setting in the `Cargo.toml`, else Python will not be able to
/// import the module.
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(compute_uptake_secretion_table, m)?)?;
    m.add_function(wrap_pyfunction!(secretion_uptake_fva, m)?)?;
    m.add_class::<PyModel>()?;
    Ok(())
}
