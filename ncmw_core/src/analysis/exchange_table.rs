//! Side by side comparison of the exchanges of pairs of models
use crate::analysis::uptake_secretion::{
    secretion_uptake_fba, secretion_uptake_fva, UptakeSecretion,
};
use crate::analysis::AnalysisError;
use crate::configuration::filler;
use crate::metabolic_model::model::Model;
use crate::optimize::solvers::FluxSolver;
use crate::optimize::FvaTable;
use crate::table::ExchangeTable;
use crate::utils::padding::pad_columns;

use indexmap::IndexMap;
use log::debug;

/// Every id secreted by one model which the other takes up
///
/// Ids are compared as exact strings, repeated ids are kept.
fn cross_feeding(secretion: &[String], uptake: &[String]) -> Vec<String> {
    secretion
        .iter()
        .flat_map(|sec| uptake.iter().filter(move |up| *up == sec).map(|_| sec.clone()))
        .collect()
}

/// Build the uptake/secretion table for a pair of models
///
/// The table has six columns, in order:
/// - `{model_name1} Uptake`
/// - `{model_name1} Secretion`
/// - `{model_name1} -> {model_name2}`: secreted by model 1 and taken up by model 2
/// - `{model_name2} -> {model_name1}`: secreted by model 2 and taken up by model 1
/// - `{model_name2} Secretion`
/// - `{model_name2} Uptake`
///
/// Shorter columns are padded with the configured filler (`na` by default).
pub fn compute_uptake_secretion_table(
    model_name1: &str,
    model_name2: &str,
    uptake1: &[String],
    uptake2: &[String],
    secretion1: &[String],
    secretion2: &[String],
) -> ExchangeTable {
    let sek2_up1 = cross_feeding(secretion2, uptake1);
    let sek1_up2 = cross_feeding(secretion1, uptake2);
    let mut columns: IndexMap<String, Vec<String>> = IndexMap::new();
    columns.insert(format!("{} Uptake", model_name1), uptake1.to_vec());
    columns.insert(format!("{} Secretion", model_name1), secretion1.to_vec());
    columns.insert(format!("{} -> {}", model_name1, model_name2), sek1_up2);
    columns.insert(format!("{} -> {}", model_name2, model_name1), sek2_up1);
    columns.insert(format!("{} Secretion", model_name2), secretion2.to_vec());
    columns.insert(format!("{} Uptake", model_name2), uptake2.to_vec());
    pad_columns(&mut columns, &filler());
    ExchangeTable::from_padded(columns)
}

/// Build the uptake/secretion tables for every pair of models
///
/// Pairs are visited as (0, 1), (0, 2), ..., (1, 2), ... If FVA results are provided they
/// are used to classify the exchanges (see [`secretion_uptake_fva`]), otherwise each model
/// is optimized once with `solver` (see [`secretion_uptake_fba`]).
///
/// # Panics
/// If FVA results are provided, there must be exactly one per model.
pub fn compute_all_uptake_secretion_tables<S: FluxSolver + ?Sized>(
    models: &[Model],
    fvas: Option<&[FvaTable]>,
    solver: &S,
) -> Result<Vec<ExchangeTable>, AnalysisError> {
    let exchanges: Vec<UptakeSecretion> = match fvas {
        Some(fvas) => {
            assert_eq!(
                fvas.len(),
                models.len(),
                "one FVA result is required per model"
            );
            fvas.iter().map(secretion_uptake_fva).collect()
        }
        None => models
            .iter()
            .map(|m| secretion_uptake_fba(m, solver))
            .collect::<Result<_, _>>()?,
    };
    let names: Vec<String> = models
        .iter()
        .enumerate()
        .map(|(i, m)| m.id.clone().unwrap_or_else(|| format!("model_{}", i)))
        .collect();

    let mut tables = Vec::new();
    for i in 0..models.len() {
        for j in i + 1..models.len() {
            debug!("Building exchange table for {} and {}", names[i], names[j]);
            tables.push(compute_uptake_secretion_table(
                &names[i],
                &names[j],
                &exchanges[i].uptake,
                &exchanges[j].uptake,
                &exchanges[i].secretion,
                &exchanges[j].secretion,
            ));
        }
    }
    Ok(tables)
}
