//! Module providing JSON IO for Models and FVA results
use std::fs;
use std::path::Path;

use crate::metabolic_model::metabolite::Metabolite;
use crate::metabolic_model::model::Model;
use crate::metabolic_model::reaction::{Reaction, ReactionBuilder, ReactionBuilderError};
use crate::optimize::{FvaRecord, FvaTable};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// region JSON Model
/// Represents a JSON serialized model, used for reading and writing models in json format
///
/// Genes and any other keys are ignored when reading.
#[derive(Serialize, Deserialize)]
struct JsonModel {
    metabolites: Vec<JsonMetabolite>,
    reactions: Vec<JsonReaction>,
    id: Option<String>,
    compartments: Option<IndexMap<String, String>>,
    version: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct JsonMetabolite {
    id: String,
    name: Option<String>,
    compartment: Option<String>,
    charge: Option<i32>,
    formula: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct JsonReaction {
    id: String,
    name: Option<String>,
    metabolites: IndexMap<String, f64>,
    lower_bound: f64,
    upper_bound: f64,
    objective_coefficient: Option<f64>,
    subsystem: Option<String>,
}
// endregion JSON Model

// region Conversions
impl From<JsonMetabolite> for Metabolite {
    fn from(m: JsonMetabolite) -> Self {
        Self {
            id: m.id,
            name: m.name,
            compartment: m.compartment,
            charge: m.charge.unwrap_or_default(),
            formula: m.formula,
        }
    }
}

impl From<Metabolite> for JsonMetabolite {
    fn from(m: Metabolite) -> Self {
        Self {
            id: m.id,
            name: m.name,
            compartment: m.compartment,
            charge: Some(m.charge),
            formula: m.formula,
        }
    }
}

impl Model {
    /// Read a model from a COBRA style JSON file
    pub fn read_json<P: AsRef<Path>>(path: P) -> Result<Model, JsonError> {
        let model_str = match fs::read_to_string(path) {
            Ok(data) => data,
            Err(err) => return Err(JsonError::UnableToRead(format!("{:?}", err))),
        };
        Model::from_json_str(&model_str)
    }

    /// Parse a model from a COBRA style JSON string
    pub fn from_json_str(model_str: &str) -> Result<Model, JsonError> {
        let json_model = match serde_json::from_str::<JsonModel>(model_str) {
            Ok(model) => model,
            Err(err) => return Err(JsonError::UnableToParse(format!("{:?}", err))),
        };
        Model::from_json(json_model)
    }

    /// Write the model to a COBRA style JSON file
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<(), JsonError> {
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }

    /// Serialize the model to a COBRA style JSON string
    pub fn to_json_string(&self) -> Result<String, JsonError> {
        Ok(serde_json::to_string(&self.to_json())?)
    }

    fn from_json(json_model: JsonModel) -> Result<Self, JsonError> {
        let mut reactions: IndexMap<String, Reaction> = IndexMap::new();
        let mut metabolites: IndexMap<String, Metabolite> = IndexMap::new();
        let mut objective: IndexMap<String, f64> = IndexMap::new();
        json_model.metabolites.into_iter().for_each(|m| {
            metabolites.insert(m.id.clone(), Metabolite::from(m));
        });
        for rxn in json_model.reactions {
            let new_reaction = ReactionBuilder::default()
                .id(rxn.id.clone())
                .metabolites(rxn.metabolites)
                .name(rxn.name)
                .lower_bound(rxn.lower_bound)
                .upper_bound(rxn.upper_bound)
                .subsystem(rxn.subsystem)
                .build()?;
            reactions.insert(rxn.id.clone(), new_reaction);
            // Add the reaction to the objective function if desired
            if let Some(coef) = rxn.objective_coefficient {
                objective.insert(rxn.id, coef);
            }
        }
        Ok(Model {
            reactions,
            metabolites,
            objective,
            id: json_model.id,
            compartments: json_model.compartments.unwrap_or_default(),
            version: json_model.version,
        })
    }

    fn to_json(&self) -> JsonModel {
        let json_metabolites: Vec<JsonMetabolite> = self
            .metabolites
            .values()
            .map(|m| m.clone().into())
            .collect();
        let json_reactions: Vec<JsonReaction> = self
            .reactions
            .values()
            .map(|r| JsonReaction {
                id: r.id.clone(),
                name: r.name.clone(),
                metabolites: r.metabolites.clone(),
                lower_bound: r.lower_bound,
                upper_bound: r.upper_bound,
                objective_coefficient: self.objective.get(&r.id).copied(),
                subsystem: r.subsystem.clone(),
            })
            .collect();
        JsonModel {
            metabolites: json_metabolites,
            reactions: json_reactions,
            id: self.id.clone(),
            compartments: Some(self.compartments.clone()),
            version: self.version.clone(),
        }
    }
}
// endregion Conversions

// region FVA
/// Parse FVA results from a JSON array of `{"id", "minimum", "maximum"}` records
pub fn fva_from_json_str(fva_str: &str) -> Result<FvaTable, JsonError> {
    let records: Vec<FvaRecord> = serde_json::from_str(fva_str)?;
    Ok(FvaTable::from_records(records))
}

/// Read FVA results from a JSON file of `{"id", "minimum", "maximum"}` records
pub fn read_fva_json<P: AsRef<Path>>(path: P) -> Result<FvaTable, JsonError> {
    let fva_str = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) => return Err(JsonError::UnableToRead(format!("{:?}", err))),
    };
    fva_from_json_str(&fva_str)
}
// endregion FVA

#[derive(Error, Debug)]
pub enum JsonError {
    #[error("Unable to read file due to {0}")]
    UnableToRead(String),
    #[error("Unable to parse json due to {0}")]
    UnableToParse(String),
    #[error("Unable to build reaction")]
    UnableToBuildReaction(#[from] ReactionBuilderError),
    #[error("Serde json parse error")]
    SerdeJsonParseError(#[from] serde_json::Error),
    #[error("Unable to write to file")]
    UnableToWrite(#[from] std::io::Error),
}
