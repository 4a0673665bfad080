//! This module provides the metabolite struct representing a metabolite

use derive_builder::Builder;

/// Represents a metabolite
#[derive(Builder, Debug, Clone, PartialEq)]
pub struct Metabolite {
    /// Used to identify the metabolite (must be unique)
    pub id: String,
    /// Human Readable name of the metabolite
    #[builder(default = "None")]
    pub name: Option<String>,
    /// Which compartment the metabolite is in
    #[builder(default = "None")]
    pub compartment: Option<String>,
    /// Electrical charge of the Metabolite
    #[builder(default = "0")]
    pub charge: i32,
    /// Chemical Formula of the metabolite
    #[builder(default = "None")]
    pub formula: Option<String>,
}

impl Metabolite {
    /// Create a metabolite with just an id and a compartment
    pub fn new(id: &str, compartment: &str) -> Metabolite {
        Metabolite {
            id: id.to_string(),
            name: None,
            compartment: Some(compartment.to_string()),
            charge: 0,
            formula: None,
        }
    }

    /// Whether the metabolite is tagged with the given compartment
    pub fn in_compartment(&self, compartment: &str) -> bool {
        self.compartment.as_deref() == Some(compartment)
    }
}
