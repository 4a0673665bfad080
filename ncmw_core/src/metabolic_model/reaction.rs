//! This module provides a struct for representing reactions
use crate::configuration::{default_lower_bound, default_upper_bound};
use derive_builder::Builder;
use indexmap::IndexMap;

/// Represents a reaction in the metabolic model
#[derive(Builder, Debug, Clone, PartialEq)]
pub struct Reaction {
    /// Used to identify the reaction
    pub id: String,
    /// Metabolite stoichiometry of the reaction
    #[builder(default = "IndexMap::new()")]
    pub metabolites: IndexMap<String, f64>,
    /// Human-readable reaction name
    #[builder(default = "None")]
    pub name: Option<String>,
    /// Lower flux bound
    #[builder(default = "default_lower_bound()")]
    pub lower_bound: f64,
    /// Upper flux bound
    #[builder(default = "default_upper_bound()")]
    pub upper_bound: f64,
    /// Reaction subsystem
    #[builder(default = "None")]
    pub subsystem: Option<String>,
}

impl Reaction {
    /// Whether the reaction can carry flux in both directions
    pub fn reversibility(&self) -> bool {
        self.lower_bound < 0f64 && 0f64 < self.upper_bound
    }

    /// Whether the reaction crosses the system boundary, meaning it only has a single metabolite
    pub fn is_boundary(&self) -> bool {
        self.metabolites.len() == 1
    }

    /// Generate the textual formula of the reaction from the metabolite ids
    ///
    /// # Note:
    /// Coefficients are only written when their magnitude differs from 1, so
    /// `2 h_c + atp_c -> adp_c` is rendered as `2.0 h_c + atp_c --> adp_c`.
    pub fn reaction_string(&self) -> String {
        let format_side = |reactants: bool| -> String {
            self.metabolites
                .iter()
                .filter(|(_, coef)| if reactants { **coef < 0f64 } else { **coef > 0f64 })
                .map(|(id, coef)| {
                    let magnitude = coef.abs();
                    if magnitude == 1f64 {
                        id.clone()
                    } else {
                        format!("{:?} {}", magnitude, id)
                    }
                })
                .collect::<Vec<_>>()
                .join(" + ")
        };
        let arrow = if self.reversibility() {
            "<=>"
        } else if self.lower_bound < 0f64 && self.upper_bound <= 0f64 {
            "<--"
        } else {
            "-->"
        };
        format!("{} {} {}", format_side(true), arrow, format_side(false))
    }

    /// Maximum flux at which a boundary reaction can import its metabolite
    ///
    /// # Note:
    /// For `met <=>` this is the negated lower bound, for `<=> met` it is the upper bound.
    /// Returns None if the reaction isn't a boundary reaction.
    pub fn uptake_bound(&self) -> Option<f64> {
        let coef = self.boundary_coefficient()?;
        if coef < 0f64 {
            Some(-self.lower_bound)
        } else {
            Some(self.upper_bound)
        }
    }

    /// Set the maximum import flux of a boundary reaction
    ///
    /// Returns false (leaving the bounds untouched) if the reaction isn't a boundary reaction.
    pub fn set_uptake_bound(&mut self, value: f64) -> bool {
        match self.boundary_coefficient() {
            Some(coef) if coef < 0f64 => {
                self.lower_bound = -value;
                true
            }
            Some(_) => {
                self.upper_bound = value;
                true
            }
            None => false,
        }
    }

    /// Convert a flux through a boundary reaction to uptake orientation,
    /// positive values are imports and negative values are exports
    pub fn uptake_oriented_flux(&self, flux: f64) -> Option<f64> {
        let coef = self.boundary_coefficient()?;
        if coef < 0f64 {
            Some(-flux)
        } else {
            Some(flux)
        }
    }

    fn boundary_coefficient(&self) -> Option<f64> {
        if !self.is_boundary() {
            return None;
        }
        self.metabolites.values().next().copied()
    }
}
