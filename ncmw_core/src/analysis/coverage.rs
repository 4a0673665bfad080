//! Check whether the metabolites of the medium have an associated transporter
use crate::analysis::transport::transport_reactions;
use crate::analysis::AnalysisError;
use crate::metabolic_model::model::Model;
use crate::table::IndicatorTable;

use indexmap::IndexSet;
use log::debug;
use regex::Regex;

/// Length of the exchange reaction prefix, e.g. `EX_`
const EXCHANGE_PREFIX_LEN: usize = 3;
/// Length of the compartment suffix of an exchange reaction, e.g. `_e`
const EXCHANGE_SUFFIX_LEN: usize = 2;

/// Strip the exchange prefix and compartment suffix from an exchange reaction id
///
/// `EX_glc__D_e` becomes `glc__D`, ids too short to hold both give an empty string.
/// Prefix and suffix are counted in characters, not bytes.
pub fn exchange_base_name(exchange_id: &str) -> &str {
    let n_chars = exchange_id.chars().count();
    if n_chars < EXCHANGE_PREFIX_LEN + EXCHANGE_SUFFIX_LEN {
        return "";
    }
    let byte_offset = |n: usize| {
        exchange_id
            .char_indices()
            .nth(n)
            .map_or(exchange_id.len(), |(i, _)| i)
    };
    &exchange_id[byte_offset(EXCHANGE_PREFIX_LEN)..byte_offset(n_chars - EXCHANGE_SUFFIX_LEN)]
}

/// Build a table indicating for every medium metabolite whether it is transported in each
/// compartment
///
/// Rows are the base names of the medium's exchange reactions, columns are compartment ids.
/// A cell is 1 if an instance of the metabolite in that compartment takes part in a transport
/// reaction (see [`transport_reactions`]), 0 otherwise.
///
/// # Note:
/// Metabolite instances are matched as `{base name}_{x}` where `x` is a single character, so
/// metabolites using longer compartment tags are never counted.
pub fn exchange_transport_table(model: &Model) -> Result<IndicatorTable, AnalysisError> {
    let compartments: Vec<String> = model.compartments.keys().cloned().collect();
    let bases: IndexSet<String> = model
        .medium()
        .keys()
        .map(|id| exchange_base_name(id).to_string())
        .collect();
    let transport: IndexSet<String> = transport_reactions(model).into_iter().collect();

    let mut table = IndicatorTable::zeros(bases.iter().cloned().collect(), compartments.clone());
    for (i, base) in bases.iter().enumerate() {
        let pattern = Regex::new(&format!("^{}_.$", regex::escape(base)))?;
        for (j, compartment) in compartments.iter().enumerate() {
            let transported = model
                .metabolites
                .values()
                .filter(|m| m.in_compartment(compartment) && pattern.is_match(&m.id))
                .flat_map(|m| model.metabolite_reactions(&m.id))
                .any(|r| transport.contains(r));
            if transported {
                table.set(i, j, 1);
            }
        }
    }
    debug!(
        "Built transport coverage for {} medium metabolites over {} compartments",
        table.n_rows(),
        table.n_columns()
    );
    Ok(table)
}

#[cfg(test)]
mod coverage_tests {
    use super::*;
    use crate::analysis::test_support::{add_reaction, glucose_model};
    use crate::metabolic_model::metabolite::Metabolite;

    #[test]
    fn base_names() {
        assert_eq!(exchange_base_name("EX_glc__D_e"), "glc__D");
        assert_eq!(exchange_base_name("EX_o2_e"), "o2");
        assert_eq!(exchange_base_name("EX_e"), "");
        assert_eq!(exchange_base_name(""), "");
    }

    #[test]
    fn non_ascii_base_names() {
        assert_eq!(exchange_base_name("EX_glc_é"), "glc");
        assert_eq!(exchange_base_name("EX_β_alanine_e"), "β_alanine");
        assert_eq!(exchange_base_name("EX_é_e"), "é");
        assert_eq!(exchange_base_name("EX_é"), "");
    }

    #[test]
    fn transported_and_untransported() {
        let model = glucose_model("producer");
        let table = exchange_transport_table(&model).unwrap();
        assert_eq!(table.index, vec!["glc__D", "o2"]);
        assert_eq!(table.columns, vec!["c", "e"]);
        assert_eq!(table.row("glc__D"), Some(&[1u8, 1u8][..]));
        // Oxygen can be imported but never crosses into the cytosol
        assert_eq!(table.row("o2"), Some(&[0u8, 0u8][..]));
        // Acetate is not part of the medium
        assert_eq!(table.row("ac"), None);
    }

    #[test]
    fn multi_character_tags_do_not_match() {
        let mut model = Model::new_empty();
        model.add_compartment("c", "cytosol");
        model.add_compartment("ex", "exterior");
        model.add_metabolite(Metabolite::new("nh4_ex", "ex"));
        model.add_metabolite(Metabolite::new("nh4_c", "c"));
        add_reaction(&mut model, "EX_nh4_e", &[("nh4_ex", -1.)], -10., 1000.);
        add_reaction(&mut model, "NH4t", &[("nh4_ex", -1.), ("nh4_c", 1.)], 0., 1000.);
        let table = exchange_transport_table(&model).unwrap();
        assert_eq!(table.index, vec!["nh4"]);
        // nh4_ex takes part in NH4t, but its two character tag is not recognized
        assert_eq!(table.get("nh4", "c"), Some(1));
        assert_eq!(table.get("nh4", "ex"), Some(0));
    }

    #[test]
    fn empty_medium() {
        let mut model = glucose_model("producer");
        model.set_medium(&indexmap::IndexMap::new()).unwrap();
        let table = exchange_transport_table(&model).unwrap();
        assert_eq!(table.n_rows(), 0);
        assert_eq!(table.n_columns(), 2);
    }
}
