//! Detection of transport reactions
use crate::metabolic_model::model::Model;
use log::debug;

/// Find reactions which potentially transport metabolites between compartments
///
/// A reaction is considered a transport reaction if its reaction string mentions metabolites
/// from at least two different compartments, recognized by the `_{compartment id}` suffix.
///
/// # Note:
/// The reaction id is added once for every pair of compartments it spans, so a reaction
/// touching three compartments is listed three times.
///
/// # Examples
/// ```rust
/// use indexmap::IndexMap;
/// use ncmw_core::analysis::transport::transport_reactions;
/// use ncmw_core::metabolic_model::model::Model;
/// use ncmw_core::metabolic_model::reaction::ReactionBuilder;
/// let mut model = Model::new_empty();
/// model.add_compartment("c", "cytosol");
/// model.add_compartment("e", "extracellular space");
/// let mut metabolites = IndexMap::new();
/// metabolites.insert("glc__D_e".to_string(), -1.0);
/// metabolites.insert("glc__D_c".to_string(), 1.0);
/// model.add_reaction(
///     ReactionBuilder::default()
///         .id("GLCt".to_string())
///         .metabolites(metabolites)
///         .build()
///         .unwrap(),
/// );
/// assert_eq!(transport_reactions(&model), vec!["GLCt".to_string()]);
/// ```
pub fn transport_reactions(model: &Model) -> Vec<String> {
    let suffixes: Vec<String> = model
        .compartments
        .keys()
        .map(|id| format!("_{}", id))
        .collect();
    let mut transport = Vec::new();
    for reaction in model.reactions.values() {
        let formula = reaction.reaction_string();
        for (i, first) in suffixes.iter().enumerate() {
            for second in &suffixes[i + 1..] {
                if formula.contains(first.as_str()) && formula.contains(second.as_str()) {
                    transport.push(reaction.id.clone());
                }
            }
        }
    }
    debug!(
        "Found {} transport reactions in model {}",
        transport.len(),
        model.id.as_deref().unwrap_or_default()
    );
    transport
}
