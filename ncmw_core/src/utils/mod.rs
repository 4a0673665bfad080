//! Small helpers shared by the analyses
pub(crate) mod padding;
pub(crate) mod spacing;
