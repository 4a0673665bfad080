//! Module for reading and writing Models and FVA results
pub mod json;
