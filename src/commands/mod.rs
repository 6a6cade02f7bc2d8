//! Command handlers for the bomcfg binary

pub mod bom;
pub mod components;
pub mod generate;
