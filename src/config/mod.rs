// src/config/mod.rs
// DOCUMENTATION: Configuration module organization
// PURPOSE: Re-export configuration components

pub mod env;
pub mod search_area;

pub use env::{Config, PacingStrategy};
pub use search_area::SearchArea;
