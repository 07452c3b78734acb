// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod actor;
pub mod category;
pub mod export;

pub use actor::*;
pub use category::*;
pub use export::*;
