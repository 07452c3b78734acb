// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod actor_mapper;
pub mod export_service;
pub mod export_writer;
pub mod google_places_client;
pub mod pacer;

pub use actor_mapper::*;
pub use export_service::*;
pub use export_writer::*;
pub use google_places_client::*;
pub use pacer::*;
