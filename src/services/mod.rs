// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod facility_service;
pub mod google_maps_client;
pub mod opening_hours;

pub use facility_service::*;
pub use google_maps_client::*;
