// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod facilities;
pub mod health;

pub use facilities::config as facilities_config;
pub use health::config as health_config;
