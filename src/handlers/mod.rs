// src/handlers/mod.rs
// DOCUMENTATION: Handlers module organization
// PURPOSE: Re-export handler components

pub mod camps;
pub mod health;

pub use camps::config as camps_config;
pub use health::config as health_config;
