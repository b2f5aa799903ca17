// src/services/mod.rs
// DOCUMENTATION: Services module organization
// PURPOSE: Re-export service components

pub mod camp_locator;
pub mod google_maps_client;
pub mod provider;

pub use camp_locator::*;
pub use google_maps_client::*;
pub use provider::*;
