// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod camp;
pub mod lookup;

pub use camp::*;
pub use lookup::*;
