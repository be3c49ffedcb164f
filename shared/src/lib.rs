//! Shared types and models for the Weather Monitoring Dashboard
//!
//! This crate contains the weather records, the city registry and the pure
//! display helpers (icons, units, chart transforms) shared between the
//! backend and the browser (via WASM).

pub mod charts;
pub mod constants;
pub mod icons;
pub mod models;
pub mod types;
pub mod validation;

pub use charts::*;
pub use constants::*;
pub use icons::*;
pub use models::*;
pub use types::*;
pub use validation::*;
