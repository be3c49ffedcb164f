//! HTTP handlers

pub mod alerts;
pub mod health;
pub mod pages;
pub mod settings;
pub mod weather;

pub use alerts::*;
pub use health::*;
pub use settings::*;
pub use weather::*;
