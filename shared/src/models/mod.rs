//! Domain models for the Weather Monitoring Dashboard

mod alert;
mod city;
mod settings;
mod summary;
mod weather;

pub use alert::*;
pub use city::*;
pub use settings::*;
pub use summary::*;
pub use weather::*;
