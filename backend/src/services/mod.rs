//! Business logic services for the Weather Monitoring Dashboard

pub mod settings;
pub mod source;
pub mod synthetic;
pub mod weather;

pub use settings::SettingsService;
pub use source::{source_from_config, OfflineSource, SourceKind, WeatherSource};
pub use synthetic::Synthesizer;
pub use weather::WeatherService;
