pub mod apps;
pub mod config;
pub mod focus;
pub mod presets;
pub mod stats;
