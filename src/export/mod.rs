//! Export backends: false-colour noise PNGs and JSON reports.

pub mod json;
pub mod noise_maps;
pub mod png;

pub use json::export_json;
pub use noise_maps::{export_noise_png, sample_grid, NoiseGrid};
