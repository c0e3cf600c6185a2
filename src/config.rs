//! Demo configuration, loaded from an optional JSON file.
//!
//! Every field has a default, so `{}` (or no file at all) is a valid config.

use crate::bounds::{BoundingBox, BoundingSphere, Volume};
use crate::error::{Error, Result};
use crate::math::Vec3;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Largest accepted image, in pixels (8192 x 8192).
pub const MAX_PIXELS: u64 = 1 << 26;

/// How the noise image is sampled.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Lattice cells spanned by the image width. Height uses the same scale.
    pub scale: f64,
    /// Noise dimensionality: 1, 2 or 3.
    pub dimensions: u8,
    /// Fixed z coordinate used when `dimensions == 3`.
    pub z_slice: f64,
    /// 1 = plain noise, more = fractal sum.
    pub octaves: u32,
    /// Picks the sampling window. `None` draws a random one.
    pub seed: Option<u32>,
    /// Files are written to `output_dir/<seed>/`.
    pub output_dir: PathBuf,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            scale: 8.0,
            dimensions: 2,
            z_slice: 0.5,
            octaves: 1,
            seed: None,
            output_dir: PathBuf::from("output"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NamedVolume {
    pub name: String,
    pub volume: Volume,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NamedPoint {
    pub name: String,
    pub point: Vec3,
}

/// Volumes and points classified against each other by the demo.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub volumes: Vec<NamedVolume>,
    pub points: Vec<NamedPoint>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        let volume = |name: &str, volume: Volume| NamedVolume {
            name: name.to_owned(),
            volume,
        };
        let point = |name: &str, point: Vec3| NamedPoint {
            name: name.to_owned(),
            point,
        };
        Self {
            volumes: vec![
                volume(
                    "room",
                    BoundingBox::new(Vec3::ZERO, Vec3::splat(10.0)).into(),
                ),
                volume(
                    "crate",
                    BoundingBox::new(Vec3::splat(8.0), Vec3::splat(12.0)).into(),
                ),
                volume(
                    "lamp",
                    BoundingSphere::new(Vec3::splat(5.0), 1.0).into(),
                ),
                volume(
                    "moon",
                    BoundingSphere::new(Vec3::new(15.0, 5.0, 5.0), 4.0).into(),
                ),
            ],
            points: vec![
                point("origin", Vec3::ZERO),
                point("center", Vec3::splat(5.0)),
                point("outside", Vec3::new(-1.0, 5.0, 5.0)),
            ],
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub scene: SceneConfig,
}

impl Config {
    /// Reads and validates `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let Some(path) = path else {
            debug!("no config file given, using defaults");
            return Ok(Config::default());
        };
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Config::from_json(&text)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parses and validates a JSON document.
    pub fn from_json(text: &str) -> Result<Config> {
        let config: Config = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let r = &self.render;
        if r.width == 0 || r.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "image size must be non-zero, got {}x{}",
                r.width, r.height
            )));
        }
        let pixels = u64::from(r.width) * u64::from(r.height);
        if pixels > MAX_PIXELS {
            return Err(Error::InvalidConfig(format!(
                "image of {}x{} exceeds the {MAX_PIXELS} pixel limit",
                r.width, r.height
            )));
        }
        if !(1..=3).contains(&r.dimensions) {
            return Err(Error::InvalidConfig(format!(
                "dimensions must be 1, 2 or 3, got {}",
                r.dimensions
            )));
        }
        if r.octaves == 0 {
            return Err(Error::InvalidConfig("octaves must be at least 1".into()));
        }
        if !(r.scale > 0.0 && r.scale.is_finite()) {
            return Err(Error::InvalidConfig(format!(
                "scale must be positive and finite, got {}",
                r.scale
            )));
        }
        Ok(())
    }
}
