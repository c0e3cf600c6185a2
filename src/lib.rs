//! Lattice-gradient noise and bounding-volume containment tests.
//!
//! - [`noise`]: deterministic 1D/2D/3D Perlin noise over a fixed permutation
//!   table, with fractal helpers and a [`::noise::NoiseFn`] adapter.
//! - [`bounds`]: box/sphere/point classification into a tri-state
//!   [`Containment`].
//!
//! Both are pure and allocation-free. The remaining modules back the demo
//! binary: JSON configuration, PNG/JSON export and a scene report.
pub mod bounds;
pub mod config;
pub mod error;
pub mod export;
pub mod math;
pub mod noise;
pub mod report;

pub use bounds::{BoundingBox, BoundingSphere, Classify, Containment, Volume};
pub use error::{Error, Result};
pub use math::Vec3;
pub use self::noise::{noise1, noise2, noise3, Perlin};
