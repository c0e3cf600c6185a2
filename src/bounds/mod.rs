//! Pairwise containment tests between boxes, spheres and points.
//!
//! Every test is a pure predicate returning a [`Containment`]. Inputs are
//! trusted: an inverted box or a negative radius gives a well-defined but
//! geometrically meaningless answer, and NaN comparisons fall through to
//! [`Containment::Disjoint`].
pub mod aabb;
pub mod sphere;

pub use aabb::BoundingBox;
pub use sphere::BoundingSphere;

use crate::math::Vec3;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the receiver of a test relates to its operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Containment {
    /// No overlap.
    Disjoint,
    /// Partial overlap.
    Intersects,
    /// The receiver fully encloses the operand.
    Contains,
}

impl Containment {
    /// `true` for anything other than [`Containment::Disjoint`].
    #[inline]
    pub const fn overlaps(self) -> bool {
        !matches!(self, Containment::Disjoint)
    }
}

impl fmt::Display for Containment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Containment::Disjoint => "disjoint",
            Containment::Intersects => "intersects",
            Containment::Contains => "contains",
        };
        f.write_str(s)
    }
}

/// A containment test of `Self` against `Rhs`. One impl per ordered pair.
pub trait Classify<Rhs: ?Sized> {
    fn classify(&self, other: &Rhs) -> Containment;
}

/// Squared distance from `point` to the nearest point of the box
/// `[min, max]`; zero when the point is inside.
///
/// Shared by both sphere/box directions.
#[inline]
pub(crate) fn closest_point_distance_squared(min: Vec3, max: Vec3, point: Vec3) -> f64 {
    point.distance_squared(point.clamp(min, max))
}

/// Closest-point overlap test between a box and a sphere.
#[inline]
pub(crate) fn box_sphere_overlap(bx: &BoundingBox, sphere: &BoundingSphere) -> Containment {
    let d2 = closest_point_distance_squared(bx.min, bx.max, sphere.center);
    if d2 <= sphere.radius * sphere.radius {
        Containment::Intersects
    } else {
        Containment::Disjoint
    }
}

// ── Volume dispatch ───────────────────────────────────────────────────────────

/// Closed set of bounding volumes. New shapes extend this enum and every
/// `match` over it.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Volume {
    Box(BoundingBox),
    Sphere(BoundingSphere),
}

impl From<BoundingBox> for Volume {
    fn from(b: BoundingBox) -> Self {
        Volume::Box(b)
    }
}

impl From<BoundingSphere> for Volume {
    fn from(s: BoundingSphere) -> Self {
        Volume::Sphere(s)
    }
}

impl Classify<Volume> for Volume {
    fn classify(&self, other: &Volume) -> Containment {
        match (self, other) {
            (Volume::Box(a), Volume::Box(b)) => a.classify(b),
            (Volume::Box(a), Volume::Sphere(b)) => a.classify(b),
            (Volume::Sphere(a), Volume::Box(b)) => a.classify(b),
            (Volume::Sphere(a), Volume::Sphere(b)) => a.classify(b),
        }
    }
}

impl Classify<Vec3> for Volume {
    fn classify(&self, point: &Vec3) -> Containment {
        match self {
            Volume::Box(b) => b.classify(point),
            Volume::Sphere(s) => s.classify(point),
        }
    }
}

impl Classify<Volume> for BoundingBox {
    fn classify(&self, other: &Volume) -> Containment {
        Volume::Box(*self).classify(other)
    }
}

impl Classify<Volume> for BoundingSphere {
    fn classify(&self, other: &Volume) -> Containment {
        Volume::Sphere(*self).classify(other)
    }
}
