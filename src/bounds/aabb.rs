use super::{box_sphere_overlap, BoundingSphere, Classify, Containment};
use crate::math::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned box spanning `[min, max]` on every axis.
///
/// `min <= max` per component is the caller's responsibility.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    #[inline]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// The eight corners, x varying fastest, then y, then z.
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
        ]
    }
}

impl Classify<BoundingBox> for BoundingBox {
    /// Interval overlap on all three axes, then full enclosure.
    fn classify(&self, other: &BoundingBox) -> Containment {
        let (a, b) = (self, other);
        let overlaps = a.max.x >= b.min.x
            && a.min.x <= b.max.x
            && a.max.y >= b.min.y
            && a.min.y <= b.max.y
            && a.max.z >= b.min.z
            && a.min.z <= b.max.z;
        if !overlaps {
            return Containment::Disjoint;
        }

        let encloses = a.min.x <= b.min.x
            && a.min.y <= b.min.y
            && a.min.z <= b.min.z
            && a.max.x >= b.max.x
            && a.max.y >= b.max.y
            && a.max.z >= b.max.z;
        if encloses {
            Containment::Contains
        } else {
            Containment::Intersects
        }
    }
}

impl Classify<Vec3> for BoundingBox {
    /// Inclusive on all six faces. Never returns `Intersects`.
    fn classify(&self, p: &Vec3) -> Containment {
        let inside = p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z;
        if inside {
            Containment::Contains
        } else {
            Containment::Disjoint
        }
    }
}

impl Classify<BoundingSphere> for BoundingBox {
    /// `Contains` only when the sphere clears every face by more than its
    /// radius; any other overlap reports `Intersects`, even a sphere that
    /// touches a face from the inside.
    fn classify(&self, sphere: &BoundingSphere) -> Containment {
        let (c, r) = (sphere.center, sphere.radius);
        let clear = c.x - self.min.x > r
            && c.y - self.min.y > r
            && c.z - self.min.z > r
            && self.max.x - c.x > r
            && self.max.y - c.y > r
            && self.max.z - c.z > r;
        if clear {
            return Containment::Contains;
        }
        box_sphere_overlap(self, sphere)
    }
}
