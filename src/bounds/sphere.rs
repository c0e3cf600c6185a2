use super::{box_sphere_overlap, BoundingBox, Classify, Containment};
use crate::math::Vec3;
use serde::{Deserialize, Serialize};

/// Sphere with a non-negative `radius` (not enforced).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub radius: f64,
}

impl BoundingSphere {
    #[inline]
    pub const fn new(center: Vec3, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl Classify<BoundingSphere> for BoundingSphere {
    fn classify(&self, other: &BoundingSphere) -> Containment {
        let d2 = self.center.distance_squared(other.center);
        let sum = self.radius + other.radius;
        if d2 > sum * sum {
            return Containment::Disjoint;
        }
        let diff = self.radius - other.radius;
        if d2 <= diff * diff {
            Containment::Contains
        } else {
            Containment::Intersects
        }
    }
}

impl Classify<Vec3> for BoundingSphere {
    /// A point exactly on the surface reports `Intersects`, not `Contains`.
    fn classify(&self, p: &Vec3) -> Containment {
        let d2 = self.center.distance_squared(*p);
        let r2 = self.radius * self.radius;
        if d2 > r2 {
            Containment::Disjoint
        } else if d2 < r2 {
            Containment::Contains
        } else {
            Containment::Intersects
        }
    }
}

impl Classify<BoundingBox> for BoundingSphere {
    /// `Contains` when no corner of the box lies outside the sphere; otherwise
    /// the closest-point overlap test. This direction can disagree with
    /// `BoundingBox::classify(&BoundingSphere)` for the same pair.
    fn classify(&self, bx: &BoundingBox) -> Containment {
        if bx.corners().iter().all(|c| self.classify(c).overlaps()) {
            return Containment::Contains;
        }
        box_sphere_overlap(bx, self)
    }
}
