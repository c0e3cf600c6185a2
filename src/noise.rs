//! Lattice-gradient (Perlin) noise over a fixed permutation table, plus the
//! fractal helpers layered on top of it.
//!
//! All functions are pure: the table is a `const`, so any thread may sample
//! concurrently and identical input always yields bit-identical output.

use crate::math::{fade, floor_to_lattice, lerp};
use noise::NoiseFn;

/// Ken Perlin's reference permutation of 0..=255.
pub const PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
    132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173,
    186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206,
    59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163,
    70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232,
    178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162,
    241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204,
    176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141,
    128, 195, 78, 66, 215, 61, 156, 180,
];

/// `PERMUTATION[i mod 256]`; negative indices wrap (two's complement `& 255`
/// is the Euclidean remainder).
#[inline]
fn hash(i: i32) -> i32 {
    PERMUTATION[(i & 255) as usize] as i32
}

// ── Gradients ─────────────────────────────────────────────────────────────────

#[inline]
fn grad1(hash: i32, x: f64) -> f64 {
    if hash & 1 == 0 { x } else { -x }
}

#[inline]
fn grad2(hash: i32, x: f64, y: f64) -> f64 {
    grad1(hash, x) + grad1(hash >> 1, y)
}

/// Improved-noise gradient: the low four bits pick one of twelve cube-edge
/// directions (with four repeats), expressed as a signed sum of two offsets.
#[inline]
fn grad3(hash: i32, x: f64, y: f64, z: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };
    grad2(h, u, v)
}

// ── Noise ─────────────────────────────────────────────────────────────────────

/// One-dimensional gradient noise, roughly in `[-1, 1]`.
///
/// The blend is doubled because a 1D gradient only spans `±offset`.
pub fn noise1(x: f64) -> f64 {
    let (x0, fx) = floor_to_lattice(x);
    let u = fade(fx);

    let a = hash(x0);
    let b = hash(x0.wrapping_add(1));

    lerp(u, grad1(a, fx), grad1(b, fx - 1.0)) * 2.0
}

/// Two-dimensional gradient noise, roughly in `[-1, 1]`.
pub fn noise2(x: f64, y: f64) -> f64 {
    let (x0, fx) = floor_to_lattice(x);
    let (y0, fy) = floor_to_lattice(y);
    let u = fade(fx);
    let v = fade(fy);

    let a = hash(x0);
    let b = hash(x0.wrapping_add(1));
    let aa = hash(a.wrapping_add(y0));
    let ab = hash(a.wrapping_add(y0).wrapping_add(1));
    let ba = hash(b.wrapping_add(y0));
    let bb = hash(b.wrapping_add(y0).wrapping_add(1));

    lerp(
        v,
        lerp(u, grad2(aa, fx, fy), grad2(ba, fx - 1.0, fy)),
        lerp(u, grad2(ab, fx, fy - 1.0), grad2(bb, fx - 1.0, fy - 1.0)),
    )
}

/// Three-dimensional gradient noise, roughly in `[-1, 1]`.
pub fn noise3(x: f64, y: f64, z: f64) -> f64 {
    let (x0, fx) = floor_to_lattice(x);
    let (y0, fy) = floor_to_lattice(y);
    let (z0, fz) = floor_to_lattice(z);
    let u = fade(fx);
    let v = fade(fy);
    let w = fade(fz);

    let a = hash(x0);
    let b = hash(x0.wrapping_add(1));
    let aa = hash(a.wrapping_add(y0));
    let ab = hash(a.wrapping_add(y0).wrapping_add(1));
    let ba = hash(b.wrapping_add(y0));
    let bb = hash(b.wrapping_add(y0).wrapping_add(1));

    let z1 = z0.wrapping_add(1);
    let (gx, gy, gz) = (fx - 1.0, fy - 1.0, fz - 1.0);

    let near = lerp(
        v,
        lerp(
            u,
            grad3(hash(aa.wrapping_add(z0)), fx, fy, fz),
            grad3(hash(ba.wrapping_add(z0)), gx, fy, fz),
        ),
        lerp(
            u,
            grad3(hash(ab.wrapping_add(z0)), fx, gy, fz),
            grad3(hash(bb.wrapping_add(z0)), gx, gy, fz),
        ),
    );
    let far = lerp(
        v,
        lerp(
            u,
            grad3(hash(aa.wrapping_add(z1)), fx, fy, gz),
            grad3(hash(ba.wrapping_add(z1)), gx, fy, gz),
        ),
        lerp(
            u,
            grad3(hash(ab.wrapping_add(z1)), fx, gy, gz),
            grad3(hash(bb.wrapping_add(z1)), gx, gy, gz),
        ),
    );
    lerp(w, near, far)
}

/// Fixed-table noise source for code written against [`noise::NoiseFn`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Perlin;

impl NoiseFn<f64, 1> for Perlin {
    fn get(&self, [x]: [f64; 1]) -> f64 {
        noise1(x)
    }
}

impl NoiseFn<f64, 2> for Perlin {
    fn get(&self, [x, y]: [f64; 2]) -> f64 {
        noise2(x, y)
    }
}

impl NoiseFn<f64, 3> for Perlin {
    fn get(&self, [x, y, z]: [f64; 3]) -> f64 {
        noise3(x, y, z)
    }
}

// ── Fractal helpers ───────────────────────────────────────────────────────────

/// Fractional Brownian Motion: sums `octaves` layers of `noise`, halving the
/// amplitude and doubling the frequency each layer.
///
/// Returns a value in roughly `[-1.0, 1.0]`; zero octaves yields `0.0`.
pub fn fbm<N, const DIM: usize>(noise: &N, point: [f64; DIM], octaves: u32) -> f64
where
    N: NoiseFn<f64, DIM>,
{
    let mut value = 0.0;
    let mut amplitude = 1.0;
    let mut frequency = 1.0;
    let mut max_value = 0.0;

    for _ in 0..octaves {
        value += noise.get(point.map(|c| c * frequency)) * amplitude;
        max_value += amplitude;
        amplitude *= 0.5;
        frequency *= 2.0;
    }
    if max_value == 0.0 {
        return 0.0;
    }
    value / max_value
}

/// Ridged noise: `1 - |n|`, turning zero crossings into sharp crests.
/// Returns a value in roughly `[0.0, 1.0]`.
pub fn ridged<N, const DIM: usize>(noise: &N, point: [f64; DIM]) -> f64
where
    N: NoiseFn<f64, DIM>,
{
    1.0 - noise.get(point).abs()
}
