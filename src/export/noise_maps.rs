//! Samples the configured noise into a pixel grid and writes it as a
//! false-colour PNG, low values blue and high values red.

use super::png::{draw_str, fill_rect, save_png, CHAR_H};
use crate::config::RenderConfig;
use crate::error::Result;
use crate::math::remap;
use crate::noise::{fbm, Perlin};
use image::{Rgb, RgbImage};
use std::path::Path;
use tracing::info;

// ── Colour map ────────────────────────────────────────────────────────────────

/// Triangular channel weight peaking at `centre`, saturated at 1.0 within an
/// eighth of the ramp either side and zero beyond three eighths.
#[inline]
fn hat(t: f64, centre: f64) -> f64 {
    (1.5 - 4.0 * (t - centre).abs()).clamp(0.0, 1.0)
}

/// Maps `t` in `[0, 1]` onto the blue-to-red ramp. Out-of-range input is
/// clamped.
pub fn jet(t: f64) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    // Red, green and blue peak at three quarters, half and one quarter.
    [0.75, 0.5, 0.25].map(|centre| (hat(t, centre) * 255.0) as u8)
}

/// Colours a signed noise value: -1 is blue, 0 green, +1 red.
#[inline]
pub fn diverge(v: f64) -> [u8; 3] {
    jet(remap(v.clamp(-1.0, 1.0), -1.0, 1.0, 0.0, 1.0))
}

// ── Sampling ──────────────────────────────────────────────────────────────────

/// Noise values for every pixel, column-major: `index = q * height + r`.
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseGrid {
    pub width: u32,
    pub height: u32,
    pub values: Vec<f64>,
}

impl NoiseGrid {
    #[inline]
    pub fn get(&self, q: u32, r: u32) -> f64 {
        self.values[q as usize * self.height as usize + r as usize]
    }

    /// Smallest and largest sampled value.
    pub fn range(&self) -> (f64, f64) {
        self.values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }
}

/// Lattice coordinates of the top-left pixel for `seed`.
///
/// The permutation table repeats every 256 cells, so the low byte selects
/// the cell and the next byte a sub-cell offset.
pub fn seed_origin(seed: u32) -> (f64, f64) {
    let cell = f64::from(seed & 0xff);
    let sub = f64::from((seed >> 8) & 0xff) / 256.0;
    (cell + sub, cell * 0.5 + sub)
}

/// Samples `cfg` over the window chosen by `seed`.
pub fn sample_grid(cfg: &RenderConfig, seed: u32) -> NoiseGrid {
    let (ox, oy) = seed_origin(seed);
    let step = cfg.scale / f64::from(cfg.width);
    let mut values = Vec::with_capacity(cfg.width as usize * cfg.height as usize);

    for q in 0..cfg.width {
        for r in 0..cfg.height {
            let x = ox + f64::from(q) * step;
            let y = oy + f64::from(r) * step;
            let v = match cfg.dimensions {
                1 => fbm(&Perlin, [x], cfg.octaves),
                2 => fbm(&Perlin, [x, y], cfg.octaves),
                _ => fbm(&Perlin, [x, y, cfg.z_slice], cfg.octaves),
            };
            values.push(v);
        }
    }

    let grid = NoiseGrid {
        width: cfg.width,
        height: cfg.height,
        values,
    };
    let (min, max) = grid.range();
    info!(
        seed,
        dimensions = cfg.dimensions,
        octaves = cfg.octaves,
        min,
        max,
        "sampled noise grid"
    );
    grid
}

// ── PNG writer ────────────────────────────────────────────────────────────────

const CAPTION_PAD: u32 = 4;
const CAPTION_BG: [u8; 3] = [22, 22, 35];
const CAPTION_FG: [u8; 3] = [240, 240, 240];

/// Renders `grid` through [`diverge`]. A non-empty `caption` is drawn on a
/// dark band along the bottom edge.
pub fn render_noise_image(grid: &NoiseGrid, caption: &str) -> RgbImage {
    let mut img = RgbImage::new(grid.width, grid.height);
    let columns = grid.values.chunks_exact((grid.height as usize).max(1));
    for (q, column) in (0..grid.width).zip(columns) {
        for (r, &v) in (0..grid.height).zip(column) {
            img.put_pixel(q, r, Rgb(diverge(v)));
        }
    }

    if !caption.is_empty() {
        let band_h = CHAR_H + 2 * CAPTION_PAD;
        let top = grid.height.saturating_sub(band_h);
        fill_rect(&mut img, 0, top, grid.width, band_h, CAPTION_BG);
        draw_str(&mut img, caption, CAPTION_PAD, top + CAPTION_PAD, CAPTION_FG);
    }
    img
}

pub fn export_noise_png(grid: &NoiseGrid, caption: &str, path: &Path) -> Result<()> {
    save_png(&render_noise_image(grid, caption), path)?;
    info!(path = %path.display(), "wrote noise map");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(dimensions: u8) -> RenderConfig {
        RenderConfig {
            width: 16,
            height: 8,
            scale: 4.0,
            dimensions,
            ..RenderConfig::default()
        }
    }

    #[test]
    fn jet_endpoints() {
        assert_eq!(jet(0.0), [0, 0, 127]);
        assert_eq!(jet(0.5), [127, 255, 127]);
        assert_eq!(jet(1.0), [127, 0, 0]);
        assert_eq!(diverge(-5.0), jet(0.0));
        assert_eq!(diverge(0.0), jet(0.5));
    }

    #[test]
    fn grid_is_column_major() {
        let cfg = small(2);
        let grid = sample_grid(&cfg, 3);
        assert_eq!(grid.values.len(), 16 * 8);
        let (ox, oy) = seed_origin(3);
        let step = cfg.scale / f64::from(cfg.width);
        let want = fbm(&Perlin, [ox + 5.0 * step, oy + 2.0 * step], 1);
        assert_eq!(grid.get(5, 2), want);
    }

    #[test]
    fn one_dimensional_grid_is_constant_down_columns() {
        let grid = sample_grid(&small(1), 9);
        for q in 0..grid.width {
            let top = grid.get(q, 0);
            assert!((0..grid.height).all(|r| grid.get(q, r) == top));
        }
    }

    #[test]
    fn sampling_is_deterministic_per_seed() {
        let cfg = small(3);
        assert_eq!(sample_grid(&cfg, 42), sample_grid(&cfg, 42));
        assert_ne!(sample_grid(&cfg, 42), sample_grid(&cfg, 43));
    }

    #[test]
    fn caption_band_covers_bottom_rows() {
        let grid = sample_grid(&small(2), 1);
        let img = render_noise_image(&grid, "x");
        assert_eq!(img.get_pixel(15, 7).0, CAPTION_BG);
        let plain = render_noise_image(&grid, "");
        assert_eq!(plain.get_pixel(15, 7).0, diverge(grid.get(15, 7)));
    }
}
