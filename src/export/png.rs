use crate::error::{Error, Result};
use font8x8::UnicodeFonts;
use image::{Rgb, RgbImage};
use std::path::Path;
use tracing::debug;

/// Screen pixels per font pixel.
pub const FONT_SCALE: u32 = 2;
pub const CHAR_W: u32 = 8 * FONT_SCALE;
pub const CHAR_H: u32 = 8 * FONT_SCALE;

/// Paints one 8x8 glyph with its top-left corner at (x, y). Characters outside
/// the basic Latin set are skipped.
fn draw_char(img: &mut RgbImage, c: char, x: u32, y: u32, color: [u8; 3]) {
    let Some(glyph) = font8x8::BASIC_FONTS.get(c) else {
        return;
    };
    let lit = glyph.iter().zip(0u32..).flat_map(|(&bits, row)| {
        (0u32..8)
            .filter(move |col| bits >> col & 1 == 1)
            .map(move |col| (col, row))
    });
    for (col, row) in lit {
        let px = x.saturating_add(col * FONT_SCALE);
        let py = y.saturating_add(row * FONT_SCALE);
        fill_rect(img, px, py, FONT_SCALE, FONT_SCALE, color);
    }
}

/// Left-to-right text on a fixed `CHAR_W` advance.
pub fn draw_str(img: &mut RgbImage, s: &str, x: u32, y: u32, color: [u8; 3]) {
    let mut pen = x;
    for c in s.chars() {
        if pen >= img.width() {
            break;
        }
        draw_char(img, c, pen, y, color);
        pen = pen.saturating_add(CHAR_W);
    }
}

/// Fills the `w` x `h` rectangle at (x, y). The part outside `img` is ignored.
pub fn fill_rect(img: &mut RgbImage, x: u32, y: u32, w: u32, h: u32, color: [u8; 3]) {
    let x_end = x.saturating_add(w).min(img.width());
    let y_end = y.saturating_add(h).min(img.height());
    for py in y..y_end {
        for px in x..x_end {
            img.put_pixel(px, py, Rgb(color));
        }
    }
}

pub fn save_png(img: &RgbImage, path: &Path) -> Result<()> {
    img.save(path).map_err(|source| Error::Image {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "wrote png");
    Ok(())
}
