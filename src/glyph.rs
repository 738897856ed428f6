//! "?" overlay rendering with system-font fallback.
//!
//! The renderer prefers a real font for the question mark. Candidate font
//! files are probed in order; the first one that loads and parses wins. When
//! no usable font exists on the host, a builtin procedural glyph built from
//! the same coverage primitives as the rest of the icon takes over, so the
//! overlay is always available.

use image::{Rgba, RgbaImage};
use rusttype::{point, Font, Scale};

use crate::render::{blend_pixel, circle_coverage, fill_circle, fill_rounded_rect};

/// Font files tried in order, covering the usual macOS, Linux and Windows
/// install locations.
const SYSTEM_FONT_PATHS: &[&str] = &[
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// A text-rendering capability: either a parsed system font or the builtin
/// procedural glyph.
pub enum GlyphFace {
    System(Font<'static>),
    Builtin,
}

impl GlyphFace {
    /// Probe the host for a usable font file. Missing, unreadable and
    /// unparseable files all fall through to the builtin face; font lookup
    /// is never an error.
    pub fn acquire() -> GlyphFace {
        for path in SYSTEM_FONT_PATHS {
            if let Some(font) = std::fs::read(path).ok().and_then(Font::try_from_vec) {
                return GlyphFace::System(font);
            }
        }
        GlyphFace::Builtin
    }
}

/// Draw a "?" centered on `(cx, cy)` with the given pixel height.
pub fn draw_question_mark(img: &mut RgbaImage, cx: f32, cy: f32, height: f32, color: Rgba<u8>) {
    match GlyphFace::acquire() {
        GlyphFace::System(font) => draw_with_font(img, &font, cx, cy, height, color),
        GlyphFace::Builtin => draw_builtin(img, cx, cy, height, color),
    }
}

fn draw_with_font(
    img: &mut RgbaImage,
    font: &Font<'_>,
    cx: f32,
    cy: f32,
    height: f32,
    color: Rgba<u8>,
) {
    let scale = Scale::uniform(height);
    let glyph = font.glyph('?').scaled(scale).positioned(point(0.0, 0.0));

    let bb = match glyph.pixel_bounding_box() {
        Some(bb) => bb,
        // A font without a drawable "?" is as good as no font.
        None => return draw_builtin(img, cx, cy, height, color),
    };

    let left = cx.round() as i32 - bb.width() / 2;
    let top = cy.round() as i32 - bb.height() / 2;

    let (w, h) = img.dimensions();
    glyph.draw(|gx, gy, v| {
        let px = left + gx as i32;
        let py = top + gy as i32;
        if px >= 0 && py >= 0 && (px as u32) < w && (py as u32) < h {
            blend_pixel(img, px as u32, py as u32, color, v);
        }
    });
}

/// Builtin question mark: an open ring for the hook, a short stem and a dot.
/// Proportions are relative to the requested glyph height.
fn draw_builtin(img: &mut RgbaImage, cx: f32, cy: f32, height: f32, color: Rgba<u8>) {
    let stroke = (0.14 * height).max(1.0);
    let ring_cy = cy - 0.18 * height;
    let ring_r = 0.26 * height;
    let outer = ring_r + stroke / 2.0;
    let inner = (ring_r - stroke / 2.0).max(0.0);

    let (w, h) = img.dimensions();
    let x0 = ((cx - outer - 1.0).floor().max(0.0)) as u32;
    let y0 = ((ring_cy - outer - 1.0).floor().max(0.0)) as u32;
    if x0 < w && y0 < h {
        let x1 = (((cx + outer + 1.0).ceil().max(0.0)) as u32).min(w - 1);
        let y1 = (((ring_cy + outer + 1.0).ceil().max(0.0)) as u32).min(h - 1);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let px = x as f32 + 0.5;
                let py = y as f32 + 0.5;
                // The hook opens toward the lower left, where the stem takes over.
                if px - cx <= 0.0 && py - ring_cy >= 0.0 {
                    continue;
                }
                let cov = circle_coverage(px, py, cx, ring_cy, outer)
                    - circle_coverage(px, py, cx, ring_cy, inner);
                if cov > 0.0 {
                    blend_pixel(img, x, y, color, cov);
                }
            }
        }
    }

    // Stem dropping from the ring toward the dot.
    fill_rounded_rect(
        img,
        cx,
        cy + 0.10 * height,
        stroke / 2.0,
        0.12 * height,
        stroke / 4.0,
        color,
    );

    // Dot.
    fill_circle(img, cx, cy + 0.42 * height, stroke * 0.55, color);
}
