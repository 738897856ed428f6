//! Procedural rendering of the EduBot placeholder icon.
//!
//! The icon is a fixed design (gradient background, rounded corners, robot
//! head with eyes, speaker mouth, book and a "?" overlay) described by pixel
//! constants at a 1024x1024 reference resolution. Rendering at any other size
//! scales every coordinate by `size / 1024` and rasterizes the shapes with
//! anti-aliased coverage, so the same layout holds from 20px up to store
//! resolution.

use anyhow::Result;
use image::{Rgba, RgbaImage};

use crate::glyph;

/// Pixel size of the reference design all geometry constants are expressed in.
pub const REFERENCE_SIZE: f32 = 1024.0;

/// Icons below this edge length skip the "?" glyph overlay. Text is illegible
/// at notification-icon sizes and only adds noise.
pub const GLYPH_MIN_SIZE: u32 = 64;

// EduBot brand palette.
pub const GRADIENT_TOP: Rgba<u8> = Rgba([79, 70, 229, 255]); // #4F46E5
pub const GRADIENT_BOTTOM: Rgba<u8> = Rgba([236, 72, 153, 255]); // #EC4899
pub const ROBOT_FILL: Rgba<u8> = Rgba([248, 250, 252, 255]); // #F8FAFC
pub const ROBOT_OUTLINE: Rgba<u8> = Rgba([203, 213, 225, 255]); // #CBD5E1
pub const ACCENT: Rgba<u8> = Rgba([99, 102, 241, 255]); // #6366F1
pub const HIGHLIGHT: Rgba<u8> = Rgba([255, 255, 255, 255]); // #FFFFFF
pub const BOOK_FILL: Rgba<u8> = Rgba([245, 158, 11, 255]); // #F59E0B
pub const BOOK_OUTLINE: Rgba<u8> = Rgba([217, 119, 6, 255]); // #D97706

/// The two colors the caller may override; everything else is fixed.
#[derive(Debug, Clone)]
pub struct Palette {
    pub gradient_top: Rgba<u8>,
    pub gradient_bottom: Rgba<u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            gradient_top: GRADIENT_TOP,
            gradient_bottom: GRADIENT_BOTTOM,
        }
    }
}

/// All scaled geometry for one target size, derived once up front.
///
/// Coordinates are in pixels of the target image; centers and radii stay
/// fractional and are resolved to pixels during rasterization. Stroke widths
/// are rounded but never drop below one pixel so outlines stay visible at the
/// smallest sizes.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    pub corner_radius: f32,
    pub head_cx: f32,
    pub head_cy: f32,
    pub head_radius: f32,
    pub head_stroke: f32,
    pub eye_dx: f32,
    pub eye_cy: f32,
    pub eye_radius: f32,
    pub highlight_radius: f32,
    pub highlight_dx: f32,
    pub highlight_dy: f32,
    pub mouth_cy: f32,
    pub mouth_half_width: f32,
    pub mouth_half_height: f32,
    pub mouth_corner: f32,
    pub bar_width: f32,
    pub bar_height: f32,
    pub bar_inset: f32,
    pub bar_step: f32,
    pub book_cx: f32,
    pub book_cy: f32,
    pub book_half_width: f32,
    pub book_half_height: f32,
    pub book_corner: f32,
    pub book_stroke: f32,
    pub glyph_cx: f32,
    pub glyph_cy: f32,
    pub glyph_height: f32,
}

impl Layout {
    pub fn for_size(size: u32) -> Layout {
        let s = size as f32 / REFERENCE_SIZE;
        let head_cx = (size / 2) as f32;
        let head_cy = 350.0 * s;

        Layout {
            corner_radius: size as f32 / 6.0,
            head_cx,
            head_cy,
            head_radius: 120.0 * s,
            head_stroke: (4.0 * s).round().max(1.0),
            eye_dx: 32.0 * s,
            eye_cy: head_cy - 20.0 * s,
            eye_radius: 18.0 * s,
            highlight_radius: 6.0 * s,
            highlight_dx: 5.0 * s,
            highlight_dy: -5.0 * s,
            mouth_cy: head_cy + 15.0 * s,
            mouth_half_width: 22.0 * s,
            mouth_half_height: 8.0 * s,
            mouth_corner: 8.0 * s,
            bar_width: 6.0 * s,
            bar_height: 10.0 * s,
            bar_inset: 5.0 * s,
            bar_step: 10.0 * s,
            book_cx: head_cx + 80.0 * s,
            book_cy: head_cy + 60.0 * s,
            book_half_width: 40.0 * s,
            book_half_height: 20.0 * s,
            book_corner: 4.0 * s,
            book_stroke: (2.0 * s).round().max(1.0),
            glyph_cx: head_cx - 120.0 * s,
            glyph_cy: head_cy - 80.0 * s,
            glyph_height: (size as f32 / 15.0).max(12.0),
        }
    }

    pub fn left_eye_cx(&self) -> f32 {
        self.head_cx - self.eye_dx
    }

    pub fn right_eye_cx(&self) -> f32 {
        self.head_cx + self.eye_dx
    }
}

/// Render the icon at the given square size with the default palette.
pub fn render_icon(size: u32) -> Result<RgbaImage> {
    render_icon_with(size, &Palette::default())
}

/// Render the icon at the given square size.
///
/// Pure function of `(size, palette)` except for the system-font probe behind
/// the "?" overlay, which degrades to a builtin glyph when no font is found.
pub fn render_icon_with(size: u32, palette: &Palette) -> Result<RgbaImage> {
    if size == 0 {
        anyhow::bail!("Icon size must be a positive number of pixels");
    }

    let layout = Layout::for_size(size);
    let mut img = RgbaImage::new(size, size);

    paint_background(&mut img, palette, layout.corner_radius);
    paint_head(&mut img, &layout);
    paint_eyes(&mut img, &layout);
    paint_mouth(&mut img, &layout);
    paint_book(&mut img, &layout);

    if size >= GLYPH_MIN_SIZE {
        glyph::draw_question_mark(
            &mut img,
            layout.glyph_cx,
            layout.glyph_cy,
            layout.glyph_height,
            HIGHLIGHT,
        );
    }

    Ok(img)
}

/// The composited background color at one pixel: the vertical gradient seen
/// through the rounded-corner mask, flattened onto the opaque top color.
///
/// The mask only decides how much gradient reaches the base layer, so the
/// result is always fully opaque.
pub fn background_at(size: u32, x: u32, y: u32, palette: &Palette) -> Rgba<u8> {
    let half = size as f32 / 2.0;
    let ratio = y as f32 / size as f32;
    let row = lerp_color(palette.gradient_top, palette.gradient_bottom, ratio);
    let cov = rounded_rect_coverage(
        x as f32 + 0.5,
        y as f32 + 0.5,
        half,
        half,
        half,
        half,
        size as f32 / 6.0,
    );
    lerp_color(palette.gradient_top, row, cov)
}

fn paint_background(img: &mut RgbaImage, palette: &Palette, corner_radius: f32) {
    let size = img.width();
    let half = size as f32 / 2.0;

    for y in 0..size {
        let ratio = y as f32 / size as f32;
        let row = lerp_color(palette.gradient_top, palette.gradient_bottom, ratio);
        for x in 0..size {
            let cov =
                rounded_rect_coverage(x as f32 + 0.5, y as f32 + 0.5, half, half, half, half, corner_radius);
            img.put_pixel(x, y, lerp_color(palette.gradient_top, row, cov));
        }
    }
}

fn paint_head(img: &mut RgbaImage, l: &Layout) {
    fill_circle(img, l.head_cx, l.head_cy, l.head_radius, ROBOT_FILL);
    stroke_circle(img, l.head_cx, l.head_cy, l.head_radius, l.head_stroke, ROBOT_OUTLINE);
}

fn paint_eyes(img: &mut RgbaImage, l: &Layout) {
    for eye_cx in [l.left_eye_cx(), l.right_eye_cx()] {
        fill_circle(img, eye_cx, l.eye_cy, l.eye_radius, ACCENT);
        fill_circle(
            img,
            eye_cx + l.highlight_dx,
            l.eye_cy + l.highlight_dy,
            l.highlight_radius,
            HIGHLIGHT,
        );
    }
}

fn paint_mouth(img: &mut RgbaImage, l: &Layout) {
    fill_rounded_rect(
        img,
        l.head_cx,
        l.mouth_cy,
        l.mouth_half_width,
        l.mouth_half_height,
        l.mouth_corner,
        ACCENT,
    );

    // Speaker grille: four short bars spread across the mouth.
    let mouth_left = l.head_cx - l.mouth_half_width;
    for i in 0..4 {
        let bar_cx = mouth_left + l.bar_inset + i as f32 * l.bar_step + l.bar_width / 2.0;
        fill_rounded_rect(
            img,
            bar_cx,
            l.mouth_cy,
            l.bar_width / 2.0,
            l.bar_height / 2.0,
            1.0,
            HIGHLIGHT,
        );
    }
}

fn paint_book(img: &mut RgbaImage, l: &Layout) {
    fill_rounded_rect(
        img,
        l.book_cx,
        l.book_cy,
        l.book_half_width,
        l.book_half_height,
        l.book_corner,
        BOOK_FILL,
    );
    stroke_rounded_rect(
        img,
        l.book_cx,
        l.book_cy,
        l.book_half_width,
        l.book_half_height,
        l.book_corner,
        l.book_stroke,
        BOOK_OUTLINE,
    );
}

pub(crate) fn lerp_color(a: Rgba<u8>, b: Rgba<u8>, t: f32) -> Rgba<u8> {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 * (1.0 - t) + b as f32 * t).round() as u8;
    Rgba([mix(a[0], b[0]), mix(a[1], b[1]), mix(a[2], b[2]), mix(a[3], b[3])])
}

/// Source-over blend of `color` onto an opaque pixel at the given coverage.
pub(crate) fn blend_pixel(img: &mut RgbaImage, x: u32, y: u32, color: Rgba<u8>, coverage: f32) {
    let dst = *img.get_pixel(x, y);
    img.put_pixel(x, y, lerp_color(dst, color, coverage));
}

/// Coverage of a disc at a pixel center, with a one-pixel anti-aliased edge.
pub(crate) fn circle_coverage(px: f32, py: f32, cx: f32, cy: f32, radius: f32) -> f32 {
    let dx = px - cx;
    let dy = py - cy;
    let dist = (dx * dx + dy * dy).sqrt();
    (radius - dist + 0.5).clamp(0.0, 1.0)
}

/// Coverage of an axis-aligned rounded rectangle at a pixel center, from the
/// signed distance to its boundary.
pub(crate) fn rounded_rect_coverage(
    px: f32,
    py: f32,
    cx: f32,
    cy: f32,
    half_w: f32,
    half_h: f32,
    corner: f32,
) -> f32 {
    let corner = corner.min(half_w).min(half_h).max(0.0);
    let qx = (px - cx).abs() - (half_w - corner);
    let qy = (py - cy).abs() - (half_h - corner);
    let ox = qx.max(0.0);
    let oy = qy.max(0.0);
    let sd = (ox * ox + oy * oy).sqrt() + qx.max(qy).min(0.0) - corner;
    (0.5 - sd).clamp(0.0, 1.0)
}

/// Pixel bounds touched by a shape, clipped to the image. `None` when the
/// shape lies entirely outside.
fn clip_box(
    img: &RgbaImage,
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
) -> Option<(u32, u32, u32, u32)> {
    let x1 = (max_x + 1.0).ceil();
    let y1 = (max_y + 1.0).ceil();
    if x1 < 0.0 || y1 < 0.0 {
        return None;
    }

    let x0 = (min_x - 1.0).floor().max(0.0) as u32;
    let y0 = (min_y - 1.0).floor().max(0.0) as u32;
    if x0 >= img.width() || y0 >= img.height() {
        return None;
    }

    let x1 = (x1 as u32).min(img.width() - 1);
    let y1 = (y1 as u32).min(img.height() - 1);
    Some((x0, y0, x1, y1))
}

pub(crate) fn fill_circle(img: &mut RgbaImage, cx: f32, cy: f32, radius: f32, color: Rgba<u8>) {
    let Some((x0, y0, x1, y1)) = clip_box(img, cx - radius, cy - radius, cx + radius, cy + radius)
    else {
        return;
    };

    for y in y0..=y1 {
        for x in x0..=x1 {
            let cov = circle_coverage(x as f32 + 0.5, y as f32 + 0.5, cx, cy, radius);
            if cov > 0.0 {
                blend_pixel(img, x, y, color, cov);
            }
        }
    }
}

/// Draw a ring of the given width just inside the circle boundary.
pub(crate) fn stroke_circle(
    img: &mut RgbaImage,
    cx: f32,
    cy: f32,
    radius: f32,
    width: f32,
    color: Rgba<u8>,
) {
    let inner = (radius - width).max(0.0);
    let Some((x0, y0, x1, y1)) = clip_box(img, cx - radius, cy - radius, cx + radius, cy + radius)
    else {
        return;
    };

    for y in y0..=y1 {
        for x in x0..=x1 {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            let cov = circle_coverage(px, py, cx, cy, radius) - circle_coverage(px, py, cx, cy, inner);
            if cov > 0.0 {
                blend_pixel(img, x, y, color, cov);
            }
        }
    }
}

pub(crate) fn fill_rounded_rect(
    img: &mut RgbaImage,
    cx: f32,
    cy: f32,
    half_w: f32,
    half_h: f32,
    corner: f32,
    color: Rgba<u8>,
) {
    let Some((x0, y0, x1, y1)) = clip_box(img, cx - half_w, cy - half_h, cx + half_w, cy + half_h)
    else {
        return;
    };

    for y in y0..=y1 {
        for x in x0..=x1 {
            let cov = rounded_rect_coverage(x as f32 + 0.5, y as f32 + 0.5, cx, cy, half_w, half_h, corner);
            if cov > 0.0 {
                blend_pixel(img, x, y, color, cov);
            }
        }
    }
}

/// Draw a border of the given width just inside the rounded rectangle.
pub(crate) fn stroke_rounded_rect(
    img: &mut RgbaImage,
    cx: f32,
    cy: f32,
    half_w: f32,
    half_h: f32,
    corner: f32,
    width: f32,
    color: Rgba<u8>,
) {
    let inner_w = (half_w - width).max(0.0);
    let inner_h = (half_h - width).max(0.0);
    let inner_corner = (corner - width).max(0.0);
    let Some((x0, y0, x1, y1)) = clip_box(img, cx - half_w, cy - half_h, cx + half_w, cy + half_h)
    else {
        return;
    };

    for y in y0..=y1 {
        for x in x0..=x1 {
            let px = x as f32 + 0.5;
            let py = y as f32 + 0.5;
            let cov = rounded_rect_coverage(px, py, cx, cy, half_w, half_h, corner)
                - rounded_rect_coverage(px, py, cx, cy, inner_w, inner_h, inner_corner);
            if cov > 0.0 {
                blend_pixel(img, x, y, color, cov);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_color_hits_both_endpoints() {
        assert_eq!(lerp_color(GRADIENT_TOP, GRADIENT_BOTTOM, 0.0), GRADIENT_TOP);
        assert_eq!(lerp_color(GRADIENT_TOP, GRADIENT_BOTTOM, 1.0), GRADIENT_BOTTOM);
    }

    #[test]
    fn circle_coverage_full_inside_zero_outside() {
        assert_eq!(circle_coverage(50.0, 50.0, 50.0, 50.0, 10.0), 1.0);
        assert_eq!(circle_coverage(80.0, 50.0, 50.0, 50.0, 10.0), 0.0);
        // Right on the boundary the edge is half covered.
        let edge = circle_coverage(60.0, 50.0, 50.0, 50.0, 10.0);
        assert!((edge - 0.5).abs() < 1e-5, "edge coverage was {edge}");
    }

    #[test]
    fn rounded_rect_coverage_cuts_corners() {
        // A 100x100 rect centered at (50, 50) with radius 20: the exact
        // corner pixel is outside, the edge midpoints are inside.
        assert_eq!(rounded_rect_coverage(1.0, 1.0, 50.0, 50.0, 50.0, 50.0, 20.0), 0.0);
        assert_eq!(rounded_rect_coverage(50.0, 1.0, 50.0, 50.0, 50.0, 50.0, 20.0), 1.0);
        assert_eq!(rounded_rect_coverage(50.0, 50.0, 50.0, 50.0, 50.0, 50.0, 20.0), 1.0);
    }

    #[test]
    fn layout_matches_reference_design_at_1024() {
        let l = Layout::for_size(1024);
        assert_eq!(l.head_radius, 120.0);
        assert_eq!(l.head_cx, 512.0);
        assert_eq!(l.head_cy, 350.0);
        assert_eq!(l.head_stroke, 4.0);
        assert_eq!(l.eye_radius, 18.0);
        assert_eq!(l.corner_radius, 1024.0 / 6.0);
        assert_eq!(l.glyph_cx, 392.0);
        assert_eq!(l.glyph_cy, 270.0);
    }

    #[test]
    fn layout_keeps_strokes_visible_at_tiny_sizes() {
        let l = Layout::for_size(20);
        assert_eq!(l.head_stroke, 1.0);
        assert_eq!(l.book_stroke, 1.0);
    }

    #[test]
    fn render_rejects_zero_size() {
        assert!(render_icon(0).is_err());
    }

    #[test]
    fn render_survives_one_pixel_icon() {
        let img = render_icon(1).unwrap();
        assert_eq!(img.dimensions(), (1, 1));
        assert_eq!(img.get_pixel(0, 0)[3], 255);
    }
}
