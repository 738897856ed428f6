//! Icon generation: renders the placeholder logo at every configured size and
//! persists the results as PNG files.

use crate::contents_json::{write_contents_json, ImageEntry};
use crate::render::{self, Palette};
use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, Rgba, RgbaImage,
};
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

/// One icon target: the output pixel size plus the label used in its file name.
#[derive(Debug, Clone, Copy)]
pub struct IconSpec {
    pub size: u32,
    pub label: &'static str,
}

/// iOS app icon sizes, notification icon through App Store artwork.
pub const IOS_SIZES: [IconSpec; 10] = [
    IconSpec { size: 20, label: "20pt" },
    IconSpec { size: 29, label: "29pt" },
    IconSpec { size: 40, label: "40pt" },
    IconSpec { size: 58, label: "58pt" },
    IconSpec { size: 60, label: "60pt" },
    IconSpec { size: 80, label: "80pt" },
    IconSpec { size: 87, label: "87pt" },
    IconSpec { size: 120, label: "120pt" },
    IconSpec { size: 180, label: "180pt" },
    IconSpec { size: 1024, label: "1024pt" },
];

/// Android launcher icon sizes by density bucket, plus the Play Store artwork.
pub const ANDROID_SIZES: [IconSpec; 7] = [
    IconSpec { size: 36, label: "ldpi" },
    IconSpec { size: 48, label: "mdpi" },
    IconSpec { size: 72, label: "hdpi" },
    IconSpec { size: 96, label: "xhdpi" },
    IconSpec { size: 144, label: "xxhdpi" },
    IconSpec { size: 192, label: "xxxhdpi" },
    IconSpec { size: 512, label: "playstore" },
];

/// Size of the master app icon generated alongside the platform sets.
pub const MASTER_SIZE: u32 = 1024;

// Options struct for library consumers; main.rs maps the CLI flags onto it.
#[derive(Debug)]
pub struct Options {
    pub output: PathBuf,
    pub png: Option<Vec<u32>>,
    pub ios: bool,
    pub android: bool,
    pub color_top: String,
    pub color_bottom: String,
}

pub fn generate_icons(opts: &Options) -> Result<()> {
    // Ensure the output directory exists
    create_dir_all(&opts.output).context("Can't create output directory")?;

    let palette = Palette {
        gradient_top: parse_css_color(&opts.color_top, render::GRADIENT_TOP),
        gradient_bottom: parse_css_color(&opts.color_bottom, render::GRADIENT_BOTTOM),
    };

    // Custom sizes short-circuit the platform sets, like the --png flag does
    // for source-image icon generators.
    if let Some(sizes) = &opts.png {
        return generate_custom_sizes(sizes, &opts.output, &palette);
    }

    let all_platforms = !opts.ios && !opts.android;

    if opts.ios || all_platforms {
        generate_ios_icons(&opts.output, &palette)?;
    }
    if opts.android || all_platforms {
        generate_android_icons(&opts.output, &palette)?;
    }
    if all_platforms {
        generate_master_icon(&opts.output, &palette)?;
    }

    Ok(())
}

/// Parse a CSS color into a pixel, keeping the brand default when the string
/// does not parse.
fn parse_css_color(color: &str, default: Rgba<u8>) -> Rgba<u8> {
    css_color::Srgb::from_str(color)
        .map(|color| {
            Rgba([
                (color.red * 255.) as u8,
                (color.green * 255.) as u8,
                (color.blue * 255.) as u8,
                255,
            ])
        })
        .unwrap_or(default)
}

fn generate_ios_icons(out_dir: &Path, palette: &Palette) -> Result<()> {
    println!("Generating iOS icons...");

    // Track produced files for Contents.json
    let mut images: Vec<ImageEntry> = Vec::new();

    for spec in IOS_SIZES {
        let filename = format!("ios_icon_{0}x{0}_{1}.png", spec.size, spec.label);
        let icon = render::render_icon_with(spec.size, palette)?;
        save_png(&icon, &out_dir.join(&filename))?;
        println!("  ✓ Generated {filename}");

        let (point_size, scale) = ios_point_size(spec.size);
        let mut entry = ImageEntry::new_app_icon(
            filename,
            determine_ios_idiom(spec.size),
            format!("{point_size}x{point_size}"),
            format!("{scale}x"),
            determine_ios_role(point_size),
        );
        entry.expected_size = Some(spec.size.to_string());
        images.push(entry);
    }

    write_contents_json(out_dir, images)?;
    println!("  ✓ Generated Contents.json");

    Ok(())
}

fn generate_android_icons(out_dir: &Path, palette: &Palette) -> Result<()> {
    println!("Generating Android icons...");

    for spec in ANDROID_SIZES {
        let filename = format!("android_icon_{0}x{0}_{1}.png", spec.size, spec.label);
        let icon = render::render_icon_with(spec.size, palette)?;
        save_png(&icon, &out_dir.join(&filename))?;
        println!("  ✓ Generated {filename}");
    }

    Ok(())
}

fn generate_custom_sizes(sizes: &[u32], out_dir: &Path, palette: &Palette) -> Result<()> {
    println!("Generating custom PNG sizes...");

    for &size in sizes {
        let icon = render::render_icon_with(size, palette)?;
        let output_path = out_dir.join(format!("{size}x{size}.png"));
        save_png(&icon, &output_path)?;
        println!("  ✓ Generated {size}x{size}.png");
    }

    Ok(())
}

/// The full-resolution master icon kept next to the platform sets.
fn generate_master_icon(out_dir: &Path, palette: &Palette) -> Result<()> {
    let icon = render::render_icon_with(MASTER_SIZE, palette)?;
    save_png(&icon, &out_dir.join("app_icon_1024.png"))?;
    println!("  ✓ Generated app_icon_1024.png");
    Ok(())
}

// Encode with maximum compression; placeholder sets get checked into app
// repos, so small files matter more than encode speed.
fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    let encoder =
        PngEncoder::new_with_quality(&mut out, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image.as_raw(), image.width(), image.height(), ColorType::Rgba8)?;
    out.flush()
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Map a flat pixel size back to its (point size, scale) pair.
fn ios_point_size(pixel_size: u32) -> (u32, u32) {
    match pixel_size {
        40 => (20, 2),
        58 => (29, 2),
        80 => (40, 2),
        87 => (29, 3),
        120 => (60, 2),
        180 => (60, 3),
        other => (other, 1),
    }
}

/// Determine the appropriate iOS idiom for a pixel size.
fn determine_ios_idiom(pixel_size: u32) -> String {
    match pixel_size {
        1024 => "ios-marketing".to_string(),
        _ => "iphone".to_string(),
    }
}

/// Determine the role for an iOS icon based on its point size.
fn determine_ios_role(point_size: u32) -> Option<String> {
    match point_size {
        20 => Some("notificationCenter".to_string()),
        29 => Some("companionSettings".to_string()),
        40 => Some("spotlight".to_string()),
        60 => Some("appLauncher".to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ios_point_sizes_multiply_back_to_pixels() {
        for spec in IOS_SIZES {
            let (point, scale) = ios_point_size(spec.size);
            assert_eq!(point * scale, spec.size, "size {}", spec.size);
        }
    }

    #[test]
    fn marketing_idiom_only_for_store_artwork() {
        assert_eq!(determine_ios_idiom(1024), "ios-marketing");
        for spec in IOS_SIZES.iter().filter(|s| s.size != 1024) {
            assert_eq!(determine_ios_idiom(spec.size), "iphone");
        }
    }

    #[test]
    fn parse_css_color_falls_back_on_garbage() {
        // Float conversion may land one below the hex literal.
        let parsed = parse_css_color("#4f46e5", render::GRADIENT_BOTTOM);
        for (have, want) in parsed.0.iter().zip([79u8, 70, 229, 255]) {
            assert!((*have as i16 - want as i16).abs() <= 1, "{parsed:?}");
        }
        assert_eq!(
            parse_css_color("not-a-color", render::GRADIENT_TOP),
            render::GRADIENT_TOP
        );
    }
}
