//! Manual icon-creation guide.
//!
//! For teams that want a designed icon instead of the generated placeholder,
//! this module emits a markdown document describing the design concept, the
//! brand palette and every required size. Colors and size lists are formatted
//! from the renderer constants and size tables so the document can never
//! drift from what the generator produces.

use crate::icon_gen::{ANDROID_SIZES, IOS_SIZES};
use crate::render;
use anyhow::{Context, Result};
use image::Rgba;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// File name of the generated guide.
pub const INSTRUCTIONS_FILE: &str = "APP_ICON_INSTRUCTIONS.md";

fn hex(color: Rgba<u8>) -> String {
    format!("#{:02X}{:02X}{:02X}", color[0], color[1], color[2])
}

fn ios_purpose(size: u32) -> &'static str {
    match size {
        20 => "iOS notification icon",
        29 => "iOS settings icon",
        40 => "iOS spotlight icon",
        58 => "iOS settings icon @2x",
        60 => "iOS app icon",
        80 => "iOS spotlight icon @2x",
        87 => "iOS settings icon @3x",
        120 => "iOS app icon @2x",
        180 => "iOS app icon @3x",
        1024 => "iOS App Store",
        _ => "iOS icon",
    }
}

fn android_purpose(label: &str) -> &str {
    match label {
        "playstore" => "Google Play Store",
        other => other,
    }
}

/// Render the full instruction document.
pub fn instructions_markdown() -> String {
    let mut doc = String::new();

    doc.push_str("# EduBot App Icon Creation Instructions\n\n");

    doc.push_str("## Icon Design Concept:\n");
    let _ = writeln!(
        doc,
        "- **Background**: Purple to pink gradient ({} to {})",
        hex(render::GRADIENT_TOP),
        hex(render::GRADIENT_BOTTOM)
    );
    doc.push_str("- **Main Element**: Cute robot head with friendly eyes\n");
    doc.push_str("- **Secondary Elements**: Book, question mark, mathematical symbols\n");
    doc.push_str("- **Style**: Modern, friendly, parent-focused\n\n");

    doc.push_str("## Colors Used:\n");
    let _ = writeln!(doc, "- Primary Purple: {}", hex(render::GRADIENT_TOP));
    let _ = writeln!(doc, "- Secondary Pink: {}", hex(render::GRADIENT_BOTTOM));
    let _ = writeln!(doc, "- Robot Color: {} (light gray)", hex(render::ROBOT_FILL));
    let _ = writeln!(doc, "- Accent Blue: {}", hex(render::ACCENT));
    let _ = writeln!(doc, "- Orange Book: {}", hex(render::BOOK_FILL));
    doc.push_str("\n## Required Sizes:\n\n");

    doc.push_str("### iOS (save as PNG):\n");
    for spec in IOS_SIZES {
        let _ = writeln!(doc, "- {0}x{0} ({1})", spec.size, ios_purpose(spec.size));
    }

    doc.push_str("\n### Android (save as PNG):\n");
    for spec in ANDROID_SIZES {
        let _ = writeln!(doc, "- {0}x{0} ({1})", spec.size, android_purpose(spec.label));
    }

    doc.push_str(
        "\n## Quick Setup:\n\
        1. Recreate the design above in any vector tool (Figma, Sketch, Inkscape)\n\
        2. Export as PNG in each of the listed sizes\n\
        3. Or run `edubot-icons` to generate placeholder versions of all sizes\n\
        \n\
        ## Manual Alternative:\n\
        Use any graphic design tool (Figma, Canva, Photoshop) to create:\n\
        1. Rounded square background with purple-pink gradient\n\
        2. Friendly robot face in the center\n\
        3. Small book icon in corner\n\
        4. Optional: floating math symbols\n\
        \n\
        Place the finished icons in:\n\
        - iOS: ios/Runner/Assets.xcassets/AppIcon.appiconset/\n\
        - Android: android/app/src/main/res/mipmap-*/ic_launcher.png\n",
    );

    doc
}

/// Write the instruction document into `dir` and return the file path.
pub fn write_instructions(dir: &Path) -> Result<PathBuf> {
    let path = dir.join(INSTRUCTIONS_FILE);
    std::fs::write(&path, instructions_markdown())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_palette_and_all_sizes() {
        let doc = instructions_markdown();

        assert!(doc.contains("#4F46E5"));
        assert!(doc.contains("#EC4899"));
        assert!(doc.contains("#F59E0B"));

        for spec in IOS_SIZES {
            assert!(
                doc.contains(&format!("{0}x{0}", spec.size)),
                "missing iOS size {}",
                spec.size
            );
        }
        assert!(doc.contains("(ldpi)"));
        assert!(doc.contains("Google Play Store"));
    }

    #[test]
    fn write_instructions_creates_the_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = write_instructions(temp_dir.path()).unwrap();

        assert!(path.ends_with(INSTRUCTIONS_FILE));
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.starts_with("# EduBot App Icon Creation Instructions"));
    }
}
