//! Contents.json data model for Apple's Asset Catalog format.
//!
//! Mirrors the subset of the asset catalog Contents.json schema that the
//! placeholder icon set actually uses: app icon entries with device idiom,
//! point size, scale and role, plus the catalog info block.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

/// Root structure of a Contents.json file.
#[derive(Serialize, Debug, Clone)]
pub struct ContentsFile {
    /// Image entries for the different sizes and device types.
    pub images: Vec<ImageEntry>,

    /// Versioning and authorship information.
    pub info: Info,
}

/// A single image entry within the asset catalog.
#[derive(Serialize, Debug, Clone)]
pub struct ImageEntry {
    /// The PNG filename the entry points at.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    /// The device type (e.g. "iphone", "ios-marketing").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idiom: Option<String>,

    /// The scale factor (e.g. "1x", "2x", "3x").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<String>,

    /// The size in points (e.g. "29x29", "60x60").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    /// Expected pixel size, used by catalog validation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_size: Option<String>,

    /// The role of the icon (e.g. "notificationCenter", "appLauncher").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Versioning and authorship information for the asset catalog.
#[derive(Serialize, Debug, Clone)]
pub struct Info {
    /// The format version of the asset catalog (always 1).
    pub version: u8,

    /// The tool that authored the asset catalog.
    pub author: String,
}

impl ContentsFile {
    /// Creates an empty Contents.json structure with the given author.
    pub fn new(author: String) -> Self {
        Self {
            images: Vec::new(),
            info: Info { version: 1, author },
        }
    }

    /// Adds an image entry to the contents file.
    pub fn add_image(&mut self, image: ImageEntry) {
        self.images.push(image);
    }
}

impl ImageEntry {
    /// Creates an app icon entry with size, scale and optional role.
    pub fn new_app_icon(
        filename: String,
        idiom: String,
        size: String,
        scale: String,
        role: Option<String>,
    ) -> Self {
        Self {
            filename: Some(filename),
            idiom: Some(idiom),
            scale: Some(scale),
            size: Some(size.clone()),
            expected_size: Some(size),
            role,
        }
    }
}

impl Default for Info {
    fn default() -> Self {
        Self {
            version: 1,
            author: "edubot-icons".to_string(),
        }
    }
}

/// Writes a Contents.json file to the specified directory.
///
/// # Errors
/// Returns an error if JSON serialization or the file write fails.
pub fn write_contents_json(dir: &Path, images: Vec<ImageEntry>) -> Result<()> {
    let cf = ContentsFile {
        images,
        info: Info::default(),
    };
    let json = serde_json::to_string_pretty(&cf)?;
    std::fs::write(dir.join("Contents.json"), json).context("write Contents.json")
}
