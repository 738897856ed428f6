//! Placeholder app icon generation for the EduBot mobile app.
//!
//! The crate draws a stylized robot-head logo procedurally at every icon size
//! iOS and Android require, writes the results as PNG files, and can emit a
//! markdown guide for creating the real icons by hand.

pub mod contents_json;
pub mod glyph;
pub mod icon_gen;
pub mod instructions;
pub mod render;
