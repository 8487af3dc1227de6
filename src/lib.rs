//! Procedural generator for the Fractured JSON Viewer toolbar icons.
//!
//! The icon is a stylized cracked brace on a rounded page with a folded
//! corner, rendered at a handful of fixed pixel sizes. All geometry scales
//! proportionally with the requested size, so the glyph reads the same at
//! 16px and 96px.
//!
//! - [`render_icon`] is the pure core: `size → RGBA buffer`.
//! - [`export_icons`] is the thin I/O driver: render a size list, write one
//!   PNG per size, return the paths.
#![forbid(unsafe_code)]

pub mod error;
pub mod export;
pub mod metrics;
pub mod render;
pub mod theme;

pub use error::{IconError, IconResult};
pub use export::{DEFAULT_SIZES, ExportOptions, export_icons};
pub use metrics::{IconMetrics, MAX_SIZE};
pub use render::{IconRgba, render_icon, render_icon_with};
pub use theme::{IconTheme, Palette, Proportions, Rgba8};
