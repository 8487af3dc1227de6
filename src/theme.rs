//! Palette colors and proportion constants for the cracked-brace icon.
//!
//! Every measurement in the rendered glyph is a fixed fraction of the canvas
//! edge length, so the icon keeps its proportions from 16px up. The fractions
//! and colors live here rather than inline in the renderer so tests (and any
//! future re-skin) can swap them without touching geometry code.

/// Straight-alpha RGBA, 8 bits per channel.
pub type Rgba8 = [u8; 4];

/// The five fixed colors of the icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Page background (near-white, opaque).
    pub page_fill: Rgba8,
    /// Outline ink shared by the page, fold, and braces (near-black, opaque).
    pub outline: Rgba8,
    /// Folded-corner triangle fill (light gray, opaque).
    pub fold_fill: Rgba8,
    /// Crack stroke (red, opaque).
    pub crack: Rgba8,
    /// Crack drop-shadow (black, low alpha).
    pub crack_shadow: Rgba8,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            page_fill: [245, 245, 245, 255],
            outline: [40, 40, 40, 255],
            fold_fill: [230, 230, 230, 255],
            crack: [220, 60, 60, 255],
            crack_shadow: [0, 0, 0, 80],
        }
    }
}

/// Fractions of the canvas edge length used to derive pixel measurements.
///
/// Each becomes `round(size * k)` with a 1px or 2px visibility floor; see
/// [`crate::metrics::IconMetrics`] for the derivation and which floor applies
/// to which parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Proportions {
    /// Gap between the canvas edge and the page outline.
    pub pad: f64,
    /// Corner radius of the page rectangle.
    pub radius: f64,
    /// Page outline stroke width.
    pub stroke: f64,
    /// Edge length of the folded top-right corner triangle.
    pub fold: f64,
    /// Horizontal inset from the page box to the content box.
    pub content_inset_x: f64,
    /// Top inset from the page box to the content box.
    pub content_inset_top: f64,
    /// Bottom inset from the page box to the content box (smaller than the
    /// top inset, reserving extra top margin).
    pub content_inset_bottom: f64,
    /// Horizontal reach of each brace arm.
    pub brace_width: f64,
    /// Half-height of the notch opening at the brace midpoint.
    pub brace_gap: f64,
    /// Brace stroke width.
    pub brace_stroke: f64,
    /// Crack stroke width.
    pub crack_stroke: f64,
}

impl Default for Proportions {
    fn default() -> Self {
        Self {
            pad: 0.08,
            radius: 0.18,
            stroke: 0.07,
            fold: 0.22,
            content_inset_x: 0.20,
            content_inset_top: 0.28,
            content_inset_bottom: 0.22,
            brace_width: 0.12,
            brace_gap: 0.06,
            brace_stroke: 0.08,
            crack_stroke: 0.07,
        }
    }
}

/// Everything configurable about the icon's appearance.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IconTheme {
    pub palette: Palette,
    pub proportions: Proportions,
}
