//! Scale-proportional parameter derivation.
//!
//! All geometry for one icon is a pure function of the requested edge length:
//! each measurement is `round(size * k)` with a visibility floor so no stroke
//! vanishes at 16px. The floors are deliberately mixed — `pad`, `radius`, and
//! the stroke widths clamp at 1px while `fold`, the content insets, and
//! `brace_width` clamp at 2px — and changing that mix changes the glyph's
//! proportions at small sizes, so it is preserved as-is.

use kurbo::Rect;

use crate::{
    error::{IconError, IconResult},
    theme::Proportions,
};

/// Largest supported edge length. The rasterizer surface addresses pixels
/// with `u16` coordinates, same bound as any other canvas we hand it.
pub const MAX_SIZE: u32 = u16::MAX as u32;

/// All derived measurements for one icon size.
///
/// Coordinates are in canvas pixels with the origin at the top-left. Fields
/// hold integer-valued `f64`s (except `midy`, which may land on a half pixel)
/// so they can feed straight into path construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IconMetrics {
    /// Requested canvas edge length.
    pub size: u32,
    /// Gap between canvas edge and page outline.
    pub pad: f64,
    /// Page corner radius, clamped to half the page span.
    pub radius: f64,
    /// Page outline stroke width.
    pub stroke: f64,
    /// Canvas-edge-to-page-box inset: `pad + stroke / 2`.
    pub inset: f64,
    /// Page bounding box.
    pub page: Rect,
    /// Edge length of the folded-corner triangle, clamped to the page span.
    pub fold: f64,
    /// Content box, inset asymmetrically from the page box.
    pub content: Rect,
    /// Vertical midpoint of the content box; brace notches anchor here.
    pub midy: f64,
    /// Horizontal reach of each brace arm.
    pub brace_width: f64,
    /// Half-height of the brace notch opening.
    pub brace_gap: f64,
    /// Brace stroke width.
    pub brace_stroke: f64,
    /// Crack stroke width.
    pub crack_stroke: f64,
}

/// `round(size * k)` with a minimum of `floor` pixels.
fn scaled(size: u32, k: f64, floor: i64) -> f64 {
    ((f64::from(size) * k).round() as i64).max(floor) as f64
}

impl IconMetrics {
    pub fn derive(size: u32, p: &Proportions) -> IconResult<Self> {
        if size == 0 {
            return Err(IconError::invalid_size(size, "size must be at least 1"));
        }
        if size > MAX_SIZE {
            return Err(IconError::invalid_size(
                size,
                "size exceeds the u16 canvas limit",
            ));
        }

        let s = f64::from(size);
        let pad = scaled(size, p.pad, 1);
        let stroke = scaled(size, p.stroke, 1);
        let inset = pad + (stroke / 2.0).floor();

        // Degenerate sizes (1..=3) can push the far edge past the near one;
        // clamp so every region keeps non-negative extent.
        let x0 = inset;
        let x1 = (s - inset).max(x0);
        let page = Rect::new(x0, x0, x1, x1);

        let radius = scaled(size, p.radius, 1).min(page.width() / 2.0);
        let fold = scaled(size, p.fold, 2).min(page.width());

        let inset_x = scaled(size, p.content_inset_x, 2);
        let inset_top = scaled(size, p.content_inset_top, 2);
        let inset_bottom = scaled(size, p.content_inset_bottom, 2);
        let bx0 = page.x0 + inset_x;
        let bx1 = (page.x1 - inset_x).max(bx0);
        let by0 = page.y0 + inset_top;
        let by1 = (page.y1 - inset_bottom).max(by0);
        let content = Rect::new(bx0, by0, bx1, by1);

        Ok(Self {
            size,
            pad,
            radius,
            stroke,
            inset,
            page,
            fold,
            content,
            midy: (by0 + by1) / 2.0,
            brace_width: scaled(size, p.brace_width, 2),
            brace_gap: scaled(size, p.brace_gap, 1),
            brace_stroke: scaled(size, p.brace_stroke, 1),
            crack_stroke: scaled(size, p.crack_stroke, 1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(size: u32) -> IconMetrics {
        IconMetrics::derive(size, &Proportions::default()).unwrap()
    }

    #[test]
    fn rejects_zero_and_oversize() {
        let p = Proportions::default();
        assert!(matches!(
            IconMetrics::derive(0, &p),
            Err(IconError::InvalidSize { size: 0, .. })
        ));
        assert!(IconMetrics::derive(MAX_SIZE, &p).is_ok());
        assert!(IconMetrics::derive(MAX_SIZE + 1, &p).is_err());
    }

    #[test]
    fn exact_values_at_96() {
        let m = derive(96);
        assert_eq!(m.pad, 8.0);
        assert_eq!(m.stroke, 7.0);
        assert_eq!(m.inset, 11.0);
        assert_eq!(m.radius, 17.0);
        assert_eq!(m.fold, 21.0);
        assert_eq!(m.page, Rect::new(11.0, 11.0, 85.0, 85.0));
        assert_eq!(m.content, Rect::new(30.0, 38.0, 66.0, 64.0));
        assert_eq!(m.midy, 51.0);
        assert_eq!(m.brace_width, 12.0);
        assert_eq!(m.brace_gap, 6.0);
        assert_eq!(m.brace_stroke, 8.0);
        assert_eq!(m.crack_stroke, 7.0);
    }

    #[test]
    fn visibility_floors_hold_at_16() {
        let m = derive(16);
        for w in [
            m.pad,
            m.radius,
            m.stroke,
            m.brace_gap,
            m.brace_stroke,
            m.crack_stroke,
        ] {
            assert!(w >= 1.0, "{w} below 1px floor");
        }
        for w in [m.fold, m.brace_width] {
            assert!(w >= 2.0, "{w} below 2px floor");
        }
    }

    #[test]
    fn parameters_are_monotonic_in_size() {
        let mut prev = derive(1);
        for size in 2..=256 {
            let m = derive(size);
            assert!(m.pad >= prev.pad);
            assert!(m.stroke >= prev.stroke);
            assert!(m.inset >= prev.inset);
            assert!(m.fold >= prev.fold);
            assert!(m.brace_width >= prev.brace_width);
            assert!(m.brace_gap >= prev.brace_gap);
            assert!(m.brace_stroke >= prev.brace_stroke);
            assert!(m.crack_stroke >= prev.crack_stroke);
            prev = m;
        }
    }

    #[test]
    fn degenerate_sizes_keep_nonnegative_extents() {
        for size in 1..=3 {
            let m = derive(size);
            assert!(m.page.width() >= 0.0);
            assert!(m.page.height() >= 0.0);
            assert!(m.content.width() >= 0.0);
            assert!(m.content.height() >= 0.0);
            assert!(m.radius <= m.page.width() / 2.0 + f64::EPSILON);
            assert!(m.fold <= m.page.width() + f64::EPSILON);
        }
    }
}
