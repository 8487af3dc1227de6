//! The icon renderer: a single linear pipeline of drawing passes.
//!
//! Geometry is built as [`kurbo`] paths, strokes are expanded to fill outlines
//! with [`kurbo::stroke`] (round joins and caps, keeping the glyph's soft
//! joints), and everything is rasterized in one `vello_cpu` scene onto a
//! transparent pixmap. The premultiplied readback is converted to straight
//! alpha so the buffer can go straight into a PNG encoder.

use kurbo::{BezPath, Cap, Join, Point, RoundedRect, Shape, Stroke, StrokeOpts};

use crate::{
    error::{IconError, IconResult},
    metrics::IconMetrics,
    theme::{IconTheme, Rgba8},
};

/// Flattening tolerance for curve-to-path and stroke expansion, in pixels.
/// Icons top out around 100px, so this stays well under half a pixel.
const PATH_TOLERANCE: f64 = 0.05;

/// Jitter fractions for the four crack control points, top to bottom:
/// `(dx, dy)` per point, each applied as `round(size * k)`. No visibility
/// floor — at tiny sizes the crack legitimately straightens out.
const CRACK_JITTER: [(f64, f64); 4] = [(0.0, -0.06), (-0.05, -0.02), (0.04, 0.01), (-0.03, 0.05)];

/// One rendered icon: a square straight-alpha RGBA8 buffer.
#[derive(Clone, Debug)]
pub struct IconRgba {
    /// Edge length in pixels.
    pub size: u32,
    /// `size * size * 4` bytes, row-major RGBA.
    pub data: Vec<u8>,
}

impl IconRgba {
    /// Sample one pixel. Panics if `x` or `y` is out of range.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        assert!(x < self.size && y < self.size);
        let i = ((y * self.size + x) * 4) as usize;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }
}

/// Render the cracked-brace icon at `size × size` with the default theme.
pub fn render_icon(size: u32) -> IconResult<IconRgba> {
    render_icon_with(size, &IconTheme::default())
}

/// Render the cracked-brace icon with an explicit theme.
///
/// Pure and deterministic: same inputs, byte-identical output. Errors only on
/// a degenerate `size` (zero, or past the u16 canvas limit); nothing is drawn
/// before validation.
#[tracing::instrument(skip(theme))]
pub fn render_icon_with(size: u32, theme: &IconTheme) -> IconResult<IconRgba> {
    let m = IconMetrics::derive(size, &theme.proportions)?;
    let side = u16::try_from(size)
        .map_err(|_| IconError::invalid_size(size, "size exceeds the u16 canvas limit"))?;
    let pal = &theme.palette;

    let mut ctx = vello_cpu::RenderContext::new(side, side);
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

    // Page: rounded rectangle, filled then outlined.
    let page = RoundedRect::from_rect(m.page, m.radius).to_path(PATH_TOLERANCE);
    fill(&mut ctx, &page, pal.page_fill);
    stroke_onto(&mut ctx, page, m.stroke, pal.outline);

    // Folded top-right corner: filled triangle with a hairline outline, then
    // the crease drawn explicitly so the diagonal stays crisp.
    let fold_x = m.page.x1 - m.fold;
    let fold_y = m.page.y0 + m.fold;
    let mut fold = BezPath::new();
    fold.move_to((fold_x, m.page.y0));
    fold.line_to((m.page.x1, m.page.y0));
    fold.line_to((m.page.x1, fold_y));
    fold.close_path();
    fill(&mut ctx, &fold, pal.fold_fill);
    stroke_onto(&mut ctx, fold, 1.0, pal.outline);
    let crease = polyline(&[
        Point::new(fold_x, m.page.y0),
        Point::new(m.page.x1, fold_y),
    ]);
    stroke_onto(&mut ctx, crease, (m.stroke / 2.0).floor().max(1.0), pal.outline);

    // Braces: mirrored 7-point poly-lines, notch pointing into the content.
    stroke_onto(
        &mut ctx,
        polyline(&brace_points(&m, m.content.x0, 1.0)),
        m.brace_stroke,
        pal.outline,
    );
    stroke_onto(
        &mut ctx,
        polyline(&brace_points(&m, m.content.x1, -1.0)),
        m.brace_stroke,
        pal.outline,
    );

    // Crack: red pass, then the same points shifted (+1, +1) as a translucent
    // shadow at half weight.
    let crack = crack_points(&m);
    stroke_onto(&mut ctx, polyline(&crack), m.crack_stroke, pal.crack);
    let shadow: Vec<Point> = crack
        .iter()
        .map(|p| Point::new(p.x + 1.0, p.y + 1.0))
        .collect();
    stroke_onto(
        &mut ctx,
        polyline(&shadow),
        (m.crack_stroke / 2.0).floor().max(1.0),
        pal.crack_shadow,
    );

    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(side, side);
    ctx.render_to_pixmap(&mut pixmap);

    let mut data = pixmap.data_as_u8_slice().to_vec();
    for px in data.chunks_exact_mut(4) {
        unpremul_rgba8(px);
    }
    Ok(IconRgba { size, data })
}

/// The 7 control points of one brace. `dir` is `1.0` for the left brace
/// (arms and notch reaching rightward) and `-1.0` for the mirrored right one.
fn brace_points(m: &IconMetrics, x: f64, dir: f64) -> [Point; 7] {
    let (by0, by1) = (m.content.y0, m.content.y1);
    [
        Point::new(x + dir * m.brace_width, by0),
        Point::new(x, by0),
        Point::new(x, m.midy - m.brace_gap),
        Point::new(x + dir * m.brace_width * 0.55, m.midy),
        Point::new(x, m.midy + m.brace_gap),
        Point::new(x, by1),
        Point::new(x + dir * m.brace_width, by1),
    ]
}

/// The 4 control points of the crack, running vertically through the page
/// center with a lateral jitter at each point.
fn crack_points(m: &IconMetrics) -> [Point; 4] {
    let s = f64::from(m.size);
    let cx = (m.page.x0 + m.page.x1) / 2.0;
    let anchors = [m.content.y0, m.midy, m.midy, m.content.y1];
    let mut pts = [Point::ZERO; 4];
    for (i, ((dx, dy), base)) in CRACK_JITTER.into_iter().zip(anchors).enumerate() {
        pts[i] = Point::new(cx + (s * dx).round(), base + (s * dy).round());
    }
    pts
}

fn polyline(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = points.iter();
    if let Some(&first) = iter.next() {
        path.move_to(first);
        for &p in iter {
            path.line_to(p);
        }
    }
    path
}

fn set_color(ctx: &mut vello_cpu::RenderContext, c: Rgba8) {
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c[0], c[1], c[2], c[3]));
}

fn fill(ctx: &mut vello_cpu::RenderContext, path: &BezPath, color: Rgba8) {
    set_color(ctx, color);
    ctx.fill_path(&bezpath_to_cpu(path));
}

/// Expand a stroke to a fill outline and paint it. Round joins and caps
/// throughout; the glyph has no hard corners.
fn stroke_onto(ctx: &mut vello_cpu::RenderContext, path: BezPath, width: f64, color: Rgba8) {
    let style = Stroke::new(width).with_join(Join::Round).with_caps(Cap::Round);
    let outline = kurbo::stroke(path, &style, &StrokeOpts::default(), PATH_TOLERANCE);
    set_color(ctx, color);
    ctx.fill_path(&bezpath_to_cpu(&outline));
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

/// The geometry crate and the rasterizer pin different `kurbo` versions, so
/// paths cross the boundary element by element.
fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3))
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

/// Convert one premultiplied RGBA8 pixel to straight alpha in place.
fn unpremul_rgba8(px: &mut [u8]) {
    let a = px[3];
    if a == 0 {
        px[..3].fill(0);
        return;
    }
    if a == 255 {
        return;
    }
    let af = u32::from(a);
    for c in &mut px[..3] {
        *c = ((u32::from(*c) * 255 + af / 2) / af).min(255) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Proportions;

    #[test]
    fn unpremul_handles_extremes() {
        let mut transparent = [7, 7, 7, 0];
        unpremul_rgba8(&mut transparent);
        assert_eq!(transparent, [0, 0, 0, 0]);

        let mut opaque = [245, 245, 245, 255];
        unpremul_rgba8(&mut opaque);
        assert_eq!(opaque, [245, 245, 245, 255]);
    }

    #[test]
    fn brace_sides_mirror() {
        let m = IconMetrics::derive(96, &Proportions::default()).unwrap();
        let left = brace_points(&m, m.content.x0, 1.0);
        let right = brace_points(&m, m.content.x1, -1.0);
        let mid = (m.content.x0 + m.content.x1) / 2.0;
        for (l, r) in left.iter().zip(&right) {
            assert_eq!(l.y, r.y);
            assert!(((l.x - mid) + (r.x - mid)).abs() < 1e-9, "not mirrored: {l:?} {r:?}");
        }
    }

    #[test]
    fn crack_spans_the_content_box_vertically() {
        let m = IconMetrics::derive(96, &Proportions::default()).unwrap();
        let pts = crack_points(&m);
        assert!(pts[0].y < m.content.y0);
        assert!(pts[3].y > m.content.y1);
    }
}
