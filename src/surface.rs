//! Drawing surfaces.
//!
//! The renderer only needs three primitives: filled ellipses, filled
//! rectangles and stroked elliptical arcs. [`DrawingSurface`] captures them so
//! the icon logic does not depend on a particular 2D library. [`Canvas`] is
//! the raster implementation, backed by a `tiny_skia` pixmap.

use image::{Rgba, RgbaImage};
use resvg::tiny_skia::{
    FillRule, LineCap, Paint, Path, PathBuilder, Pixmap, Rect, Stroke, Transform,
};

use crate::color::{to_rgba, Color};
use crate::error::{Error, Result};
use crate::geometry::RectF;

// ============================================================================
// DrawingSurface
// ============================================================================

/// A target for the icon drawing primitives.
///
/// Angles are in degrees, measured counter-clockwise from the positive x
/// axis as seen on screen, so a sweep of `0..180` traces the upper half of
/// an ellipse. Implementations should ignore shapes with empty bounds or a
/// non-positive stroke width.
pub trait DrawingSurface {
    /// Fills the ellipse inscribed in `bounds`.
    fn fill_ellipse(&mut self, bounds: RectF, color: Color);

    /// Fills the rectangle `bounds`.
    fn fill_rect(&mut self, bounds: RectF, color: Color);

    /// Strokes an open arc of the ellipse inscribed in `bounds`.
    fn stroke_arc(
        &mut self,
        bounds: RectF,
        start_degrees: f32,
        sweep_degrees: f32,
        width: f32,
        color: Color,
    );
}

// ============================================================================
// Canvas
// ============================================================================

/// Largest canvas side accepted, in pixels.
///
/// Keeps allocation requests bounded: a canvas of this size needs 1 GiB.
pub const MAX_CANVAS_SIZE: u32 = 1 << 14;

/// A square RGBA raster, transparent until drawn on.
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Allocates a transparent `size x size` canvas.
    ///
    /// Sizes above [`MAX_CANVAS_SIZE`] fail with [`Error::CanvasAllocation`]
    /// without allocating.
    pub fn new(size: u32) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidSize(size));
        }
        if size > MAX_CANVAS_SIZE {
            return Err(Error::CanvasAllocation { size });
        }
        let pixmap = Pixmap::new(size, size).ok_or(Error::CanvasAllocation { size })?;
        Ok(Self { pixmap })
    }

    /// Converts the canvas into a straight-alpha `RgbaImage`.
    pub fn into_image(self) -> RgbaImage {
        let mut img = RgbaImage::new(self.pixmap.width(), self.pixmap.height());

        // tiny_skia stores premultiplied alpha
        for (dst, src) in img.pixels_mut().zip(self.pixmap.pixels()) {
            let c = src.demultiply();
            *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
        }

        img
    }
}

impl DrawingSurface for Canvas {
    fn fill_ellipse(&mut self, bounds: RectF, color: Color) {
        let Some(rect) = to_skia_rect(bounds) else {
            return;
        };
        let Some(path) = PathBuilder::from_oval(rect) else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    fn fill_rect(&mut self, bounds: RectF, color: Color) {
        let Some(rect) = to_skia_rect(bounds) else {
            return;
        };
        self.pixmap
            .fill_rect(rect, &paint(color), Transform::identity(), None);
    }

    fn stroke_arc(
        &mut self,
        bounds: RectF,
        start_degrees: f32,
        sweep_degrees: f32,
        width: f32,
        color: Color,
    ) {
        if bounds.is_empty() || width <= 0.0 || sweep_degrees == 0.0 {
            return;
        }
        let Some(path) = arc_path(bounds, start_degrees, sweep_degrees) else {
            return;
        };
        let stroke = Stroke {
            width,
            line_cap: LineCap::Butt,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint(color), &stroke, Transform::identity(), None);
    }
}

fn paint(color: Color) -> Paint<'static> {
    let [r, g, b, a] = to_rgba(color);
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;
    paint
}

fn to_skia_rect(bounds: RectF) -> Option<Rect> {
    if bounds.is_empty() {
        return None;
    }
    Rect::from_ltrb(bounds.left, bounds.top, bounds.right, bounds.bottom)
}

// ============================================================================
// Arc Construction
// ============================================================================

/// Largest sweep approximated by a single cubic segment.
const MAX_SEGMENT_DEGREES: f32 = 90.0;

/// Builds an open elliptical arc as a chain of cubic Bézier segments.
fn arc_path(bounds: RectF, start_degrees: f32, sweep_degrees: f32) -> Option<Path> {
    let (cx, cy) = bounds.center();
    let rx = bounds.width() / 2.0;
    let ry = bounds.height() / 2.0;

    // Screen y grows downwards; negate sin so positive angles turn
    // counter-clockwise on screen.
    let point = |a: f32| (cx + rx * a.cos(), cy - ry * a.sin());
    let tangent = |a: f32| (-rx * a.sin(), -ry * a.cos());

    let segments = (sweep_degrees.abs() / MAX_SEGMENT_DEGREES).ceil().max(1.0) as u32;
    let step = sweep_degrees.to_radians() / segments as f32;
    let k = 4.0 / 3.0 * (step / 4.0).tan();

    let mut pb = PathBuilder::new();
    let mut a0 = start_degrees.to_radians();
    let (sx, sy) = point(a0);
    pb.move_to(sx, sy);

    for _ in 0..segments {
        let a1 = a0 + step;
        let (x0, y0) = point(a0);
        let (dx0, dy0) = tangent(a0);
        let (x1, y1) = point(a1);
        let (dx1, dy1) = tangent(a1);
        pb.cubic_to(
            x0 + k * dx0,
            y0 + k * dy0,
            x1 - k * dx1,
            y1 - k * dy1,
            x1,
            y1,
        );
        a0 = a1;
    }

    pb.finish()
}
