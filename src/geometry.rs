//! Shape bounds and the fixed-ratio icon layout.
//!
//! Every measurement is derived from the icon size with truncating integer
//! division, so the layout only depends on `size` and the rendered output is
//! fully deterministic.

/// An axis-aligned rectangle in canvas coordinates.
///
/// Used as the bounding box of every shape drawn on an icon: circles are the
/// ellipse inscribed in their rect, the bag body is the rect itself, and the
/// handle arc follows the ellipse inscribed in its rect.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectF {
    /// Distance of the left edge from the canvas origin.
    pub left: f32,
    /// Distance of the top edge from the canvas origin.
    pub top: f32,
    /// Distance of the right edge from the canvas origin.
    pub right: f32,
    /// Distance of the bottom edge from the canvas origin.
    pub bottom: f32,
}

impl RectF {
    /// Creates a rectangle from its four edges.
    pub fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates a square starting at the origin with the given side length.
    pub fn square(side: u32) -> Self {
        Self::from_ltrb(0.0, 0.0, side as f32, side as f32)
    }

    /// Shrinks the rectangle by `margin` on all four sides.
    pub fn inset(&self, margin: u32) -> Self {
        let m = margin as f32;
        Self::from_ltrb(self.left + m, self.top + m, self.right - m, self.bottom - m)
    }

    /// Returns the horizontal extent (right - left).
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Returns the vertical extent (bottom - top).
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Returns the centre point as `(x, y)`.
    pub fn center(&self) -> (f32, f32) {
        (
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Returns true if the rectangle encloses no area.
    ///
    /// Small icon sizes collapse some margins to zero, which produces empty
    /// shapes that surfaces should skip.
    pub fn is_empty(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }
}

/// The geometry of one icon.
///
/// Shapes are listed in paint order. See [`draw_icon`](crate::draw_icon) for
/// how each is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconLayout {
    /// Side length of the square canvas in pixels.
    pub size: u32,
    /// Accent disc filling the whole canvas.
    pub outer: RectF,
    /// White contrast disc, inset by `size / 8`.
    pub ring: RectF,
    /// Accent disc, inset by `size / 6`.
    pub inner: RectF,
    /// Bag body, spanning `size / 3 ..= 2 * size / 3` on both axes.
    pub bag: RectF,
    /// Bounds of the ellipse whose upper half forms the handle.
    pub handle: RectF,
    /// Stroke thickness of the handle.
    pub handle_stroke: f32,
}

impl IconLayout {
    /// Computes the layout for a square icon of `size` pixels.
    pub fn new(size: u32) -> Self {
        let outer = RectF::square(size);
        let ring = outer.inset(size / 8);
        let inner = outer.inset(size / 6);

        let bag_near = (size / 3) as f32;
        let bag_far = (u64::from(size) * 2 / 3) as f32;
        let bag = RectF::from_ltrb(bag_near, bag_near, bag_far, bag_far);

        let center = (size / 2) as f32;
        let half_width = (size / 8) as f32;
        let half_height = ((size / 6) / 2) as f32;
        let handle = RectF::from_ltrb(
            center - half_width,
            bag.top - half_height,
            center + half_width,
            bag.top + half_height,
        );

        Self {
            size,
            outer,
            ring,
            inner,
            bag,
            handle,
            handle_stroke: (size / 20) as f32,
        }
    }
}
