//! Icon rendering: layout, drawing and PNG output.

use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::color::{accent, white};
use crate::error::{Error, Result};
use crate::geometry::IconLayout;
use crate::surface::{Canvas, DrawingSurface};

/// Start angle of the handle arc, in degrees.
const HANDLE_START_DEGREES: f32 = 0.0;

/// Sweep of the handle arc. A half turn traces the upper half of the ellipse.
const HANDLE_SWEEP_DEGREES: f32 = 180.0;

// ============================================================================
// IconSpec
// ============================================================================

/// A single icon to produce: its pixel size and where to write it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSpec {
    /// Side length in pixels. Always positive.
    size: u32,
    /// Destination PNG file.
    output_path: PathBuf,
}

impl IconSpec {
    /// Creates a spec, rejecting a zero size.
    pub fn new(size: u32, output_path: impl Into<PathBuf>) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidSize(size));
        }
        Ok(Self {
            size,
            output_path: output_path.into(),
        })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Renders this icon and writes it to [`output_path`](Self::output_path).
    pub fn render(&self) -> Result<()> {
        render(self.size, &self.output_path)
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Draws the icon described by `layout` onto `surface`.
///
/// Paint order, back to front:
///
/// 1. Accent disc over the full canvas
/// 2. White contrast disc
/// 3. Inner accent disc
/// 4. White bag body
/// 5. White handle arc straddling the top edge of the bag
pub fn draw_icon<S: DrawingSurface + ?Sized>(surface: &mut S, layout: &IconLayout) {
    surface.fill_ellipse(layout.outer, accent());
    surface.fill_ellipse(layout.ring, white());
    surface.fill_ellipse(layout.inner, accent());
    surface.fill_rect(layout.bag, white());
    surface.stroke_arc(
        layout.handle,
        HANDLE_START_DEGREES,
        HANDLE_SWEEP_DEGREES,
        layout.handle_stroke,
        white(),
    );
}

/// Renders a `size x size` icon into memory.
pub fn render_image(size: u32) -> Result<RgbaImage> {
    let mut canvas = Canvas::new(size)?;
    let layout = IconLayout::new(size);
    log::debug!("icon layout for {size}px: {layout:?}");

    draw_icon(&mut canvas, &layout);
    Ok(canvas.into_image())
}

/// Encodes an image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Renders a `size x size` icon and writes it as a PNG to `output_path`.
///
/// An existing file at `output_path` is overwritten. The parent directory
/// must already exist.
pub fn render(size: u32, output_path: impl AsRef<Path>) -> Result<()> {
    let output_path = output_path.as_ref();
    let image = render_image(size)?;
    let bytes = encode_png(&image)?;

    fs::write(output_path, bytes).map_err(|source| Error::Write {
        path: output_path.to_path_buf(),
        source,
    })?;

    log::info!("wrote {} ({size}x{size})", output_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{to_rgba, Color};
    use crate::geometry::RectF;

    #[derive(Debug, PartialEq)]
    enum Op {
        Ellipse(RectF, [u8; 4]),
        Rect(RectF, [u8; 4]),
        Arc(RectF, f32, f32, f32, [u8; 4]),
    }

    #[derive(Default)]
    struct Recorder {
        ops: Vec<Op>,
    }

    impl DrawingSurface for Recorder {
        fn fill_ellipse(&mut self, bounds: RectF, color: Color) {
            self.ops.push(Op::Ellipse(bounds, to_rgba(color)));
        }

        fn fill_rect(&mut self, bounds: RectF, color: Color) {
            self.ops.push(Op::Rect(bounds, to_rgba(color)));
        }

        fn stroke_arc(&mut self, bounds: RectF, start: f32, sweep: f32, width: f32, color: Color) {
            self.ops.push(Op::Arc(bounds, start, sweep, width, to_rgba(color)));
        }
    }

    fn close_to(actual: [u8; 4], expected: [u8; 4]) -> bool {
        actual
            .iter()
            .zip(expected.iter())
            .all(|(a, e)| a.abs_diff(*e) <= 1)
    }

    #[test]
    fn draw_sequence_follows_layout() {
        let layout = IconLayout::new(192);
        let mut recorder = Recorder::default();
        draw_icon(&mut recorder, &layout);

        let purple = to_rgba(accent());
        let white = to_rgba(white());
        assert_eq!(
            recorder.ops,
            vec![
                Op::Ellipse(layout.outer, purple),
                Op::Ellipse(layout.ring, white),
                Op::Ellipse(layout.inner, purple),
                Op::Rect(layout.bag, white),
                Op::Arc(layout.handle, 0.0, 180.0, 9.0, white),
            ]
        );
    }

    #[test]
    fn rendered_image_matches_requested_size() {
        for size in (1..=40).chain([192]) {
            let img = render_image(size).unwrap();
            assert_eq!(img.dimensions(), (size, size));
        }
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(render_image(0), Err(Error::InvalidSize(0))));
        assert!(matches!(IconSpec::new(0, "icon.png"), Err(Error::InvalidSize(0))));
    }

    #[test]
    fn icon_regions_have_expected_colors() {
        let img = render_image(192).unwrap();
        let purple = to_rgba(accent());
        let white = to_rgba(white());

        // Outer ring, between the canvas edge and the contrast disc.
        assert!(close_to(img.get_pixel(96, 8).0, purple));
        // Contrast ring.
        assert!(close_to(img.get_pixel(96, 28).0, white));
        // Inner disc, beside the bag.
        assert!(close_to(img.get_pixel(48, 96).0, purple));
        // Bag body.
        assert!(close_to(img.get_pixel(96, 110).0, white));
        // Handle apex, just above the bag.
        assert!(close_to(img.get_pixel(96, 48).0, white));
        // Corners lie outside the outer disc.
        assert_eq!(img.get_pixel(0, 0)[3], 0);
        assert_eq!(img.get_pixel(191, 191)[3], 0);
    }

    #[test]
    fn handle_sits_above_bag_at_512() {
        let img = render_image(512).unwrap();
        let purple = to_rgba(accent());
        let white = to_rgba(white());

        // Apex of the arc.
        assert!(close_to(img.get_pixel(256, 128).0, white));
        // Above the arc and inside the open arc the inner disc shows through.
        assert!(close_to(img.get_pixel(256, 110).0, purple));
        assert!(close_to(img.get_pixel(256, 155).0, purple));
    }

    #[test]
    fn oversized_icon_is_rejected_without_allocating() {
        assert!(matches!(
            render_image(u32::MAX),
            Err(Error::CanvasAllocation { size: u32::MAX })
        ));
    }

    #[test]
    fn rendering_is_deterministic() {
        let first = encode_png(&render_image(64).unwrap()).unwrap();
        let second = encode_png(&render_image(64).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn render_writes_png_of_requested_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon-192.png");

        render(192, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (192, 192));
        assert!(img.pixels().any(|p| p[3] > 0));
        assert!(close_to(img.get_pixel(96, 8).0, to_rgba(accent())));
    }

    #[test]
    fn render_512() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon-512.png");

        render(512, &path).unwrap();

        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (512, 512));
    }

    #[test]
    fn render_single_pixel() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon-1.png");

        render(1, &path).unwrap();

        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (1, 1));
    }

    #[test]
    fn rerender_overwrites_with_identical_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");

        std::fs::write(&path, b"stale").unwrap();
        render(96, &path).unwrap();
        let first = std::fs::read(&path).unwrap();
        render(96, &path).unwrap();
        let second = std::fs::read(&path).unwrap();

        assert_ne!(first, b"stale");
        assert_eq!(first, second);
    }

    #[test]
    fn missing_directory_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("icon.png");

        let err = render(32, &path).unwrap_err();
        assert!(err.is_io());
        assert!(matches!(err, Error::Write { path: p, .. } if p == path));
    }

    #[test]
    fn icon_spec_renders_to_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let spec = IconSpec::new(48, dir.path().join("icon-48.png")).unwrap();

        spec.render().unwrap();

        assert_eq!(spec.size(), 48);
        assert!(spec.output_path().exists());
    }
}
