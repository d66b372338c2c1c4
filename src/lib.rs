//! storefront-icons: procedural web app icons
//!
//! This crate draws the storefront's application icons (an accent-colored
//! disc with a contrast ring and a shopping-bag glyph) and writes them as PNG
//! files. All geometry is proportional to the icon size, so any positive size
//! renders the same design.
//!
//! # Example
//!
//! ```no_run
//! use storefront_icons::{generate, render, GeneratorConfig};
//!
//! // A single icon
//! render(192, "icon-192.png")?;
//!
//! // The standard set, into client/public
//! let written = generate(&GeneratorConfig::default())?;
//! assert_eq!(written.len(), 2);
//! # Ok::<(), storefront_icons::Error>(())
//! ```
//!
//! # Custom surfaces
//!
//! The drawing itself goes through [`DrawingSurface`], so the icon can be
//! drawn onto anything that can fill ellipses and rectangles and stroke arcs:
//!
//! ```
//! use storefront_icons::{draw_icon, Canvas, IconLayout};
//!
//! let mut canvas = Canvas::new(64)?;
//! draw_icon(&mut canvas, &IconLayout::new(64));
//! let image = canvas.into_image();
//! assert_eq!(image.dimensions(), (64, 64));
//! # Ok::<(), storefront_icons::Error>(())
//! ```

pub mod color;
mod error;
mod generator;
mod geometry;
mod renderer;
mod surface;

pub use error::{Error, Result};
pub use generator::{generate, GeneratorConfig, IconTarget, DEFAULT_OUTPUT_DIR, STANDARD_TARGETS};
pub use geometry::{IconLayout, RectF};
pub use renderer::{draw_icon, encode_png, render, render_image, IconSpec};
pub use surface::{Canvas, DrawingSurface, MAX_CANVAS_SIZE};
