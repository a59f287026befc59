//! pngshape edits PNG images with pixel-exact geometry.
//!
//! One invocation decodes a PNG into a [`PixelBuffer`], applies a single [`Operation`]
//! (bordered/filled rectangle, bordered/filled flat-top hexagon, or region copy) and encodes the
//! result.
//!
//! # Pipeline
//!
//! 1. **Parse**: command line -> [`Job`] (every token and precondition checked up front)
//! 2. **Decode**: PNG -> RGBA8 [`PixelBuffer`]
//! 3. **Rasterize**: [`Operation::apply`] mutates the buffer in place
//! 4. **Encode**: buffer -> 8-bit RGBA PNG, only when step 3 succeeded
//!
//! Rasterizers validate before touching any pixel, so an `Err` always leaves the buffer
//! unchanged. Shapes may extend past the canvas; off-canvas pixels are clipped silently.
#![forbid(unsafe_code)]

pub mod cli;
pub mod codec;
pub mod foundation;
pub mod ops;
pub mod raster;

pub use cli::args::{Cli, ParseOutcome, classify_clap_error};
pub use cli::job::{Action, Job, run};
pub use cli::tokens::{parse_center, parse_color, parse_point, parse_radius, parse_thickness};
pub use codec::png::{
    DecodedImage, ImageInfo, PngColorType, decode_png, decode_png_bytes, encode_png,
    encode_png_bytes, parse_png_header, read_png_header,
};
pub use foundation::core::{Canvas, Color, IPoint, Point, Vec2};
pub use foundation::error::{ErrorKind, ShapeError, ShapeResult};
pub use ops::operation::Operation;
pub use raster::buffer::{Channels, PixelBuffer};
pub use raster::copy::{CopyPlan, CopySpec, copy_region};
pub use raster::hexagon::{HexagonSpec, draw_hexagon, hexagon_vertices, point_in_hexagon};
pub use raster::line::{Bresenham, draw_thick_line, stamp_disk};
pub use raster::rect::{NormalizedRect, RectangleSpec, draw_rectangle};
