//! Pixel storage and the shape rasterizers.
//!
//! Everything here works on a [`buffer::PixelBuffer`] in memory and never touches files. Each
//! drawing entry point validates its spec first and returns an error before writing a single
//! pixel, so a failed operation leaves the buffer exactly as it was.

/// Owned row-major pixel storage with clipping writes.
pub mod buffer;
/// Snapshot-based region copy.
pub mod copy;
/// Flat-top hexagon renderer.
pub mod hexagon;
/// Bresenham walker, thick strokes and vertex disks.
pub mod line;
/// Rectangle outline and fill renderer.
pub mod rect;
