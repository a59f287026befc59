//! File boundary: PNG header inspection, decode to RGBA8 and encode from a pixel buffer.

/// PNG adapter built on the `image` crate.
pub mod png;
