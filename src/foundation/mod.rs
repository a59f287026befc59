//! Shared value types and the error taxonomy.

/// Pixel coordinates, canvas dimensions and colors.
pub mod core;
/// Error kinds, exit codes and the crate result type.
pub mod error;
