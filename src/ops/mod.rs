//! Operation descriptors: what to draw, decoupled from how pixels are stored.

/// The `Rectangle | Hexagon | Copy` tagged union and its dispatcher.
pub mod operation;
