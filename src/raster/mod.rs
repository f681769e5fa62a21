//! Module rasterization and canvas composition
//!
//! - [`rasterizer`]: draws one module with per-corner rounding
//! - [`compose`]: allocates the canvas and draws every filled module
//! - [`shapes`]: rectangle and quarter-disc pixel primitives
//! - [`region`]: band-limited mutable canvas views

/// Canvas allocation and per-module dispatch (sequential or rayon)
pub mod compose;
/// Single-module drawing
pub mod rasterizer;
/// Band-limited canvas view
pub mod region;
/// Pixel primitives
pub mod shapes;

pub use compose::{ModuleStyle, compose, compose_square, compose_with_style};
pub use rasterizer::ModuleRasterizer;
pub use region::CanvasRegion;
