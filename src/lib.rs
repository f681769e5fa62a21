//! squircle_qr - QR codes with adjacency-aware rounded modules
//!
//! Renders a QR module matrix so that isolated and convex module corners are
//! rounded while corners where two connected edges meet stay square. The dark
//! silhouette stays gap-free and every module keeps its fill at the centre,
//! so the symbol scans exactly like the hard-edged original.
//!
//! Pipeline: [`extractor`] (bitmap to grid) -> [`adjacency`] (neighbor flags)
//! -> [`raster`] (per-module drawing and canvas composition).

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Four-direction connectivity of filled modules
pub mod adjacency;
/// Bridge to the external QR encoder
pub mod encode;
/// Error type and result alias
pub mod error;
/// Module grid extraction from square-module bitmaps
pub mod extractor;
/// Core data structures (ModuleGrid, BitMatrix, corner decisions, colours)
pub mod models;
/// Render parameters and validation
pub mod params;
/// End-to-end rendering entry points
pub mod pipeline;
/// Module rasterization and canvas composition
pub mod raster;
/// File helpers used by the CLI
pub mod tools;

mod debug;

pub use encode::{ErrorCorrection, encode_grid};
pub use error::{Error, Result};
pub use extractor::{GridExtractor, SamplePoint, extract_grid};
pub use models::{
    BitMatrix, Corner, CornerDecisions, CornerRounding, Direction, Module, ModuleGrid, Neighbors,
    parse_color,
};
pub use params::{CanvasMode, RadiusMode, RenderParams};
pub use pipeline::{render_data, render_rounded, render_square, round_bitmap};

use image::RgbaImage;

/// Renderer with fixed parameters, error correction level and sample policy
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    params: RenderParams,
    level: ErrorCorrection,
    sample: SamplePoint,
}

impl Renderer {
    /// Create a renderer with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with the given parameters
    pub fn with_params(params: RenderParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    /// Set the encoder error correction level
    pub fn error_correction(mut self, level: ErrorCorrection) -> Self {
        self.level = level;
        self
    }

    /// Set the extractor sample point
    pub fn sample_point(mut self, sample: SamplePoint) -> Self {
        self.sample = sample;
        self
    }

    /// Current parameters
    pub fn params(&self) -> &RenderParams {
        &self.params
    }

    /// Render an existing module grid
    pub fn render(&self, grid: &ModuleGrid) -> Result<RgbaImage> {
        render_rounded(grid, &self.params)
    }

    /// Encode and render a text payload
    pub fn render_text(&self, text: &str) -> Result<RgbaImage> {
        render_data(text.as_bytes(), self.level, &self.params)
    }

    /// Re-round a square-module bitmap
    pub fn round(&self, image: &RgbaImage) -> Result<RgbaImage> {
        round_bitmap(image, &self.params, self.sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renderer_is_deterministic() {
        let renderer = Renderer::with_params(RenderParams::new().with_radius_percent(35));
        let a = renderer.render_text("https://example.com").unwrap();
        let b = renderer.render_text("https://example.com").unwrap();
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn test_renderer_overflow() {
        let renderer = Renderer::new();
        let text = "x".repeat(5000);
        assert!(matches!(
            renderer.render_text(&text),
            Err(Error::EncodingOverflow)
        ));
    }
}
