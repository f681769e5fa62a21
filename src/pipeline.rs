use crate::encode::{ErrorCorrection, encode_grid};
use crate::error::Result;
use crate::extractor::{GridExtractor, SamplePoint};
use crate::models::ModuleGrid;
use crate::params::RenderParams;
use crate::raster::{compose, compose_square};
use image::RgbaImage;

/// Render a module grid with adjacency-aware rounded corners
pub fn render_rounded(grid: &ModuleGrid, params: &RenderParams) -> Result<RgbaImage> {
    compose(grid, params)
}

/// Render a module grid as plain hard-edged squares
pub fn render_square(grid: &ModuleGrid, params: &RenderParams) -> Result<RgbaImage> {
    compose_square(grid, params)
}

/// Encode `data` and render it with rounded corners
pub fn render_data(
    data: &[u8],
    level: ErrorCorrection,
    params: &RenderParams,
) -> Result<RgbaImage> {
    params.validate()?;
    let grid = encode_grid(data, level)?;
    compose(&grid, params)
}

/// Re-derive the grid of a square-module bitmap drawn with `params`'
/// geometry and fill, then render it rounded
pub fn round_bitmap(
    image: &RgbaImage,
    params: &RenderParams,
    sample: SamplePoint,
) -> Result<RgbaImage> {
    params.validate()?;
    let grid = GridExtractor::from_params(params)
        .with_sample_point(sample)
        .extract(image)?;
    compose(&grid, params)
}
