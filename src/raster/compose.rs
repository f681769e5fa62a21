use super::rasterizer::ModuleRasterizer;
use super::region::CanvasRegion;
use crate::adjacency::Adjacency;
use crate::debug::debug_log;
use crate::error::Result;
use crate::models::{CornerDecisions, Module, ModuleGrid};
use crate::params::RenderParams;
use image::RgbaImage;
use rayon::prelude::*;

/// How module corners are chosen during composition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModuleStyle {
    /// Adjacency-aware rounded corners
    #[default]
    Rounded,
    /// Plain hard-edged squares
    Square,
}

impl ModuleStyle {
    fn corners(self, module: &Module) -> CornerDecisions {
        match self {
            ModuleStyle::Rounded => module.corners(),
            ModuleStyle::Square => CornerDecisions::ALL_SQUARE,
        }
    }
}

/// Render `grid` with rounded module corners
pub fn compose(grid: &ModuleGrid, params: &RenderParams) -> Result<RgbaImage> {
    compose_with_style(grid, params, ModuleStyle::Rounded)
}

/// Render `grid` as plain square modules
pub fn compose_square(grid: &ModuleGrid, params: &RenderParams) -> Result<RgbaImage> {
    compose_with_style(grid, params, ModuleStyle::Square)
}

/// Allocate the canvas and draw every filled module of `grid` in `style`.
///
/// Either every module is drawn or an error is returned and the canvas is dropped.
pub fn compose_with_style(
    grid: &ModuleGrid,
    params: &RenderParams,
    style: ModuleStyle,
) -> Result<RgbaImage> {
    let raster = ModuleRasterizer::new(params)?;
    let side = params.canvas_side(grid.size())?;
    let adjacency = Adjacency::analyze(grid);

    debug_log!(
        "COMPOSE: {}x{} modules, {} filled, radius={}px, canvas={}x{}, parallel={}",
        grid.size(),
        grid.size(),
        adjacency.len(),
        raster.radius(),
        side,
        side,
        params.parallel
    );

    let mut canvas = RgbaImage::from_pixel(side, side, params.canvas_color());
    if params.parallel {
        draw_parallel(&mut canvas, side, params.border, &raster, &adjacency, style)?;
    } else {
        draw_sequential(&mut canvas, side, params.border, &raster, &adjacency, style)?;
    }
    Ok(canvas)
}

fn module_origin(module: &Module, border: u32, module_size: u32) -> (u32, u32) {
    (
        (border + module.col as u32) * module_size,
        (border + module.row as u32) * module_size,
    )
}

fn draw_sequential(
    pixels: &mut [u8],
    side: u32,
    border: u32,
    raster: &ModuleRasterizer,
    adjacency: &Adjacency,
    style: ModuleStyle,
) -> Result<()> {
    let mut region = CanvasRegion::new(pixels, side, 0);
    for module in adjacency.modules() {
        let (x, y) = module_origin(module, border, raster.module_size());
        raster.draw(&mut region, x, y, style.corners(module))?;
    }
    Ok(())
}

/// One band per canvas module row; modules never cross band boundaries.
fn draw_parallel(
    pixels: &mut [u8],
    side: u32,
    border: u32,
    raster: &ModuleRasterizer,
    adjacency: &Adjacency,
    style: ModuleStyle,
) -> Result<()> {
    let module_size = raster.module_size();
    let band_bytes = side as usize * 4 * module_size as usize;

    pixels
        .par_chunks_mut(band_bytes)
        .enumerate()
        .try_for_each(|(band, chunk)| -> Result<()> {
            let Some(row) = band.checked_sub(border as usize) else {
                return Ok(());
            };
            let mut region = CanvasRegion::new(chunk, side, band as u32 * module_size);
            for module in adjacency.row(row) {
                let (x, y) = module_origin(module, border, module_size);
                raster.draw(&mut region, x, y, style.corners(module))?;
            }
            Ok(())
        })
}
