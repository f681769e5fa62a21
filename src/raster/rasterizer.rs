use super::region::CanvasRegion;
use super::shapes::{fill_rect, quarter_disc};
use crate::error::{Error, Result};
use crate::models::CornerDecisions;
use crate::params::RenderParams;
use image::Rgba;

/// Draws single modules: a filled square, then a quarter-disc re-cut at
/// every corner whose decision is [`Rounded`](crate::models::CornerRounding::Rounded).
#[derive(Debug, Clone, Copy)]
pub struct ModuleRasterizer {
    module_size: u32,
    radius: u32,
    fill: Rgba<u8>,
    cutout: Rgba<u8>,
}

impl ModuleRasterizer {
    /// Rasterizer for validated parameters
    pub fn new(params: &RenderParams) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            module_size: params.module_size,
            radius: params.radius(),
            fill: params.fill,
            cutout: params.cutout_color(),
        })
    }

    /// Corner radius in pixels
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Module side in pixels
    pub fn module_size(&self) -> u32 {
        self.module_size
    }

    /// Draw one module with its top-left pixel at (`x`, `y`)
    pub fn draw(
        &self,
        region: &mut CanvasRegion<'_>,
        x: u32,
        y: u32,
        corners: CornerDecisions,
    ) -> Result<()> {
        let s = self.module_size;
        if !region.contains_rect(x, y, s, s) {
            return Err(Error::parameter(
                "module",
                format!("{s}px module at ({x}, {y}) falls outside the canvas"),
            ));
        }

        fill_rect(region, x, y, s, s, self.fill);
        if self.radius == 0 {
            return Ok(());
        }
        for corner in corners.rounded() {
            quarter_disc(
                region,
                corner,
                x,
                y,
                s,
                self.radius,
                self.fill,
                self.cutout,
            );
        }
        Ok(())
    }
}
