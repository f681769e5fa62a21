//! Module grid extraction from a square-module bitmap
//!
//! Recovers the logical [`ModuleGrid`] from an image drawn with uniform,
//! un-antialiased `module_size` squares and a `border`-module quiet zone.
//! Each module is classified from a single pixel; anti-aliased input will
//! be misread along module edges.

use crate::debug::debug_log;
use crate::error::{Error, Result};
use crate::models::ModuleGrid;
use crate::params::RenderParams;
use image::{Rgba, RgbaImage};

/// Which pixel of a module is sampled to classify it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplePoint {
    /// The module's top-left pixel
    #[default]
    TopLeft,
    /// The module's centre pixel, away from any edge
    Center,
}

impl SamplePoint {
    fn offset(self, module_size: u32) -> u32 {
        match self {
            SamplePoint::TopLeft => 0,
            SamplePoint::Center => module_size / 2,
        }
    }
}

/// Converts square-module bitmaps back into module grids
#[derive(Debug, Clone)]
pub struct GridExtractor {
    module_size: u32,
    border: u32,
    fill: Rgba<u8>,
    sample: SamplePoint,
}

impl GridExtractor {
    /// Create an extractor for the given geometry and fill colour
    pub fn new(module_size: u32, border: u32, fill: Rgba<u8>) -> Self {
        Self {
            module_size,
            border,
            fill,
            sample: SamplePoint::default(),
        }
    }

    /// Extractor matching the geometry and fill of `params`
    pub fn from_params(params: &RenderParams) -> Self {
        Self::new(params.module_size, params.border, params.fill)
    }

    /// Use a different sample point
    pub fn with_sample_point(mut self, sample: SamplePoint) -> Self {
        self.sample = sample;
        self
    }

    /// Modules per side for a bitmap of the given dimensions
    pub fn modules_per_side(&self, width: u32, height: u32) -> Result<usize> {
        if self.module_size == 0 {
            return Err(Error::parameter("module_size", "must be at least 1"));
        }
        let geometry_error = || Error::InvalidBitmapGeometry {
            width,
            height,
            module_size: self.module_size,
            border: self.border,
        };

        if width != height || width % self.module_size != 0 {
            return Err(geometry_error());
        }
        let total = width / self.module_size;
        let quiet = self.border.checked_mul(2).ok_or_else(geometry_error)?;
        match total.checked_sub(quiet) {
            Some(n) if n >= 1 => Ok(n as usize),
            _ => Err(geometry_error()),
        }
    }

    /// Classify every module inside the quiet zone
    pub fn extract(&self, image: &RgbaImage) -> Result<ModuleGrid> {
        let (width, height) = image.dimensions();
        let size = self.modules_per_side(width, height)?;

        let origin = self.border * self.module_size;
        let offset = self.sample.offset(self.module_size);
        let grid = ModuleGrid::from_fn(size, |row, col| {
            let x = origin + col as u32 * self.module_size + offset;
            let y = origin + row as u32 * self.module_size + offset;
            self.is_fill(image.get_pixel(x, y))
        })?;

        debug_log!(
            "EXTRACT: {}x{} bitmap -> {}x{} modules, {} filled",
            width,
            height,
            size,
            size,
            grid.filled_count()
        );

        Ok(grid)
    }

    fn is_fill(&self, pixel: &Rgba<u8>) -> bool {
        pixel[3] > 0 && pixel.0[..3] == self.fill.0[..3]
    }
}

/// Extract a grid using the geometry and fill colour of `params`
pub fn extract_grid(image: &RgbaImage, params: &RenderParams) -> Result<ModuleGrid> {
    GridExtractor::from_params(params).extract(image)
}
