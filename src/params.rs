//! Render parameters and their validation.

use crate::error::{Error, Result};
use crate::models::color::{BLACK, TRANSPARENT, WHITE};
use image::Rgba;

/// How the corner radius relates to the module size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RadiusMode {
    /// Radius capped at `module_size / 2`; corner arcs never overlap
    #[default]
    Clamped,
    /// Radius may reach `module_size`; later corners overdraw earlier ones
    Unclamped,
}

/// What the canvas starts as and what colour corner cut-outs take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CanvasMode {
    /// Transparent canvas; corner cut-outs painted with `background`
    #[default]
    Transparent,
    /// Canvas filled with `background`; cut-outs painted with `background`
    Opaque,
    /// Transparent canvas and transparent cut-outs
    Clear,
}

/// Parameters shared by every rendering entry point
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParams {
    /// Pixels per module side (>= 1)
    pub module_size: u32,
    /// Quiet zone width in modules
    pub border: u32,
    /// Colour of filled modules
    pub fill: Rgba<u8>,
    /// Colour of corner cut-outs, and of the whole canvas in [`CanvasMode::Opaque`]
    pub background: Rgba<u8>,
    /// Corner radius as a percentage of the module size (0-100)
    pub radius_percent: i32,
    /// Radius clamping policy
    pub radius_mode: RadiusMode,
    /// Canvas initialisation and cut-out policy
    pub canvas: CanvasMode,
    /// Draw module rows on the rayon thread pool
    pub parallel: bool,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            module_size: 10,
            border: 2,
            fill: BLACK,
            background: WHITE,
            radius_percent: 10,
            radius_mode: RadiusMode::Clamped,
            canvas: CanvasMode::Transparent,
            parallel: false,
        }
    }
}

impl RenderParams {
    /// Default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the module size in pixels
    pub fn with_module_size(mut self, module_size: u32) -> Self {
        self.module_size = module_size;
        self
    }

    /// Set the quiet zone width in modules
    pub fn with_border(mut self, border: u32) -> Self {
        self.border = border;
        self
    }

    /// Set fill and background colours
    pub fn with_colors(mut self, fill: Rgba<u8>, background: Rgba<u8>) -> Self {
        self.fill = fill;
        self.background = background;
        self
    }

    /// Set the corner radius percentage
    pub fn with_radius_percent(mut self, radius_percent: i32) -> Self {
        self.radius_percent = radius_percent;
        self
    }

    /// Set the radius clamping policy
    pub fn with_radius_mode(mut self, mode: RadiusMode) -> Self {
        self.radius_mode = mode;
        self
    }

    /// Set the canvas mode
    pub fn with_canvas(mut self, canvas: CanvasMode) -> Self {
        self.canvas = canvas;
        self
    }

    /// Toggle parallel composition
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Reject out-of-range parameters before anything is allocated
    pub fn validate(&self) -> Result<()> {
        if self.module_size == 0 {
            return Err(Error::parameter("module_size", "must be at least 1"));
        }
        if !(0..=100).contains(&self.radius_percent) {
            return Err(Error::parameter(
                "radius_percent",
                format!("must be within 0..=100, got {}", self.radius_percent),
            ));
        }
        Ok(())
    }

    /// Corner radius in pixels: `floor(module_size * percent / 100)`,
    /// capped at `module_size / 2` in clamped mode.
    pub fn radius(&self) -> u32 {
        let percent = self.radius_percent.clamp(0, 100) as u64;
        let raw = (self.module_size as u64 * percent / 100) as u32;
        match self.radius_mode {
            RadiusMode::Clamped => raw.min(self.module_size / 2),
            RadiusMode::Unclamped => raw.min(self.module_size),
        }
    }

    /// Colour the canvas starts with
    pub fn canvas_color(&self) -> Rgba<u8> {
        match self.canvas {
            CanvasMode::Transparent | CanvasMode::Clear => TRANSPARENT,
            CanvasMode::Opaque => self.background,
        }
    }

    /// Colour rounded corner boxes are repainted with before the arc is drawn
    pub fn cutout_color(&self) -> Rgba<u8> {
        match self.canvas {
            CanvasMode::Clear => TRANSPARENT,
            CanvasMode::Transparent | CanvasMode::Opaque => self.background,
        }
    }

    /// Canvas side length in pixels for a grid of `modules` per side
    pub fn canvas_side(&self, modules: usize) -> Result<u32> {
        u32::try_from(modules)
            .ok()
            .and_then(|n| n.checked_add(self.border.checked_mul(2)?))
            .and_then(|n| n.checked_mul(self.module_size))
            .ok_or_else(|| {
                Error::parameter(
                    "module_size",
                    format!(
                        "canvas for {modules} modules at {}px with border {} overflows",
                        self.module_size, self.border
                    ),
                )
            })
    }
}
