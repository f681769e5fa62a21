use image::Rgba;

/// Mutable window onto a horizontal band of an RGBA canvas.
///
/// Coordinates passed to the drawing methods are absolute canvas
/// coordinates; the band covers rows `y0..y0 + height`.
pub struct CanvasRegion<'a> {
    pixels: &'a mut [u8],
    width: u32,
    y0: u32,
    height: u32,
}

impl<'a> CanvasRegion<'a> {
    /// Wrap `pixels` (RGBA, row-major, `width` pixels per row) starting at canvas row `y0`
    pub fn new(pixels: &'a mut [u8], width: u32, y0: u32) -> Self {
        let row_bytes = (width as usize * 4).max(1);
        let height = (pixels.len() / row_bytes) as u32;
        Self {
            pixels,
            width,
            y0,
            height,
        }
    }

    /// Canvas width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Whether the rectangle lies entirely inside this band
    pub fn contains_rect(&self, x: u32, y: u32, w: u32, h: u32) -> bool {
        let x_end = x as u64 + w as u64;
        let y_end = y as u64 + h as u64;
        x_end <= self.width as u64
            && y >= self.y0
            && y_end <= self.y0 as u64 + self.height as u64
    }

    /// Write one pixel; pixels outside the band are ignored
    #[inline]
    pub fn put(&mut self, x: u32, y: u32, color: Rgba<u8>) {
        if x >= self.width || y < self.y0 || y - self.y0 >= self.height {
            return;
        }
        let idx = ((y - self.y0) as usize * self.width as usize + x as usize) * 4;
        self.pixels[idx..idx + 4].copy_from_slice(&color.0);
    }

    /// Read one pixel, if it lies in the band
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        if x >= self.width || y < self.y0 || y - self.y0 >= self.height {
            return None;
        }
        let idx = ((y - self.y0) as usize * self.width as usize + x as usize) * 4;
        let mut px = [0u8; 4];
        px.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(Rgba(px))
    }
}
