//! Pixel primitives used by the module rasterizer.

use super::region::CanvasRegion;
use crate::models::Corner;
use image::Rgba;

/// Fill the half-open rectangle `[x, x + w) x [y, y + h)`
pub fn fill_rect(region: &mut CanvasRegion<'_>, x: u32, y: u32, w: u32, h: u32, color: Rgba<u8>) {
    for py in y..y + h {
        for px in x..x + w {
            region.put(px, py, color);
        }
    }
}

/// Repaint the `radius x radius` box at `corner` of the module square at
/// (`x`, `y`) as a quarter disc: pixels whose centre lies within `radius`
/// of the box's inner corner get `fill`, the rest get `cutout`.
///
/// The arc faces outward from the module (top-left spans 180-270 degrees,
/// top-right 270-360, bottom-left 90-180, bottom-right 0-90, with y down).
#[allow(clippy::too_many_arguments)]
pub fn quarter_disc(
    region: &mut CanvasRegion<'_>,
    corner: Corner,
    x: u32,
    y: u32,
    module_size: u32,
    radius: u32,
    fill: Rgba<u8>,
    cutout: Rgba<u8>,
) {
    if radius == 0 {
        return;
    }
    let (right, bottom) = corner.is_far_side();
    let box_x = if right { x + module_size - radius } else { x };
    let box_y = if bottom { y + module_size - radius } else { y };
    let (cx, cy) = arc_center(corner, x, y, module_size, radius);

    // Doubled coordinates keep pixel centres on integers.
    let r2 = 4 * radius as i64 * radius as i64;
    for py in box_y..box_y + radius {
        let dy = 2 * py as i64 + 1 - 2 * cy as i64;
        for px in box_x..box_x + radius {
            let dx = 2 * px as i64 + 1 - 2 * cx as i64;
            let color = if dx * dx + dy * dy <= r2 { fill } else { cutout };
            region.put(px, py, color);
        }
    }
}

/// Centre of the rounding arc: the corner point moved `radius` inward on both axes
pub fn arc_center(corner: Corner, x: u32, y: u32, module_size: u32, radius: u32) -> (u32, u32) {
    let (right, bottom) = corner.is_far_side();
    let cx = if right { x + module_size - radius } else { x + radius };
    let cy = if bottom { y + module_size - radius } else { y + radius };
    (cx, cy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::color::{BLACK, WHITE};

    fn canvas(side: u32, color: Rgba<u8>) -> Vec<u8> {
        color.0.repeat((side * side) as usize)
    }

    #[test]
    fn test_fill_rect_is_half_open() {
        let mut buf = canvas(4, WHITE);
        let mut region = CanvasRegion::new(&mut buf, 4, 0);
        fill_rect(&mut region, 1, 1, 2, 2, BLACK);
        assert_eq!(region.get(1, 1), Some(BLACK));
        assert_eq!(region.get(2, 2), Some(BLACK));
        assert_eq!(region.get(3, 3), Some(WHITE));
        assert_eq!(region.get(0, 0), Some(WHITE));
    }

    #[test]
    fn test_quarter_disc_cuts_outer_pixel_only() {
        let mut buf = canvas(10, BLACK);
        let mut region = CanvasRegion::new(&mut buf, 10, 0);
        quarter_disc(&mut region, Corner::TopLeft, 0, 0, 10, 5, BLACK, WHITE);

        assert_eq!(region.get(0, 0), Some(WHITE));
        assert_eq!(region.get(4, 4), Some(BLACK));
        // Edge midpoints of the arc stay filled
        assert_eq!(region.get(0, 4), Some(BLACK));
        assert_eq!(region.get(4, 0), Some(BLACK));
        // Outside the corner box untouched
        assert_eq!(region.get(5, 0), Some(BLACK));
    }

    #[test]
    fn test_corners_are_mirror_images() {
        let side = 10;
        let mut buf = canvas(side, BLACK);
        let mut region = CanvasRegion::new(&mut buf, side, 0);
        for corner in Corner::ALL {
            quarter_disc(&mut region, corner, 0, 0, side, 4, BLACK, WHITE);
        }
        for y in 0..side {
            for x in 0..side {
                let p = region.get(x, y);
                assert_eq!(p, region.get(side - 1 - x, y), "h-mirror at ({x},{y})");
                assert_eq!(p, region.get(x, side - 1 - y), "v-mirror at ({x},{y})");
            }
        }
    }

    #[test]
    fn test_zero_radius_is_noop() {
        let mut buf = canvas(4, BLACK);
        let before = buf.clone();
        let mut region = CanvasRegion::new(&mut buf, 4, 0);
        quarter_disc(&mut region, Corner::BottomRight, 0, 0, 4, 0, BLACK, WHITE);
        assert_eq!(buf, before);
    }

    #[test]
    fn test_arc_center() {
        assert_eq!(arc_center(Corner::TopLeft, 10, 20, 10, 3), (13, 23));
        assert_eq!(arc_center(Corner::BottomRight, 10, 20, 10, 3), (17, 27));
    }
}
