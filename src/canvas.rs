use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_circle_mut};

/// Edge length of the primary favicon canvas in pixels.
pub const SIZE: u32 = 32;

/// Gap between the circle's bounding box and the canvas edge.
pub const MARGIN: i32 = 2;

/// Circle fill, #9333EA.
pub const FILL: Rgba<u8> = Rgba([147, 51, 234, 255]);

/// Circle outline, #3B82F6.
pub const OUTLINE: Rgba<u8> = Rgba([59, 130, 246, 255]);

/// Draw the base icon: a transparent square canvas with a filled,
/// outlined circle inscribed inside the margin.
///
/// The circle is always fully contained within the canvas bounds.
pub fn produce_canvas() -> RgbaImage {
    // A fresh buffer is zeroed, i.e. fully transparent.
    let mut canvas = RgbaImage::new(SIZE, SIZE);

    let center = (SIZE as i32 / 2, SIZE as i32 / 2);
    let radius = (SIZE as i32 - 2 * MARGIN) / 2;

    draw_filled_circle_mut(&mut canvas, center, radius, FILL);
    draw_hollow_circle_mut(&mut canvas, center, radius, OUTLINE);

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canvas_has_fixed_dimensions() {
        let canvas = produce_canvas();

        assert_eq!(canvas.width(), 32);
        assert_eq!(canvas.height(), 32);
    }

    #[test]
    fn center_pixel_is_filled() {
        let canvas = produce_canvas();

        assert_eq!(*canvas.get_pixel(16, 16), FILL);
    }

    #[test]
    fn corner_pixels_are_transparent() {
        let canvas = produce_canvas();

        for (x, y) in [(0, 0), (31, 0), (0, 31), (31, 31)] {
            assert_eq!(canvas.get_pixel(x, y)[3], 0, "corner ({}, {})", x, y);
        }
    }

    #[test]
    fn circle_respects_margin() {
        let canvas = produce_canvas();

        // Pixels on the outermost row/column sit outside the inscribed circle.
        for i in 0..32 {
            assert_eq!(canvas.get_pixel(i, 0)[3], 0);
            assert_eq!(canvas.get_pixel(0, i)[3], 0);
        }
    }
}
