//! Minimal built-in bitmap font, the guaranteed tail of the font
//! fallback chain.
//!
//! Glyphs are 5x7 bitmaps covering digits, uppercase letters and space.
//! Characters outside the table render as blanks.

use image::{Rgba, RgbaImage};

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
pub const GLYPH_SPACING: u32 = 1;

/// One glyph per row, 5 bits per row, most significant bit leftmost.
type Glyph = [u8; 7];

const BLANK: Glyph = [0; 7];

#[rustfmt::skip]
const DIGITS: [Glyph; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110], // 0
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // 1
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111], // 2
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110], // 3
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010], // 4
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110], // 5
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110], // 6
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000], // 7
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110], // 8
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100], // 9
];

#[rustfmt::skip]
const UPPER: [Glyph; 26] = [
    [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // A
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110], // B
    [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110], // C
    [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100], // D
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111], // E
    [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000], // F
    [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111], // G
    [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001], // H
    [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // I
    [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100], // J
    [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001], // K
    [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111], // L
    [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001], // M
    [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001], // N
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // O
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000], // P
    [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101], // Q
    [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001], // R
    [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110], // S
    [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100], // T
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110], // U
    [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100], // V
    [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010], // W
    [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001], // X
    [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100], // Y
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111], // Z
];

fn glyph(c: char) -> &'static Glyph {
    match c {
        '0'..='9' => &DIGITS[c as usize - '0' as usize],
        'A'..='Z' => &UPPER[c as usize - 'A' as usize],
        _ => &BLANK,
    }
}

/// Rendered bounding box of `text`, matching the shape of
/// `imageproc::drawing::text_size`.
pub fn text_size(text: &str) -> (u32, u32) {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return (0, 0);
    }
    let width = chars * GLYPH_WIDTH + (chars - 1) * GLYPH_SPACING;
    (width, GLYPH_HEIGHT)
}

/// Draw `text` onto `canvas` with its top-left corner at `(x, y)`.
/// Pixels falling outside the canvas are dropped.
pub fn draw_text_mut(canvas: &mut RgbaImage, color: Rgba<u8>, x: i32, y: i32, text: &str) {
    let mut pen_x = x;
    for c in text.chars() {
        let rows = glyph(c);
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_WIDTH {
                if bits & (1u8 << (GLYPH_WIDTH - 1 - col)) == 0 {
                    continue;
                }
                let px = pen_x + col as i32;
                let py = y + row as i32;
                if px >= 0 && py >= 0 && (px as u32) < canvas.width() && (py as u32) < canvas.height()
                {
                    canvas.put_pixel(px as u32, py as u32, color);
                }
            }
        }
        pen_x += (GLYPH_WIDTH + GLYPH_SPACING) as i32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    #[test]
    fn measures_two_character_label() {
        assert_eq!(text_size("4R"), (11, 7));
    }

    #[test]
    fn measures_empty_text() {
        assert_eq!(text_size(""), (0, 0));
    }

    #[test]
    fn draws_visible_pixels() {
        let mut canvas = RgbaImage::new(16, 16);
        draw_text_mut(&mut canvas, WHITE, 2, 2, "4R");

        let lit = canvas.pixels().filter(|p| **p == WHITE).count();
        assert!(lit > 0);
    }

    #[test]
    fn stays_within_measured_box() {
        let mut canvas = RgbaImage::new(32, 32);
        draw_text_mut(&mut canvas, WHITE, 10, 11, "4R");

        let (w, h) = text_size("4R");
        for (x, y, p) in canvas.enumerate_pixels() {
            if *p == WHITE {
                assert!(x >= 10 && x < 10 + w);
                assert!(y >= 11 && y < 11 + h);
            }
        }
    }

    #[test]
    fn unknown_characters_render_blank() {
        let mut canvas = RgbaImage::new(16, 16);
        draw_text_mut(&mut canvas, WHITE, 0, 0, "??");

        assert!(canvas.pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn clips_at_canvas_edge() {
        let mut canvas = RgbaImage::new(4, 4);
        draw_text_mut(&mut canvas, WHITE, -2, -2, "88");
        // Must not panic; anything drawn landed in bounds.
    }
}
