use std::fs;

use ab_glyph::{FontArc, PxScale};
use image::{Rgba, RgbaImage};
use imageproc::drawing;

use crate::canvas::SIZE;
use crate::font;

/// Two-character label drawn in the middle of the circle.
pub const LABEL: &str = "4R";

/// Point size used with the TrueType sources.
pub const FONT_SIZE: f32 = 12.0;

const TEXT_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

const SYSTEM_BOLD_FONT: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf";
const NAMED_FONT: &str = "arial.ttf";

/// Font used for the label text.
///
/// Acquired best-effort from an ordered list of sources; the built-in
/// bitmap font is the tail and cannot fail.
pub enum LabelFont {
    Truetype(FontArc),
    Builtin,
}

impl LabelFont {
    /// Try each font source in order and keep the first that loads.
    /// Load failures are not surfaced.
    pub fn acquire() -> LabelFont {
        for path in [SYSTEM_BOLD_FONT, NAMED_FONT] {
            if let Ok(bytes) = fs::read(path) {
                if let Ok(font) = FontArc::try_from_vec(bytes) {
                    return LabelFont::Truetype(font);
                }
            }
        }
        LabelFont::Builtin
    }

    fn text_size(&self, text: &str) -> (u32, u32) {
        match self {
            LabelFont::Truetype(f) => drawing::text_size(PxScale::from(FONT_SIZE), f, text),
            LabelFont::Builtin => font::text_size(text),
        }
    }

    fn draw(&self, canvas: &mut RgbaImage, x: i32, y: i32, text: &str) {
        match self {
            LabelFont::Truetype(f) => drawing::draw_text_mut(
                canvas,
                TEXT_COLOR,
                x,
                y,
                PxScale::from(FONT_SIZE),
                f,
                text,
            ),
            LabelFont::Builtin => font::draw_text_mut(canvas, TEXT_COLOR, x, y, text),
        }
    }
}

/// Measure `text` with `font`, center it on the canvas and draw it in
/// opaque white. The vertical offset is nudged one pixel up; the label
/// sits better inside the circle that way.
pub fn render_label(canvas: &mut RgbaImage, font: &LabelFont, text: &str) {
    let (width, height) = font.text_size(text);
    let x = (SIZE as i32 - width as i32) / 2;
    let y = (SIZE as i32 - height as i32) / 2 - 1;
    font.draw(canvas, x, y, text);
}
