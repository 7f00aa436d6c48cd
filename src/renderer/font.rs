//! Built-in 5x7 bitmap font
//!
//! Text is turned into filled rectangles, one per horizontal run of lit
//! pixels, so it goes through the same quad path as everything else.

/// Glyph cell width in font pixels
pub const GLYPH_WIDTH: u32 = 5;
/// Glyph cell height in font pixels
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance per character, glyph plus one pixel gap
pub const ADVANCE: u32 = GLYPH_WIDTH + 1;

/// One glyph, a row per entry, bit 4 is the leftmost pixel
type Glyph = [u8; GLYPH_HEIGHT as usize];

const UNKNOWN: Glyph = [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100];

fn glyph(c: char) -> Glyph {
    match c.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        ' ' => [0; GLYPH_HEIGHT as usize],
        _ => UNKNOWN,
    }
}

/// Size of one font pixel for a given font size
#[inline]
pub fn pixel_size(font_size: f32) -> f32 {
    font_size / 10.0
}

/// Width of `text` when drawn at `font_size`, trailing gap excluded
pub fn text_width(text: &str, font_size: f32) -> f32 {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return 0.0;
    }
    (chars * ADVANCE - 1) as f32 * pixel_size(font_size)
}

/// Rectangles `(x, y, w, h)` that draw `text` with its baseline at `y`
pub fn text_rects(text: &str, x: f32, y: f32, font_size: f32) -> Vec<[f32; 4]> {
    let px = pixel_size(font_size);
    let top = y - GLYPH_HEIGHT as f32 * px;
    let mut rects = Vec::new();

    for (i, c) in text.chars().enumerate() {
        let origin_x = x + (i as u32 * ADVANCE) as f32 * px;
        for (row, &bits) in glyph(c).iter().enumerate() {
            let row_y = top + row as f32 * px;
            let mut col = 0;
            while col < GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - col)) == 0 {
                    col += 1;
                    continue;
                }
                let start = col;
                while col < GLYPH_WIDTH && bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                    col += 1;
                }
                rects.push([
                    origin_x + start as f32 * px,
                    row_y,
                    (col - start) as f32 * px,
                    px,
                ]);
            }
        }
    }

    rects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_draws_nothing() {
        assert!(text_rects("   ", 0.0, 10.0, 10.0).is_empty());
    }

    #[test]
    fn test_runs_are_merged() {
        // 'T' is a full top bar plus a one pixel stem on six rows
        let rects = text_rects("T", 0.0, 7.0, 10.0);
        assert_eq!(rects.len(), 7);
        assert_eq!(rects[0], [0.0, 0.0, 5.0, 1.0]);
        assert_eq!(rects[1], [2.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_baseline_and_scale() {
        // Font size 20 means 2 unit pixels: glyph sits 14 units above baseline
        let rects = text_rects("-", 100.0, 20.0, 20.0);
        assert_eq!(rects, vec![[100.0, 12.0, 10.0, 2.0]]);
    }

    #[test]
    fn test_second_char_advances() {
        let rects = text_rects(" -", 0.0, 7.0, 10.0);
        assert_eq!(rects, vec![[6.0, 3.0, 5.0, 1.0]]);
    }

    #[test]
    fn test_lowercase_matches_uppercase() {
        assert_eq!(text_rects("score", 0.0, 7.0, 10.0), text_rects("SCORE", 0.0, 7.0, 10.0));
    }

    #[test]
    fn test_unknown_char_draws_placeholder() {
        assert_eq!(text_rects("#", 0.0, 7.0, 10.0), text_rects("@", 0.0, 7.0, 10.0));
        assert!(!text_rects("#", 0.0, 7.0, 10.0).is_empty());
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("", 20.0), 0.0);
        assert_eq!(text_width("A", 10.0), 5.0);
        assert_eq!(text_width("GAME OVER", 50.0), (9.0 * 6.0 - 1.0) * 5.0);
    }
}
