//! Advance widths for the PDF base-14 Helvetica faces.
//!
//! The built-in PDF fonts are not embedded, so string widths come from the
//! Adobe font metrics (units of 1/1000 em) instead of from font files.

/// Measures rendered string width.
pub trait TextMeasure {
    /// Width of `text` in points when set at `size` points.
    fn text_width(&self, text: &str, size: f32) -> f32;
}

/// Built-in faces used on a card page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    Helvetica,
    HelveticaBold,
}

impl FontFace {
    fn advance(self, ch: char) -> u16 {
        let table = match self {
            FontFace::Helvetica => &HELVETICA,
            FontFace::HelveticaBold => &HELVETICA_BOLD,
        };
        match ch {
            ' '..='~' => table[ch as usize - 0x20],
            '\u{2026}' => 1000,
            '\u{2022}' => 350,
            '\u{2013}' => 556,
            '\u{2014}' => 1000,
            '\u{2018}' | '\u{2019}' => 222,
            '\u{201C}' | '\u{201D}' => 333,
            '\u{00A0}' => 278,
            _ => 556,
        }
    }
}

impl TextMeasure for FontFace {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        let units: u32 = text.chars().map(|ch| u32::from(self.advance(ch))).sum();
        units as f32 * size / 1000.0
    }
}

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,      // 'p'..'~'
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];
