//! Fitting arbitrary strings into fixed-size grid cells.
//!
//! Text is greedily word-wrapped at a default size, then shrunk in small steps
//! until the wrapped block fits the cell height. At the floor size anything
//! that still overflows is cut to whole lines with a trailing ellipsis. The
//! result never exceeds the cell box and fitting never fails; a cell too
//! small for a single floor-size line or a bare ellipsis stays empty.

use crate::render::metrics::TextMeasure;

pub const ELLIPSIS: &str = "\u{2026}";

/// Font sizing rules for cell text, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitOptions {
    pub font_size: f32,
    pub min_font_size: f32,
    pub step: f32,
    pub leading_ratio: f32,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            font_size: 9.0,
            min_font_size: 6.0,
            step: 0.5,
            leading_ratio: 1.15,
        }
    }
}

/// Lines ready to be drawn, with the size they were fitted at.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedText {
    pub lines: Vec<String>,
    pub font_size: f32,
    pub line_height: f32,
    /// Whether any characters were dropped to make the text fit.
    pub truncated: bool,
}

impl FittedText {
    fn empty(font_size: f32, leading_ratio: f32, truncated: bool) -> Self {
        Self {
            lines: Vec::new(),
            font_size,
            line_height: font_size * leading_ratio,
            truncated,
        }
    }

    pub fn block_height(&self) -> f32 {
        self.lines.len() as f32 * self.line_height
    }

    /// Baselines for each line, top line first, centring the block vertically
    /// in a box whose bottom edge is at `y` (y grows upwards).
    pub fn baselines(&self, y: f32, height: f32) -> Vec<f32> {
        let total = self.block_height();
        let top = y + (height - total) / 2.0 + (total - self.line_height);
        (0..self.lines.len())
            .map(|i| top - i as f32 * self.line_height)
            .collect()
    }
}

/// Fit `text` into a `width` x `height` box (points).
pub fn fit_text<M: TextMeasure + ?Sized>(
    measure: &M,
    text: &str,
    width: f32,
    height: f32,
    options: &FitOptions,
) -> FittedText {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return FittedText::empty(options.font_size, options.leading_ratio, false);
    }

    let floor = options.min_font_size.min(options.font_size);
    let step = if options.step > 0.0 { options.step } else { 0.5 };
    let too_tall =
        |wrapped: &Wrapped, size: f32| wrapped.lines.len() as f32 * size * options.leading_ratio > height;

    let mut size = options.font_size;
    let mut wrapped = wrap_words(measure, &words, width, size);
    while size > floor && (wrapped.unfit || too_tall(&wrapped, size)) {
        size = (size - step).max(floor);
        wrapped = wrap_words(measure, &words, width, size);
    }

    let line_height = size * options.leading_ratio;
    if wrapped.unfit {
        return FittedText::empty(size, options.leading_ratio, true);
    }

    let mut lines = wrapped.lines;
    let mut truncated = wrapped.cut_words;

    if lines.len() as f32 * line_height > height {
        let max_lines = (height / line_height).floor() as usize;
        if max_lines == 0 {
            return FittedText::empty(size, options.leading_ratio, true);
        }
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let base = last.strip_suffix(ELLIPSIS).unwrap_or(last.as_str()).to_string();
            match ellipsize(measure, &base, width, size) {
                Some(cut) => *last = cut,
                None => return FittedText::empty(size, options.leading_ratio, true),
            }
        }
        truncated = true;
    }

    FittedText {
        lines,
        font_size: size,
        line_height,
        truncated,
    }
}

struct Wrapped {
    lines: Vec<String>,
    cut_words: bool,
    /// A word was too wide to show even as a bare ellipsis.
    unfit: bool,
}

fn wrap_words<M: TextMeasure + ?Sized>(
    measure: &M,
    words: &[&str],
    width: f32,
    size: f32,
) -> Wrapped {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut cut_words = false;

    for &word in words {
        let trial = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if measure.text_width(&trial, size) <= width {
            current = trial;
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if measure.text_width(word, size) <= width {
            current = word.to_string();
            continue;
        }
        match ellipsize(measure, word, width, size) {
            Some(cut) => {
                lines.push(cut);
                cut_words = true;
            }
            None => {
                return Wrapped {
                    lines: Vec::new(),
                    cut_words: true,
                    unfit: true,
                };
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    Wrapped {
        lines,
        cut_words,
        unfit: false,
    }
}

/// Drop trailing characters until `text` plus an ellipsis fits `width`.
/// `None` when not even the ellipsis fits.
fn ellipsize<M: TextMeasure + ?Sized>(measure: &M, text: &str, width: f32, size: f32) -> Option<String> {
    if measure.text_width(ELLIPSIS, size) > width {
        return None;
    }
    let mut cut = text.trim_end().to_string();
    while !cut.is_empty() && measure.text_width(&format!("{cut}{ELLIPSIS}"), size) > width {
        cut.pop();
        let trimmed = cut.trim_end().len();
        cut.truncate(trimmed);
    }
    cut.push_str(ELLIPSIS);
    Some(cut)
}
