use crate::config::LabelConfig;

use super::TextBlock;

/// Approximate advance width of a character relative to the font size.
/// Coarse width classes are enough for label box sizing; exact typography
/// belongs to the renderer.
pub(super) fn char_width_factor(ch: char) -> f32 {
    match ch {
        'i' | 'j' | 'l' | 'I' | '.' | ',' | ':' | ';' | '\'' | '|' | '!' => 0.30,
        'm' | 'w' | 'M' | 'W' | '@' | '%' | '&' => 0.86,
        ' ' => 0.32,
        _ => 0.56,
    }
}

pub(super) fn text_width(text: &str, font_size: f32) -> f32 {
    text.chars().map(char_width_factor).sum::<f32>() * font_size
}

/// Sizes a label box around already-folded lines. Width follows the longest
/// line, clamped to the configured bounds; height follows the line count.
pub(super) fn measure_box(lines: Vec<String>, label: &LabelConfig) -> TextBlock {
    let longest = lines
        .iter()
        .map(|line| text_width(line, label.font_size))
        .fold(0.0, f32::max);
    let width = (longest + label.padding_x * 2.0).clamp(label.min_width, label.max_width);
    let height =
        lines.len() as f32 * label.font_size * label.line_height + label.padding_y * 2.0;
    TextBlock {
        lines,
        width,
        height,
    }
}
