use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Glyph metrics used to turn text into an intrinsic pixel size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMetrics {
    /// Width of one display column.
    pub char_width: f32,
    pub line_height: f32,
}

impl Default for TextMetrics {
    fn default() -> Self {
        Self {
            char_width: 8.0,
            line_height: 16.0,
        }
    }
}

impl TextMetrics {
    /// Intrinsic (width, height) of a block of text.
    /// Width is the widest line, height counts lines with a minimum of one.
    pub fn measure(&self, text: &str) -> (f32, f32) {
        let columns = text.lines().map(display_width).max().unwrap_or(0);
        let lines = text.lines().count().max(1);
        (
            columns as f32 * self.char_width,
            lines as f32 * self.line_height,
        )
    }
}
