use unicode_width::UnicodeWidthStr;

use crate::ui::core::canvas::Canvas;
use crate::ui::core::geom::{Pos, Size};
use crate::ui::core::style::Style;
use crate::ui::core::widget::Widget;

/// Static multi-line text. Commonly used as a scroll document: size its
/// frame to `content_size()` and let the enclosing view clip it.
#[derive(Debug, Default)]
pub struct TextView {
    lines: Vec<String>,
    style: Style,
}

impl TextView {
    pub fn new(text: impl AsRef<str>) -> Self {
        let mut view = Self::default();
        view.set_text(text);
        view
    }

    pub fn styled(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn set_text(&mut self, text: impl AsRef<str>) {
        self.lines = text.as_ref().lines().map(str::to_owned).collect();
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The size the text occupies when fully visible.
    pub fn content_size(&self) -> Size {
        let w = self
            .lines
            .iter()
            .map(|l| UnicodeWidthStr::width(l.as_str()))
            .max()
            .unwrap_or(0);
        Size::new(w.min(u16::MAX as usize) as u16, self.lines.len().min(u16::MAX as usize) as u16)
    }
}

impl Widget for TextView {
    fn draw(&self, canvas: &mut Canvas<'_>, _focused: bool) {
        for (y, line) in self.lines.iter().enumerate() {
            canvas.text(Pos::new(0, y as i32), line, self.style);
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/views/text.rs"]
mod tests;
