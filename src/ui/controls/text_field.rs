use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::ui::core::app::EventCx;
use crate::ui::core::canvas::Canvas;
use crate::ui::core::event::{KeyCode, KeyEvent, Outcome};
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::style::{Mod, Style};
use crate::ui::core::tree::LayoutCx;
use crate::ui::core::widget::Widget;

/// Single-line editable text. The cursor moves over grapheme clusters; the
/// content scrolls horizontally so the cursor stays visible.
#[derive(Debug, Default)]
pub struct TextField {
    text: String,
    cursor: usize,
    scroll: u16,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self {
            text,
            cursor,
            scroll: 0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    /// Cursor as a byte offset, always on a grapheme boundary.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .grapheme_indices(true)
            .last()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .graphemes(true)
            .next()
            .map(|g| self.cursor + g.len())
    }

    fn insert(&mut self, ch: char) {
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    fn delete_left(&mut self) {
        if let Some(start) = self.prev_boundary() {
            self.text.replace_range(start..self.cursor, "");
            self.cursor = start;
        }
    }

    fn delete_right(&mut self) {
        if let Some(end) = self.next_boundary() {
            self.text.replace_range(self.cursor..end, "");
        }
    }

    /// Display column of the cursor, in cells from the start of the text.
    fn cursor_col(&self) -> u16 {
        UnicodeWidthStr::width(&self.text[..self.cursor]) as u16
    }
}

impl Widget for TextField {
    fn focusable(&self) -> bool {
        true
    }

    fn layout(&mut self, cx: &mut LayoutCx<'_>) {
        // Keep the cursor inside the visible window for the current width.
        let w = cx.size().w;
        if w == 0 {
            return;
        }
        let col = self.cursor_col();
        if col < self.scroll {
            self.scroll = col;
        } else if col >= self.scroll + w {
            self.scroll = col - w + 1;
        }
    }

    fn draw(&self, canvas: &mut Canvas<'_>, focused: bool) {
        let size = canvas.size();
        let style = Style::default().add_mod(Mod::UNDERLINE);
        canvas.fill_rect(Rect::new(0, 0, size.w, 1), style);
        canvas.text(Pos::new(-(self.scroll as i32), 0), &self.text, style);
        if focused {
            let col = self.cursor_col() as i32 - self.scroll as i32;
            canvas.style_rect(Rect::new(col, 0, 1, 1), style.add_mod(Mod::REVERSE));
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, _cx: &mut EventCx<'_>) -> Outcome {
        match key.code {
            KeyCode::Char(ch) if !ch.is_control() => self.insert(ch),
            KeyCode::Backspace => self.delete_left(),
            KeyCode::Delete => self.delete_right(),
            KeyCode::Left => {
                if let Some(i) = self.prev_boundary() {
                    self.cursor = i;
                }
            }
            KeyCode::Right => {
                if let Some(i) = self.next_boundary() {
                    self.cursor = i;
                }
            }
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.text.len(),
            _ => return Outcome::Ignored,
        }
        Outcome::Consumed
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/controls/text_field.rs"]
mod tests;
