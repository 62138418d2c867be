use unicode_width::UnicodeWidthStr;

use crate::ui::core::app::EventCx;
use crate::ui::core::canvas::Canvas;
use crate::ui::core::event::{KeyCode, KeyEvent, Outcome};
use crate::ui::core::geom::{Pos, Rect, Size};
use crate::ui::core::style::{Mod, Style};
use crate::ui::core::widget::Widget;

/// Flat item list with a selection bar. Up/Down move the selection without
/// wrapping. Sized to content (`content_size`), so it composes with
/// `ScrollView` as a document.
#[derive(Debug, Default)]
pub struct ListView {
    items: Vec<String>,
    selected: usize,
}

impl ListView {
    pub fn new(items: Vec<String>) -> Self {
        Self {
            items,
            selected: 0,
        }
    }

    pub fn push_item(&mut self, item: impl Into<String>) {
        self.items.push(item.into());
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.items.get(self.selected).map(String::as_str)
    }

    pub fn set_selection(&mut self, ix: usize) {
        self.selected = ix.min(self.items.len().saturating_sub(1));
    }

    pub fn content_size(&self) -> Size {
        let w = self
            .items
            .iter()
            .map(|i| UnicodeWidthStr::width(i.as_str()))
            .max()
            .unwrap_or(0);
        Size::new(
            w.min(u16::MAX as usize) as u16,
            self.items.len().min(u16::MAX as usize) as u16,
        )
    }
}

impl Widget for ListView {
    fn focusable(&self) -> bool {
        true
    }

    fn draw(&self, canvas: &mut Canvas<'_>, focused: bool) {
        let w = canvas.size().w;
        for (y, item) in self.items.iter().enumerate() {
            let style = if y == self.selected {
                let mut s = Style::default().add_mod(Mod::REVERSE);
                if focused {
                    s = s.add_mod(Mod::BOLD);
                }
                s
            } else {
                Style::default()
            };
            if y == self.selected {
                canvas.fill_rect(Rect::new(0, y as i32, w, 1), style);
            }
            canvas.text(Pos::new(0, y as i32), item, style);
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, _cx: &mut EventCx<'_>) -> Outcome {
        if self.items.is_empty() {
            return Outcome::Ignored;
        }
        match key.code {
            KeyCode::Up => self.set_selection(self.selected.saturating_sub(1)),
            KeyCode::Down => self.set_selection(self.selected + 1),
            _ => return Outcome::Ignored,
        }
        Outcome::Consumed
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/controls/list.rs"]
mod tests;
