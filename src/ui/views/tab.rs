use unicode_width::UnicodeWidthStr;

use crate::ui::core::app::EventCx;
use crate::ui::core::canvas::Canvas;
use crate::ui::core::event::{KeyCode, KeyEvent, Outcome};
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::style::{Mod, Style};
use crate::ui::core::tree::LayoutCx;
use crate::ui::core::widget::Widget;

/// Shows exactly one child at a time under a one-row tab bar. The i-th
/// child pairs with the i-th title; attach children in the order titles
/// were added. Unselected pages are laid out but hidden, so they keep
/// consistent frames and stay out of focus traversal.
#[derive(Debug, Default)]
pub struct TabView {
    titles: Vec<String>,
    selected: usize,
}

impl TabView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_tab(&mut self, title: impl Into<String>) {
        self.titles.push(title.into());
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn set_selection(&mut self, ix: usize) {
        self.selected = ix.min(self.titles.len().saturating_sub(1));
    }

    /// Shrink titles until their tabs fit `width`, longest first, marking
    /// truncation with an ellipsis.
    fn fitted_titles(&self, width: u16) -> Vec<String> {
        let mut titles = self.titles.clone();
        loop {
            let total: usize = titles
                .iter()
                .map(|t| UnicodeWidthStr::width(t.as_str()) + 2)
                .sum::<usize>()
                + titles.len().saturating_sub(1);
            if total <= width as usize {
                break;
            }
            let longest = titles
                .iter()
                .map(|t| t.chars().count())
                .max()
                .unwrap_or(0);
            if longest <= 1 {
                break;
            }
            let cap = longest - 1;
            for title in &mut titles {
                if title.chars().count() > cap {
                    let keep: String = title.chars().take(cap.saturating_sub(1)).collect();
                    *title = format!("{keep}…");
                }
            }
        }
        titles
    }
}

impl Widget for TabView {
    fn layout(&mut self, cx: &mut LayoutCx<'_>) {
        let size = cx.size();
        self.selected = self.selected.min(self.titles.len().saturating_sub(1));
        let page = Rect::new(0, 1, size.w, size.h.saturating_sub(1));
        for (i, child) in cx.children().into_iter().enumerate() {
            cx.set_frame(child, page);
            cx.set_hidden(child, i != self.selected);
        }
    }

    fn draw(&self, canvas: &mut Canvas<'_>, _focused: bool) {
        let mut x = 0i32;
        for (i, title) in self.fitted_titles(canvas.size().w).iter().enumerate() {
            if i > 0 {
                x += 1;
            }
            let style = if i == self.selected {
                Style::default().add_mod(Mod::REVERSE)
            } else {
                Style::default().add_mod(Mod::DIM)
            };
            let label = format!(" {title} ");
            canvas.text(Pos::new(x, 0), &label, style);
            x += UnicodeWidthStr::width(label.as_str()) as i32;
        }
    }

    /// Tab switching is keyboard-driven, so the bar itself can take focus
    /// even when the visible page holds no controls.
    fn focusable(&self) -> bool {
        true
    }

    fn handle_key(&mut self, key: &KeyEvent, _cx: &mut EventCx<'_>) -> Outcome {
        if self.titles.is_empty() {
            return Outcome::Ignored;
        }
        match key.code {
            KeyCode::Left => self.set_selection(self.selected.saturating_sub(1)),
            KeyCode::Right => self.set_selection(self.selected + 1),
            _ => return Outcome::Ignored,
        }
        Outcome::Consumed
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/views/tab.rs"]
mod tests;
