use rustc_hash::FxHashSet;

use crate::ui::core::app::EventCx;
use crate::ui::core::canvas::Canvas;
use crate::ui::core::event::{KeyCode, KeyEvent, Outcome};
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::style::{Color, Mod, Style};
use crate::ui::core::tree::LayoutCx;
use crate::ui::core::widget::Widget;

/// Stacked sections with collapsible title bars. The i-th child pairs with
/// the i-th section title; collapsed children are hidden (and so
/// unfocusable). Sections keep their own content heights.
#[derive(Debug)]
pub struct AccordionView {
    titles: Vec<String>,
    selected: usize,
    expanded: FxHashSet<usize>,
    multiple: bool,
    bars: Vec<(usize, i32)>,
}

impl AccordionView {
    pub fn new() -> Self {
        let mut expanded = FxHashSet::default();
        expanded.insert(0);
        Self {
            titles: Vec::new(),
            selected: 0,
            expanded,
            multiple: false,
            bars: Vec::new(),
        }
    }

    /// Allow more than one section to be expanded at once.
    pub fn allow_multiple(mut self, yn: bool) -> Self {
        self.multiple = yn;
        self
    }

    pub fn add_section(&mut self, title: impl Into<String>) {
        self.titles.push(title.into());
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn set_selection(&mut self, ix: usize) {
        self.selected = ix.min(self.titles.len().saturating_sub(1));
    }

    pub fn is_expanded(&self, ix: usize) -> bool {
        self.expanded.contains(&ix)
    }

    pub fn set_expanded(&mut self, ix: usize, yn: bool) {
        if yn {
            if !self.multiple {
                self.expanded.clear();
            }
            self.expanded.insert(ix);
        } else {
            self.expanded.remove(&ix);
        }
    }
}

impl Default for AccordionView {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for AccordionView {
    fn layout(&mut self, cx: &mut LayoutCx<'_>) {
        let size = cx.size();
        self.selected = self.selected.min(self.titles.len().saturating_sub(1));
        self.bars.clear();
        let mut y = 0i32;
        for (i, child) in cx.children().into_iter().enumerate() {
            self.bars.push((i, y));
            y += 1;
            if self.expanded.contains(&i) {
                let h = cx.frame(child).h;
                cx.set_frame(child, Rect::new(0, y, size.w, h));
                cx.set_hidden(child, false);
                y += h as i32;
            } else {
                cx.set_hidden(child, true);
            }
        }
    }

    fn draw(&self, canvas: &mut Canvas<'_>, _focused: bool) {
        let w = canvas.size().w;
        for &(i, y) in &self.bars {
            let marker = if self.expanded.contains(&i) { 'v' } else { '>' };
            let style = if i == self.selected {
                Style::default().add_mod(Mod::REVERSE)
            } else {
                Style::default().bg(Color::GREY).fg(Color::BLACK)
            };
            canvas.fill_rect(Rect::new(0, y, w, 1), style);
            let title = self.titles.get(i).map(String::as_str).unwrap_or("");
            canvas.text(Pos::new(0, y), &format!(" {marker} {title}"), style);
        }
    }

    /// Section selection is keyboard-driven, so the accordion itself can
    /// take focus even when no section content holds a control.
    fn focusable(&self) -> bool {
        true
    }

    fn handle_key(&mut self, key: &KeyEvent, _cx: &mut EventCx<'_>) -> Outcome {
        if self.titles.is_empty() {
            return Outcome::Ignored;
        }
        match key.code {
            KeyCode::Up => self.set_selection(self.selected.saturating_sub(1)),
            KeyCode::Down => self.set_selection(self.selected + 1),
            KeyCode::Left => self.set_expanded(self.selected, false),
            KeyCode::Right => self.set_expanded(self.selected, true),
            _ => return Outcome::Ignored,
        }
        Outcome::Consumed
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/views/accordion.rs"]
mod tests;
