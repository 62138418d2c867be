use crate::ui::core::canvas::{BorderKind, Canvas};
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::style::Style;
use crate::ui::core::tree::LayoutCx;
use crate::ui::core::widget::Widget;

/// Draws a border (and optional centered title on the top edge) around its
/// single content child, which is inset by one cell on every side.
#[derive(Debug, Default)]
pub struct BoxView {
    title: Option<String>,
    style: Style,
}

impl BoxView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn styled(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for BoxView {
    fn layout(&mut self, cx: &mut LayoutCx<'_>) {
        let content = Rect::from_size(cx.size()).inset(1);
        if let Some(&child) = cx.children().first() {
            cx.set_frame(child, content);
        }
    }

    fn draw(&self, canvas: &mut Canvas<'_>, _focused: bool) {
        let bounds = canvas.bounds();
        canvas.border(bounds, self.style, BorderKind::Plain);
        if let Some(title) = &self.title {
            let label = format!(" {title} ");
            let w = label.chars().count() as u16;
            let x = (bounds.w.saturating_sub(w) / 2) as i32;
            canvas.text(Pos::new(x, 0), &label, self.style);
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/views/boxed.rs"]
mod tests;
