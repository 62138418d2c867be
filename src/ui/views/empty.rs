use crate::ui::core::canvas::Canvas;
use crate::ui::core::geom::Pos;
use crate::ui::core::style::Style;
use crate::ui::core::widget::Widget;

/// Placeholder for a view that will be set later. Renders the word "empty"
/// centered in its frame.
#[derive(Debug, Default)]
pub struct EmptyView;

impl Widget for EmptyView {
    fn draw(&self, canvas: &mut Canvas<'_>, _focused: bool) {
        let size = canvas.size();
        let x = (size.w.saturating_sub(5) / 2) as i32;
        let y = (size.h.saturating_sub(1) / 2) as i32;
        canvas.text(Pos::new(x, y), "empty", Style::default());
    }
}
