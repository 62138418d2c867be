use crate::ui::core::canvas::Canvas;
use crate::ui::core::geom::Pos;
use crate::ui::core::style::Style;
use crate::ui::core::widget::Widget;

/// Fills its frame with a single character.
#[derive(Debug)]
pub struct FillView {
    ch: char,
    style: Style,
}

impl FillView {
    pub fn new(ch: char) -> Self {
        Self {
            ch,
            style: Style::default(),
        }
    }

    pub fn styled(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn set_fill_char(&mut self, ch: char) {
        self.ch = ch;
    }
}

impl Widget for FillView {
    fn draw(&self, canvas: &mut Canvas<'_>, _focused: bool) {
        let size = canvas.size();
        for y in 0..size.h {
            canvas.hline(Pos::new(0, y as i32), size.w, self.ch, self.style);
        }
    }
}
