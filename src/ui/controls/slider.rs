use crate::ui::core::app::EventCx;
use crate::ui::core::canvas::Canvas;
use crate::ui::core::event::{KeyCode, KeyEvent, Outcome};
use crate::ui::core::geom::Pos;
use crate::ui::core::style::{Mod, Style};
use crate::ui::core::tixel::Tixel;
use crate::ui::core::widget::Widget;

/// Stepped value control: `value` ranges over `0..divisions`. Arrow keys
/// along the sliding axis adjust it by one division.
#[derive(Debug)]
pub struct Slider {
    value: u16,
    divisions: u16,
    vertical: bool,
}

impl Slider {
    pub fn new(divisions: u16) -> Self {
        Self {
            value: 0,
            divisions: divisions.max(2),
            vertical: false,
        }
    }

    pub fn vertical(mut self, yn: bool) -> Self {
        self.vertical = yn;
        self
    }

    pub fn value(&self) -> u16 {
        self.value
    }

    pub fn divisions(&self) -> u16 {
        self.divisions
    }

    pub fn set_value(&mut self, value: u16) {
        self.value = value.min(self.divisions - 1);
    }

    fn thumb_at(&self, len: u16) -> u16 {
        if len == 0 {
            return 0;
        }
        (self.value as u32 * (len - 1) as u32 / (self.divisions - 1) as u32) as u16
    }
}

impl Widget for Slider {
    fn focusable(&self) -> bool {
        true
    }

    fn draw(&self, canvas: &mut Canvas<'_>, focused: bool) {
        let size = canvas.size();
        let mut style = Style::default();
        if focused {
            style = style.add_mod(Mod::REVERSE);
        }
        if self.vertical {
            let at = size.h.saturating_sub(1) - self.thumb_at(size.h);
            for y in 0..size.h {
                let text = if y == at { "===" } else { " | " };
                canvas.text(Pos::new(0, y as i32), text, style);
            }
        } else {
            let at = self.thumb_at(size.w);
            canvas.hline(Pos::new(0, 0), size.w, '-', style);
            canvas.set(Pos::new(at as i32, 0), Tixel::new('|', style));
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, _cx: &mut EventCx<'_>) -> Outcome {
        match (self.vertical, key.code) {
            (true, KeyCode::Up) | (false, KeyCode::Right) => {
                self.set_value(self.value.saturating_add(1));
            }
            (true, KeyCode::Down) | (false, KeyCode::Left) => {
                self.set_value(self.value.saturating_sub(1));
            }
            _ => return Outcome::Ignored,
        }
        Outcome::Consumed
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/controls/slider.rs"]
mod tests;
