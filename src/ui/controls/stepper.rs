use crate::ui::core::app::EventCx;
use crate::ui::core::canvas::Canvas;
use crate::ui::core::event::{KeyCode, KeyEvent, Outcome};
use crate::ui::core::geom::Pos;
use crate::ui::core::style::{Mod, Style};
use crate::ui::core::widget::Widget;

/// Bounded integer value adjusted in `step` increments with Up/Down.
#[derive(Debug)]
pub struct Stepper {
    value: i64,
    step: i64,
    min: Option<i64>,
    max: Option<i64>,
}

impl Stepper {
    pub fn new() -> Self {
        Self {
            value: 0,
            step: 1,
            min: None,
            max: None,
        }
    }

    pub fn step(mut self, step: i64) -> Self {
        self.step = step.max(1);
        self
    }

    pub fn minimum(mut self, min: i64) -> Self {
        self.min = Some(min);
        self.set_value(self.value);
        self
    }

    pub fn maximum(mut self, max: i64) -> Self {
        self.max = Some(max);
        self.set_value(self.value);
        self
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn set_value(&mut self, value: i64) {
        let mut v = value;
        if let Some(max) = self.max {
            v = v.min(max);
        }
        if let Some(min) = self.min {
            v = v.max(min);
        }
        self.value = v;
    }

    pub fn increment(&mut self) {
        self.set_value(self.value.saturating_add(self.step));
    }

    pub fn decrement(&mut self) {
        self.set_value(self.value.saturating_sub(self.step));
    }
}

impl Default for Stepper {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Stepper {
    fn focusable(&self) -> bool {
        true
    }

    fn draw(&self, canvas: &mut Canvas<'_>, focused: bool) {
        let size = canvas.size();
        let mut style = Style::default();
        if focused {
            style = style.add_mod(Mod::REVERSE);
        }
        canvas.text(Pos::new(0, 0), &self.value.to_string(), style);
        if size.w >= 2 {
            canvas.text(Pos::new(size.w as i32 - 2, 0), "▲▼", style);
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, _cx: &mut EventCx<'_>) -> Outcome {
        match key.code {
            KeyCode::Up => self.increment(),
            KeyCode::Down => self.decrement(),
            _ => return Outcome::Ignored,
        }
        Outcome::Consumed
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/controls/stepper.rs"]
mod tests;
