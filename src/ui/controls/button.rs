use crate::ui::core::app::EventCx;
use crate::ui::core::canvas::Canvas;
use crate::ui::core::event::{KeyCode, KeyEvent, Outcome};
use crate::ui::core::geom::Pos;
use crate::ui::core::style::{Mod, Style};
use crate::ui::core::widget::Widget;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonKind {
    /// Fires on every press, state stays off.
    Momentary,
    /// Flips state on every press.
    Toggle,
    /// Turns on once and stays on; fires only on that first press.
    Latch,
}

type Callback = Box<dyn FnMut(&mut EventCx<'_>)>;

/// A labeled push button. Enter or space presses it; the optional callback
/// runs inside the event dispatch and may talk back to the application
/// through the event context.
pub struct Button {
    label: String,
    kind: ButtonKind,
    state: bool,
    on_press: Option<Callback>,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            kind: ButtonKind::Momentary,
            state: false,
            on_press: None,
        }
    }

    pub fn kind(mut self, kind: ButtonKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn on_press(mut self, f: impl FnMut(&mut EventCx<'_>) + 'static) -> Self {
        self.on_press = Some(Box::new(f));
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn state(&self) -> bool {
        self.state
    }

    fn press(&mut self, cx: &mut EventCx<'_>) {
        match self.kind {
            ButtonKind::Momentary => {}
            ButtonKind::Toggle => self.state = !self.state,
            ButtonKind::Latch => {
                if self.state {
                    return;
                }
                self.state = true;
            }
        }
        if let Some(cb) = &mut self.on_press {
            cb(cx);
        }
    }
}

impl Widget for Button {
    fn focusable(&self) -> bool {
        true
    }

    fn draw(&self, canvas: &mut Canvas<'_>, focused: bool) {
        let mut style = Style::default();
        if self.state {
            style = style.add_mod(Mod::BOLD);
        }
        if focused {
            style = style.add_mod(Mod::REVERSE);
        }
        canvas.text(Pos::new(0, 0), &format!("[ {} ]", self.label), style);
    }

    fn handle_key(&mut self, key: &KeyEvent, cx: &mut EventCx<'_>) -> Outcome {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.press(cx);
                Outcome::Consumed
            }
            _ => Outcome::Ignored,
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/controls/button.rs"]
mod tests;
