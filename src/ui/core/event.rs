use std::ops::{BitOr, BitOrAssign};

use super::geom::Size;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Self = Self(0);
    pub const SHIFT: Self = Self(1 << 0);
    pub const CONTROL: Self = Self(1 << 1);
    pub const ALT: Self = Self(1 << 2);

    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Modifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Modifiers {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Char(char),
    Enter,
    Tab,
    BackTab,
    Esc,
    Backspace,
    Delete,
    Insert,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
    /// Raw input the translator did not recognize. No shipped widget reacts
    /// to it, so it bubbles off the chain as a no-op.
    Unknown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(code: KeyCode, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, Modifiers::NONE)
    }

    pub fn ctrl(code: KeyCode) -> Self {
        Self::new(code, Modifiers::CONTROL)
    }

    /// Control-modified keys are reserved for focus navigation and other
    /// application-level bindings; they are never offered to the focused
    /// widget first.
    pub fn is_control(&self) -> bool {
        self.modifiers.contains(Modifiers::CONTROL)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Key(KeyEvent),
    Resize(Size),
}

impl Event {
    pub fn is_key(&self) -> bool {
        matches!(self, Event::Key(_))
    }

    pub fn as_key(&self) -> Option<&KeyEvent> {
        match self {
            Event::Key(k) => Some(k),
            _ => None,
        }
    }
}

/// What a responder did with an event it was offered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Consumed,
    Ignored,
}

impl Outcome {
    pub fn is_consumed(&self) -> bool {
        matches!(self, Outcome::Consumed)
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, Outcome::Ignored)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/event.rs"]
mod tests;
