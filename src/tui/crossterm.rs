//! Translation from raw crossterm events into the crate's input model.
//! Anything that does not translate becomes `None` (dropped) or
//! `KeyCode::Unknown`, never an error.

use crate::ui::core::event::{Event, KeyCode, KeyEvent, Modifiers};
use crate::ui::core::geom::Size;

pub fn into_event(event: crossterm::event::Event) -> Option<Event> {
    match event {
        crossterm::event::Event::Key(key) => into_key_event(key).map(Event::Key),
        crossterm::event::Event::Resize(w, h) => Some(Event::Resize(Size::new(w, h))),
        // Mouse, focus and paste reports are outside this core's input model.
        _ => None,
    }
}

pub fn into_key_event(event: crossterm::event::KeyEvent) -> Option<KeyEvent> {
    // Enhanced keyboard protocols report releases; the core models
    // keystrokes, so only presses and repeats pass through.
    if event.kind == crossterm::event::KeyEventKind::Release {
        return None;
    }
    let mut modifiers = into_modifiers(event.modifiers);
    let code = into_key_code(event.code, &mut modifiers);
    Some(KeyEvent::new(code, modifiers))
}

fn into_modifiers(mods: crossterm::event::KeyModifiers) -> Modifiers {
    let mut out = Modifiers::NONE;
    if mods.contains(crossterm::event::KeyModifiers::SHIFT) {
        out |= Modifiers::SHIFT;
    }
    if mods.contains(crossterm::event::KeyModifiers::CONTROL) {
        out |= Modifiers::CONTROL;
    }
    if mods.contains(crossterm::event::KeyModifiers::ALT) {
        out |= Modifiers::ALT;
    }
    out
}

fn into_key_code(code: crossterm::event::KeyCode, modifiers: &mut Modifiers) -> KeyCode {
    match code {
        crossterm::event::KeyCode::Char(ch) => KeyCode::Char(ch),
        crossterm::event::KeyCode::Enter => KeyCode::Enter,
        crossterm::event::KeyCode::Tab => KeyCode::Tab,
        crossterm::event::KeyCode::BackTab => KeyCode::BackTab,
        crossterm::event::KeyCode::Esc => KeyCode::Esc,
        crossterm::event::KeyCode::Backspace => KeyCode::Backspace,
        crossterm::event::KeyCode::Delete => KeyCode::Delete,
        crossterm::event::KeyCode::Insert => KeyCode::Insert,
        crossterm::event::KeyCode::Up => KeyCode::Up,
        crossterm::event::KeyCode::Down => KeyCode::Down,
        crossterm::event::KeyCode::Left => KeyCode::Left,
        crossterm::event::KeyCode::Right => KeyCode::Right,
        crossterm::event::KeyCode::Home => KeyCode::Home,
        crossterm::event::KeyCode::End => KeyCode::End,
        crossterm::event::KeyCode::PageUp => KeyCode::PageUp,
        crossterm::event::KeyCode::PageDown => KeyCode::PageDown,
        crossterm::event::KeyCode::F(n) => KeyCode::F(n),
        crossterm::event::KeyCode::Null => {
            // Legacy terminals report Ctrl+Space as NUL.
            *modifiers |= Modifiers::CONTROL;
            KeyCode::Char(' ')
        }
        _ => KeyCode::Unknown,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
