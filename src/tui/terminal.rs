//! Terminal-backed collaborators for the application loop: a blocking
//! event source over crossterm's reader and a cell writer that replays
//! screen diffs as queued terminal commands.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{
    Attribute, Color as CtColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use unicode_width::UnicodeWidthStr;

use crate::ui::core::app::{CellWriter, EventSource};
use crate::ui::core::event::Event;
use crate::ui::core::geom::Size;
use crate::ui::core::style::{Color, Mod, Style};
use crate::ui::core::tixel::Tixel;

pub fn terminal_size() -> io::Result<Size> {
    let (w, h) = crossterm::terminal::size()?;
    Ok(Size::new(w, h))
}

/// Blocks on crossterm's event stream; raw events that do not translate
/// are reported as `None` and the caller just pulls again.
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self) -> io::Result<Option<Event>> {
        let raw = crossterm::event::read()?;
        Ok(super::crossterm::into_event(raw))
    }
}

/// Writes diffed cells to the terminal. Commands are queued and sent on
/// `flush`, one flush per committed frame.
pub struct CrosstermScreen<W: Write> {
    out: W,
    /// Continuation columns of a wide glyph just written on this row; the
    /// glyph already covers them, so their padding cells are skipped.
    skip: Option<(u16, u16)>,
}

impl CrosstermScreen<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> CrosstermScreen<W> {
    pub fn new(out: W) -> Self {
        Self { out, skip: None }
    }
}

fn ct_color(color: Option<Color>) -> CtColor {
    match color {
        None | Some(Color::Reset) => CtColor::Reset,
        Some(Color::Rgb(r, g, b)) => CtColor::Rgb { r, g, b },
        Some(Color::Indexed(i)) => CtColor::AnsiValue(i),
    }
}

fn queue_style<W: Write>(out: &mut W, style: Style) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Reset))?;
    queue!(out, SetForegroundColor(ct_color(style.fg)))?;
    queue!(out, SetBackgroundColor(ct_color(style.bg)))?;
    if style.mods.contains(Mod::BOLD) {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.mods.contains(Mod::DIM) {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    if style.mods.contains(Mod::ITALIC) {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    if style.mods.contains(Mod::UNDERLINE) {
        queue!(out, SetAttribute(Attribute::Underlined))?;
    }
    if style.mods.contains(Mod::REVERSE) {
        queue!(out, SetAttribute(Attribute::Reverse))?;
    }
    Ok(())
}

impl<W: Write> CellWriter for CrosstermScreen<W> {
    fn write_cell(&mut self, x: u16, y: u16, cell: &Tixel) -> io::Result<()> {
        if let Some((row, until)) = self.skip {
            if row == y && x < until {
                return Ok(());
            }
        }
        queue!(self.out, MoveTo(x, y))?;
        queue_style(&mut self.out, cell.style)?;
        queue!(self.out, Print(cell.symbol.as_str()))?;
        let w = UnicodeWidthStr::width(cell.symbol.as_str()) as u16;
        self.skip = (w > 1).then_some((y, x + w));
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        queue!(self.out, SetAttribute(Attribute::Reset))?;
        self.out.flush()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal.rs"]
mod tests;
