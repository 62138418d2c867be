use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::geom::{Pos, Rect, Size};
use super::screen::Screen;
use super::style::Style;
use super::tixel::Tixel;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderKind {
    Plain,
}

/// A clipped drawing surface over the screen's back buffer.
///
/// Positions handed to the primitives are local to the view being drawn;
/// `origin` is where the view's (0,0) sits on the screen and `clip` is the
/// screen-space region writes may land in. Anything outside the clip is
/// silently dropped, so a view cannot paint past its frame or through an
/// ancestor's clip region.
pub struct Canvas<'a> {
    screen: &'a mut Screen,
    origin: Pos,
    clip: Rect,
    size: Size,
}

impl<'a> Canvas<'a> {
    pub fn new(screen: &'a mut Screen, origin: Pos, clip: Rect, size: Size) -> Self {
        Self {
            screen,
            origin,
            clip,
            size,
        }
    }

    /// The drawable size of the view this canvas belongs to.
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.size)
    }

    /// A canvas for a sub-region of this view, in this view's coordinates.
    pub fn sub(&mut self, rect: Rect) -> Canvas<'_> {
        let clip = self
            .clip
            .intersect(rect.translate(self.origin.x, self.origin.y));
        Canvas {
            screen: self.screen,
            origin: self.origin.offset(rect.x, rect.y),
            clip,
            size: rect.size(),
        }
    }

    fn cell_mut(&mut self, local: Pos) -> Option<&mut Tixel> {
        let global = local.offset(self.origin.x, self.origin.y);
        if !self.clip.contains(global) {
            return None;
        }
        self.screen.back_mut(global.x as u16, global.y as u16)
    }

    pub fn set(&mut self, pos: Pos, tixel: Tixel) {
        if let Some(cell) = self.cell_mut(pos) {
            *cell = tixel;
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, style: Style) {
        if rect.is_empty() {
            return;
        }
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                if let Some(cell) = self.cell_mut(Pos::new(x, y)) {
                    *cell = Tixel::blank(style);
                }
            }
        }
    }

    /// Apply a style to existing cells without changing their symbols.
    pub fn style_rect(&mut self, rect: Rect, style: Style) {
        if rect.is_empty() {
            return;
        }
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                if let Some(cell) = self.cell_mut(Pos::new(x, y)) {
                    cell.style = style;
                }
            }
        }
    }

    pub fn hline(&mut self, pos: Pos, len: u16, ch: char, style: Style) {
        for i in 0..len as i32 {
            self.set(Pos::new(pos.x + i, pos.y), Tixel::new(ch, style));
        }
    }

    pub fn vline(&mut self, pos: Pos, len: u16, ch: char, style: Style) {
        for i in 0..len as i32 {
            self.set(Pos::new(pos.x, pos.y + i), Tixel::new(ch, style));
        }
    }

    pub fn text(&mut self, pos: Pos, text: &str, style: Style) {
        let global_y = pos.y + self.origin.y;
        if global_y < self.clip.y || global_y >= self.clip.bottom() {
            return;
        }
        let mut x = pos.x;
        for g in text.graphemes(true) {
            let w = UnicodeWidthStr::width(g) as i32;
            if w == 0 {
                continue;
            }
            let global_x = x + self.origin.x;
            if global_x >= self.clip.right() {
                break;
            }
            // Do not partially render wide glyphs at the clip edge.
            if w > 1 && global_x + w - 1 >= self.clip.right() {
                break;
            }
            if let Some(cell) = self.cell_mut(Pos::new(x, pos.y)) {
                cell.symbol = g.into();
                cell.style = style;

                // Wide glyphs occupy the following cells as styled blanks.
                for dx in 1..w {
                    if let Some(cell) = self.cell_mut(Pos::new(x + dx, pos.y)) {
                        *cell = Tixel::blank(style);
                    }
                }
            }
            x += w;
        }
    }

    pub fn border(&mut self, rect: Rect, style: Style, kind: BorderKind) {
        if rect.w < 2 || rect.h < 2 {
            return;
        }

        let (tl, tr, bl, br, h, v) = match kind {
            BorderKind::Plain => ('┌', '┐', '└', '┘', '─', '│'),
        };

        let right = rect.right() - 1;
        let bottom = rect.bottom() - 1;

        self.set(Pos::new(rect.x, rect.y), Tixel::new(tl, style));
        self.set(Pos::new(right, rect.y), Tixel::new(tr, style));
        self.set(Pos::new(rect.x, bottom), Tixel::new(bl, style));
        self.set(Pos::new(right, bottom), Tixel::new(br, style));
        self.hline(Pos::new(rect.x + 1, rect.y), rect.w.saturating_sub(2), h, style);
        self.hline(Pos::new(rect.x + 1, bottom), rect.w.saturating_sub(2), h, style);
        self.vline(Pos::new(rect.x, rect.y + 1), rect.h.saturating_sub(2), v, style);
        self.vline(Pos::new(right, rect.y + 1), rect.h.saturating_sub(2), v, style);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/canvas.rs"]
mod tests;
