use crate::ui::core::app::EventCx;
use crate::ui::core::canvas::Canvas;
use crate::ui::core::event::{KeyCode, KeyEvent, Outcome};
use crate::ui::core::geom::{Pos, Rect, Size};
use crate::ui::core::style::Style;
use crate::ui::core::tree::LayoutCx;
use crate::ui::core::widget::Widget;

/// Indicator bar for scrollable content: where the visible portion sits
/// (`position`, 0.0 at the start to 1.0 at the end) and how much of the
/// content is visible (`fraction`).
#[derive(Debug)]
pub struct Scroller {
    vertical: bool,
    position: f32,
    fraction: f32,
}

impl Scroller {
    pub fn new(vertical: bool) -> Self {
        Self {
            vertical,
            position: 0.0,
            fraction: 1.0,
        }
    }

    pub fn set_position(&mut self, position: f32) {
        self.position = position.clamp(0.0, 1.0);
    }

    pub fn set_fraction(&mut self, fraction: f32) {
        self.fraction = fraction.clamp(0.0, 1.0);
    }
}

impl Widget for Scroller {
    fn draw(&self, canvas: &mut Canvas<'_>, _focused: bool) {
        let size = canvas.size();
        let style = Style::default();
        if self.vertical {
            let bar = ((self.fraction * size.h as f32) as u16).max(1).min(size.h);
            let avail = size.h - bar;
            let at = (self.position * avail as f32) as u16;
            canvas.vline(Pos::new(0, 0), size.h, '│', style);
            canvas.vline(Pos::new(0, at as i32), bar, '█', style);
        } else {
            let bar = ((self.fraction * size.w as f32) as u16).max(1).min(size.w);
            let avail = size.w - bar;
            let at = (self.position * avail as f32) as u16;
            canvas.hline(Pos::new(0, 0), size.w, '─', style);
            canvas.hline(Pos::new(at as i32, 0), bar, '█', style);
        }
    }
}

/// Scrollable viewport over a single document child (the first child).
///
/// The document keeps its own size; scrolling offsets its frame to negative
/// origins and the viewport clips it. Scroller lanes are drawn inside the
/// view's own frame (last column/row) so the viewport clip never touches
/// them.
pub struct ScrollView {
    scroll: Pos,
    autohide: bool,
    vbar: Scroller,
    hbar: Scroller,
    viewport: Rect,
    doc_size: Size,
    show_v: bool,
    show_h: bool,
}

impl ScrollView {
    pub fn new() -> Self {
        Self {
            scroll: Pos::default(),
            autohide: false,
            vbar: Scroller::new(true),
            hbar: Scroller::new(false),
            viewport: Rect::default(),
            doc_size: Size::default(),
            show_v: true,
            show_h: true,
        }
    }

    /// Hide scroller lanes when the document fits the corresponding axis.
    pub fn autohide(mut self, yn: bool) -> Self {
        self.autohide = yn;
        self
    }

    pub fn scroll(&self) -> Pos {
        self.scroll
    }

    /// Viewport rect (local coordinates) from the last layout pass.
    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn scroll_to(&mut self, x: i32, y: i32) {
        let max_x = self.doc_size.w.saturating_sub(self.viewport.w) as i32;
        let max_y = self.doc_size.h.saturating_sub(self.viewport.h) as i32;
        self.scroll = Pos::new(x.clamp(0, max_x), y.clamp(0, max_y));
    }

    pub fn scroll_by(&mut self, dx: i32, dy: i32) {
        self.scroll_to(self.scroll.x + dx, self.scroll.y + dy);
    }

    /// Which lanes to show for the given view and document sizes. When a
    /// lane is forced visible and the document is exactly as large as the
    /// view on the other axis, the lane clips content, so the other lane
    /// shows too.
    fn lanes(&self, size: Size, doc: Size) -> (bool, bool) {
        if !self.autohide {
            return (true, true);
        }
        let mut show_v = doc.h > size.h;
        let mut show_h = doc.w > size.w;
        if show_v && doc.w == size.w {
            show_h = true;
        }
        if show_h && doc.h == size.h {
            show_v = true;
        }
        (show_v, show_h)
    }
}

impl Default for ScrollView {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ScrollView {
    fn layout(&mut self, cx: &mut LayoutCx<'_>) {
        let size = cx.size();
        let Some(&doc) = cx.children().first() else {
            self.viewport = Rect::from_size(size);
            self.doc_size = Size::default();
            (self.show_v, self.show_h) = (false, false);
            return;
        };
        self.doc_size = cx.frame(doc).size();
        (self.show_v, self.show_h) = self.lanes(size, self.doc_size);
        self.viewport = Rect::new(
            0,
            0,
            size.w.saturating_sub(self.show_v as u16),
            size.h.saturating_sub(self.show_h as u16),
        );

        // Never leave a gap past the document's far edge after a resize.
        self.scroll_to(self.scroll.x, self.scroll.y);

        cx.set_frame(
            doc,
            Rect::new(-self.scroll.x, -self.scroll.y, self.doc_size.w, self.doc_size.h),
        );

        let xdiff = self.doc_size.w.saturating_sub(self.viewport.w);
        let ydiff = self.doc_size.h.saturating_sub(self.viewport.h);
        self.hbar.set_fraction(if self.doc_size.w > 0 {
            self.viewport.w as f32 / self.doc_size.w as f32
        } else {
            1.0
        });
        self.vbar.set_fraction(if self.doc_size.h > 0 {
            self.viewport.h as f32 / self.doc_size.h as f32
        } else {
            1.0
        });
        self.hbar.set_position(if xdiff > 0 {
            self.scroll.x as f32 / xdiff as f32
        } else {
            0.0
        });
        self.vbar.set_position(if ydiff > 0 {
            self.scroll.y as f32 / ydiff as f32
        } else {
            0.0
        });
    }

    fn clip_rect(&self, _size: Size) -> Option<Rect> {
        Some(self.viewport)
    }

    /// Scrolling is keyboard-driven, so the view itself can take focus
    /// even when the document holds no controls.
    fn focusable(&self) -> bool {
        true
    }

    fn draw(&self, canvas: &mut Canvas<'_>, _focused: bool) {
        if self.show_v {
            let lane = Rect::new(self.viewport.w as i32, 0, 1, self.viewport.h);
            self.vbar.draw(&mut canvas.sub(lane), false);
        }
        if self.show_h {
            let lane = Rect::new(0, self.viewport.h as i32, self.viewport.w, 1);
            self.hbar.draw(&mut canvas.sub(lane), false);
        }
    }

    fn handle_key(&mut self, key: &KeyEvent, _cx: &mut EventCx<'_>) -> Outcome {
        let page = self.viewport.h.saturating_sub(2).max(1) as i32;
        match key.code {
            KeyCode::Down => self.scroll_by(0, 1),
            KeyCode::Up => self.scroll_by(0, -1),
            KeyCode::Left => self.scroll_by(-2, 0),
            KeyCode::Right => self.scroll_by(2, 0),
            KeyCode::PageDown => self.scroll_by(0, page),
            KeyCode::PageUp => self.scroll_by(0, -page),
            KeyCode::Home => self.scroll_to(self.scroll.x, 0),
            KeyCode::End => self.scroll_to(self.scroll.x, self.doc_size.h as i32),
            _ => return Outcome::Ignored,
        }
        Outcome::Consumed
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/views/scroll.rs"]
mod tests;
