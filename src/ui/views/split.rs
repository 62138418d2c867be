use crate::ui::core::app::EventCx;
use crate::ui::core::canvas::Canvas;
use crate::ui::core::event::{KeyCode, KeyEvent, Outcome};
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::style::Style;
use crate::ui::core::tree::LayoutCx;
use crate::ui::core::widget::Widget;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Children side by side, divider vertical.
    Horizontal,
    /// Children stacked, divider horizontal.
    Vertical,
}

/// Partitions its frame between its first two children at a movable
/// divider. Arrow keys along the axis move the divider one line (or two
/// columns) when the event reaches this view through the chain.
#[derive(Debug)]
pub struct SplitView {
    axis: Axis,
    ratio: f32,
    divider: bool,
    div_at: Option<u16>,
}

impl SplitView {
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            ratio: 0.5,
            divider: true,
            div_at: None,
        }
    }

    pub fn with_ratio(mut self, ratio: f32) -> Self {
        self.set_ratio(ratio);
        self
    }

    pub fn with_divider(mut self, yn: bool) -> Self {
        self.divider = yn;
        self
    }

    pub fn ratio(&self) -> f32 {
        self.ratio
    }

    pub fn set_ratio(&mut self, ratio: f32) {
        self.ratio = ratio.clamp(0.0, 1.0);
    }
}

impl Widget for SplitView {
    fn layout(&mut self, cx: &mut LayoutCx<'_>) {
        let size = cx.size();
        let children = cx.children();
        let (Some(&first), Some(&second)) = (children.first(), children.get(1)) else {
            self.div_at = None;
            return;
        };
        let gap = self.divider as u16;
        match self.axis {
            Axis::Vertical => {
                let usable = size.h.saturating_sub(gap);
                let top = (self.ratio * usable as f32) as u16;
                let bottom = usable - top;
                cx.set_frame(first, Rect::new(0, 0, size.w, top));
                cx.set_frame(second, Rect::new(0, (top + gap) as i32, size.w, bottom));
                self.div_at = self.divider.then_some(top);
            }
            Axis::Horizontal => {
                let usable = size.w.saturating_sub(gap);
                let left = (self.ratio * usable as f32) as u16;
                let right = usable - left;
                cx.set_frame(first, Rect::new(0, 0, left, size.h));
                cx.set_frame(second, Rect::new((left + gap) as i32, 0, right, size.h));
                self.div_at = self.divider.then_some(left);
            }
        }
    }

    fn draw(&self, canvas: &mut Canvas<'_>, _focused: bool) {
        let Some(at) = self.div_at else {
            return;
        };
        let size = canvas.size();
        match self.axis {
            Axis::Vertical => canvas.hline(Pos::new(0, at as i32), size.w, '─', Style::default()),
            Axis::Horizontal => canvas.vline(Pos::new(at as i32, 0), size.h, '│', Style::default()),
        }
    }

    /// The divider is keyboard-driven, so the split itself can take focus.
    fn focusable(&self) -> bool {
        true
    }

    fn handle_key(&mut self, key: &KeyEvent, cx: &mut EventCx<'_>) -> Outcome {
        let size = cx.own_frame().size();
        match (self.axis, key.code) {
            (Axis::Vertical, KeyCode::Up) if size.h > 0 => {
                self.set_ratio(self.ratio - 1.0 / size.h as f32);
            }
            (Axis::Vertical, KeyCode::Down) if size.h > 0 => {
                self.set_ratio(self.ratio + 1.0 / size.h as f32);
            }
            (Axis::Horizontal, KeyCode::Left) if size.w > 0 => {
                self.set_ratio(self.ratio - 2.0 / size.w as f32);
            }
            (Axis::Horizontal, KeyCode::Right) if size.w > 0 => {
                self.set_ratio(self.ratio + 2.0 / size.w as f32);
            }
            _ => return Outcome::Ignored,
        }
        Outcome::Consumed
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/views/split.rs"]
mod tests;
