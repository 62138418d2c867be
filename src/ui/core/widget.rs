use std::any::Any;

use super::app::EventCx;
use super::canvas::Canvas;
use super::event::{KeyEvent, Outcome};
use super::geom::{Rect, Size};
use super::tree::LayoutCx;

/// The capability surface of a view, replacing a responder → view → control
/// inheritance chain with one trait of defaultable hooks:
///
/// - responder: `handle_key` (decline by default, so events bubble);
/// - view: `layout`, `draw`, and opt-in child clipping via `clip_rect`;
/// - control: `focusable` for participation in focus traversal.
///
/// `Any` is a supertrait so application code can downcast arena widgets
/// back to their concrete types.
pub trait Widget: Any {
    /// Place children for the given frame size. Called top-down whenever
    /// frames may have changed. The default keeps children where they are.
    fn layout(&mut self, _cx: &mut LayoutCx<'_>) {}

    /// Paint this view's own content. Children are painted afterwards by
    /// the tree walk, in child order, over the parent.
    fn draw(&self, _canvas: &mut Canvas<'_>, _focused: bool) {}

    /// Region (in local coordinates) that descendants are clipped to, or
    /// `None` to let them overflow. Overflow is visible by default; clipping
    /// is opted into by containers like `ClipView` and `ScrollView`.
    fn clip_rect(&self, _size: Size) -> Option<Rect> {
        None
    }

    /// Whether this view can hold the input focus.
    fn focusable(&self) -> bool {
        false
    }

    /// Offered a plain key event. Return `Consumed` to stop the event from
    /// bubbling to the next responder.
    fn handle_key(&mut self, _key: &KeyEvent, _cx: &mut EventCx<'_>) -> Outcome {
        Outcome::Ignored
    }
}
