use crate::ui::core::geom::{Rect, Size};
use crate::ui::core::widget::Widget;

/// Clip-only container: descendants cannot paint outside its frame.
/// Clipping is opt-in — without a `ClipView` (or `ScrollView`) in between,
/// a child's overflow stays visible.
#[derive(Debug, Default)]
pub struct ClipView;

impl Widget for ClipView {
    fn clip_rect(&self, size: Size) -> Option<Rect> {
        Some(Rect::from_size(size))
    }
}
