pub mod accordion;
pub mod boxed;
pub mod clip;
pub mod empty;
pub mod fill;
pub mod scroll;
pub mod split;
pub mod tab;
pub mod text;

pub use accordion::AccordionView;
pub use boxed::BoxView;
pub use clip::ClipView;
pub use empty::EmptyView;
pub use fill::FillView;
pub use scroll::{ScrollView, Scroller};
pub use split::{Axis, SplitView};
pub use tab::TabView;
pub use text::TextView;
