pub mod button;
pub mod list;
pub mod slider;
pub mod stepper;
pub mod text_field;

pub use button::{Button, ButtonKind};
pub use list::ListView;
pub use slider::Slider;
pub use stepper::Stepper;
pub use text_field::TextField;
