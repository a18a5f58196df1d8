pub mod config;
pub mod constants;
pub mod display;
pub mod input;

pub use input::context::{create_context, TouchContext};
pub use input::event::InputEvent;
pub use input::mapper::{to_relative, to_relative_span, RelativePosition};
pub use input::source::TouchInputSource;
pub use input::InputError;
