use crate::input::context::TouchContext;
use crate::input::event::InputEvent;
use crate::input::mapper::to_relative;

/// A press or release located in screen pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Down { x: i32, y: i32 },
    Up { x: i32, y: i32 },
}

/// Follows a classified event stream and turns it into pointer events on a
/// screen of a fixed size.
///
/// Move events are written back into the [TouchContext]. The screen position
/// is recomputed once both axes of a report have arrived, which evdev
/// guarantees by emitting ABS_Y after ABS_X.
#[derive(Debug, Clone)]
pub struct TouchTracker {
    context: TouchContext,
    screen_size: (u32, u32),
    position: (i32, i32),
}

impl TouchTracker {
    pub fn new(context: TouchContext, screen_size: (u32, u32)) -> Self {
        let position = to_relative(&context).to_screen(screen_size.0, screen_size.1);
        Self {
            context,
            screen_size,
            position,
        }
    }

    /// Apply the given event, returning a pointer event for presses and
    /// releases.
    pub fn apply(&mut self, event: InputEvent) -> Option<PointerEvent> {
        match event {
            InputEvent::Press => {
                let (x, y) = self.position;
                log::trace!("Touch down ({x}, {y})");
                Some(PointerEvent::Down { x, y })
            }
            InputEvent::Release => {
                let (x, y) = self.position;
                log::trace!("Touch up ({x}, {y})");
                Some(PointerEvent::Up { x, y })
            }
            InputEvent::MoveX(value) => {
                self.context.current_x = value as i32;
                None
            }
            InputEvent::MoveY(value) => {
                self.context.current_y = value as i32;
                let (width, height) = self.screen_size;
                self.position = to_relative(&self.context).to_screen(width, height);
                None
            }
            InputEvent::Ignore | InputEvent::End => None,
        }
    }

    /// Returns the last known position in screen pixels
    pub fn position(&self) -> (i32, i32) {
        self.position
    }

    pub fn context(&self) -> &TouchContext {
        &self.context
    }
}
