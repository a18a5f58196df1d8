use evdev::{AbsoluteAxisCode, EventSummary, KeyCode};

/// One classified touchscreen record. Exactly one [InputEvent] is produced
/// for every raw record read from the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The contact button (BTN_TOUCH) went down
    Press,
    /// The contact button (BTN_TOUCH) went up
    Release,
    /// New raw value for the horizontal axis (ABS_X)
    MoveX(u32),
    /// New raw value for the vertical axis (ABS_Y)
    MoveY(u32),
    /// A record that carries nothing for a single-touch pointer
    Ignore,
    /// The device stream is exhausted. No further reads should be attempted.
    End,
}

impl InputEvent {
    /// Classify the given raw evdev record.
    ///
    /// Key records for BTN_TOUCH map to [InputEvent::Press] (value 1) and
    /// [InputEvent::Release] (value 0); any other value, such as an
    /// autorepeat of 2, is ignored. Absolute records for ABS_X/ABS_Y map to
    /// move events carrying the raw value. Everything else is ignored.
    pub fn classify(event: &evdev::InputEvent) -> Self {
        match event.destructure() {
            EventSummary::Key(_, KeyCode::BTN_TOUCH, 1) => InputEvent::Press,
            EventSummary::Key(_, KeyCode::BTN_TOUCH, 0) => InputEvent::Release,
            EventSummary::AbsoluteAxis(_, AbsoluteAxisCode::ABS_X, value) => {
                InputEvent::MoveX(value as u32)
            }
            EventSummary::AbsoluteAxis(_, AbsoluteAxisCode::ABS_Y, value) => {
                InputEvent::MoveY(value as u32)
            }
            _ => InputEvent::Ignore,
        }
    }

    /// Returns the raw axis value carried by move events
    pub fn value(&self) -> Option<u32> {
        match self {
            InputEvent::MoveX(value) | InputEvent::MoveY(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if this is the terminal [InputEvent::End] event
    pub fn is_end(&self) -> bool {
        matches!(self, InputEvent::End)
    }
}
