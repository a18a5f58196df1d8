/// Live calibration state of a single touch device: the last known absolute
/// position and the axis bounds reported by the driver.
///
/// Values are raw device units and are never clamped, so `current_x` may lie
/// outside `min_x..=max_x` if the hardware reports it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TouchContext {
    pub current_x: i32,
    pub current_y: i32,
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

/// Create a zero-initialized [TouchContext]
pub fn create_context() -> TouchContext {
    TouchContext::default()
}

impl TouchContext {
    pub fn new(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Self {
        Self {
            current_x: 0,
            current_y: 0,
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Returns the context with the given current position
    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.current_x = x;
        self.current_y = y;
        self
    }
}
