use crate::input::context::TouchContext;

/// A touch position in relative screen space. Both coordinates are in
/// `0.0..=1.0` while the device reports values inside its advertised range.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RelativePosition {
    pub x: f64,
    pub y: f64,
}

impl RelativePosition {
    /// Scale the position to a screen of the given size in pixels. Fractional
    /// pixels are truncated toward zero.
    pub fn to_screen(&self, width: u32, height: u32) -> (i32, i32) {
        let x = self.x * width as f64;
        let y = self.y * height as f64;
        (x as i32, y as i32)
    }
}

/// Convert the absolute touch position of the given context into a relative
/// screen position.
///
/// The offset from the axis minimum is divided by the raw axis maximum, not
/// by the span of the axis. Devices whose minimum is not zero therefore never
/// reach 1.0; see [to_relative_span] for the span-based variant. A maximum of
/// zero yields an infinite or NaN result.
pub fn to_relative(ctx: &TouchContext) -> RelativePosition {
    RelativePosition {
        x: (ctx.current_x as f64 - ctx.min_x as f64) / ctx.max_x as f64,
        y: (ctx.current_y as f64 - ctx.min_y as f64) / ctx.max_y as f64,
    }
}

/// Like [to_relative], but divides by `max - min` so that the full axis range
/// maps onto `0.0..=1.0`.
pub fn to_relative_span(ctx: &TouchContext) -> RelativePosition {
    let span_x = ctx.max_x as f64 - ctx.min_x as f64;
    let span_y = ctx.max_y as f64 - ctx.min_y as f64;
    RelativePosition {
        x: (ctx.current_x as f64 - ctx.min_x as f64) / span_x,
        y: (ctx.current_y as f64 - ctx.min_y as f64) / span_y,
    }
}
