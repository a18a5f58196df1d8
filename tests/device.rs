use std::error::Error;

use touchfb::input::mapper::to_relative;
use touchfb::{create_context, InputError, TouchContext, TouchInputSource};

#[test]
fn test_initialize_missing_device() -> Result<(), Box<dyn Error>> {
    let result = TouchInputSource::open("/dev/input/by-id/missing-touchscreen-event-if00");
    assert!(
        matches!(result, Err(InputError::DeviceOpen { .. })),
        "a missing node should fail to open"
    );

    Ok(())
}

#[test]
fn test_create_context() -> Result<(), Box<dyn Error>> {
    let ctx = create_context();
    assert_eq!(ctx, TouchContext::default());
    assert_eq!(ctx.max_x, 0, "a fresh context should be zeroed");

    let ctx = TouchContext::new(0, 800, 0, 480).with_position(800, 0);
    let pos = to_relative(&ctx);
    assert_eq!(pos.x, 1.0);
    assert_eq!(pos.y, 0.0);

    Ok(())
}
