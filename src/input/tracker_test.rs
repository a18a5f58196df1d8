use std::error::Error;

use crate::input::context::TouchContext;
use crate::input::event::InputEvent;
use crate::input::tracker::{PointerEvent, TouchTracker};

#[test]
fn test_tracker_tap() -> Result<(), Box<dyn Error>> {
    let ctx = TouchContext::new(0, 1000, 0, 1000);
    let mut tracker = TouchTracker::new(ctx, (800, 400));
    assert_eq!(tracker.position(), (0, 0));

    assert_eq!(tracker.apply(InputEvent::MoveX(500)), None);
    assert_eq!(
        tracker.position(),
        (0, 0),
        "position should wait for the y axis"
    );
    assert_eq!(tracker.apply(InputEvent::MoveY(250)), None);
    assert_eq!(tracker.position(), (400, 100));
    assert_eq!(tracker.context().current_x, 500);
    assert_eq!(tracker.context().current_y, 250);

    assert_eq!(
        tracker.apply(InputEvent::Press),
        Some(PointerEvent::Down { x: 400, y: 100 })
    );
    assert_eq!(tracker.apply(InputEvent::Ignore), None);
    assert_eq!(
        tracker.apply(InputEvent::Release),
        Some(PointerEvent::Up { x: 400, y: 100 })
    );
    assert_eq!(tracker.apply(InputEvent::End), None);

    Ok(())
}

#[test]
fn test_tracker_initial_position() -> Result<(), Box<dyn Error>> {
    let ctx = TouchContext::new(0, 100, 0, 100).with_position(50, 100);
    let tracker = TouchTracker::new(ctx, (200, 300));
    assert_eq!(tracker.position(), (100, 300));

    Ok(())
}

#[test]
fn test_tracker_extreme_axis_value() -> Result<(), Box<dyn Error>> {
    let ctx = TouchContext::new(0, 4095, 1, 4095);
    let mut tracker = TouchTracker::new(ctx, (800, 480));

    assert_eq!(tracker.apply(InputEvent::MoveX(0)), None);
    assert_eq!(tracker.apply(InputEvent::MoveY(0x8000_0000)), None);
    assert_eq!(tracker.context().current_y, i32::MIN);
    let expected_y = ((i32::MIN as f64 - 1.0) / 4095.0 * 480.0) as i32;
    assert_eq!(
        tracker.apply(InputEvent::Press),
        Some(PointerEvent::Down {
            x: 0,
            y: expected_y
        }),
        "out of range positions should be reported unclamped"
    );
    assert!(expected_y < 0);

    Ok(())
}
