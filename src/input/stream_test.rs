use std::error::Error;
use std::io::Cursor;

use evdev::{AbsoluteAxisCode, EventType, KeyCode, SynchronizationCode};

use crate::input::context::TouchContext;
use crate::input::event::InputEvent;
use crate::input::source::{encode_record, TouchInputSource};
use crate::input::stream::{TouchEventStream, DEFAULT_CAPACITY};

#[tokio::test]
async fn test_stream_events() -> Result<(), Box<dyn Error>> {
    let mut stream = vec![];
    stream.extend(encode_record(EventType::KEY.0, KeyCode::BTN_TOUCH.0, 1));
    stream.extend(encode_record(
        EventType::ABSOLUTE.0,
        AbsoluteAxisCode::ABS_X.0,
        10,
    ));
    stream.extend(encode_record(
        EventType::SYNCHRONIZATION.0,
        SynchronizationCode::SYN_REPORT.0,
        0,
    ));
    stream.extend(encode_record(
        EventType::ABSOLUTE.0,
        AbsoluteAxisCode::ABS_Y.0,
        20,
    ));
    stream.extend(encode_record(EventType::KEY.0, KeyCode::BTN_TOUCH.0, 0));

    let source = TouchInputSource::from_reader(Cursor::new(stream), TouchContext::default());
    let mut events = TouchEventStream::spawn(source, DEFAULT_CAPACITY);

    let mut received = vec![];
    while let Some(event) = events.recv().await {
        received.push(event);
    }

    assert_eq!(
        received,
        vec![
            InputEvent::Press,
            InputEvent::MoveX(10),
            InputEvent::MoveY(20),
            InputEvent::Release,
            InputEvent::End,
        ],
        "ignored records should be dropped and End delivered last"
    );

    Ok(())
}

#[tokio::test]
async fn test_stream_empty_device() -> Result<(), Box<dyn Error>> {
    let source =
        TouchInputSource::from_reader(Cursor::new(Vec::<u8>::new()), TouchContext::default());
    let mut events = TouchEventStream::spawn(source, 1);

    assert_eq!(events.recv().await, Some(InputEvent::End));
    assert_eq!(events.recv().await, None);

    Ok(())
}
