use std::collections::HashMap;
use std::fmt::{self, Debug, Display};
use std::fs::{File, OpenOptions};
use std::io::{self, Read};
use std::mem;
use std::path::{Path, PathBuf};

use evdev::raw_stream::RawDevice;
use evdev::{AbsInfo, AbsoluteAxisCode};
use nix::libc;

use crate::input::context::{create_context, TouchContext};
use crate::input::event::InputEvent;
use crate::input::InputError;

/// Size of a single kernel `struct input_event` record on this platform
const RECORD_SIZE: usize = mem::size_of::<libc::input_event>();

/// Absolute axis queried during initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Returns the evdev axis code for this axis
    pub fn code(&self) -> AbsoluteAxisCode {
        match self {
            Axis::X => AbsoluteAxisCode::ABS_X,
            Axis::Y => AbsoluteAxisCode::ABS_Y,
        }
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "ABS_X"),
            Axis::Y => write!(f, "ABS_Y"),
        }
    }
}

/// Reads raw records from a touchscreen event device and classifies them
/// into [InputEvent]s, one record per call.
/// https://www.kernel.org/doc/Documentation/input/event-codes.txt
pub struct TouchInputSource<R = File> {
    reader: R,
    context: TouchContext,
    path: Option<PathBuf>,
    ended: bool,
}

impl TouchInputSource<File> {
    /// Open the touchscreen at the given path for blocking reads and discover
    /// its axis ranges.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, InputError> {
        let path = path.as_ref();
        log::debug!("Opening touch device at: {}", path.display());
        let file = OpenOptions::new()
            .read(true)
            .open(path)
            .map_err(|source| InputError::DeviceOpen {
                path: path.to_path_buf(),
                source,
            })?;

        // Query information about the device to get the absolute ranges.
        // If either axis fails the file is closed on drop.
        let axes_info = query_axes(&file).map_err(|source| InputError::DeviceQuery {
            path: path.to_path_buf(),
            axis: Axis::X,
            source,
        })?;

        let mut context = create_context();
        for axis in [Axis::X, Axis::Y] {
            let Some(info) = axes_info.get(&axis.code()) else {
                return Err(InputError::DeviceQuery {
                    path: path.to_path_buf(),
                    axis,
                    source: io::Error::new(
                        io::ErrorKind::Unsupported,
                        format!("device does not report {axis}"),
                    ),
                });
            };
            log::debug!(
                "Found axis {axis}: value={} min={} max={}",
                info.value(),
                info.minimum(),
                info.maximum()
            );
            match axis {
                Axis::X => {
                    context.current_x = info.value();
                    context.min_x = info.minimum();
                    context.max_x = info.maximum();
                }
                Axis::Y => {
                    context.current_y = info.value();
                    context.min_y = info.minimum();
                    context.max_y = info.maximum();
                }
            }
        }

        Ok(Self {
            reader: file,
            context,
            path: Some(path.to_path_buf()),
            ended: false,
        })
    }
}

impl<R: Read> TouchInputSource<R> {
    /// Create a source over an arbitrary record stream, such as a captured
    /// event log, with an already-known context.
    pub fn from_reader(reader: R, context: TouchContext) -> Self {
        Self {
            reader,
            context,
            path: None,
            ended: false,
        }
    }

    /// Block until the next raw record is available and classify it.
    ///
    /// Returns [InputEvent::End] once the stream is exhausted, and on every
    /// call after that without touching the device again.
    pub fn read_event(&mut self) -> InputEvent {
        if self.ended {
            return InputEvent::End;
        }

        let Some(event) = self.read_record() else {
            self.ended = true;
            return InputEvent::End;
        };
        log::trace!("Received event: {:?}", event);

        InputEvent::classify(&event)
    }

    /// Read the next event, writing the raw axis value of move events into
    /// the given buffer. The buffer is left untouched for every other event.
    pub fn read_event_into(&mut self, out: &mut u32) -> InputEvent {
        let event = self.read_event();
        if let Some(value) = event.value() {
            *out = value;
        }
        event
    }

    /// Read exactly one record. Returns `None` at end of stream.
    fn read_record(&mut self) -> Option<evdev::InputEvent> {
        let mut buf = [0u8; RECORD_SIZE];
        let mut filled = 0;
        while filled < RECORD_SIZE {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => {
                    if filled > 0 {
                        log::warn!("Discarding truncated record of {filled} bytes");
                    }
                    return None;
                }
                Ok(n) => filled += n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    log::warn!("Failed to read from touch device: {err}");
                    return None;
                }
            }
        }

        Some(decode_record(&buf))
    }
}

impl<R> TouchInputSource<R> {
    /// Returns the context discovered during initialization
    pub fn context(&self) -> &TouchContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut TouchContext {
        &mut self.context
    }

    /// Returns the path the device was opened from, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Split the source into its device handle and context
    pub fn into_parts(self) -> (R, TouchContext) {
        (self.reader, self.context)
    }

    /// Close the device handle
    pub fn close(self) {
        log::debug!("Closing touch device: {:?}", self.path);
    }
}

impl<R: Read> Iterator for TouchInputSource<R> {
    type Item = InputEvent;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_event() {
            InputEvent::End => None,
            event => Some(event),
        }
    }
}

impl<R> Debug for TouchInputSource<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TouchInputSource")
            .field("path", &self.path)
            .field("context", &self.context)
            .field("ended", &self.ended)
            .finish()
    }
}

/// Query the driver for the absolute axes of the given device. The query
/// goes through a duplicate descriptor, which is closed again when the
/// [RawDevice] drops, so the file stays open for single-record reads.
fn query_axes(file: &File) -> io::Result<HashMap<AbsoluteAxisCode, AbsInfo>> {
    let device = RawDevice::from_fd(file.try_clone()?.into())?;
    let mut axes_info = HashMap::new();
    for (axis, info) in device.get_absinfo()? {
        log::trace!("Found axis: {:?}", axis);
        log::trace!("Found info: {:?}", info);
        axes_info.insert(axis, info);
    }
    Ok(axes_info)
}

/// Decode a raw `struct input_event`. The timestamp leads the record and its
/// width depends on the platform, so the type, code and value are read from
/// the tail.
fn decode_record(buf: &[u8; RECORD_SIZE]) -> evdev::InputEvent {
    let tail = &buf[RECORD_SIZE - 8..];
    let type_ = u16::from_ne_bytes([tail[0], tail[1]]);
    let code = u16::from_ne_bytes([tail[2], tail[3]]);
    let value = i32::from_ne_bytes([tail[4], tail[5], tail[6], tail[7]]);
    evdev::InputEvent::new(type_, code, value)
}

/// Encode a raw `struct input_event` with a zero timestamp
#[cfg(test)]
pub(crate) fn encode_record(type_: u16, code: u16, value: i32) -> Vec<u8> {
    let mut buf = vec![0u8; RECORD_SIZE - 8];
    buf.extend_from_slice(&type_.to_ne_bytes());
    buf.extend_from_slice(&code.to_ne_bytes());
    buf.extend_from_slice(&value.to_ne_bytes());
    buf
}
