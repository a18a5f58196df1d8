pub mod context;
pub mod event;
pub mod mapper;
pub mod source;
pub mod stream;
pub mod tracker;

#[cfg(test)]
mod stream_test;
#[cfg(test)]
mod tracker_test;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use self::source::Axis;

/// Possible errors initializing a touch device
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Unable to open device {path:?}: {source}")]
    DeviceOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Unable to query {axis} range of {path:?}: {source}")]
    DeviceQuery {
        path: PathBuf,
        axis: Axis,
        #[source]
        source: io::Error,
    },
}
