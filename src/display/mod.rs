pub mod modeset;
pub mod surface;

#[cfg(test)]
mod modeset_test;
#[cfg(test)]
mod surface_test;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Possible errors managing display surfaces
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("Unable to open card {path:?}: {source}")]
    CardOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("DRM request failed: {0}")]
    Drm(#[from] io::Error),
}
