//! Module for searching for touchfb config files

use std::path::PathBuf;

/// System fallback path to use if no user config can be found with XDG
const FALLBACK_CONFIG_PATH: &str = "/etc/touchfb/config.yaml";

/// Name of the config file inside any config directory
const CONFIG_FILE_NAME: &str = "config.yaml";

/// Returns the path of the config file to load, in preference order:
/// `./rootfs/etc/touchfb/config.yaml`, the XDG config directories, then the
/// system fallback. Returns `None` if none of them exist.
pub fn get_config_path() -> Option<PathBuf> {
    let rel_path = PathBuf::from("./rootfs/etc/touchfb").join(CONFIG_FILE_NAME);
    if rel_path.exists() && rel_path.is_file() {
        return Some(rel_path);
    }

    match xdg::BaseDirectories::with_prefix("touchfb") {
        Ok(base_dirs) => {
            if let Some(path) = base_dirs.find_config_file(CONFIG_FILE_NAME) {
                return Some(path);
            }
        }
        Err(e) => log::warn!("Unable to determine config base path: {e}"),
    }

    let fallback = PathBuf::from(FALLBACK_CONFIG_PATH);
    if fallback.exists() {
        return Some(fallback);
    }

    None
}
