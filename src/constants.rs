/// Touch device used when none is configured
pub const DEFAULT_TOUCH_DEVICE: &str = "/dev/input/event0";
/// DRM card used when none is configured
pub const DEFAULT_GPU_CARD: &str = "/dev/dri/card0";
pub const DEFAULT_SCREEN_WIDTH: u32 = 800;
pub const DEFAULT_SCREEN_HEIGHT: u32 = 480;
