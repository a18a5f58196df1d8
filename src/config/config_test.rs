use std::error::Error;

use crate::config::{Config, ScreenConfig};
use crate::constants::{DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH, DEFAULT_TOUCH_DEVICE};

#[test]
fn test_load_full_config() -> Result<(), Box<dyn Error>> {
    let content = r#"
touch_device: /dev/input/by-id/usb-QDtech_MPI7003-event-if00
screen:
  width: 1024
  height: 600
gpu_card: /dev/dri/card1
"#;
    let config = Config::from_yaml(content.to_string())?;
    assert_eq!(
        config.touch_device(),
        "/dev/input/by-id/usb-QDtech_MPI7003-event-if00"
    );
    assert_eq!(
        config.screen,
        Some(ScreenConfig {
            width: 1024,
            height: 600
        })
    );
    assert_eq!(config.screen_size(), (1024, 600));
    assert_eq!(config.gpu_card(), "/dev/dri/card1");

    Ok(())
}

#[test]
fn test_load_partial_config() -> Result<(), Box<dyn Error>> {
    let config = Config::from_yaml("gpu_card: /dev/dri/card0\n".to_string())?;
    assert_eq!(
        config.touch_device(),
        DEFAULT_TOUCH_DEVICE,
        "missing fields should use defaults"
    );
    assert_eq!(
        config.screen_size(),
        (DEFAULT_SCREEN_WIDTH, DEFAULT_SCREEN_HEIGHT)
    );

    Ok(())
}

#[test]
fn test_load_invalid_config() -> Result<(), Box<dyn Error>> {
    let result = Config::from_yaml("screen: [1, 2]\n".to_string());
    assert!(result.is_err(), "a malformed screen should not deserialize");

    let result = Config::from_yaml_file("/does/not/exist.yaml");
    assert!(result.is_err());

    Ok(())
}
