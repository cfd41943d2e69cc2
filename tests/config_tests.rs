// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for scanner configuration

use scancam::{CameraFacing, CodeType, ScannerConfig, TorchMode};
use std::time::Duration;

#[test]
fn test_config_defaults() {
    let config = ScannerConfig::default();

    assert!(config.vibrate, "Haptic feedback should be enabled by default");
    assert!(!config.reactivate, "Auto-reactivation should be off by default");
    assert_eq!(config.reactivate_timeout, Duration::ZERO);
    assert_eq!(config.camera_timeout, Duration::ZERO);
    assert!(config.fade_in, "Fade-in should be enabled by default");
    assert_eq!(config.camera_type, CameraFacing::Back);
    assert_eq!(config.torch, TorchMode::Off);
    assert!(!config.show_marker);
    assert_eq!(config.code_types, vec![CodeType::Qr]);
}

#[test]
fn test_idle_timeout_disabled_at_zero() {
    let mut config = ScannerConfig::default();
    assert!(!config.idle_timeout_enabled());

    config.camera_timeout = Duration::from_secs(30);
    assert!(config.idle_timeout_enabled());
}

#[test]
fn test_config_prompt_copy() {
    let config = ScannerConfig::default();
    assert!(!config.prompt.title.is_empty());
    assert!(!config.prompt.message.is_empty());
    assert!(!config.prompt.button_positive.is_empty());
}

#[test]
fn test_config_serde_round_trip() {
    let config = ScannerConfig {
        reactivate: true,
        reactivate_timeout: Duration::from_millis(750),
        camera_timeout: Duration::from_secs(30),
        camera_type: CameraFacing::Front,
        torch: TorchMode::On,
        ..ScannerConfig::default()
    };

    let json = serde_json::to_string(&config).expect("config serializes");
    let restored: ScannerConfig = serde_json::from_str(&json).expect("config deserializes");
    assert_eq!(restored, config);
}
