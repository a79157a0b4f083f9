use super::*;
use crate::config::{StorageConfig, StorageMode};
use crate::draw::Surface;

fn half_red_surface() -> Surface {
    let surface = Surface::new(8, 8).unwrap();
    let ctx = surface.context().unwrap();
    ctx.set_source_rgba(1.0, 0.0, 0.0, 1.0);
    ctx.rectangle(0.0, 0.0, 4.0, 8.0);
    let _ = ctx.fill();
    surface
}

#[test]
fn file_store_save_load_remove_roundtrip() {
    let temp = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(StorageOptions::new(temp.path().to_path_buf()));

    assert_eq!(store.load().unwrap(), None);

    store.save("data:image/png;base64,AAAA").unwrap();
    assert_eq!(
        store.load().unwrap().as_deref(),
        Some("data:image/png;base64,AAAA")
    );
    assert!(store.state_file_path().exists());

    store.remove().unwrap();
    assert_eq!(store.load().unwrap(), None);
    assert!(!store.state_file_path().exists());
}

#[test]
fn file_store_overwrites_previous_value() {
    let temp = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(StorageOptions::new(temp.path().to_path_buf()));

    store.save("first").unwrap();
    store.save("second").unwrap();
    assert_eq!(store.load().unwrap().as_deref(), Some("second"));
}

#[test]
fn remove_runs_under_the_write_lock() {
    let temp = tempfile::tempdir().unwrap();
    let options = StorageOptions::new(temp.path().to_path_buf());
    let lock_path = options.lock_file_path();
    let mut store = FileStore::new(options);

    store.save("data:image/png;base64,AAAA").unwrap();
    store.remove().unwrap();

    // The state file is gone and the deletion went through the same lock
    // file the save path uses.
    assert!(!store.state_file_path().exists());
    assert!(lock_path.exists());
}

#[test]
fn remove_when_absent_is_a_noop() {
    let temp = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(StorageOptions::new(temp.path().to_path_buf()));
    store.remove().unwrap();
    assert_eq!(store.load().unwrap(), None);
}

#[test]
fn state_file_uses_sanitized_key() {
    let options = StorageOptions::new("/tmp".into());
    assert_eq!(
        options
            .state_file_path()
            .file_name()
            .unwrap()
            .to_string_lossy(),
        "canvasState.b64"
    );

    let mut odd = StorageOptions::new("/tmp".into());
    odd.key = "my state!".to_string();
    assert_eq!(
        odd.state_file_path().file_name().unwrap().to_string_lossy(),
        "my_state_.b64"
    );
}

#[test]
fn options_from_config_custom_storage() {
    let temp = tempfile::tempdir().unwrap();
    let custom_dir = temp.path().join("state");

    let mut cfg = StorageConfig::default();
    cfg.storage = StorageMode::Custom;
    cfg.custom_directory = Some(custom_dir.to_string_lossy().to_string());

    let options = options_from_config(&cfg, temp.path()).unwrap();
    assert_eq!(options.base_dir, custom_dir);
    assert_eq!(options.key, DEFAULT_STATE_KEY);
}

#[test]
fn options_from_config_custom_storage_requires_directory() {
    let temp = tempfile::tempdir().unwrap();
    let mut cfg = StorageConfig::default();
    cfg.storage = StorageMode::Custom;
    cfg.custom_directory = None;

    assert!(options_from_config(&cfg, temp.path()).is_err());
}

#[test]
fn options_from_config_config_storage_uses_config_dir() {
    let temp = tempfile::tempdir().unwrap();
    let mut cfg = StorageConfig::default();
    cfg.storage = StorageMode::Config;

    let options = options_from_config(&cfg, temp.path()).unwrap();
    assert_eq!(options.base_dir, temp.path());
}

#[test]
fn snapshot_roundtrip_reproduces_pixels() {
    let surface = half_red_surface();
    let encoded = encode_surface(&surface).unwrap();
    assert!(encoded.starts_with(DATA_URI_PREFIX));

    let decoded = decode_snapshot(&encoded).unwrap();
    assert_eq!(decoded.width(), 8);
    assert_eq!(decoded.height(), 8);

    let mut restored = Surface::new(8, 8).unwrap();
    restored.paint_image(&decoded).unwrap();
    assert_eq!(restored.pixel_at(2, 4), Some((255, 255, 0, 0)));
    assert_eq!(restored.pixel_at(6, 4), Some((0, 0, 0, 0)));
}

#[test]
fn decode_rejects_foreign_strings() {
    assert!(matches!(
        decode_snapshot("not a data uri"),
        Err(SnapshotError::InvalidFormat)
    ));
    assert!(matches!(
        decode_snapshot("data:image/png;base64,!!!not-base64!!!"),
        Err(SnapshotError::Base64(_))
    ));

    // Valid base64, but not a PNG stream
    assert!(matches!(
        decode_snapshot("data:image/png;base64,aGVsbG8="),
        Err(SnapshotError::Png(_))
    ));
}
