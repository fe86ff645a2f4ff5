use serial_test::serial;
use studybell::core::Permission;
use studybell::notifier::PermissionStore;
use tempfile::tempdir;

#[test]
fn decision_survives_a_new_store_instance() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("permission.toml");

    PermissionStore::new(path.clone())
        .save(Permission::Granted)
        .unwrap();

    // A fresh store (a new process, in effect) sees the same decision.
    let reloaded = PermissionStore::new(path);
    assert_eq!(reloaded.load(), Permission::Granted);
}

#[test]
fn state_file_parent_directories_are_created() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("deeply").join("nested").join("permission.toml");

    let store = PermissionStore::new(path.clone());
    store.save(Permission::Denied).unwrap();

    assert!(path.exists());
    assert_eq!(store.load(), Permission::Denied);
}

#[test]
#[serial]
fn default_path_honors_xdg_state_home() {
    let dir = tempdir().unwrap();
    std::env::set_var("XDG_STATE_HOME", dir.path());
    let path = PermissionStore::default_path();
    std::env::remove_var("XDG_STATE_HOME");

    assert_eq!(
        path,
        dir.path().join("studybell").join("permission.toml")
    );
}

#[test]
#[serial]
fn default_path_falls_back_to_home_state_dir() {
    let original_home = std::env::var_os("HOME");
    std::env::remove_var("XDG_STATE_HOME");
    std::env::set_var("HOME", "/home/learner");
    let path = PermissionStore::default_path();
    match original_home {
        Some(home) => std::env::set_var("HOME", home),
        None => std::env::remove_var("HOME"),
    }

    assert_eq!(
        path,
        std::path::PathBuf::from("/home/learner/.local/state/studybell/permission.toml")
    );
}
