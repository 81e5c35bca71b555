//! Integration Tests for Preference Persistence
//!
//! Username and aliases written by one session are restored by the next one
//! built over the same store and identity.

#[path = "../test_utils/fixtures.rs"]
mod fixtures;

use fixtures::{run, session_with_store, test_config, test_content};
use termfolio::preferences::{JsonPreferenceStore, MemoryPreferenceStore, PreferenceStore, Preferences};
use termfolio::{ConfigLoader, Session};

#[test]
fn test_preferences_survive_a_new_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs").join("preferences.json");

    {
        let mut session = session_with_store(Box::new(JsonPreferenceStore::new(&path)));
        session.submit("username-switch Ada");
        session.submit("alias pl='portfolio projects ls'");
    }
    assert!(path.exists());

    let mut session = session_with_store(Box::new(JsonPreferenceStore::new(&path)));
    assert_eq!(session.username(), "Ada");
    assert_eq!(session.prompt(), "Ada@portfolio:~$ ");
    assert_eq!(run(&mut session, "pl")[0], "01) Alpha");
}

#[test]
fn test_preference_file_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    let mut session = session_with_store(Box::new(JsonPreferenceStore::new(&path)));
    session.submit("alias p=portfolio");

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved["default"]["username"], "guest");
    assert_eq!(saved["default"]["aliasMap"]["p"], "portfolio");
}

#[test]
fn test_identities_are_isolated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");

    let mut config = test_config();
    config.session.identity = "visitor-a".to_string();
    let mut a = Session::new(config, test_content(), Box::new(JsonPreferenceStore::new(&path)));
    a.submit("username-switch Alice");

    let mut config = test_config();
    config.session.identity = "visitor-b".to_string();
    let b = Session::new(config, test_content(), Box::new(JsonPreferenceStore::new(&path)));
    assert_eq!(b.username(), "guest");

    let store = JsonPreferenceStore::new(&path);
    let saved = store.load("visitor-a").unwrap().unwrap();
    assert_eq!(saved.username.as_deref(), Some("Alice"));
    assert!(store.load("visitor-b").unwrap().is_none());
}

#[test]
fn test_corrupt_preferences_fall_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("preferences.json");
    std::fs::write(&path, "{ not json").unwrap();

    let mut session = session_with_store(Box::new(JsonPreferenceStore::new(&path)));
    assert_eq!(session.username(), "guest");
    assert!(session.aliases().is_empty());

    // The next change moves the unreadable file aside and writes a fresh one
    session.submit("username-switch Ada");
    let store = JsonPreferenceStore::new(&path);
    let saved = store.load("default").unwrap().unwrap();
    assert_eq!(saved.username.as_deref(), Some("Ada"));
    assert_eq!(
        std::fs::read_to_string(dir.path().join("preferences.json.bak")).unwrap(),
        "{ not json"
    );
}

#[test]
fn test_blank_saved_username_uses_default() {
    let store = MemoryPreferenceStore::with_entry(
        "default",
        Preferences {
            username: Some("   ".to_string()),
            alias_map: Default::default(),
        },
    );
    let session = session_with_store(Box::new(store));
    assert_eq!(session.username(), "guest");
}

#[test]
fn test_config_file_drives_the_session() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        r#"
[prompt]
host = "ada.dev"
default_username = "visitor"
primary_command = "ada"

[session]
show_boot_message = false
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_path).unwrap();
    let mut session = Session::new(
        config,
        test_content(),
        Box::new(MemoryPreferenceStore::new()),
    );
    assert_eq!(session.prompt(), "visitor@ada.dev:~$ ");
    assert_eq!(run(&mut session, "ada projects")[0], "01) Alpha");
    assert_eq!(run(&mut session, "portfolio"), vec!["Command not found: portfolio"]);
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(&config_path, "[session]\nhistory_limit = 0\n").unwrap();

    let error = ConfigLoader::load_from_file(&config_path).unwrap_err();
    assert!(matches!(error, termfolio::Error::ConfigValidationFailed { .. }));
}

#[test]
fn test_primary_command_cannot_shadow_builtin() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(&config_path, "[prompt]\nprimary_command = \"history\"\n").unwrap();

    let error = ConfigLoader::load_from_file(&config_path).unwrap_err();
    assert!(matches!(
        error,
        termfolio::Error::ConfigValidationFailed { ref field, .. } if field == "prompt.primary_command"
    ));

    let mut config = test_config();
    config.prompt.primary_command = "history".to_string();
    assert!(Session::from_config(config, false).is_err());
}
