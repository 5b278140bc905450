use super::*;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("config_unit").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn example_uses_snake_case_keys() {
    let json = Config::example().to_json_string().unwrap();
    for key in ["\"hot_key\"", "\"key_code\"", "\"modifiers\"", "\"move\"", "\"resize\""] {
        assert!(json.contains(key), "missing {key} in {json}");
    }
    assert!(json.contains("\"command\""));
    assert_eq!(Config::from_json_str(&json).unwrap(), Config::example());
}

#[test]
fn move_and_resize_are_optional() {
    let config = Config::from_json_str(
        r#"{ "actions": [ { "hot_key": { "key_code": 0, "modifiers": [] } } ] }"#,
    )
    .unwrap();
    assert_eq!(config.actions.len(), 1);
    assert!(config.actions[0].move_to.is_none());
    assert!(config.actions[0].resize.is_none());
}

#[test]
fn invalid_documents_are_config_errors() {
    for doc in [
        "{",
        r#"{ "actions": [ { "hot_key": { "key_code": 0, "modifiers": ["hyper"] } } ] }"#,
        r#"{ "actions": [ { "hot_key": { "key_code": -1, "modifiers": [] } } ] }"#,
        r#"{ "actions": [ { "hotKey": { "keyCode": 0, "modifiers": [] } } ] }"#,
    ] {
        assert!(
            matches!(Config::from_json_str(doc), Err(ScriptError::Config(_))),
            "{doc}"
        );
    }
}

#[test]
fn save_then_load() {
    let dir = scratch_dir("save_then_load");
    let path = dir.join("nested").join("align.json");
    Config::example().save(&path).unwrap();
    assert_eq!(Config::load(&path).unwrap(), Config::example());
}

#[test]
fn load_reports_missing_file() {
    let dir = scratch_dir("missing");
    let err = Config::load(&dir.join("nope.json")).unwrap_err();
    assert!(matches!(err, ScriptError::Other(_)));
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn load_or_create_writes_example_once() {
    let dir = scratch_dir("load_or_create");
    let path = Config::default_path(&dir);
    assert!(path.ends_with(CONFIG_FILE_NAME));
    assert!(!path.exists());

    assert_eq!(Config::load_or_create(&path).unwrap(), Config::example());
    assert!(path.exists());

    let custom = Config { actions: vec![] };
    custom.save(&path).unwrap();
    assert_eq!(Config::load_or_create(&path).unwrap(), custom);
}
