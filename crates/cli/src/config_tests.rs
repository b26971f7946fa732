// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use tempfile::TempDir;

#[test]
fn test_init_and_load_config() {
    let temp = TempDir::new().unwrap();
    let work_dir = init_work_dir(temp.path()).unwrap();

    let config = Config::load(&work_dir).unwrap();
    assert_eq!(config, Config::default());
    assert!(work_dir.join(".gitignore").exists());
}

#[test]
fn test_init_twice_fails() {
    let temp = TempDir::new().unwrap();
    init_work_dir(temp.path()).unwrap();
    let err = init_work_dir(temp.path()).unwrap_err();
    assert!(matches!(err, Error::AlreadyInitialized(_)));
}

#[test]
fn test_empty_config_uses_defaults() {
    let config = Config::parse("").unwrap();
    assert_eq!(config.api.base_url, DEFAULT_API_URL);
    assert_eq!(config.api.timeout_secs, 30);
    assert!(config.api.user_agent.starts_with("ghtriage/"));
    assert_eq!(config.triage.policy(), TriagePolicy::default());
    assert_eq!(config.triage.scope, LabelScope::Issue);
    assert_eq!(config.database, None);
}

#[test]
fn test_partial_sections() {
    let config = Config::parse(
        r#"
database = "data/mirror.db"

[api]
base_url = "https://ghe.example.com/api/v3"

[triage]
marker = "triage/pending"
scope = "batch"
"#,
    )
    .unwrap();

    assert_eq!(config.database.as_deref(), Some("data/mirror.db"));
    assert_eq!(config.api.base_url, "https://ghe.example.com/api/v3");
    assert_eq!(config.api.timeout_secs, 30);
    assert_eq!(config.triage.marker, "triage/pending");
    assert_eq!(config.triage.priority_prefix, "priority/");
    assert_eq!(config.triage.scope, LabelScope::Batch);
}

#[test]
fn test_invalid_scope_rejected() {
    let err = Config::parse("[triage]\nscope = \"global\"\n").unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().contains("invalid label scope: 'global'"));
    assert!(err.to_string().contains("valid scopes are: issue, batch"));
}

#[test]
fn test_scope_is_case_insensitive() {
    let config = Config::parse("[triage]\nscope = \"Batch\"\n").unwrap();
    assert_eq!(config.triage.scope, LabelScope::Batch);
}

#[test]
fn test_scope_round_trips_through_save() {
    let temp = TempDir::new().unwrap();
    let work_dir = init_work_dir(temp.path()).unwrap();
    let mut config = Config::default();
    config.triage.scope = LabelScope::Batch;
    config.save(&work_dir).unwrap();

    let content = std::fs::read_to_string(work_dir.join("config.toml")).unwrap();
    assert!(content.contains("scope = \"batch\""));
    assert_eq!(Config::load(&work_dir).unwrap().triage.scope, LabelScope::Batch);
}

#[test]
fn test_empty_marker_rejected() {
    let err = Config::parse("[triage]\nmarker = \" \"\n").unwrap_err();
    assert!(err.to_string().contains("triage.marker"));
}

#[test]
fn test_empty_base_url_rejected() {
    let err = Config::parse("[api]\nbase_url = \"\"\n").unwrap_err();
    assert!(err.to_string().contains("api.base_url"));
}

#[test]
fn test_save_round_trip() {
    let temp = TempDir::new().unwrap();
    let mut config = Config::default();
    config.triage.scope = LabelScope::Batch;
    config.database = Some("/var/lib/ghtriage/mirror.db".to_string());
    config.save(temp.path()).unwrap();

    assert_eq!(Config::load(temp.path()).unwrap(), config);
}

#[test]
fn test_api_url_override() {
    let config = Config::default().with_api_url(Some("http://127.0.0.1:9999".to_string()));
    assert_eq!(config.api.base_url, "http://127.0.0.1:9999");

    let config = Config::default().with_api_url(None);
    assert_eq!(config.api.base_url, DEFAULT_API_URL);
}

#[test]
fn test_db_path_default() {
    let work_dir = PathBuf::from("/project/.ghtriage");
    let db_path = get_db_path(&work_dir, &Config::default());
    assert_eq!(db_path, PathBuf::from("/project/.ghtriage/mirror.db"));
}

#[test]
fn test_db_path_relative_to_project_root() {
    let work_dir = PathBuf::from("/project/.ghtriage");
    let config = Config {
        database: Some("state/mirror.db".to_string()),
        ..Config::default()
    };
    assert_eq!(
        get_db_path(&work_dir, &config),
        PathBuf::from("/project/state/mirror.db")
    );
}

#[test]
fn test_db_path_absolute() {
    let work_dir = PathBuf::from("/project/.ghtriage");
    let config = Config {
        database: Some("/data/mirror.db".to_string()),
        ..Config::default()
    };
    assert_eq!(
        get_db_path(&work_dir, &config),
        PathBuf::from("/data/mirror.db")
    );
}

#[test]
fn test_workspace_resolves_from_subdirectory() {
    let temp = TempDir::new().unwrap();
    let work_dir = init_work_dir(temp.path()).unwrap();
    let nested = temp.path().join("a").join("b");
    std::fs::create_dir_all(&nested).unwrap();

    let workspace = Workspace::resolve(&nested).unwrap();
    assert_eq!(workspace.work_dir, work_dir);
    assert_eq!(workspace.db_path(), work_dir.join("mirror.db"));
}

#[test]
fn test_workspace_defaults_without_directory() {
    let temp = TempDir::new().unwrap();
    let workspace = Workspace::resolve(temp.path()).unwrap();

    assert_eq!(workspace.work_dir, temp.path().join(".ghtriage"));
    assert_eq!(workspace.config, Config::default());
    assert!(!workspace.work_dir.exists());
}

#[test]
fn test_workspace_reports_broken_config() {
    let temp = TempDir::new().unwrap();
    let work_dir = init_work_dir(temp.path()).unwrap();
    std::fs::write(work_dir.join("config.toml"), "[api\n").unwrap();

    let err = Workspace::resolve(temp.path()).unwrap_err();
    assert!(err.to_string().contains("failed to parse config"));
}
