use std::str::FromStr;

use crate::config::Config;
use crate::context::{Context, ProjectComplexity};
use crate::manager::FailurePolicy;

use util::TempHome;

#[test]
fn test_config_parse_full() {
    let s = r#"
        policy = "tolerant"

        [default_context]
        project_complexity = "complex"
    "#;

    let config = Config::from_str(s).expect("Valid config failed to parse");
    assert_eq!(config.policy, FailurePolicy::Tolerant);
    assert_eq!(config.default_context.project_complexity(), ProjectComplexity::Complex);
}

#[test]
fn test_config_parse_empty_uses_defaults() {
    let config = Config::from_str("").expect("Empty config failed to parse");
    assert_eq!(config.policy, FailurePolicy::Strict);
    assert_eq!(config.default_context, Context::new());
}

#[test]
fn test_config_parse_bad_policy() {
    let s = r#"
        policy = "lenient"
    "#;

    let res = Config::from_str(s);
    assert!(res.is_err(), "Invalid policy was parsed correctly: {:?}", res.unwrap());

    let err = res.unwrap_err();
    assert!(err.to_string().contains("Error parsing config file"), "Incorrect error: {}", err);
}

#[test]
/// Make a TempHome, create a config in default directory, check config file is there.
fn test_config_new_in_default() {
    let home = TempHome::new();
    let res = Config::new_in(None);

    assert!(res.is_ok(), "Error creating config: {}", res.unwrap_err());
    assert!(home.temp_home.path().join(".config/task-prioritizer/config.toml").exists(),
        "Config path does not exist at expected location.");

    let config = res.unwrap();
    assert_eq!(config, Config::default());
}

#[test]
/// Make a TempHome, create a config in default directory, modify config, read it back, check the
/// modification is there.
fn test_config_new_in_default_existing_config() {
    let home = TempHome::new();

    { // make the original config
    let res = Config::new_in(None);
    let config_path = home.temp_home.path().join(".config/task-prioritizer/config.toml");
    assert!(res.is_ok(), "Error creating config: {}", res.unwrap_err());
    assert!(config_path.exists(), "Config path does not exist at expected location.");

    let mut config = res.unwrap();
    config.policy = FailurePolicy::Tolerant;
    config.write_config(&config_path).expect("Failed to write out config");
    }

    // read back the modified config
    let res = Config::new_in(None);
    assert!(res.is_ok(), "Error opening config: {}", res.unwrap_err());
    let config = res.unwrap();

    assert_eq!(config.policy, FailurePolicy::Tolerant);
    assert_eq!(config.default_context, Context::new());
}

#[test]
/// Make a TempHome, try to open a config in custom, non-existant directory, check error.
fn test_config_new_in_custom_no_path() {
    let home = TempHome::new();
    let dir = home.temp_home.path();
    let res = Config::new_in(Some(dir.join("prioritizer_custom/custom_config.toml")));

    assert!(res.is_err(), "No error creating config: {:?}", res.unwrap());
    let err = res.unwrap_err();
    assert!(err.to_string().contains("Config file path was given but there was no config file there"),
            "Incorrect error message when trying to pass non-existant custom config file: {}", err);
}

#[test]
/// Make a TempHome, create a config in another directory, check config file is parsed.
fn test_config_new_in_custom_exists() {
    let home = TempHome::new();
    let dir = home.temp_home.path();
    let config_filename = dir.join("prioritizer_custom/custom_config");

    std::fs::create_dir(dir.join("prioritizer_custom")).expect("Failed to create custom config dir");

    let custom_config = util::example_custom_config();
    custom_config.write_config(&config_filename).expect("failed to write out config");

    let res = Config::new_in(Some(config_filename));

    assert!(res.is_ok(), "Error opening config: {}", res.unwrap_err());
    assert!(!dir.join(".config/task-prioritizer").exists(),
        "Default config directory was created even though we used a custom config");

    let config = res.unwrap();
    assert_eq!(config, custom_config);
}
