use std::fs;

use satellite_hops::config::{
    AltitudeModelConfig, ConfigError, RouteConfig, SearchStrategyConfig, load_route_config,
};

#[test]
fn defaults_match_historical_behaviour() {
    let config = RouteConfig::default();
    assert_eq!(config.relay_capacity, 20);
    assert_eq!(config.altitude_model, AltitudeModelConfig::Surface);
    assert_eq!(config.strategy, SearchStrategyConfig::FirstFit);
    assert_eq!(config.log_level, "warn");
}

#[test]
fn toml_and_yaml_configs_load() {
    let dir = tempfile::tempdir().expect("tempdir");

    let toml_path = dir.path().join("route.toml");
    fs::write(
        &toml_path,
        "relay_capacity = 32\naltitude_model = \"raised\"\nstrategy = \"backtracking\"\n",
    )
    .unwrap();
    let config = load_route_config(&toml_path).expect("toml config");
    assert_eq!(config.relay_capacity, 32);
    assert_eq!(config.altitude_model, AltitudeModelConfig::Raised);
    assert_eq!(config.strategy, SearchStrategyConfig::Backtracking);
    assert_eq!(config.log_level, "warn");

    let yaml_path = dir.path().join("route.yaml");
    fs::write(&yaml_path, "log_level: debug\n").unwrap();
    let config = load_route_config(&yaml_path).expect("yaml config");
    assert_eq!(config.relay_capacity, 20);
    assert_eq!(config.log_level, "debug");
}

#[test]
fn invalid_configs_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");

    let zero = dir.path().join("zero.toml");
    fs::write(&zero, "relay_capacity = 0\n").unwrap();
    assert!(matches!(load_route_config(&zero), Err(ConfigError::ZeroCapacity)));

    let bad = dir.path().join("bad.toml");
    fs::write(&bad, "strategy = \"breadth_first\"\n").unwrap();
    assert!(matches!(load_route_config(&bad), Err(ConfigError::Toml(_))));

    assert!(matches!(
        load_route_config(dir.path().join("missing.yaml")),
        Err(ConfigError::Io(_))
    ));
}
