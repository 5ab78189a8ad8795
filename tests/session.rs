use std::fs;

use satellite_hops::config::{AltitudeModelConfig, RouteConfig, SearchStrategyConfig};
use satellite_hops::geometry::AltitudeModel;
use satellite_hops::importer::ImportError;
use satellite_hops::route::Completion;
use satellite_hops::session::{PlanError, plan_route, registry_for};

const DATA: &str = "#SEED: 0.8149\n\
ROUTE,0.0,0.0,0.0,40.0\n\
SAT0,0.0,-10.0,1.0\n\
SAT1,0.0,12.0,300.0\n\
SAT2,0.0,30.0,300.0\n";

fn write_data(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("data.csv");
    fs::write(&path, DATA).expect("write data");
    path
}

#[test]
fn plan_route_runs_load_and_search() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_data(&dir);

    let plan = plan_route(&RouteConfig::default(), &path).expect("plan");
    assert_eq!(plan.dataset.seed, Some(0.8149));
    assert_eq!(plan.search.completion, Some(Completion::LineOfSight));
    assert_eq!(plan.hop_ids(), ["START", "SAT1", "SAT2", "END"]);
}

#[test]
fn config_selects_registry_transform() {
    let config = RouteConfig {
        altitude_model: AltitudeModelConfig::Raised,
        relay_capacity: 5,
        ..RouteConfig::default()
    };
    let registry = registry_for(&config);
    assert_eq!(registry.capacity(), 5);
    assert_eq!(registry.transform().altitude_model, AltitudeModel::Raised);
}

#[test]
fn both_strategies_agree_when_nothing_dead_ends() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_data(&dir);

    let config = RouteConfig {
        strategy: SearchStrategyConfig::Backtracking,
        ..RouteConfig::default()
    };
    let backtracking = plan_route(&config, &path).expect("plan");
    let first_fit = plan_route(&RouteConfig::default(), &path).expect("plan");
    assert_eq!(backtracking.hop_ids(), first_fit.hop_ids());
}

#[test]
fn import_failures_surface_as_plan_errors() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = plan_route(&RouteConfig::default(), dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(
        err,
        PlanError::Import(ImportError::FileNotFound { .. })
    ));
}
