//! One planning run: configuration in, loaded dataset and route search out.

use std::path::Path;

use hops_config::{AltitudeModelConfig, RouteConfig, SearchStrategyConfig};
use hops_geometry::{AltitudeModel, CoordinateTransform};
use hops_importer::{Dataset, ImportError, load_dataset};
use hops_registry::LocationRegistry;
use hops_route::{RouteBuilder, RouteError, RouteSearch, SearchStrategy};
use thiserror::Error;

/// Top-level planning error.
#[derive(Debug, Error)]
pub enum PlanError {
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error(transparent)]
    Route(#[from] RouteError),
}

/// Loaded data together with the search performed over it.
#[derive(Debug)]
pub struct Plan {
    pub dataset: Dataset,
    pub search: RouteSearch,
}

impl Plan {
    /// Ids of the routed locations in hop order.
    pub fn hop_ids(&self) -> Vec<&str> {
        self.search.route.ids(&self.dataset.registry)
    }
}

pub fn altitude_model(config: AltitudeModelConfig) -> AltitudeModel {
    match config {
        AltitudeModelConfig::Surface => AltitudeModel::Surface,
        AltitudeModelConfig::Raised => AltitudeModel::Raised,
    }
}

pub fn search_strategy(config: SearchStrategyConfig) -> SearchStrategy {
    match config {
        SearchStrategyConfig::FirstFit => SearchStrategy::FirstFit,
        SearchStrategyConfig::Backtracking => SearchStrategy::Backtracking,
    }
}

/// Empty registry sized and configured for a run.
pub fn registry_for(config: &RouteConfig) -> LocationRegistry {
    LocationRegistry::with_transform(
        config.relay_capacity,
        CoordinateTransform::new(altitude_model(config.altitude_model)),
    )
}

/// Load the data file and search for a route under `config`.
pub fn plan_route<P: AsRef<Path>>(config: &RouteConfig, path: P) -> Result<Plan, PlanError> {
    tracing::debug!(
        relay_capacity = config.relay_capacity,
        altitude_model = ?config.altitude_model,
        strategy = ?config.strategy,
        "planning route"
    );
    let dataset = load_dataset(path, registry_for(config))?;
    let search = RouteBuilder::new(&dataset.registry)
        .with_strategy(search_strategy(config.strategy))
        .build()?;
    Ok(Plan { dataset, search })
}
