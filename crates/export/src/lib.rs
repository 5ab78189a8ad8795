//! Export helpers for route text lines and JSON reports.

pub mod hops {
    use std::io::{self, Write};

    use hops_registry::LocationRegistry;
    use hops_route::Route;

    const LABEL: &str = "Satellite hops:";

    /// Render the route as `Satellite hops: START,SAT3,END`.
    pub fn render_hops(route: &Route, registry: &LocationRegistry) -> String {
        format!("{} {}", LABEL, route.ids(registry).join(","))
    }

    /// Write the newline-terminated hops line.
    pub fn write_hops(
        writer: &mut dyn Write,
        route: &Route,
        registry: &LocationRegistry,
    ) -> io::Result<()> {
        writeln!(writer, "{}", render_hops(route, registry))
    }
}

pub mod report {
    use serde::{Deserialize, Serialize};
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    use hops_registry::LocationRegistry;
    use hops_route::{Completion, RouteSearch};

    /// One routed location.
    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    pub struct HopRecord {
        pub id: String,
        pub role: String,
        pub latitude_deg: f64,
        pub longitude_deg: f64,
        pub altitude_km: f64,
        pub position_km: [f64; 3],
    }

    /// JSON envelope describing a finished search.
    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    pub struct RouteReport {
        pub seed: Option<f64>,
        pub success: bool,
        pub completion: Option<String>,
        pub relay_count: usize,
        pub hops: Vec<HopRecord>,
    }

    impl RouteReport {
        pub fn new(seed: Option<f64>, search: &RouteSearch, registry: &LocationRegistry) -> Self {
            let hops = search
                .route
                .hops()
                .iter()
                .filter_map(|handle| registry.get(*handle))
                .map(|location| HopRecord {
                    id: location.id.clone(),
                    role: location.role.label().to_string(),
                    latitude_deg: location.latlon.latitude_deg,
                    longitude_deg: location.latlon.longitude_deg,
                    altitude_km: location.altitude_km,
                    position_km: location.coordinates.as_vector(),
                })
                .collect();

            Self {
                seed,
                success: search.is_success(),
                completion: search.completion.map(|kind| {
                    match kind {
                        Completion::LineOfSight => "line_of_sight",
                        Completion::HopLimit => "hop_limit",
                    }
                    .to_string()
                }),
                relay_count: registry.len(),
                hops,
            }
        }
    }

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the report as pretty JSON.
    pub fn write_report(path: &Path, report: &RouteReport) -> io::Result<()> {
        let mut writer = writer_for_path(path)?;
        to_writer_pretty(&mut writer, report).map_err(io::Error::other)?;
        writeln!(writer)?;
        writer.flush()
    }
}
