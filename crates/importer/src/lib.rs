//! Data file import: seed line, route row, and satellite rows into a location registry.
//!
//! The format is line oriented and comma separated:
//!
//! ```text
//! #SEED: 0.5304
//! ROUTE,-12.48,-37.20,66.25,171.79
//! SAT0,-46.47,127.85,625.31
//! S,SAT1,10.0,20.0,500
//! ```

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use hops_registry::{END_ID, LocationRegistry, RegistryError, START_ID};
use thiserror::Error;

/// Fields read per line; anything past this is ignored.
pub const MAX_FIELDS: usize = 10;

const SEED_PREFIX: &str = "#SEED:";
const ROUTE_FIELDS: usize = 5;
const SATELLITE_FIELDS: usize = 4;
const SATELLITE_TAG: &str = "S";

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("data file not found: {}", path.display())]
    FileNotFound { path: PathBuf },
    #[error("filesystem error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed data file: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: seed value `{value}` is not a number")]
    MalformedSeed { line: u64, value: String },
    #[error("line {line}: {kind} row needs {expected} fields, found {found}")]
    MalformedRow {
        line: u64,
        kind: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: field `{field}` is not a number")]
    InvalidNumber { line: u64, field: String },
    #[error("line {line}: {error}")]
    Registry { line: u64, error: RegistryError },
}

/// Everything read from one data file.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Retained for reporting; routing does not consume it.
    pub seed: Option<f64>,
    pub registry: LocationRegistry,
}

/// Load a data file into `registry`.
pub fn load_dataset<P: AsRef<Path>>(
    path: P,
    registry: LocationRegistry,
) -> Result<Dataset, ImportError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => ImportError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ImportError::Io(err),
    })?;
    tracing::info!(path = %path.display(), "loading data file");
    read_dataset(file, registry)
}

/// Parse data rows from any reader.
pub fn read_dataset<R: Read>(
    reader: R,
    mut registry: LocationRegistry,
) -> Result<Dataset, ImportError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut seed = None;
    let mut record = StringRecord::new();
    while csv_reader.read_record(&mut record)? {
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();
        let fields: Vec<&str> = record
            .iter()
            .filter(|field| !field.is_empty())
            .take(MAX_FIELDS)
            .collect();
        let Some(first) = fields.first() else {
            continue;
        };

        if let Some(value) = first.strip_prefix(SEED_PREFIX) {
            let value = value.trim();
            seed = Some(value.parse().map_err(|_| ImportError::MalformedSeed {
                line,
                value: value.to_string(),
            })?);
        } else if first.starts_with('#') {
            continue;
        } else if first.starts_with('R') {
            require(&fields, line, "route", ROUTE_FIELDS)?;
            let start_lat = number(fields[1], line)?;
            let start_lon = number(fields[2], line)?;
            let end_lat = number(fields[3], line)?;
            let end_lon = number(fields[4], line)?;
            register(&mut registry, START_ID, start_lat, start_lon, 0.0, line)?;
            register(&mut registry, END_ID, end_lat, end_lon, 0.0, line)?;
        } else if first.starts_with('S') {
            // A bare `S` is a tag column in front of the id.
            let (offset, expected) = if *first == SATELLITE_TAG {
                (1, SATELLITE_FIELDS + 1)
            } else {
                (0, SATELLITE_FIELDS)
            };
            require(&fields, line, "satellite", expected)?;
            let row = &fields[offset..];
            let lat = number(row[1], line)?;
            let lon = number(row[2], line)?;
            let altitude = number(row[3], line)?;
            register(&mut registry, row[0], lat, lon, altitude, line)?;
        } else {
            tracing::debug!(line, tag = *first, "skipping unrecognised row");
        }
    }

    tracing::info!(relays = registry.len(), ?seed, "data file loaded");
    Ok(Dataset { seed, registry })
}

fn require(fields: &[&str], line: u64, kind: &'static str, expected: usize) -> Result<(), ImportError> {
    if fields.len() < expected {
        return Err(ImportError::MalformedRow {
            line,
            kind,
            expected,
            found: fields.len(),
        });
    }
    Ok(())
}

fn number(field: &str, line: u64) -> Result<f64, ImportError> {
    field.parse().map_err(|_| ImportError::InvalidNumber {
        line,
        field: field.to_string(),
    })
}

fn register(
    registry: &mut LocationRegistry,
    id: &str,
    lat: f64,
    lon: f64,
    altitude_km: f64,
    line: u64,
) -> Result<(), ImportError> {
    registry
        .add_location(id, lat, lon, altitude_km)
        .map(|_| ())
        .map_err(|error| ImportError::Registry { line, error })
}
