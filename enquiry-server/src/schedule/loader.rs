//! Loading schedule datasets from JSON files.

use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::domain::lenient::opt_text;
use crate::domain::{NOT_AVAILABLE, Route, RouteRecord, TransportMode};

use super::error::{DatasetError, EntryError};
use super::matcher::match_routes;

/// File name of the train dataset.
pub const TRAINS_FILE: &str = "trains.json";

/// File name of the bus dataset.
pub const BUSES_FILE: &str = "buses.json";

/// Raw train entry as found in `trains.json`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TrainEntry {
    #[serde(default, deserialize_with = "opt_text")]
    train_name: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    train_number: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    route: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    duration: Option<String>,
}

/// Raw bus entry as found in `buses.json`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BusEntry {
    #[serde(default, deserialize_with = "opt_text")]
    bus_name: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    bus_number: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    route: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    time: Option<String>,
}

fn or_not_available(field: Option<String>) -> String {
    field.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Convert one JSON value into a validated record.
fn parse_entry(mode: TransportMode, value: Value) -> Result<RouteRecord, EntryError> {
    match mode {
        TransportMode::Train => {
            let entry: TrainEntry = serde_json::from_value(value)?;
            let route = Route::parse(&entry.route.ok_or(EntryError::MissingRoute)?)?;
            Ok(RouteRecord::train(
                or_not_available(entry.train_name),
                or_not_available(entry.train_number),
                route,
                or_not_available(entry.duration),
            ))
        }
        TransportMode::Bus => {
            let entry: BusEntry = serde_json::from_value(value)?;
            let route = Route::parse(&entry.route.ok_or(EntryError::MissingRoute)?)?;
            Ok(RouteRecord::bus(
                or_not_available(entry.bus_name),
                or_not_available(entry.bus_number),
                route,
                or_not_available(entry.time),
            ))
        }
    }
}

/// An immutable set of schedule records for one transport mode.
#[derive(Debug, Clone)]
pub struct Dataset {
    mode: TransportMode,
    records: Vec<RouteRecord>,
}

impl Dataset {
    /// Create a dataset from already-validated records.
    pub fn new(mode: TransportMode, records: Vec<RouteRecord>) -> Self {
        Self { mode, records }
    }

    /// Create an empty dataset.
    pub fn empty(mode: TransportMode) -> Self {
        Self::new(mode, Vec::new())
    }

    /// Build a dataset from a JSON array, dropping invalid entries.
    pub fn from_json_values(mode: TransportMode, values: Vec<Value>) -> Self {
        let total = values.len();
        let records: Vec<RouteRecord> = values
            .into_iter()
            .enumerate()
            .filter_map(|(index, value)| match parse_entry(mode, value) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!(%mode, index, error = %e, "skipping dataset entry");
                    None
                }
            })
            .collect();

        if records.len() < total {
            warn!(
                %mode,
                kept = records.len(),
                dropped = total - records.len(),
                "dataset contained invalid entries"
            );
        }

        Self::new(mode, records)
    }

    /// Which transport mode this dataset covers.
    pub fn mode(&self) -> TransportMode {
        self.mode
    }

    /// All records, in file order.
    pub fn records(&self) -> &[RouteRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose route is mentioned in `query`.
    pub fn matching(&self, query: &str) -> Vec<&RouteRecord> {
        match_routes(query, &self.records)
    }
}

/// Load a dataset by file name from the first directory that contains it.
///
/// A file missing from every directory yields an empty dataset. A file that
/// exists but cannot be read or is not a JSON array is an error.
pub fn load_dataset(
    file_name: &str,
    mode: TransportMode,
    search_dirs: &[PathBuf],
) -> Result<Dataset, DatasetError> {
    let Some(path) = find_file(file_name, search_dirs) else {
        warn!(%mode, file_name, ?search_dirs, "dataset file not found, using empty dataset");
        return Ok(Dataset::empty(mode));
    };

    debug!(%mode, path = %path.display(), "reading dataset");

    let contents = std::fs::read_to_string(&path).map_err(|source| DatasetError::Io {
        path: path.clone(),
        source,
    })?;

    let values: Vec<Value> =
        serde_json::from_str(&contents).map_err(|source| DatasetError::Json {
            path: path.clone(),
            source,
        })?;

    let dataset = Dataset::from_json_values(mode, values);
    info!(%mode, path = %path.display(), records = dataset.len(), "loaded dataset");
    Ok(dataset)
}

/// First `dir/file_name` that exists.
fn find_file(file_name: &str, search_dirs: &[PathBuf]) -> Option<PathBuf> {
    search_dirs
        .iter()
        .map(|dir| dir.join(file_name))
        .find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RouteDetail;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn parse_train_entry() {
        let values = vec![json!({
            "trainName": "Rajdhani",
            "trainNumber": "101",
            "route": "Delhi to Mumbai",
            "duration": "16h"
        })];
        let dataset = Dataset::from_json_values(TransportMode::Train, values);

        assert_eq!(dataset.len(), 1);
        let record = &dataset.records()[0];
        assert_eq!(record.name, "Rajdhani");
        assert_eq!(record.number, "101");
        assert_eq!(record.route.as_str(), "Delhi to Mumbai");
        assert_eq!(
            record.detail,
            RouteDetail::Train {
                duration: "16h".into()
            }
        );
    }

    #[test]
    fn parse_bus_entry_with_numeric_number() {
        let values = vec![json!({
            "busName": "Volvo Sleeper",
            "busNumber": 42,
            "route": "Pune to Goa",
            "time": "09:00 PM"
        })];
        let dataset = Dataset::from_json_values(TransportMode::Bus, values);

        let record = &dataset.records()[0];
        assert_eq!(record.number, "42");
        assert_eq!(
            record.detail,
            RouteDetail::Bus {
                time: "09:00 PM".into()
            }
        );
    }

    #[test]
    fn optional_fields_default_to_not_available() {
        let values = vec![json!({ "route": "Delhi to Agra" })];
        let dataset = Dataset::from_json_values(TransportMode::Train, values);

        let record = &dataset.records()[0];
        assert_eq!(record.name, NOT_AVAILABLE);
        assert_eq!(record.number, NOT_AVAILABLE);
        assert_eq!(
            record.detail,
            RouteDetail::Train {
                duration: NOT_AVAILABLE.into()
            }
        );
    }

    #[test]
    fn malformed_entries_are_dropped() {
        let values = vec![
            json!({ "trainName": "No route" }),
            json!({ "trainName": "One part", "route": "Delhi" }),
            json!({ "trainName": "Three parts", "route": "A to B to C" }),
            json!({ "trainName": "Empty", "route": "" }),
            json!("not an object"),
            json!(17),
            json!({ "trainName": "Good", "route": "Delhi to Agra" }),
        ];
        let dataset = Dataset::from_json_values(TransportMode::Train, values);

        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].name, "Good");
    }

    #[test]
    fn load_from_first_directory_that_has_the_file() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        std::fs::write(
            second.path().join(TRAINS_FILE),
            r#"[{"trainName": "Shatabdi", "trainNumber": "12051", "route": "Delhi to Agra"}]"#,
        )
        .unwrap();

        let dirs = vec![first.path().to_path_buf(), second.path().to_path_buf()];
        let dataset = load_dataset(TRAINS_FILE, TransportMode::Train, &dirs).unwrap();

        assert_eq!(dataset.mode(), TransportMode::Train);
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.records()[0].number, "12051");
    }

    #[test]
    fn earlier_directory_wins() {
        let first = tempdir().unwrap();
        let second = tempdir().unwrap();
        std::fs::write(
            first.path().join(BUSES_FILE),
            r#"[{"busName": "First", "route": "Pune to Goa"}]"#,
        )
        .unwrap();
        std::fs::write(
            second.path().join(BUSES_FILE),
            r#"[{"busName": "Second", "route": "Pune to Goa"}]"#,
        )
        .unwrap();

        let dirs = vec![first.path().to_path_buf(), second.path().to_path_buf()];
        let dataset = load_dataset(BUSES_FILE, TransportMode::Bus, &dirs).unwrap();
        assert_eq!(dataset.records()[0].name, "First");
    }

    #[test]
    fn missing_file_gives_empty_dataset() {
        let dir = tempdir().unwrap();
        let dataset =
            load_dataset(TRAINS_FILE, TransportMode::Train, &[dir.path().to_path_buf()]).unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn non_array_file_is_an_error() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join(TRAINS_FILE), r#"{"route": "Delhi to Agra"}"#).unwrap();

        let result = load_dataset(TRAINS_FILE, TransportMode::Train, &[dir.path().to_path_buf()]);
        assert!(matches!(result, Err(DatasetError::Json { .. })));
    }

    #[test]
    fn matching_delegates_to_matcher() {
        let values = vec![
            json!({ "trainName": "Rajdhani", "route": "Delhi to Mumbai" }),
            json!({ "trainName": "Shatabdi", "route": "Delhi to Agra" }),
        ];
        let dataset = Dataset::from_json_values(TransportMode::Train, values);

        let found = dataset.matching("agra from delhi");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Shatabdi");
    }
}
