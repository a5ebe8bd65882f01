//! Static schedule lookup.
//!
//! Train and bus datasets are read once at startup from JSON arrays and never
//! written back. Invalid entries are dropped (and logged) while loading, so a
//! query only ever runs against validated records.

mod error;
mod loader;
mod matcher;
mod report;

pub use error::{DatasetError, EntryError};
pub use loader::{BUSES_FILE, Dataset, TRAINS_FILE, load_dataset};
pub use matcher::match_routes;
pub use report::{BusReportTemplate, ScheduleCard, TrainReportTemplate, format_report};
