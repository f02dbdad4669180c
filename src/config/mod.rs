//! Roster configuration loading.
//!
//! This module loads roster definitions from YAML files. A roster file lists
//! records of any role with their raw attribute values; loading never
//! validates, building does.
//!
//! # Example
//!
//! ```no_run
//! use employee_roster::config::RosterLoader;
//!
//! let roster = RosterLoader::load("./config/sample_roster.yaml").unwrap().build();
//! println!("Loaded {} records", roster.value().len());
//! ```

mod loader;
mod types;

pub use loader::RosterLoader;
pub use types::{EmployeeConfig, EntryConfig, RecordConfig, RosterFile, WorkerConfig};
