//! Roster file loading.
//!
//! This module provides the [`RosterLoader`] type for loading rosters from
//! YAML files.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{RosterError, RosterResult};
use crate::models::Validated;
use crate::roster::Roster;

use super::types::RosterFile;

/// Loads a roster definition from YAML.
///
/// # File Format
///
/// ```yaml
/// entries:
///   - heading: Production Worker 1
///     role: production_worker
///     name: Alice Johnson
///     employee_number: 101
///     hire_date: 01/15/2020
///     shift: 1
///     hourly_pay_rate: "25.50"
///   - role: shift_supervisor
///     name: Charles Brown
///     employee_number: 201
///     hire_date: 06/30/2018
///     annual_salary: "75000"
///     annual_production_bonus: "5000"
/// ```
///
/// Values are kept exactly as written until [`RosterLoader::build`] runs
/// them through the validating constructors.
///
/// # Example
///
/// ```no_run
/// use employee_roster::config::RosterLoader;
///
/// let loader = RosterLoader::load("./config/sample_roster.yaml").unwrap();
/// let roster = loader.build();
/// for warning in roster.warnings() {
///     println!("{}", warning);
/// }
/// print!("{}", roster.value().render());
/// ```
#[derive(Debug, Clone)]
pub struct RosterLoader {
    file: RosterFile,
}

impl RosterLoader {
    /// Loads a roster file from the given path.
    ///
    /// # Returns
    ///
    /// Returns a `RosterLoader` on success, or an error if:
    /// - The file is missing or unreadable
    /// - The file contains invalid YAML or an unknown role
    /// - The file has no entries
    pub fn load<P: AsRef<Path>>(path: P) -> RosterResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RosterError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::from_yaml_str(&content, &path_str)?;
        info!(
            path = %path_str,
            entries = loader.file.entries.len(),
            "Loaded roster file"
        );
        Ok(loader)
    }

    /// Parses roster YAML held in memory; `source` names it in errors.
    pub fn from_yaml_str(content: &str, source: &str) -> RosterResult<Self> {
        let file: RosterFile =
            serde_yaml::from_str(content).map_err(|e| RosterError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        if file.entries.is_empty() {
            return Err(RosterError::EmptyRoster {
                path: source.to_string(),
            });
        }

        Ok(Self { file })
    }

    /// Builds the roster, collecting warnings from every entry in file order.
    pub fn build(&self) -> Validated<Roster> {
        let mut entries = Vec::with_capacity(self.file.entries.len());
        let mut warnings = Vec::new();

        for entry in self.file.entries.iter().cloned() {
            let (entry, entry_warnings) = entry.build().into_parts();
            if !entry_warnings.is_empty() {
                debug!(
                    heading = %entry.heading(),
                    warnings = entry_warnings.len(),
                    "Roster entry needed correction"
                );
            }
            entries.push(entry);
            warnings.extend(entry_warnings);
        }

        Validated::new(Roster::new(entries), warnings)
    }
}
