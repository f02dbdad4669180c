//! Rosters of employee records and their text reports.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::RosterResult;
use crate::models::{
    Employee, EmployeeRecord, ProductionWorker, ShiftSupervisor, TeamLeader, Validated,
};

/// A record together with the heading it is reported under.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterEntry {
    heading: String,
    record: EmployeeRecord,
}

impl RosterEntry {
    /// Creates an entry.
    pub fn new(heading: impl Into<String>, record: impl Into<EmployeeRecord>) -> Self {
        Self {
            heading: heading.into(),
            record: record.into(),
        }
    }

    /// Returns the report heading.
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Returns the record.
    pub fn record(&self) -> &EmployeeRecord {
        &self.record
    }
}

/// An ordered collection of roster entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    /// Creates a roster from entries in report order.
    pub fn new(entries: Vec<RosterEntry>) -> Self {
        Self { entries }
    }

    /// Returns the entries in report order.
    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the roster has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders the text report.
    ///
    /// Each entry is a `<heading>:` line followed by the record's lines.
    /// Entries are separated by a blank line and the report ends with a
    /// newline. An empty roster renders as an empty string.
    pub fn render(&self) -> String {
        let mut report = self
            .entries
            .iter()
            .map(|entry| format!("{}:\n{}", entry.heading, entry.record))
            .collect::<Vec<_>>()
            .join("\n\n");

        if !report.is_empty() {
            report.push('\n');
        }
        report
    }

    /// Renders the roster as pretty-printed JSON.
    pub fn to_json(&self) -> RosterResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Builds the fixed four-record sample roster.
///
/// Two production workers, one shift supervisor and one team leader, in
/// that order. All sample values are in range, so no warnings are raised.
///
/// # Examples
///
/// ```
/// use employee_roster::roster::sample_roster;
///
/// let roster = sample_roster();
/// assert!(roster.is_clean());
/// assert!(roster.value().render().starts_with("Production Worker 1:\nName: Alice Johnson\n"));
/// ```
pub fn sample_roster() -> Validated<Roster> {
    let mut warnings = Vec::new();

    let (alice, w) = ProductionWorker::new(
        Employee::new("Alice Johnson", 101, "01/15/2020"),
        1,
        Decimal::new(2550, 2),
    )
    .into_parts();
    warnings.extend(w);

    let (bob, w) = ProductionWorker::new(
        Employee::new("Bob Smith", 102, "03/22/2021"),
        2,
        Decimal::new(2275, 2),
    )
    .into_parts();
    warnings.extend(w);

    let (charles, w) = ShiftSupervisor::new(
        Employee::new("Charles Brown", 201, "06/30/2018"),
        Decimal::new(75000, 0),
        Decimal::new(5000, 0),
    )
    .into_parts();
    warnings.extend(w);

    let (dana_worker, w) = ProductionWorker::new(
        Employee::new("Dana White", 301, "09/10/2019"),
        1,
        Decimal::new(3000, 2),
    )
    .into_parts();
    warnings.extend(w);

    let (dana, w) = TeamLeader::new(dana_worker, Decimal::new(1000, 0), 40, 38).into_parts();
    warnings.extend(w);

    let roster = Roster::new(vec![
        RosterEntry::new("Production Worker 1", alice),
        RosterEntry::new("Production Worker 2", bob),
        RosterEntry::new("Shift Supervisor", charles),
        RosterEntry::new("Team Leader", dana),
    ]);

    Validated::new(roster, warnings)
}
