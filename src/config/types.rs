//! Configuration types for roster files.
//!
//! These structures mirror the YAML layout one-to-one and hold raw,
//! unvalidated input. Validation happens when an entry is built into a
//! record.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use crate::models::{
    Employee, EmployeeRecord, ProductionWorker, ShiftSupervisor, TeamLeader, Validated,
};
use crate::roster::RosterEntry;

fn default_shift() -> i32 {
    1
}

/// A YAML scalar accepted where free-form text is expected.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

/// Reads free-form text, accepting unquoted numbers and booleans as their
/// written form and a null value as empty text.
fn free_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        None => String::new(),
        Some(Scalar::Text(text)) => text,
        Some(Scalar::Integer(n)) => n.to_string(),
        Some(Scalar::Float(x)) => x.to_string(),
        Some(Scalar::Bool(b)) => b.to_string(),
    })
}

/// Top-level roster file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterFile {
    /// The entries in report order.
    #[serde(default)]
    pub entries: Vec<EntryConfig>,
}

/// Base employee fields shared by every role.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeConfig {
    /// The employee's name.
    #[serde(default, deserialize_with = "free_text")]
    pub name: String,
    /// The employee number.
    #[serde(default)]
    pub employee_number: i32,
    /// Free-form hire date text.
    #[serde(default, deserialize_with = "free_text")]
    pub hire_date: String,
}

/// Production worker fields.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkerConfig {
    /// Base employee fields.
    #[serde(flatten)]
    pub employee: EmployeeConfig,
    /// Shift code (1 day, 2 night).
    #[serde(default = "default_shift")]
    pub shift: i32,
    /// Hourly pay rate.
    #[serde(default)]
    pub hourly_pay_rate: Decimal,
}

/// A record of one role, tagged by `role`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum RecordConfig {
    /// A general employee.
    Employee(EmployeeConfig),
    /// A production worker.
    ProductionWorker(WorkerConfig),
    /// A shift supervisor.
    ShiftSupervisor {
        /// Base employee fields.
        #[serde(flatten)]
        employee: EmployeeConfig,
        /// Annual salary.
        #[serde(default)]
        annual_salary: Decimal,
        /// Annual production bonus.
        #[serde(default)]
        annual_production_bonus: Decimal,
    },
    /// A team leader.
    TeamLeader {
        /// Production worker fields.
        #[serde(flatten)]
        worker: WorkerConfig,
        /// Monthly bonus.
        #[serde(default)]
        monthly_bonus: Decimal,
        /// Required training hours.
        #[serde(default)]
        required_training_hours: i32,
        /// Attended training hours.
        #[serde(default)]
        attended_training_hours: i32,
    },
}

/// One entry of a roster file.
#[derive(Debug, Clone, Deserialize)]
pub struct EntryConfig {
    /// Report heading; defaults to the role label.
    pub heading: Option<String>,
    /// The record itself.
    #[serde(flatten)]
    pub record: RecordConfig,
}

impl EmployeeConfig {
    fn build(self) -> Employee {
        Employee::new(self.name, self.employee_number, self.hire_date)
    }
}

impl WorkerConfig {
    fn build(self) -> Validated<ProductionWorker> {
        ProductionWorker::new(self.employee.build(), self.shift, self.hourly_pay_rate)
    }
}

impl RecordConfig {
    /// Builds the record through the validating constructors.
    pub fn build(self) -> Validated<EmployeeRecord> {
        match self {
            RecordConfig::Employee(employee) => Validated::clean(employee.build().into()),
            RecordConfig::ProductionWorker(worker) => worker.build().map(Into::into),
            RecordConfig::ShiftSupervisor {
                employee,
                annual_salary,
                annual_production_bonus,
            } => ShiftSupervisor::new(employee.build(), annual_salary, annual_production_bonus)
                .map(Into::into),
            RecordConfig::TeamLeader {
                worker,
                monthly_bonus,
                required_training_hours,
                attended_training_hours,
            } => {
                let (worker, mut warnings) = worker.build().into_parts();
                let (leader, leader_warnings) = TeamLeader::new(
                    worker,
                    monthly_bonus,
                    required_training_hours,
                    attended_training_hours,
                )
                .into_parts();
                warnings.extend(leader_warnings);
                Validated::new(leader.into(), warnings)
            }
        }
    }
}

impl EntryConfig {
    /// Builds the roster entry, falling back to the role label for the heading.
    pub fn build(self) -> Validated<RosterEntry> {
        let heading = self.heading;
        self.record.build().map(|record| {
            let heading = heading.unwrap_or_else(|| record.role().label().to_string());
            RosterEntry::new(heading, record)
        })
    }
}
