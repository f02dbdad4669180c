//! Core data models for the employee roster.
//!
//! Each role owns the record of the role it extends: a [`TeamLeader`] owns a
//! [`ProductionWorker`], which owns an [`Employee`].

mod employee;
mod production_worker;
mod record;
mod shift_supervisor;
mod team_leader;
mod validation;

pub use employee::Employee;
pub use production_worker::{ProductionWorker, Shift};
pub use record::{EmployeeRecord, Role};
pub use shift_supervisor::ShiftSupervisor;
pub use team_leader::TeamLeader;
pub use validation::{
    Field, Validated, ValidationWarning, validate_non_negative_amount, validate_non_negative_hours,
    validate_shift,
};
