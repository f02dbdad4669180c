//! Clamp-and-warn validation for employee attributes.
//!
//! Out-of-range values are never rejected. Each validator replaces the value
//! with a safe default and hands back a [`ValidationWarning`] describing the
//! correction, leaving it to the caller to decide whether to surface it.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Shift;

/// A validated attribute of one of the employee roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Production worker shift code.
    Shift,
    /// Production worker hourly pay rate.
    HourlyPayRate,
    /// Shift supervisor annual salary.
    AnnualSalary,
    /// Shift supervisor annual production bonus.
    AnnualProductionBonus,
    /// Team leader monthly bonus.
    MonthlyBonus,
    /// Team leader required training hours.
    RequiredTrainingHours,
    /// Team leader attended training hours.
    AttendedTrainingHours,
}

impl Field {
    /// Returns the snake_case name of the field.
    pub fn name(self) -> &'static str {
        match self {
            Field::Shift => "shift",
            Field::HourlyPayRate => "hourly_pay_rate",
            Field::AnnualSalary => "annual_salary",
            Field::AnnualProductionBonus => "annual_production_bonus",
            Field::MonthlyBonus => "monthly_bonus",
            Field::RequiredTrainingHours => "required_training_hours",
            Field::AttendedTrainingHours => "attended_training_hours",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Record of an out-of-range value that was replaced by a default.
///
/// The `Display` form is the human-readable line shown to users.
///
/// # Example
///
/// ```
/// use employee_roster::models::{Field, validate_non_negative_amount};
/// use rust_decimal::Decimal;
///
/// let (value, warning) = validate_non_negative_amount(Field::AnnualSalary, Decimal::new(-100, 0));
/// assert_eq!(value, Decimal::ZERO);
/// assert_eq!(
///     warning.unwrap().to_string(),
///     "Invalid salary (must be positive). Setting to 0."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationWarning {
    /// The field that received the invalid value.
    pub field: Field,
    /// The value that was attempted, as text.
    pub attempted: String,
    /// The default that was stored instead, as text.
    pub applied: String,
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self.field {
            Field::Shift => {
                "Invalid shift (must be 1 for day, 2 for night). Setting to day shift by default."
            }
            Field::HourlyPayRate => "Invalid hourly rate (must be positive). Setting to 0.",
            Field::AnnualSalary => "Invalid salary (must be positive). Setting to 0.",
            Field::AnnualProductionBonus => "Invalid bonus (must be positive). Setting to 0.",
            Field::MonthlyBonus => "Invalid monthly bonus (must be positive). Setting to 0.",
            Field::RequiredTrainingHours => "Invalid required training hours. Setting to 0.",
            Field::AttendedTrainingHours => "Invalid attended training hours. Setting to 0.",
        };
        f.write_str(message)
    }
}

/// A value together with the warnings produced while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct Validated<T> {
    value: T,
    warnings: Vec<ValidationWarning>,
}

impl<T> Validated<T> {
    /// Wraps a value and the warnings raised while producing it.
    pub fn new(value: T, warnings: Vec<ValidationWarning>) -> Self {
        Self { value, warnings }
    }

    /// Wraps a value that needed no correction.
    pub fn clean(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    /// Returns the validated value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the warnings in the order they were raised.
    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.warnings
    }

    /// Returns true if no value had to be corrected.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Discards the warnings and returns the value.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Splits into the value and its warnings.
    pub fn into_parts(self) -> (T, Vec<ValidationWarning>) {
        (self.value, self.warnings)
    }

    /// Transforms the value, keeping the warnings.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Validated<U> {
        Validated {
            value: f(self.value),
            warnings: self.warnings,
        }
    }
}

/// Validates a shift code: 1 is day, 2 is night, anything else falls back to day.
pub fn validate_shift(code: i32) -> (Shift, Option<ValidationWarning>) {
    match Shift::from_code(code) {
        Some(shift) => (shift, None),
        None => {
            debug!(field = %Field::Shift, attempted = code, "Clamped shift to day");
            (
                Shift::Day,
                Some(ValidationWarning {
                    field: Field::Shift,
                    attempted: code.to_string(),
                    applied: Shift::Day.code().to_string(),
                }),
            )
        }
    }
}

/// Validates a monetary amount, replacing negatives with zero.
pub fn validate_non_negative_amount(
    field: Field,
    amount: Decimal,
) -> (Decimal, Option<ValidationWarning>) {
    if amount >= Decimal::ZERO {
        return (amount, None);
    }

    debug!(field = %field, attempted = %amount, "Clamped negative amount to zero");
    (
        Decimal::ZERO,
        Some(ValidationWarning {
            field,
            attempted: amount.to_string(),
            applied: Decimal::ZERO.to_string(),
        }),
    )
}

/// Validates a count of hours, replacing negatives with zero.
pub fn validate_non_negative_hours(field: Field, hours: i32) -> (i32, Option<ValidationWarning>) {
    if hours >= 0 {
        return (hours, None);
    }

    debug!(field = %field, attempted = hours, "Clamped negative hours to zero");
    (
        0,
        Some(ValidationWarning {
            field,
            attempted: hours.to_string(),
            applied: "0".to_string(),
        }),
    )
}
