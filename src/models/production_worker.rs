//! Production worker model.
//!
//! A [`ProductionWorker`] owns an [`Employee`] and adds an assigned
//! [`Shift`] and an hourly pay rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::validation::{Field, Validated, ValidationWarning, validate_non_negative_amount, validate_shift};
use super::Employee;

/// The work schedule of a production worker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shift {
    /// Day shift (code 1).
    #[default]
    Day,
    /// Night shift (code 2).
    Night,
}

impl Shift {
    /// Looks up a shift by its numeric code.
    ///
    /// ```
    /// use employee_roster::models::Shift;
    ///
    /// assert_eq!(Shift::from_code(2), Some(Shift::Night));
    /// assert_eq!(Shift::from_code(3), None);
    /// ```
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Shift::Day),
            2 => Some(Shift::Night),
            _ => None,
        }
    }

    /// Returns the numeric code: 1 for day, 2 for night.
    pub fn code(self) -> i32 {
        match self {
            Shift::Day => 1,
            Shift::Night => 2,
        }
    }

    /// Returns the display label ("Day" or "Night").
    pub fn label(self) -> &'static str {
        match self {
            Shift::Day => "Day",
            Shift::Night => "Night",
        }
    }
}

/// An employee working an assigned shift at an hourly rate.
///
/// The shift is always day or night and the pay rate is never negative;
/// both are enforced on construction and on every update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductionWorker {
    #[serde(flatten)]
    employee: Employee,
    shift: Shift,
    hourly_pay_rate: Decimal,
}

impl ProductionWorker {
    /// Creates a production worker, correcting an invalid shift or pay rate.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_roster::models::{Employee, ProductionWorker, Shift};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::new("Alice Johnson", 101, "01/15/2020");
    /// let worker = ProductionWorker::new(employee, 3, Decimal::new(2550, 2));
    ///
    /// assert_eq!(worker.warnings().len(), 1);
    /// assert_eq!(worker.value().shift(), Shift::Day);
    /// ```
    pub fn new(employee: Employee, shift: i32, hourly_pay_rate: Decimal) -> Validated<Self> {
        let mut worker = Self {
            employee,
            ..Self::default()
        };

        let mut warnings = Vec::new();
        warnings.extend(worker.set_shift(shift));
        warnings.extend(worker.set_hourly_pay_rate(hourly_pay_rate));

        Validated::new(worker, warnings)
    }

    /// Returns the base employee record.
    pub fn employee(&self) -> &Employee {
        &self.employee
    }

    /// Returns the base employee record for modification.
    pub fn employee_mut(&mut self) -> &mut Employee {
        &mut self.employee
    }

    /// Returns the assigned shift.
    pub fn shift(&self) -> Shift {
        self.shift
    }

    /// Returns the numeric shift code (1 or 2).
    pub fn shift_code(&self) -> i32 {
        self.shift.code()
    }

    /// Returns the hourly pay rate.
    pub fn hourly_pay_rate(&self) -> Decimal {
        self.hourly_pay_rate
    }

    /// Sets the shift from its code; any code other than 1 or 2 selects the day shift.
    pub fn set_shift(&mut self, code: i32) -> Option<ValidationWarning> {
        let (shift, warning) = validate_shift(code);
        self.shift = shift;
        warning
    }

    /// Sets the hourly pay rate; negative rates are replaced by zero.
    pub fn set_hourly_pay_rate(&mut self, rate: Decimal) -> Option<ValidationWarning> {
        let (rate, warning) = validate_non_negative_amount(Field::HourlyPayRate, rate);
        self.hourly_pay_rate = rate;
        warning
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn alice() -> Employee {
        Employee::new("Alice Johnson", 101, "01/15/2020")
    }

    #[test]
    fn test_valid_worker_has_no_warnings() {
        let worker = ProductionWorker::new(alice(), 1, dec("25.50"));
        assert!(worker.is_clean());

        let worker = worker.into_inner();
        assert_eq!(worker.shift(), Shift::Day);
        assert_eq!(worker.shift_code(), 1);
        assert_eq!(worker.hourly_pay_rate(), dec("25.50"));
        assert_eq!(worker.employee().name(), "Alice Johnson");
    }

    #[test]
    fn test_invalid_shift_on_construction_defaults_to_day() {
        let (worker, warnings) = ProductionWorker::new(alice(), 3, dec("25.50")).into_parts();
        assert_eq!(worker.shift(), Shift::Day);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, Field::Shift);
    }

    #[test]
    fn test_negative_rate_and_bad_shift_both_reported_in_order() {
        let (worker, warnings) = ProductionWorker::new(alice(), 0, dec("-1")).into_parts();
        assert_eq!(worker.hourly_pay_rate(), Decimal::ZERO);
        assert_eq!(
            warnings.iter().map(|w| w.field).collect::<Vec<_>>(),
            vec![Field::Shift, Field::HourlyPayRate]
        );
    }

    #[test]
    fn test_set_shift_night_then_invalid() {
        let mut worker = ProductionWorker::default();
        assert!(worker.set_shift(2).is_none());
        assert_eq!(worker.shift(), Shift::Night);

        assert!(worker.set_shift(-1).is_some());
        assert_eq!(worker.shift(), Shift::Day);
    }

    #[test]
    fn test_set_shift_is_idempotent() {
        let mut worker = ProductionWorker::default();
        assert!(worker.set_shift(1).is_none());
        assert!(worker.set_shift(1).is_none());
        assert_eq!(worker.shift_code(), 1);
    }

    #[test]
    fn test_employee_fields_editable_through_worker() {
        let mut worker = ProductionWorker::new(alice(), 1, dec("25.50")).into_inner();
        worker.employee_mut().set_name("Alice Smith");
        assert_eq!(worker.employee().name(), "Alice Smith");
    }

    #[test]
    fn test_shift_serialization() {
        assert_eq!(serde_json::to_string(&Shift::Day).unwrap(), "\"day\"");
        assert_eq!(serde_json::to_string(&Shift::Night).unwrap(), "\"night\"");
    }

    #[test]
    fn test_serialize_worker_flattens_employee() {
        let worker = ProductionWorker::new(alice(), 2, dec("22.75")).into_inner();
        let json = serde_json::to_value(&worker).unwrap();

        assert_eq!(json["name"], "Alice Johnson");
        assert_eq!(json["employee_number"], 101);
        assert_eq!(json["shift"], "night");
        assert_eq!(json["hourly_pay_rate"], "22.75");
    }
}
