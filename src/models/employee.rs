//! Employee model.
//!
//! This module defines the base [`Employee`] record shared by every role.
//! None of its fields are validated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Hire date formats tried by [`Employee::parsed_hire_date`], in order.
const HIRE_DATE_FORMATS: [&str; 2] = ["%m/%d/%Y", "%Y-%m-%d"];

/// Represents a general employee.
///
/// `Default` yields an empty name, employee number 0 and an empty hire date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    name: String,
    employee_number: i32,
    /// Free-form hire date text; stored as given.
    hire_date: String,
}

impl Employee {
    /// Creates an employee record.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_roster::models::Employee;
    ///
    /// let employee = Employee::new("Alice Johnson", 101, "01/15/2020");
    /// assert_eq!(employee.name(), "Alice Johnson");
    /// assert_eq!(employee.employee_number(), 101);
    /// assert_eq!(employee.hire_date(), "01/15/2020");
    /// ```
    pub fn new(name: impl Into<String>, employee_number: i32, hire_date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            employee_number,
            hire_date: hire_date.into(),
        }
    }

    /// Returns the employee's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the employee number.
    pub fn employee_number(&self) -> i32 {
        self.employee_number
    }

    /// Returns the hire date text as stored.
    pub fn hire_date(&self) -> &str {
        &self.hire_date
    }

    /// Replaces the name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replaces the employee number.
    pub fn set_employee_number(&mut self, employee_number: i32) {
        self.employee_number = employee_number;
    }

    /// Replaces the hire date text.
    pub fn set_hire_date(&mut self, hire_date: impl Into<String>) {
        self.hire_date = hire_date.into();
    }

    /// Attempts to read the hire date as a calendar date.
    ///
    /// Accepts `MM/DD/YYYY` and `YYYY-MM-DD`. Returns `None` for anything
    /// else; the stored text is never altered.
    ///
    /// ```
    /// use employee_roster::models::Employee;
    /// use chrono::NaiveDate;
    ///
    /// let employee = Employee::new("Bob Smith", 102, "03/22/2021");
    /// assert_eq!(employee.parsed_hire_date(), NaiveDate::from_ymd_opt(2021, 3, 22));
    /// ```
    pub fn parsed_hire_date(&self) -> Option<NaiveDate> {
        let text = self.hire_date.trim();
        HIRE_DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
    }
}
