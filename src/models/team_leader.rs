//! Team leader model.
//!
//! A [`TeamLeader`] is a [`ProductionWorker`] with a monthly bonus and
//! training-hour tracking. Required and attended hours are independent:
//! attending more or fewer hours than required is not a validation issue.

use rust_decimal::Decimal;
use serde::Serialize;

use super::validation::{
    Field, Validated, ValidationWarning, validate_non_negative_amount, validate_non_negative_hours,
};
use super::{Employee, ProductionWorker};

/// A production worker who leads a team.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamLeader {
    #[serde(flatten)]
    worker: ProductionWorker,
    monthly_bonus: Decimal,
    required_training_hours: i32,
    attended_training_hours: i32,
}

impl TeamLeader {
    /// Creates a team leader from an already validated production worker.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_roster::models::{Employee, ProductionWorker, TeamLeader};
    /// use rust_decimal::Decimal;
    ///
    /// let worker = ProductionWorker::new(
    ///     Employee::new("Dana White", 301, "09/10/2019"),
    ///     1,
    ///     Decimal::new(30, 0),
    /// )
    /// .into_inner();
    /// let leader = TeamLeader::new(worker, Decimal::new(1000, 0), 40, 38);
    ///
    /// assert!(leader.is_clean());
    /// assert_eq!(leader.value().training_shortfall(), 2);
    /// ```
    pub fn new(
        worker: ProductionWorker,
        monthly_bonus: Decimal,
        required_training_hours: i32,
        attended_training_hours: i32,
    ) -> Validated<Self> {
        let mut leader = Self {
            worker,
            ..Self::default()
        };

        let mut warnings = Vec::new();
        warnings.extend(leader.set_monthly_bonus(monthly_bonus));
        warnings.extend(leader.set_required_training_hours(required_training_hours));
        warnings.extend(leader.set_attended_training_hours(attended_training_hours));

        Validated::new(leader, warnings)
    }

    /// Returns the embedded production worker record.
    pub fn worker(&self) -> &ProductionWorker {
        &self.worker
    }

    /// Returns the embedded production worker record for modification.
    pub fn worker_mut(&mut self) -> &mut ProductionWorker {
        &mut self.worker
    }

    /// Returns the base employee record.
    pub fn employee(&self) -> &Employee {
        self.worker.employee()
    }

    /// Returns the monthly bonus.
    pub fn monthly_bonus(&self) -> Decimal {
        self.monthly_bonus
    }

    /// Returns the required training hours.
    pub fn required_training_hours(&self) -> i32 {
        self.required_training_hours
    }

    /// Returns the attended training hours.
    pub fn attended_training_hours(&self) -> i32 {
        self.attended_training_hours
    }

    /// Hours still needed to reach the requirement, or zero when met or exceeded.
    pub fn training_shortfall(&self) -> i32 {
        (self.required_training_hours - self.attended_training_hours).max(0)
    }

    /// Sets the monthly bonus; negative values are replaced by zero.
    pub fn set_monthly_bonus(&mut self, bonus: Decimal) -> Option<ValidationWarning> {
        let (bonus, warning) = validate_non_negative_amount(Field::MonthlyBonus, bonus);
        self.monthly_bonus = bonus;
        warning
    }

    /// Sets the required training hours; negative values are replaced by zero.
    pub fn set_required_training_hours(&mut self, hours: i32) -> Option<ValidationWarning> {
        let (hours, warning) = validate_non_negative_hours(Field::RequiredTrainingHours, hours);
        self.required_training_hours = hours;
        warning
    }

    /// Sets the attended training hours; negative values are replaced by zero.
    pub fn set_attended_training_hours(&mut self, hours: i32) -> Option<ValidationWarning> {
        let (hours, warning) = validate_non_negative_hours(Field::AttendedTrainingHours, hours);
        self.attended_training_hours = hours;
        warning
    }
}
