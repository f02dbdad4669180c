//! Shift supervisor model.

use rust_decimal::Decimal;
use serde::Serialize;

use super::validation::{Field, Validated, ValidationWarning, validate_non_negative_amount};
use super::Employee;

/// A salaried supervisor who also earns an annual production bonus.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShiftSupervisor {
    #[serde(flatten)]
    employee: Employee,
    annual_salary: Decimal,
    annual_production_bonus: Decimal,
}

impl ShiftSupervisor {
    /// Creates a shift supervisor, replacing a negative salary or bonus with zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_roster::models::{Employee, ShiftSupervisor};
    /// use rust_decimal::Decimal;
    ///
    /// let employee = Employee::new("Charles Brown", 201, "06/30/2018");
    /// let supervisor = ShiftSupervisor::new(employee, Decimal::new(75000, 0), Decimal::new(5000, 0));
    ///
    /// assert!(supervisor.is_clean());
    /// assert_eq!(supervisor.value().annual_salary(), Decimal::new(75000, 0));
    /// ```
    pub fn new(
        employee: Employee,
        annual_salary: Decimal,
        annual_production_bonus: Decimal,
    ) -> Validated<Self> {
        let mut supervisor = Self {
            employee,
            ..Self::default()
        };

        let mut warnings = Vec::new();
        warnings.extend(supervisor.set_annual_salary(annual_salary));
        warnings.extend(supervisor.set_annual_production_bonus(annual_production_bonus));

        Validated::new(supervisor, warnings)
    }

    /// Returns the base employee record.
    pub fn employee(&self) -> &Employee {
        &self.employee
    }

    /// Returns the base employee record for modification.
    pub fn employee_mut(&mut self) -> &mut Employee {
        &mut self.employee
    }

    /// Returns the annual salary.
    pub fn annual_salary(&self) -> Decimal {
        self.annual_salary
    }

    /// Returns the annual production bonus.
    pub fn annual_production_bonus(&self) -> Decimal {
        self.annual_production_bonus
    }

    /// Sets the annual salary; negative values are replaced by zero.
    pub fn set_annual_salary(&mut self, salary: Decimal) -> Option<ValidationWarning> {
        let (salary, warning) = validate_non_negative_amount(Field::AnnualSalary, salary);
        self.annual_salary = salary;
        warning
    }

    /// Sets the annual production bonus; negative values are replaced by zero.
    pub fn set_annual_production_bonus(&mut self, bonus: Decimal) -> Option<ValidationWarning> {
        let (bonus, warning) = validate_non_negative_amount(Field::AnnualProductionBonus, bonus);
        self.annual_production_bonus = bonus;
        warning
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn charles() -> Employee {
        Employee::new("Charles Brown", 201, "06/30/2018")
    }

    #[test]
    fn test_valid_supervisor_has_no_warnings() {
        let supervisor =
            ShiftSupervisor::new(charles(), Decimal::new(75000, 0), Decimal::new(5000, 0));
        assert!(supervisor.is_clean());

        let supervisor = supervisor.into_inner();
        assert_eq!(supervisor.annual_salary(), Decimal::new(75000, 0));
        assert_eq!(supervisor.annual_production_bonus(), Decimal::new(5000, 0));
    }

    #[test]
    fn test_negative_salary_is_clamped_with_salary_warning() {
        let mut supervisor =
            ShiftSupervisor::new(charles(), Decimal::new(75000, 0), Decimal::ZERO).into_inner();

        let warning = supervisor.set_annual_salary(Decimal::new(-100, 0)).unwrap();
        assert_eq!(supervisor.annual_salary(), Decimal::ZERO);
        assert_eq!(warning.field, Field::AnnualSalary);
        assert!(warning.to_string().contains("salary"));
    }

    #[test]
    fn test_negative_bonus_is_clamped_independently() {
        let (supervisor, warnings) =
            ShiftSupervisor::new(charles(), Decimal::new(60000, 0), Decimal::new(-1, 0))
                .into_parts();
        assert_eq!(supervisor.annual_salary(), Decimal::new(60000, 0));
        assert_eq!(supervisor.annual_production_bonus(), Decimal::ZERO);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].field, Field::AnnualProductionBonus);
    }
}
