//! Text rendering of employee records.
//!
//! Every role implements [`fmt::Display`] by delegating to the record it
//! extends and then appending its own lines, so a team leader renders as a
//! production worker followed by the leadership fields. Rendered records
//! have no trailing newline.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{Employee, EmployeeRecord, ProductionWorker, ShiftSupervisor, TeamLeader};

/// A monetary amount rendered as dollars, rounded half away from zero to cents.
struct Money(Decimal);

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cents = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        write!(f, "${:.2}", cents)
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name())?;
        writeln!(f, "Employee Number: {}", self.employee_number())?;
        write!(f, "Hire Date: {}", self.hire_date())
    }
}

impl fmt::Display for ProductionWorker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.employee())?;
        writeln!(f, "Shift: {}", self.shift().label())?;
        write!(f, "Hourly Pay Rate: {}", Money(self.hourly_pay_rate()))
    }
}

impl fmt::Display for ShiftSupervisor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.employee())?;
        writeln!(f, "Annual Salary: {}", Money(self.annual_salary()))?;
        write!(
            f,
            "Annual Production Bonus: {}",
            Money(self.annual_production_bonus())
        )
    }
}

impl fmt::Display for TeamLeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.worker())?;
        writeln!(f, "Monthly Bonus: {}", Money(self.monthly_bonus()))?;
        writeln!(f, "Required Training Hours: {}", self.required_training_hours())?;
        write!(f, "Attended Training Hours: {}", self.attended_training_hours())
    }
}

impl fmt::Display for EmployeeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmployeeRecord::Employee(employee) => fmt::Display::fmt(employee, f),
            EmployeeRecord::ProductionWorker(worker) => fmt::Display::fmt(worker, f),
            EmployeeRecord::ShiftSupervisor(supervisor) => fmt::Display::fmt(supervisor, f),
            EmployeeRecord::TeamLeader(leader) => fmt::Display::fmt(leader, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_money_always_has_two_decimals() {
        assert_eq!(Money(dec("25.5")).to_string(), "$25.50");
        assert_eq!(Money(dec("75000")).to_string(), "$75000.00");
        assert_eq!(Money(Decimal::ZERO).to_string(), "$0.00");
    }

    #[test]
    fn test_money_rounds_to_cents() {
        assert_eq!(Money(dec("25.555")).to_string(), "$25.56");
        assert_eq!(Money(dec("25.554")).to_string(), "$25.55");
        assert_eq!(Money(dec("0.999")).to_string(), "$1.00");
        assert_eq!(Money(dec("0.005")).to_string(), "$0.01");
    }

    #[test]
    fn test_worker_rate_with_fractional_cents_rounds() {
        let worker = ProductionWorker::new(Employee::default(), 1, dec("25.555")).into_inner();
        assert_eq!(worker.hourly_pay_rate(), dec("25.555"));
        assert!(worker.to_string().ends_with("Hourly Pay Rate: $25.56"));
    }

    #[test]
    fn test_employee_display() {
        let employee = Employee::new("Alice Johnson", 101, "01/15/2020");
        assert_eq!(
            employee.to_string(),
            "Name: Alice Johnson\nEmployee Number: 101\nHire Date: 01/15/2020"
        );
    }

    #[test]
    fn test_default_employee_display() {
        assert_eq!(
            Employee::default().to_string(),
            "Name: \nEmployee Number: 0\nHire Date: "
        );
    }

    #[test]
    fn test_production_worker_display() {
        let worker = ProductionWorker::new(
            Employee::new("Alice Johnson", 101, "01/15/2020"),
            1,
            dec("25.50"),
        )
        .into_inner();

        assert_eq!(
            worker.to_string(),
            "Name: Alice Johnson\n\
             Employee Number: 101\n\
             Hire Date: 01/15/2020\n\
             Shift: Day\n\
             Hourly Pay Rate: $25.50"
        );
    }

    #[test]
    fn test_night_shift_label() {
        let worker = ProductionWorker::new(
            Employee::new("Bob Smith", 102, "03/22/2021"),
            2,
            dec("22.75"),
        )
        .into_inner();
        assert!(worker.to_string().contains("Shift: Night\n"));
    }

    #[test]
    fn test_shift_supervisor_display() {
        let supervisor = ShiftSupervisor::new(
            Employee::new("Charles Brown", 201, "06/30/2018"),
            dec("75000"),
            dec("5000"),
        )
        .into_inner();

        assert_eq!(
            supervisor.to_string(),
            "Name: Charles Brown\n\
             Employee Number: 201\n\
             Hire Date: 06/30/2018\n\
             Annual Salary: $75000.00\n\
             Annual Production Bonus: $5000.00"
        );
    }

    #[test]
    fn test_team_leader_display_extends_worker() {
        let worker = ProductionWorker::new(
            Employee::new("Dana White", 301, "09/10/2019"),
            1,
            dec("30.00"),
        )
        .into_inner();
        let leader = TeamLeader::new(worker.clone(), dec("1000"), 40, 38).into_inner();

        let rendered = leader.to_string();
        assert!(rendered.starts_with(&worker.to_string()));
        assert!(rendered.ends_with(
            "Monthly Bonus: $1000.00\n\
             Required Training Hours: 40\n\
             Attended Training Hours: 38"
        ));
    }

    #[test]
    fn test_record_display_delegates() {
        let employee = Employee::new("Eve", 7, "");
        let record = EmployeeRecord::from(employee.clone());
        assert_eq!(record.to_string(), employee.to_string());
    }
}
