//! Role-tagged employee records.

use serde::{Deserialize, Serialize};

use super::{Employee, ProductionWorker, ShiftSupervisor, TeamLeader};

/// One of the four employee roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// A general employee with no role-specific attributes.
    Employee,
    /// A shift worker paid by the hour.
    ProductionWorker,
    /// A salaried shift supervisor.
    ShiftSupervisor,
    /// A production worker leading a team.
    TeamLeader,
}

impl Role {
    /// Returns the human-readable role name, used as the default report heading.
    pub fn label(self) -> &'static str {
        match self {
            Role::Employee => "Employee",
            Role::ProductionWorker => "Production Worker",
            Role::ShiftSupervisor => "Shift Supervisor",
            Role::TeamLeader => "Team Leader",
        }
    }
}

/// An employee record of any role.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum EmployeeRecord {
    /// A general employee.
    Employee(Employee),
    /// A production worker.
    ProductionWorker(ProductionWorker),
    /// A shift supervisor.
    ShiftSupervisor(ShiftSupervisor),
    /// A team leader.
    TeamLeader(TeamLeader),
}

impl EmployeeRecord {
    /// Returns the role of this record.
    pub fn role(&self) -> Role {
        match self {
            EmployeeRecord::Employee(_) => Role::Employee,
            EmployeeRecord::ProductionWorker(_) => Role::ProductionWorker,
            EmployeeRecord::ShiftSupervisor(_) => Role::ShiftSupervisor,
            EmployeeRecord::TeamLeader(_) => Role::TeamLeader,
        }
    }

    /// Returns the base employee fields shared by every role.
    pub fn employee(&self) -> &Employee {
        match self {
            EmployeeRecord::Employee(employee) => employee,
            EmployeeRecord::ProductionWorker(worker) => worker.employee(),
            EmployeeRecord::ShiftSupervisor(supervisor) => supervisor.employee(),
            EmployeeRecord::TeamLeader(leader) => leader.employee(),
        }
    }
}

impl From<Employee> for EmployeeRecord {
    fn from(employee: Employee) -> Self {
        EmployeeRecord::Employee(employee)
    }
}

impl From<ProductionWorker> for EmployeeRecord {
    fn from(worker: ProductionWorker) -> Self {
        EmployeeRecord::ProductionWorker(worker)
    }
}

impl From<ShiftSupervisor> for EmployeeRecord {
    fn from(supervisor: ShiftSupervisor) -> Self {
        EmployeeRecord::ShiftSupervisor(supervisor)
    }
}

impl From<TeamLeader> for EmployeeRecord {
    fn from(leader: TeamLeader) -> Self {
        EmployeeRecord::TeamLeader(leader)
    }
}
