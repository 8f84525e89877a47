use crate::domain::common::{AggregateRoot, EmployeeRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const ROLES: [&str; 6] = [
    "CNC Operator",
    "Plating Operator",
    "Quality Inspector",
    "Maintenance Tech",
    "Plating Supervisor",
    "Admin",
];

pub const SHIFTS: [&str; 3] = ["A", "B", "C"];

pub const SKILL_LEVELS: [&str; 4] = ["Beginner", "Intermediate", "Advanced", "Expert"];

pub const STATUS_ACTIVE: &str = "active";
pub const STATUS_INACTIVE: &str = "inactive";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub employee_code: String,
    pub name: String,
    pub role: String,
    pub department: String,
    pub phone: String,
    pub shift: String,
    pub skill_level: String,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl Employee {
    pub fn new_for_insert(dto: &EmployeeDto) -> Self {
        let mut employee = Self {
            id: 0,
            employee_code: String::new(),
            name: String::new(),
            role: String::new(),
            department: String::new(),
            phone: String::new(),
            shift: String::new(),
            skill_level: String::new(),
            status: STATUS_ACTIVE.to_string(),
            created_at: Some(Utc::now()),
        };
        employee.update(dto);
        employee
    }

    pub fn update(&mut self, dto: &EmployeeDto) {
        self.employee_code = dto.employee_code.trim().to_string();
        self.name = dto.name.trim().to_string();
        self.role = dto.role.clone();
        self.department = dto.department.clone();
        self.phone = dto.phone.clone();
        self.shift = dto.shift.clone();
        self.skill_level = dto.skill_level.clone();
        self.status = if dto.status.is_empty() {
            STATUS_ACTIVE.to_string()
        } else {
            dto.status.clone()
        };
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("Employee name is required".into());
        }
        if !ROLES.contains(&self.role.as_str()) {
            return Err(format!("Unknown role '{}'", self.role));
        }
        if !SHIFTS.contains(&self.shift.as_str()) {
            return Err(format!("Unknown shift '{}'", self.shift));
        }
        if !SKILL_LEVELS.contains(&self.skill_level.as_str()) {
            return Err(format!("Unknown skill level '{}'", self.skill_level));
        }
        if self.status != STATUS_ACTIVE && self.status != STATUS_INACTIVE {
            return Err(format!("Unknown status '{}'", self.status));
        }
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }

    pub fn to_ref(&self) -> EmployeeRef {
        EmployeeRef {
            id: self.id,
            employee_code: self.employee_code.clone(),
            name: self.name.clone(),
            department: self.department.clone(),
            status: self.status.clone(),
        }
    }

    pub fn to_dto(&self) -> EmployeeDto {
        EmployeeDto {
            id: Some(self.id),
            employee_code: self.employee_code.clone(),
            name: self.name.clone(),
            role: self.role.clone(),
            department: self.department.clone(),
            phone: self.phone.clone(),
            shift: self.shift.clone(),
            skill_level: self.skill_level.clone(),
            status: self.status.clone(),
        }
    }
}

/// Employee code assigned when the form leaves it blank
pub fn default_employee_code(sequence: i64) -> String {
    format!("EMP-{:03}", sequence)
}

impl AggregateRoot for Employee {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn table_name() -> &'static str {
        "employees"
    }

    fn element_name() -> &'static str {
        "Employee"
    }

    fn list_name() -> &'static str {
        "Employees"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeDto {
    pub id: Option<i64>,
    pub employee_code: String,
    pub name: String,
    pub role: String,
    pub department: String,
    pub phone: String,
    pub shift: String,
    pub skill_level: String,
    pub status: String,
}

impl Default for EmployeeDto {
    fn default() -> Self {
        Self {
            id: None,
            employee_code: String::new(),
            name: String::new(),
            role: ROLES[0].to_string(),
            department: String::new(),
            phone: String::new(),
            shift: SHIFTS[0].to_string(),
            skill_level: SKILL_LEVELS[0].to_string(),
            status: STATUS_ACTIVE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_form_is_valid_once_named() {
        let dto = EmployeeDto {
            name: "John Doe".into(),
            ..Default::default()
        };
        let e = Employee::new_for_insert(&dto);
        assert!(e.validate().is_ok());
        assert!(e.is_active());
    }

    #[test]
    fn rejects_unknown_shift() {
        let dto = EmployeeDto {
            name: "Jane".into(),
            shift: "D".into(),
            ..Default::default()
        };
        assert!(Employee::new_for_insert(&dto).validate().is_err());
    }

    #[test]
    fn blank_status_means_active() {
        let dto = EmployeeDto {
            name: "Jane".into(),
            status: String::new(),
            ..Default::default()
        };
        assert_eq!(Employee::new_for_insert(&dto).status, STATUS_ACTIVE);
    }

    #[test]
    fn employee_codes_are_padded() {
        assert_eq!(default_employee_code(4), "EMP-004");
        assert_eq!(default_employee_code(1234), "EMP-1234");
    }
}
