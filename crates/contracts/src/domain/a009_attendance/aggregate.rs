use crate::domain::common::{AggregateRoot, EmployeeRef};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const MISSING_EMPLOYEE_OR_DATE: &str = "Please select employee and date";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
    Leave,
    SickLeave,
    PaidLeave,
    Holiday,
    Sunday,
    HalfDay,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Leave => "leave",
            AttendanceStatus::SickLeave => "sick_leave",
            AttendanceStatus::PaidLeave => "paid_leave",
            AttendanceStatus::Holiday => "holiday",
            AttendanceStatus::Sunday => "sunday",
            AttendanceStatus::HalfDay => "half_day",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|status| status.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Leave => "Leave",
            AttendanceStatus::SickLeave => "Sick Leave",
            AttendanceStatus::PaidLeave => "Paid Leave",
            AttendanceStatus::Holiday => "Holiday",
            AttendanceStatus::Sunday => "Sunday",
            AttendanceStatus::HalfDay => "Half Day",
        }
    }

    /// CSS modifier for the status chip
    pub fn color_class(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "chip--green",
            AttendanceStatus::Absent => "chip--red",
            AttendanceStatus::Leave => "chip--yellow",
            AttendanceStatus::SickLeave => "chip--orange",
            AttendanceStatus::PaidLeave => "chip--blue",
            AttendanceStatus::Holiday => "chip--purple",
            AttendanceStatus::Sunday => "chip--gray",
            AttendanceStatus::HalfDay => "chip--indigo",
        }
    }

    /// Days that do not count towards working days
    pub fn is_off_day(&self) -> bool {
        matches!(self, AttendanceStatus::Holiday | AttendanceStatus::Sunday)
    }

    pub fn is_leave(&self) -> bool {
        matches!(
            self,
            AttendanceStatus::Leave | AttendanceStatus::SickLeave | AttendanceStatus::PaidLeave
        )
    }

    pub fn all() -> [AttendanceStatus; 8] {
        [
            AttendanceStatus::Present,
            AttendanceStatus::Absent,
            AttendanceStatus::Leave,
            AttendanceStatus::SickLeave,
            AttendanceStatus::PaidLeave,
            AttendanceStatus::Holiday,
            AttendanceStatus::Sunday,
            AttendanceStatus::HalfDay,
        ]
    }

    /// Statuses offered by the bulk-mark buttons
    pub fn bulk_options() -> [AttendanceStatus; 4] {
        [
            AttendanceStatus::Present,
            AttendanceStatus::Sunday,
            AttendanceStatus::Holiday,
            AttendanceStatus::Absent,
        ]
    }
}

/// Daily attendance mark, one per employee and date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub employee_id: i64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub ot_hours: f64,
    pub notes: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<EmployeeRef>,
}

impl AttendanceRecord {
    pub fn employee_name(&self) -> &str {
        self.employee.as_ref().map(|e| e.name.as_str()).unwrap_or("")
    }

    /// Case-insensitive employee name filter; empty term matches everything
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty() || self.employee_name().to_lowercase().contains(&term)
    }

    pub fn to_dto(&self) -> AttendanceRecordDto {
        AttendanceRecordDto {
            id: Some(self.id),
            employee_id: Some(self.employee_id),
            date: Some(self.date),
            status: self.status,
            ot_hours: self.ot_hours,
            notes: self.notes.clone(),
        }
    }
}

impl AggregateRoot for AttendanceRecord {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a009"
    }

    fn table_name() -> &'static str {
        "attendance_records"
    }

    fn element_name() -> &'static str {
        "Attendance Record"
    }

    fn list_name() -> &'static str {
        "Attendance Management"
    }
}

/// Daily attendance form, upserted on (employee_id, date)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AttendanceRecordDto {
    pub id: Option<i64>,
    pub employee_id: Option<i64>,
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub status: AttendanceStatus,
    #[serde(default)]
    pub ot_hours: f64,
    #[serde(default)]
    pub notes: String,
}

impl AttendanceRecordDto {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Default::default()
        }
    }

    /// Employee and date are the upsert key
    pub fn key(&self) -> Result<(i64, NaiveDate), String> {
        match (self.employee_id, self.date) {
            (Some(employee_id), Some(date)) => Ok((employee_id, date)),
            _ => Err(MISSING_EMPLOYEE_OR_DATE.into()),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        self.key()?;
        if !self.ot_hours.is_finite() || self.ot_hours < 0.0 {
            return Err("OT hours cannot be negative".into());
        }
        Ok(())
    }
}

/// Marks every active employee with one status for a date
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulkMarkRequest {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BulkMarkResult {
    pub marked: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_use_snake_case() {
        assert_eq!(
            serde_json::to_value(AttendanceStatus::SickLeave).unwrap(),
            "sick_leave"
        );
        assert_eq!(
            AttendanceStatus::from_str("half_day"),
            Some(AttendanceStatus::HalfDay)
        );
        assert_eq!(AttendanceStatus::from_str("late"), None);
    }

    #[test]
    fn dto_requires_employee_and_date() {
        let dto = AttendanceRecordDto::default();
        assert_eq!(dto.validate().unwrap_err(), MISSING_EMPLOYEE_OR_DATE);

        let dto = AttendanceRecordDto {
            employee_id: Some(3),
            ..AttendanceRecordDto::for_date(NaiveDate::from_ymd_opt(2025, 10, 1).unwrap())
        };
        assert!(dto.validate().is_ok());
        assert_eq!(dto.status, AttendanceStatus::Present);
        assert_eq!(dto.ot_hours, 0.0);
    }

    #[test]
    fn search_is_case_insensitive() {
        let record = AttendanceRecord {
            id: 1,
            employee_id: 1,
            date: NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
            status: AttendanceStatus::Present,
            ot_hours: 0.0,
            notes: String::new(),
            employee: Some(EmployeeRef {
                id: 1,
                employee_code: "EMP-001".into(),
                name: "Jane Smith".into(),
                department: "CNC".into(),
                status: "active".into(),
            }),
        };
        assert!(record.matches_search("smith"));
        assert!(record.matches_search(""));
        assert!(!record.matches_search("john"));
    }
}
