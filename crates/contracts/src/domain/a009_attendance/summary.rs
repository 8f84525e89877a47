use super::aggregate::{AttendanceRecord, AttendanceStatus};
use crate::domain::common::EmployeeRef;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Monthly roll-up of daily records for one employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    pub id: i64,
    pub employee_id: i64,
    pub month: u32,
    pub year: i32,
    pub total_working_days: i32,
    pub total_present_days: f64,
    pub total_absent_days: i32,
    pub total_leaves: i32,
    pub total_ot_hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee: Option<EmployeeRef>,
}

impl AttendanceSummary {
    pub fn employee_name(&self) -> &str {
        self.employee.as_ref().map(|e| e.name.as_str()).unwrap_or("")
    }

    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty() || self.employee_name().to_lowercase().contains(&term)
    }

    pub fn percentage(&self) -> String {
        attendance_percentage(self.total_present_days, self.total_working_days)
    }

    pub fn band(&self) -> AttendanceBand {
        AttendanceBand::of(self.total_present_days, self.total_working_days)
    }
}

/// Counters produced from one employee's daily records
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MonthTotals {
    pub total_working_days: i32,
    pub total_present_days: f64,
    pub total_absent_days: i32,
    pub total_leaves: i32,
    pub total_ot_hours: f64,
}

/// Half days count as half a present day; holidays and Sundays are not working days
pub fn summarize(statuses: impl IntoIterator<Item = (AttendanceStatus, f64)>) -> MonthTotals {
    let mut totals = MonthTotals::default();
    for (status, ot_hours) in statuses {
        totals.total_ot_hours += ot_hours;
        if status.is_off_day() {
            continue;
        }
        totals.total_working_days += 1;
        match status {
            AttendanceStatus::Present => totals.total_present_days += 1.0,
            AttendanceStatus::HalfDay => totals.total_present_days += 0.5,
            AttendanceStatus::Absent => totals.total_absent_days += 1,
            s if s.is_leave() => totals.total_leaves += 1,
            _ => {}
        }
    }
    totals
}

pub fn summarize_records(records: &[AttendanceRecord]) -> MonthTotals {
    summarize(records.iter().map(|r| (r.status, r.ot_hours)))
}

/// `present / working * 100` to one decimal, or `"0"` without working days
pub fn attendance_percentage(present_days: f64, working_days: i32) -> String {
    if working_days <= 0 {
        return "0".to_string();
    }
    format!("{:.1}", present_days / working_days as f64 * 100.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceBand {
    Good,
    Fair,
    Poor,
}

impl AttendanceBand {
    pub fn of(present_days: f64, working_days: i32) -> Self {
        let pct = if working_days > 0 {
            present_days / working_days as f64 * 100.0
        } else {
            0.0
        };
        if pct >= 90.0 {
            AttendanceBand::Good
        } else if pct >= 75.0 {
            AttendanceBand::Fair
        } else {
            AttendanceBand::Poor
        }
    }

    pub fn color_class(&self) -> &'static str {
        match self {
            AttendanceBand::Good => "text-green",
            AttendanceBand::Fair => "text-yellow",
            AttendanceBand::Poor => "text-red",
        }
    }
}

/// Month selector for listing and recalculating summaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthRef {
    pub month: u32,
    pub year: i32,
}

impl MonthRef {
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=12).contains(&self.month) {
            return Err(format!("Month {} is out of range", self.month));
        }
        Ok(())
    }

    /// First day of the month and first day of the next one
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1)?;
        let next = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)?
        };
        Some((first, next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AttendanceStatus::*;

    #[test]
    fn percentage_has_one_decimal() {
        assert_eq!(attendance_percentage(18.0, 20), "90.0");
        assert_eq!(attendance_percentage(5.0, 0), "0");
        assert_eq!(attendance_percentage(2.0, 3), "66.7");
    }

    #[test]
    fn bands_follow_thresholds() {
        assert_eq!(AttendanceBand::of(18.0, 20), AttendanceBand::Good);
        assert_eq!(AttendanceBand::of(15.0, 20), AttendanceBand::Fair);
        assert_eq!(AttendanceBand::of(14.5, 20), AttendanceBand::Poor);
        assert_eq!(AttendanceBand::of(0.0, 0), AttendanceBand::Poor);
    }

    #[test]
    fn summarize_skips_off_days() {
        let totals = summarize(vec![
            (Present, 2.0),
            (Present, 0.0),
            (HalfDay, 0.0),
            (Absent, 0.0),
            (SickLeave, 0.0),
            (PaidLeave, 0.0),
            (Sunday, 1.5),
            (Holiday, 0.0),
        ]);
        assert_eq!(totals.total_working_days, 6);
        assert_eq!(totals.total_present_days, 2.5);
        assert_eq!(totals.total_absent_days, 1);
        assert_eq!(totals.total_leaves, 2);
        assert_eq!(totals.total_ot_hours, 3.5);
    }

    #[test]
    fn month_must_be_calendar_month() {
        assert!(MonthRef { month: 12, year: 2025 }.validate().is_ok());
        assert!(MonthRef { month: 13, year: 2025 }.validate().is_err());
    }

    #[test]
    fn december_bounds_roll_into_next_year() {
        let (from, to) = MonthRef { month: 12, year: 2025 }.bounds().unwrap();
        assert_eq!(from, NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
        assert_eq!(to, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert!(MonthRef { month: 0, year: 2025 }.bounds().is_none());
    }
}
