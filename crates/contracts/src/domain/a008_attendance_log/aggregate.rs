use crate::domain::common::{AggregateRoot, NameRef};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const CSV_HEADERS: [&str; 5] = ["emp_id", "date", "in_time", "out_time", "worked_hours"];

/// Downloadable import template with two example rows
pub const TEMPLATE_CSV: &str = "emp_id,date,in_time,out_time,worked_hours\n1,2025-10-07,08:00,17:00,9.0\n2,2025-10-07,08:00,17:00,9.0";
pub const TEMPLATE_FILE_NAME: &str = "attendance_template.csv";
pub const EXPORT_FILE_NAME: &str = "attendance_export.csv";

/// Rows shown in the upload preview
pub const PREVIEW_LIMIT: usize = 10;

/// One punch-clock row imported from CSV
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceLog {
    pub id: i64,
    pub emp_id: i64,
    pub date: NaiveDate,
    pub in_time: String,
    pub out_time: String,
    pub worked_hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employees: Option<NameRef>,
}

impl AttendanceLog {
    pub fn employee_name(&self) -> &str {
        self.employees
            .as_ref()
            .map(|e| e.name.as_str())
            .unwrap_or("Unknown")
    }
}

impl AggregateRoot for AttendanceLog {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a008"
    }

    fn table_name() -> &'static str {
        "attendance"
    }

    fn element_name() -> &'static str {
        "Attendance Entry"
    }

    fn list_name() -> &'static str {
        "Attendance & Payroll"
    }
}

/// Newest first; stable for rows on the same day
pub fn sort_by_date_desc(rows: &mut [AttendanceLog]) {
    rows.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Raw CSV record, every column kept as text
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AttendanceCsvRow {
    #[serde(default)]
    pub emp_id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub in_time: String,
    #[serde(default)]
    pub out_time: String,
    #[serde(default)]
    pub worked_hours: String,
}

impl AttendanceCsvRow {
    /// Rows without an employee id or a date are dropped on upload
    pub fn is_complete(&self) -> bool {
        !self.emp_id.trim().is_empty() && !self.date.trim().is_empty()
    }

    /// Typed row ready for insert; blank hours count as zero
    pub fn to_new_entry(&self) -> Result<NewAttendanceLog, String> {
        let emp_id = self
            .emp_id
            .trim()
            .parse::<i64>()
            .map_err(|_| format!("emp_id '{}' is not a number", self.emp_id))?;
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| format!("date '{}' is not YYYY-MM-DD", self.date))?;
        let worked_hours = match self.worked_hours.trim() {
            "" => 0.0,
            raw => raw
                .parse::<f64>()
                .map_err(|_| format!("worked_hours '{}' is not a number", raw))?,
        };
        Ok(NewAttendanceLog {
            emp_id,
            date,
            in_time: self.in_time.trim().to_string(),
            out_time: self.out_time.trim().to_string(),
            worked_hours,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAttendanceLog {
    pub emp_id: i64,
    pub date: NaiveDate,
    pub in_time: String,
    pub out_time: String,
    pub worked_hours: f64,
}

/// Response of the CSV preview endpoint
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CsvPreview {
    pub rows: Vec<AttendanceCsvRow>,
    pub total: usize,
}

impl CsvPreview {
    pub fn new(rows: Vec<AttendanceCsvRow>) -> Self {
        let total = rows.len();
        Self { rows, total }
    }

    pub fn head(&self) -> &[AttendanceCsvRow] {
        &self.rows[..self.rows.len().min(PREVIEW_LIMIT)]
    }
}

/// Bulk insert outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImportResult {
    pub inserted: usize,
    pub skipped: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(emp_id: &str, date: &str, hours: &str) -> AttendanceCsvRow {
        AttendanceCsvRow {
            emp_id: emp_id.into(),
            date: date.into(),
            in_time: "08:00".into(),
            out_time: "17:00".into(),
            worked_hours: hours.into(),
        }
    }

    #[test]
    fn completeness_needs_id_and_date() {
        assert!(row("1", "2025-10-07", "9").is_complete());
        assert!(!row("", "2025-10-07", "9").is_complete());
        assert!(!row("1", "  ", "9").is_complete());
    }

    #[test]
    fn converts_to_typed_entry() {
        let entry = row("2", "2025-10-07", "7.95").to_new_entry().unwrap();
        assert_eq!(entry.emp_id, 2);
        assert_eq!(entry.worked_hours, 7.95);
        assert_eq!(row("2", "2025-10-07", "").to_new_entry().unwrap().worked_hours, 0.0);
        assert!(row("x", "2025-10-07", "1").to_new_entry().is_err());
        assert!(row("1", "07/10/2025", "1").to_new_entry().is_err());
    }

    #[test]
    fn preview_is_capped() {
        let rows = (0..15).map(|i| row(&i.to_string(), "2025-10-07", "8")).collect();
        let preview = CsvPreview::new(rows);
        assert_eq!(preview.total, 15);
        assert_eq!(preview.head().len(), PREVIEW_LIMIT);
    }

    #[test]
    fn template_has_header_and_two_rows() {
        let lines: Vec<&str> = TEMPLATE_CSV.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], CSV_HEADERS.join(","));
    }

    #[test]
    fn sorts_newest_first() {
        let make = |id: i64, d: u32| AttendanceLog {
            id,
            emp_id: 1,
            date: NaiveDate::from_ymd_opt(2025, 10, d).unwrap(),
            in_time: String::new(),
            out_time: String::new(),
            worked_hours: 8.0,
            employees: None,
        };
        let mut rows = vec![make(1, 5), make(2, 26), make(3, 12)];
        sort_by_date_desc(&mut rows);
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![2, 3, 1]);
        assert_eq!(rows[0].employee_name(), "Unknown");
    }
}
