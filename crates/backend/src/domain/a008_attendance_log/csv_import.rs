use contracts::domain::a008_attendance_log::aggregate::AttendanceCsvRow;

/// Parses punch-log CSV text into rows that carry both an employee id and a date.
/// Malformed records are skipped.
pub fn parse_attendance_csv(csv_text: &str) -> anyhow::Result<Vec<AttendanceCsvRow>> {
    // Strip UTF-8 BOM if present
    let text = csv_text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = match reader.headers() {
        Ok(h) => h.clone(),
        Err(e) => anyhow::bail!("Failed to read CSV headers: {}", e),
    };

    let mut rows = Vec::new();
    let mut dropped = 0usize;

    for result in reader.records() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("Skipping malformed CSV record: {}", e);
                dropped += 1;
                continue;
            }
        };

        let get_field = |name: &str| -> String {
            headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(name))
                .and_then(|i| record.get(i))
                .map(|v| v.trim().to_string())
                .unwrap_or_default()
        };

        let row = AttendanceCsvRow {
            emp_id: get_field("emp_id"),
            date: get_field("date"),
            in_time: get_field("in_time"),
            out_time: get_field("out_time"),
            worked_hours: get_field("worked_hours"),
        };

        if row.is_complete() {
            rows.push(row);
        } else {
            dropped += 1;
        }
    }

    if dropped > 0 {
        tracing::info!("Attendance CSV: {} rows kept, {} dropped", rows.len(), dropped);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a008_attendance_log::aggregate::TEMPLATE_CSV;

    #[test]
    fn template_parses_to_two_rows() {
        let rows = parse_attendance_csv(TEMPLATE_CSV).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].emp_id, "1");
        assert_eq!(rows[1].worked_hours, "9.0");
    }

    #[test]
    fn drops_rows_without_id_or_date() {
        let text = "emp_id,date,in_time,out_time,worked_hours\n\
                    1,2025-10-07,08:00,17:00,9\n\
                    ,2025-10-07,08:00,17:00,9\n\
                    3,,08:00,17:00,9\n\
                    4,2025-10-08,,,\n";
        let rows = parse_attendance_csv(text).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].emp_id, "4");
        assert_eq!(rows[1].in_time, "");
    }

    #[test]
    fn headers_are_matched_by_name() {
        let text = "\u{FEFF}Date,EMP_ID,worked_hours\n2025-10-09, 7 ,8.5\n";
        let rows = parse_attendance_csv(text).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].emp_id, "7");
        assert_eq!(rows[0].date, "2025-10-09");
        assert_eq!(rows[0].out_time, "");
    }

    #[test]
    fn empty_input_has_no_rows() {
        assert!(parse_attendance_csv("").unwrap().is_empty());
    }
}
