use crate::domain::common::{AggregateRoot, NameRef};
use crate::shared::doc_numbers::{document_number, CHALLAN_PREFIX};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_THICKNESS: &str = "10-15 microns";

/// Plating parameters, e.g. `temp -> 65C`
pub type ProcessParams = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallanStatus {
    #[default]
    Sent,
    Received,
}

impl ChallanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChallanStatus::Sent => "sent",
            ChallanStatus::Received => "received",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "sent" => Some(ChallanStatus::Sent),
            "received" => Some(ChallanStatus::Received),
            _ => None,
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            ChallanStatus::Sent => "warning",
            ChallanStatus::Received => "success",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProcessType {
    #[default]
    #[serde(rename = "Zinc Plating")]
    ZincPlating,
    #[serde(rename = "Nickel Plating")]
    NickelPlating,
    #[serde(rename = "Chrome Plating")]
    ChromePlating,
    #[serde(rename = "Anodizing")]
    Anodizing,
}

impl ProcessType {
    pub fn display_name(&self) -> &'static str {
        match self {
            ProcessType::ZincPlating => "Zinc Plating",
            ProcessType::NickelPlating => "Nickel Plating",
            ProcessType::ChromePlating => "Chrome Plating",
            ProcessType::Anodizing => "Anodizing",
        }
    }

    pub fn from_display_name(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.display_name() == s)
    }

    pub fn all() -> [ProcessType; 4] {
        [
            ProcessType::ZincPlating,
            ProcessType::NickelPlating,
            ProcessType::ChromePlating,
            ProcessType::Anodizing,
        ]
    }
}

pub fn challan_number(year: i32, suffix: u32) -> String {
    document_number(CHALLAN_PREFIX, year, suffix)
}

/// Parses `key=value` lines; blank lines and lines without `=` are ignored
pub fn parse_params(text: &str) -> ProcessParams {
    text.lines()
        .filter_map(|line| {
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }
            Some((key.to_string(), value.trim().to_string()))
        })
        .collect()
}

pub fn format_params(params: &ProcessParams) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("\n")
}

fn thickness_or_default(raw: &str) -> String {
    match raw.trim() {
        "" => DEFAULT_THICKNESS.to_string(),
        t => t.to_string(),
    }
}

/// Outgoing delivery challan for subcontracted plating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challan {
    pub id: i64,
    pub challan_no: String,
    pub job_id: String,
    pub customer_id: i64,
    pub qty_sent: i32,
    pub process_type: ProcessType,
    pub thickness: String,
    #[serde(default)]
    pub params_json: ProcessParams,
    pub date_sent: NaiveDate,
    pub expected_return_date: Option<NaiveDate>,
    pub date_received: Option<NaiveDate>,
    pub status: ChallanStatus,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customers: Option<NameRef>,
}

impl Challan {
    pub fn new_for_insert(dto: &ChallanDto) -> Result<Self, String> {
        let customer_id = dto.customer_id.ok_or("Customer is required")?;
        let date_sent = dto.date_sent.ok_or("Date sent is required")?;
        let thickness = thickness_or_default(&dto.thickness);
        Ok(Self {
            id: 0,
            challan_no: dto.challan_no.trim().to_string(),
            job_id: dto.job_id.trim().to_string(),
            customer_id,
            qty_sent: dto.qty_sent,
            process_type: dto.process_type,
            thickness,
            params_json: dto.params_json.clone(),
            date_sent,
            expected_return_date: dto.expected_return_date,
            date_received: None,
            status: ChallanStatus::Sent,
            created_at: Some(Utc::now()),
            customers: None,
        })
    }

    /// Header edits; the status is driven only by `receive`
    pub fn update(&mut self, dto: &ChallanDto) -> Result<(), String> {
        self.customer_id = dto.customer_id.ok_or("Customer is required")?;
        self.date_sent = dto.date_sent.ok_or("Date sent is required")?;
        self.qty_sent = dto.qty_sent;
        self.process_type = dto.process_type;
        self.thickness = thickness_or_default(&dto.thickness);
        self.params_json = dto.params_json.clone();
        self.expected_return_date = dto.expected_return_date;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.challan_no.is_empty() {
            return Err("Challan number is required".into());
        }
        if self.job_id.is_empty() {
            return Err("Job is required".into());
        }
        if self.qty_sent <= 0 {
            return Err("Quantity sent must be positive".into());
        }
        if let Some(expected) = self.expected_return_date {
            if expected < self.date_sent {
                return Err("Expected return date is before the date sent".into());
            }
        }
        Ok(())
    }

    /// Goods are back from the plater
    pub fn receive(&mut self, today: NaiveDate) -> Result<(), String> {
        if self.status != ChallanStatus::Sent {
            return Err(format!("Challan {} was already received", self.challan_no));
        }
        self.status = ChallanStatus::Received;
        self.date_received = Some(today);
        Ok(())
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == ChallanStatus::Sent
            && self.expected_return_date.is_some_and(|d| d < today)
    }

    pub fn to_dto(&self) -> ChallanDto {
        ChallanDto {
            id: Some(self.id),
            challan_no: self.challan_no.clone(),
            job_id: self.job_id.clone(),
            customer_id: Some(self.customer_id),
            qty_sent: self.qty_sent,
            process_type: self.process_type,
            thickness: self.thickness.clone(),
            params_json: self.params_json.clone(),
            date_sent: Some(self.date_sent),
            expected_return_date: self.expected_return_date,
        }
    }
}

impl AggregateRoot for Challan {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn table_name() -> &'static str {
        "challans"
    }

    fn element_name() -> &'static str {
        "Challan"
    }

    fn list_name() -> &'static str {
        "Plating Challans"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChallanDto {
    pub id: Option<i64>,
    pub challan_no: String,
    pub job_id: String,
    pub customer_id: Option<i64>,
    pub qty_sent: i32,
    pub process_type: ProcessType,
    pub thickness: String,
    #[serde(default)]
    pub params_json: ProcessParams,
    pub date_sent: Option<NaiveDate>,
    pub expected_return_date: Option<NaiveDate>,
}

impl Default for ChallanDto {
    fn default() -> Self {
        Self {
            id: None,
            challan_no: String::new(),
            job_id: String::new(),
            customer_id: None,
            qty_sent: 0,
            process_type: ProcessType::ZincPlating,
            thickness: DEFAULT_THICKNESS.into(),
            params_json: ProcessParams::new(),
            date_sent: None,
            expected_return_date: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Challan {
        let dto = ChallanDto {
            challan_no: challan_number(2025, 1),
            job_id: "CNC-2025-001".into(),
            customer_id: Some(1),
            qty_sent: 100,
            date_sent: Some(date(2025, 10, 20)),
            expected_return_date: Some(date(2025, 10, 25)),
            thickness: "  ".into(),
            ..Default::default()
        };
        Challan::new_for_insert(&dto).unwrap()
    }

    #[test]
    fn new_challan_is_sent_with_default_thickness() {
        let challan = sample();
        assert_eq!(challan.challan_no, "CH-2025-001");
        assert_eq!(challan.status, ChallanStatus::Sent);
        assert_eq!(challan.thickness, DEFAULT_THICKNESS);
        assert!(challan.validate().is_ok());
    }

    #[test]
    fn blank_thickness_on_edit_falls_back_to_default() {
        let mut challan = sample();
        let mut dto = challan.to_dto();
        dto.thickness = "20 microns".into();
        challan.update(&dto).unwrap();
        assert_eq!(challan.thickness, "20 microns");

        dto.thickness = "   ".into();
        challan.update(&dto).unwrap();
        assert_eq!(challan.thickness, DEFAULT_THICKNESS);
    }

    #[test]
    fn receive_only_once() {
        let mut challan = sample();
        challan.receive(date(2025, 10, 22)).unwrap();
        assert_eq!(challan.status, ChallanStatus::Received);
        assert_eq!(challan.date_received, Some(date(2025, 10, 22)));
        assert!(challan.receive(date(2025, 10, 23)).is_err());
    }

    #[test]
    fn overdue_only_while_sent() {
        let mut challan = sample();
        assert!(!challan.is_overdue(date(2025, 10, 25)));
        assert!(challan.is_overdue(date(2025, 10, 26)));
        challan.receive(date(2025, 10, 26)).unwrap();
        assert!(!challan.is_overdue(date(2025, 10, 30)));
    }

    #[test]
    fn process_type_uses_display_names_on_the_wire() {
        assert_eq!(
            serde_json::to_value(ProcessType::NickelPlating).unwrap(),
            "Nickel Plating"
        );
        assert_eq!(
            ProcessType::from_display_name("Anodizing"),
            Some(ProcessType::Anodizing)
        );
    }

    #[test]
    fn params_text_round_trips_through_lines() {
        let params = parse_params("temp = 65C\n\ncurrent=2.5A\nnoise\n=orphan");
        assert_eq!(params.len(), 2);
        assert_eq!(params["temp"], "65C");
        assert_eq!(format_params(&params), "current=2.5A\ntemp=65C");
    }

    #[test]
    fn return_date_cannot_precede_dispatch() {
        let mut challan = sample();
        challan.expected_return_date = Some(date(2025, 10, 1));
        assert!(challan.validate().is_err());
    }
}
