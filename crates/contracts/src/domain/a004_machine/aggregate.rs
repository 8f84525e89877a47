use crate::domain::common::AggregateRoot;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub machine_type: String,
    pub model: String,
    pub location: String,
    pub last_pm_date: Option<NaiveDate>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Machine {
    pub fn new_for_insert(dto: &MachineDto) -> Self {
        let mut machine = Self {
            id: 0,
            name: String::new(),
            machine_type: String::new(),
            model: String::new(),
            location: String::new(),
            last_pm_date: None,
            created_at: Some(Utc::now()),
        };
        machine.update(dto);
        machine
    }

    pub fn update(&mut self, dto: &MachineDto) {
        self.name = dto.name.trim().to_string();
        self.machine_type = dto.machine_type.trim().to_string();
        self.model = dto.model.clone();
        self.location = dto.location.clone();
        self.last_pm_date = dto.last_pm_date;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("Machine name is required".into());
        }
        if self.machine_type.is_empty() {
            return Err("Machine type is required".into());
        }
        Ok(())
    }

    pub fn to_dto(&self) -> MachineDto {
        MachineDto {
            id: Some(self.id),
            name: self.name.clone(),
            machine_type: self.machine_type.clone(),
            model: self.model.clone(),
            location: self.location.clone(),
            last_pm_date: self.last_pm_date,
        }
    }
}

impl AggregateRoot for Machine {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn table_name() -> &'static str {
        "machines"
    }

    fn element_name() -> &'static str {
        "Machine"
    }

    fn list_name() -> &'static str {
        "Machines"
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MachineDto {
    pub id: Option<i64>,
    pub name: String,
    #[serde(rename = "type")]
    pub machine_type: String,
    pub model: String,
    pub location: String,
    pub last_pm_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_field_keeps_store_column_name() {
        let m = Machine::new_for_insert(&MachineDto {
            name: "VMC-1".into(),
            machine_type: "VMC".into(),
            last_pm_date: NaiveDate::from_ymd_opt(2025, 9, 1),
            ..Default::default()
        });
        let json = serde_json::to_value(&m).unwrap();
        assert_eq!(json["type"], "VMC");
        assert_eq!(json["last_pm_date"], "2025-09-01");
    }
}
