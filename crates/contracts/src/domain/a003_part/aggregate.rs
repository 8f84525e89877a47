use crate::domain::common::AggregateRoot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Part master row, keyed for users by `part_no`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: i64,
    pub part_no: String,
    pub rev: String,
    pub description: String,
    pub material: String,
    pub client_part_no: String,
    pub drawing_url: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl Part {
    pub fn new_for_insert(dto: &PartDto) -> Self {
        let mut part = Self {
            id: 0,
            part_no: dto.part_no.trim().to_string(),
            rev: String::new(),
            description: String::new(),
            material: String::new(),
            client_part_no: String::new(),
            drawing_url: String::new(),
            created_at: Some(Utc::now()),
        };
        part.update(dto);
        part
    }

    /// `part_no` is immutable after creation
    pub fn update(&mut self, dto: &PartDto) {
        self.rev = dto.rev.trim().to_string();
        self.description = dto.description.clone();
        self.material = dto.material.clone();
        self.client_part_no = dto.client_part_no.clone();
        self.drawing_url = dto.drawing_url.trim().to_string();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.part_no.is_empty() {
            return Err("Part number is required".into());
        }
        if self.rev.is_empty() {
            return Err("Revision is required".into());
        }
        Ok(())
    }

    pub fn to_dto(&self) -> PartDto {
        PartDto {
            id: Some(self.id),
            part_no: self.part_no.clone(),
            rev: self.rev.clone(),
            description: self.description.clone(),
            material: self.material.clone(),
            client_part_no: self.client_part_no.clone(),
            drawing_url: self.drawing_url.clone(),
        }
    }
}

impl AggregateRoot for Part {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn table_name() -> &'static str {
        "parts"
    }

    fn element_name() -> &'static str {
        "Part"
    }

    fn list_name() -> &'static str {
        "Parts"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartDto {
    pub id: Option<i64>,
    pub part_no: String,
    pub rev: String,
    pub description: String,
    pub material: String,
    pub client_part_no: String,
    pub drawing_url: String,
}

impl Default for PartDto {
    fn default() -> Self {
        Self {
            id: None,
            part_no: String::new(),
            rev: "A".into(),
            description: String::new(),
            material: String::new(),
            client_part_no: String::new(),
            drawing_url: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_keeps_part_number() {
        let mut part = Part::new_for_insert(&PartDto {
            part_no: "P1001".into(),
            description: "Main Gear".into(),
            ..Default::default()
        });
        part.update(&PartDto {
            part_no: "HACKED".into(),
            rev: "B".into(),
            ..Default::default()
        });
        assert_eq!(part.part_no, "P1001");
        assert_eq!(part.rev, "B");
    }

    #[test]
    fn revision_required() {
        let part = Part::new_for_insert(&PartDto {
            part_no: "P1".into(),
            rev: " ".into(),
            ..Default::default()
        });
        assert!(part.validate().is_err());
    }
}
