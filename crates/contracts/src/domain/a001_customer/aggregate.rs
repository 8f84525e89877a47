use crate::domain::common::AggregateRoot;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CREDIT_DAYS: i32 = 30;

/// Customer master row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub gstin: String,
    pub contact_person: String,
    pub phone: String,
    pub billing_address: String,
    pub shipping_address: String,
    pub credit_days: i32,
    pub created_at: Option<DateTime<Utc>>,
}

impl Customer {
    pub fn new_for_insert(dto: &CustomerDto) -> Self {
        let mut customer = Self {
            id: 0,
            name: String::new(),
            gstin: String::new(),
            contact_person: String::new(),
            phone: String::new(),
            billing_address: String::new(),
            shipping_address: String::new(),
            credit_days: DEFAULT_CREDIT_DAYS,
            created_at: Some(Utc::now()),
        };
        customer.update(dto);
        customer
    }

    pub fn update(&mut self, dto: &CustomerDto) {
        self.name = dto.name.trim().to_string();
        self.gstin = dto.gstin.trim().to_uppercase();
        self.contact_person = dto.contact_person.clone();
        self.phone = dto.phone.clone();
        self.billing_address = dto.billing_address.clone();
        self.shipping_address = dto.shipping_address.clone();
        self.credit_days = dto.credit_days;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("Customer name is required".into());
        }
        if !self.gstin.is_empty() && !is_valid_gstin(&self.gstin) {
            return Err(format!("GSTIN '{}' must be 15 letters or digits", self.gstin));
        }
        if self.credit_days < 0 {
            return Err("Credit days cannot be negative".into());
        }
        Ok(())
    }

    pub fn to_dto(&self) -> CustomerDto {
        CustomerDto {
            id: Some(self.id),
            name: self.name.clone(),
            gstin: self.gstin.clone(),
            contact_person: self.contact_person.clone(),
            phone: self.phone.clone(),
            billing_address: self.billing_address.clone(),
            shipping_address: self.shipping_address.clone(),
            credit_days: self.credit_days,
        }
    }
}

/// GSTIN shape check: 15 ASCII alphanumerics, starting with a two-digit state code
pub fn is_valid_gstin(gstin: &str) -> bool {
    gstin.len() == 15
        && gstin.chars().all(|c| c.is_ascii_alphanumeric())
        && gstin.chars().take(2).all(|c| c.is_ascii_digit())
}

impl AggregateRoot for Customer {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn table_name() -> &'static str {
        "customers"
    }

    fn element_name() -> &'static str {
        "Customer"
    }

    fn list_name() -> &'static str {
        "Customers"
    }
}

/// Create/edit form for a customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDto {
    pub id: Option<i64>,
    pub name: String,
    pub gstin: String,
    pub contact_person: String,
    pub phone: String,
    pub billing_address: String,
    pub shipping_address: String,
    pub credit_days: i32,
}

impl Default for CustomerDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            gstin: String::new(),
            contact_person: String::new(),
            phone: String::new(),
            billing_address: String::new(),
            shipping_address: String::new(),
            credit_days: DEFAULT_CREDIT_DAYS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_form_defaults_to_thirty_credit_days() {
        assert_eq!(CustomerDto::default().credit_days, 30);
    }

    #[test]
    fn gstin_is_normalised_and_checked() {
        let dto = CustomerDto {
            name: " ABC Corp ".into(),
            gstin: "27aapfu0939f1zv".into(),
            ..Default::default()
        };
        let c = Customer::new_for_insert(&dto);
        assert_eq!(c.name, "ABC Corp");
        assert_eq!(c.gstin, "27AAPFU0939F1ZV");
        assert!(c.validate().is_ok());

        let bad = Customer::new_for_insert(&CustomerDto {
            name: "X".into(),
            gstin: "12345".into(),
            ..Default::default()
        });
        assert!(bad.validate().is_err());
    }

    #[test]
    fn name_is_required() {
        let c = Customer::new_for_insert(&CustomerDto::default());
        assert!(c.validate().is_err());
    }
}
