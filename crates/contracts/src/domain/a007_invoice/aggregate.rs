use crate::domain::common::{AggregateRoot, NameRef};
use crate::shared::doc_numbers::{document_number, INVOICE_PREFIX};
use crate::shared::money::GstBreakdown;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(PaymentStatus::Pending),
            "paid" => Some(PaymentStatus::Paid),
            _ => None,
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "warning",
            PaymentStatus::Paid => "success",
        }
    }
}

pub fn invoice_number(year: i32, suffix: u32) -> String {
    document_number(INVOICE_PREFIX, year, suffix)
}

/// Tax invoice raised against a job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i64,
    pub invoice_no: String,
    pub job_id: String,
    pub customer_id: i64,
    pub invoice_date: NaiveDate,
    pub taxable_amount: f64,
    pub gst_amount: f64,
    pub total_amount: f64,
    pub payment_status: PaymentStatus,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customers: Option<NameRef>,
}

impl Invoice {
    /// Amounts are always recomputed from the taxable value
    pub fn new_for_insert(dto: &InvoiceDto) -> Result<Self, String> {
        let customer_id = dto.customer_id.ok_or("Customer is required")?;
        let invoice_date = dto.invoice_date.ok_or("Invoice date is required")?;
        let mut invoice = Self {
            id: 0,
            invoice_no: dto.invoice_no.trim().to_string(),
            job_id: dto.job_id.trim().to_string(),
            customer_id,
            invoice_date,
            taxable_amount: 0.0,
            gst_amount: 0.0,
            total_amount: 0.0,
            payment_status: PaymentStatus::Pending,
            created_at: Some(Utc::now()),
            customers: None,
        };
        invoice.apply_amounts(GstBreakdown::from_taxable(dto.taxable_amount));
        Ok(invoice)
    }

    pub fn update(&mut self, dto: &InvoiceDto) -> Result<(), String> {
        self.customer_id = dto.customer_id.ok_or("Customer is required")?;
        self.invoice_date = dto.invoice_date.ok_or("Invoice date is required")?;
        self.job_id = dto.job_id.trim().to_string();
        self.apply_amounts(GstBreakdown::from_taxable(dto.taxable_amount));
        Ok(())
    }

    pub fn apply_amounts(&mut self, amounts: GstBreakdown) {
        self.taxable_amount = amounts.taxable_amount;
        self.gst_amount = amounts.gst_amount;
        self.total_amount = amounts.total_amount;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.invoice_no.is_empty() {
            return Err("Invoice number is required".into());
        }
        if self.job_id.is_empty() {
            return Err("Job is required".into());
        }
        if !self.taxable_amount.is_finite() || self.taxable_amount <= 0.0 {
            return Err("Taxable amount must be positive".into());
        }
        Ok(())
    }

    pub fn mark_paid(&mut self) -> Result<(), String> {
        if self.payment_status == PaymentStatus::Paid {
            return Err(format!("Invoice {} is already paid", self.invoice_no));
        }
        self.payment_status = PaymentStatus::Paid;
        Ok(())
    }

    pub fn is_outstanding(&self) -> bool {
        self.payment_status == PaymentStatus::Pending
    }

    pub fn to_dto(&self) -> InvoiceDto {
        InvoiceDto {
            id: Some(self.id),
            invoice_no: self.invoice_no.clone(),
            job_id: self.job_id.clone(),
            customer_id: Some(self.customer_id),
            invoice_date: Some(self.invoice_date),
            taxable_amount: self.taxable_amount,
        }
    }
}

impl AggregateRoot for Invoice {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn table_name() -> &'static str {
        "invoices"
    }

    fn element_name() -> &'static str {
        "Invoice"
    }

    fn list_name() -> &'static str {
        "Invoices"
    }
}

/// Invoice form; GST and total are derived, never sent
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InvoiceDto {
    pub id: Option<i64>,
    pub invoice_no: String,
    pub job_id: String,
    pub customer_id: Option<i64>,
    pub invoice_date: Option<NaiveDate>,
    pub taxable_amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto(taxable: f64) -> InvoiceDto {
        InvoiceDto {
            invoice_no: invoice_number(2025, 1),
            job_id: "CNC-2025-001".into(),
            customer_id: Some(1),
            invoice_date: NaiveDate::from_ymd_opt(2025, 10, 26),
            taxable_amount: taxable,
            ..Default::default()
        }
    }

    #[test]
    fn totals_are_derived_from_taxable() {
        let invoice = Invoice::new_for_insert(&dto(5000.0)).unwrap();
        assert_eq!(invoice.invoice_no, "INV-2025-001");
        assert_eq!(invoice.gst_amount, 900.0);
        assert_eq!(invoice.total_amount, 5900.0);
        assert_eq!(invoice.payment_status, PaymentStatus::Pending);
    }

    #[test]
    fn update_recomputes_totals() {
        let mut invoice = Invoice::new_for_insert(&dto(5000.0)).unwrap();
        invoice.update(&dto(7500.0)).unwrap();
        assert_eq!(invoice.gst_amount, 1350.0);
        assert_eq!(invoice.total_amount, 8850.0);
    }

    #[test]
    fn mark_paid_is_one_way() {
        let mut invoice = Invoice::new_for_insert(&dto(100.0)).unwrap();
        invoice.mark_paid().unwrap();
        assert!(!invoice.is_outstanding());
        assert!(invoice.mark_paid().is_err());
    }

    #[test]
    fn zero_amount_is_invalid() {
        let invoice = Invoice::new_for_insert(&dto(0.0)).unwrap();
        assert!(invoice.validate().is_err());
    }

    #[test]
    fn missing_customer_is_rejected() {
        let mut d = dto(10.0);
        d.customer_id = None;
        assert!(Invoice::new_for_insert(&d).is_err());
    }
}
