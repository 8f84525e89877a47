use crate::shared::api_utils::{delete, get_json, post_empty, post_json, SavedId};
use contracts::domain::a007_invoice::aggregate::{Invoice, InvoiceDto};

pub async fn fetch_all() -> Result<Vec<Invoice>, String> {
    get_json("/api/invoices").await
}

/// GST and total are recomputed by the server from the taxable amount
pub async fn save(dto: &InvoiceDto) -> Result<SavedId, String> {
    post_json("/api/invoices", dto).await
}

pub async fn remove(id: i64) -> Result<(), String> {
    delete(&format!("/api/invoices/{}", id)).await
}

pub async fn mark_paid(id: i64) -> Result<Invoice, String> {
    post_empty(&format!("/api/invoices/{}/mark-paid", id)).await
}
