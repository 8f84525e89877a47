use crate::shared::browser::print_page;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::number_format::format_money_exact;
use contracts::domain::a007_invoice::aggregate::{Invoice, PaymentStatus};
use leptos::prelude::*;

/// Printable body of one invoice, with Print and Mark Paid actions
#[component]
pub fn InvoicePrint(invoice: Invoice, on_mark_paid: Callback<Invoice>) -> impl IntoView {
    let customer = invoice
        .customers
        .as_ref()
        .map(|c| c.name.clone())
        .unwrap_or_default();
    let pending = invoice.payment_status == PaymentStatus::Pending;
    let for_mark = invoice.clone();

    view! {
        <div class="invoice-print">
            <h1 class="invoice-print__title">"INVOICE"</h1>
            <div class="invoice-print__parties">
                <div>
                    <p><strong>"Invoice No: "</strong>{invoice.invoice_no.clone()}</p>
                    <p><strong>"Date: "</strong>{format_date(&invoice.invoice_date.to_string())}</p>
                    <p><strong>"Job ID: "</strong>{invoice.job_id.clone()}</p>
                </div>
                <div>
                    <p><strong>"Customer: "</strong>{customer}</p>
                    <Badge variant=invoice.payment_status.badge_variant()>
                        {invoice.payment_status.as_str().to_uppercase()}
                    </Badge>
                </div>
            </div>
            <table class="table__data invoice-print__amounts">
                <tbody>
                    <tr>
                        <td class="table__cell">"Taxable Amount"</td>
                        <td class="table__cell table__cell--right">{format_money_exact(invoice.taxable_amount)}</td>
                    </tr>
                    <tr>
                        <td class="table__cell">"GST (18%)"</td>
                        <td class="table__cell table__cell--right">{format_money_exact(invoice.gst_amount)}</td>
                    </tr>
                    <tr class="invoice-print__total">
                        <td class="table__cell">"Total Amount"</td>
                        <td class="table__cell table__cell--right">{format_money_exact(invoice.total_amount)}</td>
                    </tr>
                </tbody>
            </table>
            <div class="details-actions no-print">
                {pending.then(|| view! {
                    <button
                        class="button button--secondary"
                        on:click=move |_| on_mark_paid.run(for_mark.clone())
                    >
                        {icon("check")}
                        " Mark Paid"
                    </button>
                })}
                <button class="button button--primary" on:click=move |_| print_page()>
                    {icon("printer")}
                    " Print"
                </button>
            </div>
        </div>
    }
}
