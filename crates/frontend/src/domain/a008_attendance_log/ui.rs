use crate::domain::a008_attendance_log::api;
use crate::shared::components::page_header::{ErrorBanner, PageHeader};
use crate::shared::data_table::{Column, DataTable};
use crate::shared::date_utils::format_date;
use crate::shared::export::{download_text, export_to_csv, CsvExportable};
use crate::shared::icons::icon;
use contracts::domain::a008_attendance_log::aggregate::{
    sort_by_date_desc, AttendanceLog, CsvPreview, CSV_HEADERS, EXPORT_FILE_NAME, TEMPLATE_CSV,
    TEMPLATE_FILE_NAME,
};
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

impl CsvExportable for AttendanceLog {
    fn headers() -> Vec<&'static str> {
        let mut headers = CSV_HEADERS.to_vec();
        headers.insert(1, "employee");
        headers
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.emp_id.to_string(),
            self.employee_name().to_string(),
            self.date.to_string(),
            self.in_time.clone(),
            self.out_time.clone(),
            self.worked_hours.to_string(),
        ]
    }
}

async fn read_file_text(file: web_sys::File) -> Result<String, String> {
    let text = JsFuture::from(file.text())
        .await
        .map_err(|e| format!("Failed to read file: {:?}", e))?;
    text.as_string().ok_or_else(|| "File is not text".to_string())
}

fn columns() -> Vec<Column<AttendanceLog>> {
    vec![
        Column::new("employees", "Employee")
            .with_format(|_, row: &AttendanceLog| row.employee_name().to_string().into_any()),
        Column::new("date", "Date")
            .with_format(|_, row: &AttendanceLog| format_date(&row.date.to_string()).into_any()),
        Column::new("in_time", "In Time"),
        Column::new("out_time", "Out Time"),
        Column::new("worked_hours", "Hours Worked"),
    ]
}

#[component]
fn PreviewPanel(
    preview: CsvPreview,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
    saving: RwSignal<bool>,
) -> impl IntoView {
    let rows = preview
        .head()
        .iter()
        .map(|row| {
            view! {
                <tr>
                    <td class="table__cell">{row.emp_id.clone()}</td>
                    <td class="table__cell">{row.date.clone()}</td>
                    <td class="table__cell">{row.in_time.clone()}</td>
                    <td class="table__cell">{row.out_time.clone()}</td>
                    <td class="table__cell">{row.worked_hours.clone()}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="info-box csv-preview">
            <h3 class="csv-preview__title">{format!("Preview ({} records)", preview.total)}</h3>
            <div class="table-container csv-preview__table">
                <table class="table__data">
                    <thead>
                        <tr>
                            <th class="table__header-cell">"Emp ID"</th>
                            <th class="table__header-cell">"Date"</th>
                            <th class="table__header-cell">"In Time"</th>
                            <th class="table__header-cell">"Out Time"</th>
                            <th class="table__header-cell">"Hours"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>
            <div class="details-actions">
                <button
                    class="button button--primary"
                    prop:disabled=move || saving.get()
                    on:click=move |_| on_save.run(())
                >
                    "Save to Database"
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn AttendanceLogPage() -> impl IntoView {
    let items = RwSignal::new(Vec::<AttendanceLog>::new());
    let error = RwSignal::new(None::<String>);
    let preview = RwSignal::new(None::<CsvPreview>);
    let saving = RwSignal::new(false);
    let notice = RwSignal::new(None::<String>);

    let load = move || {
        spawn_local(async move {
            match api::fetch_all().await {
                Ok(mut data) => {
                    sort_by_date_desc(&mut data);
                    items.set(data);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };
    load();

    let on_file = move |ev: leptos::ev::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        let Some(input) = input else { return };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // Same file can be picked again after a cancel
        input.set_value("");
        notice.set(None);
        spawn_local(async move {
            let result = match read_file_text(file).await {
                Ok(text) => api::preview(text).await,
                Err(e) => Err(e),
            };
            match result {
                Ok(parsed) => {
                    log::debug!("attendance csv: {} valid rows", parsed.total);
                    preview.set(Some(parsed));
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let on_save = Callback::new(move |_| {
        let Some(current) = preview.get_untracked() else { return };
        saving.set(true);
        spawn_local(async move {
            match api::import(&current.rows).await {
                Ok(result) => {
                    notice.set(Some(format!(
                        "Imported {} rows, skipped {}",
                        result.inserted, result.skipped
                    )));
                    preview.set(None);
                    load();
                }
                Err(e) => error.set(Some(e)),
            }
            saving.set(false);
        });
    });
    let on_cancel = Callback::new(move |_| preview.set(None));

    let on_template = move |_| {
        if let Err(e) = download_text(TEMPLATE_CSV, TEMPLATE_FILE_NAME) {
            error.set(Some(e));
        }
    };
    let on_export = move |_| {
        if let Err(e) = items.with_untracked(|rows| export_to_csv(rows, EXPORT_FILE_NAME)) {
            error.set(Some(e));
        }
    };

    view! {
        <div class="page">
            <PageHeader title=AttendanceLog::list_name() subtitle="Upload and manage employee attendance">
                <button class="button button--secondary" on:click=on_template>
                    {icon("download")}
                    " Template"
                </button>
                <button class="button button--secondary" on:click=on_export>
                    {icon("download")}
                    " Export"
                </button>
                <label class="button button--primary">
                    {icon("upload")}
                    " Upload CSV"
                    <input type="file" accept=".csv" class="hidden" on:change=on_file />
                </label>
            </PageHeader>
            <ErrorBanner error=error />
            {move || notice.get().map(|text| view! { <div class="info-box">{text}</div> })}
            {move || preview.get().map(|p| view! {
                <PreviewPanel preview=p on_save=on_save on_cancel=on_cancel saving=saving />
            })}
            <DataTable columns=columns() data=items actions=false />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::build_csv;
    use contracts::domain::common::NameRef;

    #[test]
    fn export_row_carries_employee_name() {
        let row = AttendanceLog {
            id: 1,
            emp_id: 2,
            date: chrono::NaiveDate::from_ymd_opt(2025, 10, 26).unwrap(),
            in_time: "08:05".into(),
            out_time: "17:02".into(),
            worked_hours: 7.95,
            employees: Some(NameRef::new("Jane Smith")),
        };
        assert_eq!(
            build_csv(&[row]),
            "emp_id,employee,date,in_time,out_time,worked_hours\n2,Jane Smith,2025-10-26,08:05,17:02,7.95"
        );
    }
}
