//! Generic list view.
//!
//! Records are serialized to JSON and looked up by column key. What each
//! row shows is decided by [`model`], a pure function; the component only
//! turns that model into markup.

use crate::shared::icons::icon;
use leptos::prelude::*;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

pub const EMPTY_TEXT: &str = "No data available";

pub type CellFormatter<T> = Arc<dyn Fn(&Value, &T) -> AnyView + Send + Sync>;

pub struct Column<T> {
    pub key: &'static str,
    pub label: &'static str,
    pub format: Option<CellFormatter<T>>,
}

impl<T> Column<T> {
    pub fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            format: None,
        }
    }

    /// Cell shows the formatter output instead of the raw value
    pub fn with_format(
        mut self,
        format: impl Fn(&Value, &T) -> AnyView + Send + Sync + 'static,
    ) -> Self {
        self.format = Some(Arc::new(format));
        self
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            label: self.label,
            format: self.format.clone(),
        }
    }
}

/// Which row actions have a handler
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionFlags {
    pub view: bool,
    pub edit: bool,
    pub delete: bool,
}

impl ActionFlags {
    pub fn any(&self) -> bool {
        self.view || self.edit || self.delete
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellModel {
    Text(String),
    /// Rendered by the column formatter with this raw value
    Formatted(Value),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowModel {
    pub cells: Vec<CellModel>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    Rows(Vec<RowModel>),
    Placeholder { colspan: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableModel {
    pub headers: Vec<&'static str>,
    /// `None` when the action column is hidden
    pub action_column: Option<ActionFlags>,
    pub body: TableBody,
}

/// Text of a cell without a formatter: strings unquoted, missing and null empty
pub fn raw_cell_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

pub fn model<T: Serialize>(
    columns: &[Column<T>],
    records: &[T],
    handlers: ActionFlags,
    actions: bool,
) -> TableModel {
    let action_column = (actions && handlers.any()).then_some(handlers);
    let headers = columns.iter().map(|c| c.label).collect();

    if records.is_empty() {
        let colspan = columns.len() + usize::from(action_column.is_some());
        return TableModel {
            headers,
            action_column,
            body: TableBody::Placeholder { colspan },
        };
    }

    let rows = records
        .iter()
        .map(|record| {
            let json = serde_json::to_value(record).unwrap_or(Value::Null);
            let cells = columns
                .iter()
                .map(|column| {
                    let value = json.get(column.key);
                    if column.format.is_some() {
                        CellModel::Formatted(value.cloned().unwrap_or(Value::Null))
                    } else {
                        CellModel::Text(raw_cell_text(value))
                    }
                })
                .collect();
            RowModel { cells }
        })
        .collect();

    TableModel {
        headers,
        action_column,
        body: TableBody::Rows(rows),
    }
}

#[component]
pub fn DataTable<T>(
    columns: Vec<Column<T>>,
    #[prop(into)] data: Signal<Vec<T>>,
    #[prop(optional)] on_view: Option<Callback<T>>,
    #[prop(optional)] on_edit: Option<Callback<T>>,
    #[prop(optional)] on_delete: Option<Callback<T>>,
    #[prop(default = true)] actions: bool,
) -> impl IntoView
where
    T: Serialize + Clone + Send + Sync + 'static,
{
    let handlers = ActionFlags {
        view: on_view.is_some(),
        edit: on_edit.is_some(),
        delete: on_delete.is_some(),
    };

    move || {
        let records = data.get();
        let table = model(&columns, &records, handlers, actions);

        let header_cells = table
            .headers
            .iter()
            .map(|label| view! { <th class="table__header-cell">{*label}</th> })
            .collect_view();
        let action_column = table.action_column;
        let action_header = action_column
            .map(|_| view! { <th class="table__header-cell table__header-cell--actions">"Actions"</th> });

        let body = match table.body {
            TableBody::Placeholder { colspan } => view! {
                <tr>
                    <td class="table__cell table__cell--empty" colspan=colspan>{EMPTY_TEXT}</td>
                </tr>
            }
            .into_any(),
            TableBody::Rows(rows) => rows
                .into_iter()
                .zip(records.into_iter())
                .map(|(row, record)| {
                    let cells = row
                        .cells
                        .into_iter()
                        .zip(columns.iter())
                        .map(|(cell, column)| {
                            let content = match (cell, &column.format) {
                                (CellModel::Formatted(value), Some(format)) => format(&value, &record),
                                (CellModel::Text(text), _) => text.into_any(),
                                (CellModel::Formatted(value), None) => {
                                    raw_cell_text(Some(&value)).into_any()
                                }
                            };
                            view! { <td class="table__cell">{content}</td> }
                        })
                        .collect_view();

                    let action_cell = action_column.map(|_| {
                        let view_button = on_view.map(|cb| {
                            let record = record.clone();
                            view! {
                                <button class="table__action" title="View" on:click=move |_| cb.run(record.clone())>
                                    {icon("eye")}
                                </button>
                            }
                        });
                        let edit_button = on_edit.map(|cb| {
                            let record = record.clone();
                            view! {
                                <button class="table__action" title="Edit" on:click=move |_| cb.run(record.clone())>
                                    {icon("edit")}
                                </button>
                            }
                        });
                        let delete_button = on_delete.map(|cb| {
                            let record = record.clone();
                            view! {
                                <button class="table__action table__action--danger" title="Delete" on:click=move |_| cb.run(record.clone())>
                                    {icon("trash")}
                                </button>
                            }
                        });
                        view! {
                            <td class="table__cell table__cell--actions">
                                {view_button}
                                {edit_button}
                                {delete_button}
                            </td>
                        }
                    });

                    view! {
                        <tr>
                            {cells}
                            {action_cell}
                        </tr>
                    }
                })
                .collect_view()
                .into_any(),
        };

        view! {
            <div class="table-container">
                <table class="table__data table--striped">
                    <thead>
                        <tr>
                            {header_cells}
                            {action_header}
                        </tr>
                    </thead>
                    <tbody>{body}</tbody>
                </table>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        name: String,
        qty: i32,
        note: Option<String>,
        paid: bool,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "ABC Corp".into(), qty: 100, note: None, paid: true },
            Row { name: "XYZ Ltd".into(), qty: 50, note: Some("rush".into()), paid: false },
            Row { name: "PQR Inc".into(), qty: 7, note: None, paid: false },
        ]
    }

    fn columns() -> Vec<Column<Row>> {
        vec![
            Column::new("name", "Name"),
            Column::new("qty", "Qty"),
            Column::new("note", "Note"),
            Column::new("paid", "Paid"),
        ]
    }

    const EDIT_DELETE: ActionFlags = ActionFlags { view: false, edit: true, delete: true };

    #[test]
    fn one_row_per_record_in_order() {
        let table = model(&columns(), &rows(), EDIT_DELETE, true);
        let TableBody::Rows(body) = table.body else {
            panic!("expected rows");
        };
        assert_eq!(body.len(), 3);
        let names: Vec<_> = body.iter().map(|r| r.cells[0].clone()).collect();
        assert_eq!(
            names,
            vec![
                CellModel::Text("ABC Corp".into()),
                CellModel::Text("XYZ Ltd".into()),
                CellModel::Text("PQR Inc".into()),
            ]
        );
    }

    #[test]
    fn raw_values_render_verbatim() {
        let table = model(&columns(), &rows(), EDIT_DELETE, true);
        let TableBody::Rows(body) = table.body else {
            panic!("expected rows");
        };
        assert_eq!(
            body[1].cells,
            vec![
                CellModel::Text("XYZ Ltd".into()),
                CellModel::Text("50".into()),
                CellModel::Text("rush".into()),
                CellModel::Text("false".into()),
            ]
        );
        // null and unknown keys are blank
        assert_eq!(body[0].cells[2], CellModel::Text(String::new()));
        assert_eq!(raw_cell_text(None), "");
    }

    #[test]
    fn formatted_columns_carry_the_raw_value() {
        let mut cols = columns();
        cols[1] = Column::new("qty", "Qty").with_format(|v, _| v.to_string().into_any());
        let table = model(&cols, &rows(), EDIT_DELETE, true);
        let TableBody::Rows(body) = table.body else {
            panic!("expected rows");
        };
        assert_eq!(body[2].cells[1], CellModel::Formatted(Value::from(7)));
        assert_eq!(body[2].cells[0], CellModel::Text("PQR Inc".into()));
    }

    #[test]
    fn empty_input_yields_single_placeholder() {
        let table = model(&columns(), &Vec::<Row>::new(), EDIT_DELETE, true);
        assert_eq!(table.body, TableBody::Placeholder { colspan: 5 });

        let table = model(&columns(), &Vec::<Row>::new(), ActionFlags::default(), true);
        assert_eq!(table.body, TableBody::Placeholder { colspan: 4 });
    }

    #[test]
    fn action_column_needs_flag_and_handler() {
        let with_handlers = model(&columns(), &rows(), EDIT_DELETE, true);
        assert_eq!(with_handlers.action_column, Some(EDIT_DELETE));

        let disabled = model(&columns(), &rows(), EDIT_DELETE, false);
        assert_eq!(disabled.action_column, None);

        let no_handlers = model(&columns(), &rows(), ActionFlags::default(), true);
        assert_eq!(no_handlers.action_column, None);

        let view_only = ActionFlags { view: true, ..Default::default() };
        let table = model(&columns(), &rows(), view_only, true);
        let flags = table.action_column.unwrap();
        assert!(flags.view && !flags.edit && !flags.delete);
    }

    #[test]
    fn headers_follow_column_order() {
        let table = model(&columns(), &rows(), EDIT_DELETE, true);
        assert_eq!(table.headers, vec!["Name", "Qty", "Note", "Paid"]);
    }
}
