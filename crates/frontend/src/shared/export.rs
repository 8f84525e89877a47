//! CSV export: comma separated, header row first, downloaded through a temporary link.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Rows that can be written to a CSV file
pub trait CsvExportable {
    fn headers() -> Vec<&'static str>;

    fn to_csv_row(&self) -> Vec<String>;
}

/// Quotes a cell containing a comma, quote or line break; inner quotes are doubled.
pub fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

pub fn build_csv<T: CsvExportable>(data: &[T]) -> String {
    let mut csv_content = T::headers().join(",");
    for item in data {
        csv_content.push('\n');
        let row: Vec<String> = item
            .to_csv_row()
            .iter()
            .map(|cell| escape_csv_cell(cell))
            .collect();
        csv_content.push_str(&row.join(","));
    }
    csv_content
}

/// Builds the CSV and starts the download. A BOM keeps spreadsheet apps on UTF-8.
pub fn export_to_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("No data to export".to_string());
    }
    let content = format!("\u{FEFF}{}", build_csv(data));
    download_text(&content, filename)
}

/// Downloads text as a CSV file
pub fn download_text(content: &str, filename: &str) -> Result<(), String> {
    let blob = create_csv_blob(content)?;
    download_blob(&blob, filename)
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, f64);

    impl CsvExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["name", "amount"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.0.to_string(), format!("{:.2}", self.1)]
        }
    }

    #[test]
    fn plain_cells_are_untouched() {
        assert_eq!(escape_csv_cell("ABC Corp"), "ABC Corp");
        assert_eq!(escape_csv_cell(""), "");
    }

    #[test]
    fn special_cells_are_quoted() {
        assert_eq!(escape_csv_cell("Pune, MH"), "\"Pune, MH\"");
        assert_eq!(escape_csv_cell("12\" bar"), "\"12\"\" bar\"");
        assert_eq!(escape_csv_cell("line1\nline2"), "\"line1\nline2\"");
    }

    #[test]
    fn header_row_comes_first() {
        let csv = build_csv(&[Row("ABC Corp", 5900.0), Row("Tata, Pune", 100.5)]);
        assert_eq!(csv, "name,amount\nABC Corp,5900.00\n\"Tata, Pune\",100.50");
        assert_eq!(build_csv::<Row>(&[]), "name,amount");
    }
}
