//! Blocking browser dialogs used by the page controllers.

/// `window.confirm`; false when there is no window
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn alert(message: &str) {
    if let Some(w) = web_sys::window() {
        let _ = w.alert_with_message(message);
    }
}

/// `window.prompt` with a prefilled value; `None` when cancelled
pub fn prompt(message: &str, default: &str) -> Option<String> {
    web_sys::window()
        .and_then(|w| w.prompt_with_message_and_default(message, default).ok())
        .flatten()
}

pub fn print_page() {
    if let Some(w) = web_sys::window() {
        let _ = w.print();
    }
}

/// Random three-digit suffix for a new document number
pub fn random_suffix() -> u32 {
    contracts::shared::doc_numbers::suffix_from_unit(js_sys::Math::random())
}
