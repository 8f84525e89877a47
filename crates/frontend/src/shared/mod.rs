pub mod api_utils;
pub mod browser;
pub mod components;
pub mod data_table;
pub mod date_utils;
pub mod export;
pub mod form_dialog;
pub mod icons;
pub mod number_format;
