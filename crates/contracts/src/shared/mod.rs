pub mod doc_numbers;
pub mod money;
