pub mod page_header;
pub mod register_page;
pub mod stat_card;
pub mod ui;
