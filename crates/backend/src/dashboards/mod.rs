pub mod d400_shop_overview;
pub mod d401_reports;
