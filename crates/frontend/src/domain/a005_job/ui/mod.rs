pub mod list;
pub mod shop_floor;
pub mod wizard;
