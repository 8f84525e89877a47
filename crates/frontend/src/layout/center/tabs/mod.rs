pub mod tab;

pub use tab::TabStrip;
