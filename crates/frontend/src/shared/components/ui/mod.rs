pub mod badge;
pub mod binding;
pub mod input;
pub mod select;
pub mod textarea;

pub use badge::Badge;
pub use binding::{bind, parse_or_zero};
pub use input::Input;
pub use select::Select;
pub use textarea::Textarea;
