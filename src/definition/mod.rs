pub mod case_field;
pub mod event_trigger;
pub mod field_type;
pub mod list_item;
pub mod order;

pub use case_field::*;
pub use event_trigger::*;
pub use field_type::*;
pub use list_item::*;
pub use order::*;
