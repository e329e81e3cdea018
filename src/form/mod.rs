//! Dotted-path access to nested form data.
//!
//! Form data is plain JSON: objects keyed by field id and arrays indexed by
//! position. A path such as `parties.0.value.role` walks both.

mod accessor;

pub use accessor::*;
