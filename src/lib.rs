//! # case-sanitiser - Case Form Reconciliation
//!
//! **case-sanitiser** prepares case-management form data for submission.
//! Forms hold `DynamicList` selections as bare codes, while the case-data
//! backend expects each one as the selected item together with its full
//! option set. The crate walks the case-field schema of an event trigger,
//! through complex fields and collections, and rewrites every list value
//! it meets.
//!
//! ## Core Workflow
//!
//! 1.  **Load the trigger**: parse the event trigger JSON into a
//!     [`definition::CaseEventTrigger`]. Its `case_fields` describe the form.
//! 2.  **Build a sanitiser**: `Sanitiser::builder()` configures the pass
//!     (e.g. strict mode, which fails on any skipped field).
//! 3.  **Sanitise**: hand over the working form and a legacy clone of it.
//!     The result carries the reconciled form, the pruned clone and any
//!     fields that had to be skipped.
//! 4.  **Submit**: wrap the form into a [`definition::CaseEventData`] body,
//!     or let `Sanitiser::prepare_submission` do both steps.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use case_sanitiser::prelude::*;
//! use serde_json::json;
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let country = CaseField::new("country", FieldType::of(FieldType::DYNAMIC_LIST))
//!         .with_list_items(vec![ListItem::new("UK", "United Kingdom"), ListItem::new("FR", "France")]);
//!     let address = CaseField::new("address", FieldType::complex("Address", vec![country]));
//!
//!     let form = json!({ "address": { "street": "1 High St", "country": "FR" } });
//!     let legacy = form.clone();
//!
//!     let sanitiser = Sanitiser::builder().strict(true).build();
//!     let result = sanitiser.sanitise_lists(&[address], form, legacy)?;
//!
//!     // { "value": { "code": "FR", "label": "France" }, "list_items": [...] }
//!     println!("{}", result.form["address"]["country"]);
//!     println!("Left in legacy clone: {:?}", result.remaining_legacy_keys());
//!     Ok(())
//! }
//! ```

pub mod definition;
pub mod error;
pub mod form;
pub mod prelude;
pub mod sanitiser;
pub mod schema;
