//! The list-sanitisation pass.
//!
//! Before an event is submitted, every `DynamicList` value in the form is a
//! bare code (or a leftover of an earlier pass). The backend expects
//! `{value: {code, label}, list_items: [...]}` instead. [`Sanitiser`] walks
//! the case-field schema alongside the working form and a legacy clone of
//! it, rewrites every list value it finds in the working form, and prunes
//! each consumed path from the clone.

mod reconciler;
mod walker;

pub use reconciler::{ListReconciler, candidate_items, reconcile, selected_code};

use crate::definition::{CaseEventData, CaseEventTrigger, CaseField};
use crate::error::SanitiseError;
use crate::form::get_deep_keys;
use crate::schema::{SchemaNode, build_schema};
use serde_json::Value;
use std::fmt;
use tracing::{debug, debug_span};

/// A field the pass had to skip, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldIssue {
    pub field_id: String,
    /// Absolute dotted path within the submitted form.
    pub path: String,
    pub error: SanitiseError,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at '{}': {}", self.field_id, self.path, self.error)
    }
}

/// Outcome of one pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SanitisedForm {
    /// The working form in submission shape.
    pub form: Value,
    /// What is left of the legacy clone after pruning.
    pub legacy: Value,
    pub issues: Vec<FieldIssue>,
}

impl SanitisedForm {
    /// Leaf paths still present in the legacy clone.
    pub fn remaining_legacy_keys(&self) -> Vec<String> {
        get_deep_keys(&self.legacy)
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// A sanitisation pass and its result, ready to be posted.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedSubmission {
    pub event_data: CaseEventData,
    pub remaining_legacy_keys: Vec<String>,
    pub issues: Vec<FieldIssue>,
}

/// Runs list sanitisation. Immutable once built and safe to share.
#[derive(Debug, Clone, Default)]
pub struct Sanitiser {
    strict: bool,
}

#[derive(Debug, Clone, Default)]
pub struct SanitiserBuilder {
    strict: bool,
}

impl SanitiserBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the whole pass with [`SanitiseError::Unreconciled`] when any
    /// field had to be skipped.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn build(self) -> Sanitiser {
        Sanitiser {
            strict: self.strict,
        }
    }
}

impl Sanitiser {
    pub fn builder() -> SanitiserBuilder {
        SanitiserBuilder::new()
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Reconciles every list-bearing field of `fields` in `form`, using
    /// `legacy` to locate the values and pruning it as they are consumed.
    pub fn sanitise_lists(
        &self,
        fields: &[CaseField],
        form: Value,
        legacy: Value,
    ) -> Result<SanitisedForm, SanitiseError> {
        let schema = build_schema(fields)?;
        self.sanitise_schema(&schema, form, legacy)
    }

    /// Same as [`Sanitiser::sanitise_lists`] for a schema built beforehand,
    /// e.g. when one trigger's schema serves several passes.
    pub fn sanitise_schema(
        &self,
        schema: &[SchemaNode],
        mut form: Value,
        mut legacy: Value,
    ) -> Result<SanitisedForm, SanitiseError> {
        let span = debug_span!("sanitise_lists", fields = schema.len(), strict = self.strict);
        let _guard = span.enter();

        let mut issues = Vec::new();
        walker::sanitise_level(schema, &mut form, &mut legacy, "", &mut issues);

        if self.strict {
            if let Some(first) = issues.first() {
                return Err(SanitiseError::Unreconciled {
                    count: issues.len(),
                    first: first.to_string(),
                });
            }
        }

        debug!(issues = issues.len(), "Sanitisation finished");
        Ok(SanitisedForm {
            form,
            legacy,
            issues,
        })
    }

    /// Runs a pass using a clone of `form` as the legacy view.
    pub fn sanitise_form(
        &self,
        fields: &[CaseField],
        form: Value,
    ) -> Result<SanitisedForm, SanitiseError> {
        let legacy = form.clone();
        self.sanitise_lists(fields, form, legacy)
    }

    /// Sanitises `form` against the trigger's fields and wraps the result
    /// into the event's request body.
    pub fn prepare_submission(
        &self,
        trigger: &CaseEventTrigger,
        form: Value,
    ) -> Result<PreparedSubmission, SanitiseError> {
        let sanitised = self.sanitise_form(&trigger.case_fields, form)?;
        let remaining_legacy_keys = sanitised.remaining_legacy_keys();
        Ok(PreparedSubmission {
            event_data: trigger.event_data(sanitised.form),
            remaining_legacy_keys,
            issues: sanitised.issues,
        })
    }
}
