use super::case_field::CaseField;
use super::order::sort_by_order;
use crate::error::DefinitionError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use tracing::warn;

/// The backend's definition of a case-change operation, including the
/// schema of the form it opens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseEventTrigger {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_id: Option<String>,
    #[serde(default)]
    pub case_fields: Vec<CaseField>,
    #[serde(default)]
    pub event_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wizard_pages: Option<Vec<WizardPage>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_summary: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_event_notes: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_button_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_save_draft: Option<bool>,
}

/// One page of the event's wizard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WizardPage {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(default)]
    pub wizard_page_fields: Vec<WizardPageField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_condition: Option<String>,
    /// Filled by [`CaseEventTrigger::initialise`].
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub case_fields: Vec<CaseField>,
}

/// Placement of a case field on a wizard page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WizardPageField {
    pub case_field_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_column_no: Option<i32>,
}

/// Request body of a case-event creation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseEventData {
    pub event: EventSummary,
    pub data: Value,
    pub event_token: String,
    #[serde(default)]
    pub ignore_warning: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CaseEventTrigger {
    /// Parses a trigger from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, DefinitionError> {
        serde_json::from_str(json).map_err(|e| DefinitionError::JsonParseError(e.to_string()))
    }

    /// Loads a trigger from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, DefinitionError> {
        let content = fs::read_to_string(path).map_err(|e| {
            DefinitionError::JsonParseError(format!("Could not read file '{}': {}", path, e))
        })?;
        Self::from_json(&content)
    }

    /// Prepares the wizard pages for display: guarantees the page list
    /// exists and resolves every page's fields against `case_fields`,
    /// sorted by their page order. Pages keep their declared order.
    pub fn initialise(&mut self) {
        let case_fields = &self.case_fields;
        let pages = self.wizard_pages.get_or_insert_with(Vec::new);

        for page in pages.iter_mut() {
            let mut fields: Vec<CaseField> = page
                .wizard_page_fields
                .iter()
                .filter_map(|page_field| {
                    let found = case_fields
                        .iter()
                        .find(|field| field.id == page_field.case_field_id);
                    if found.is_none() {
                        warn!(
                            page = %page.id,
                            field = %page_field.case_field_id,
                            "Wizard page references an unknown case field"
                        );
                    }
                    found.map(|field| CaseField {
                        order: page_field.order,
                        ..field.clone()
                    })
                })
                .collect();
            sort_by_order(&mut fields);
            page.case_fields = fields;
        }
    }

    /// Wraps sanitised form data into the submission body for this event.
    pub fn event_data(&self, data: Value) -> CaseEventData {
        CaseEventData {
            event: EventSummary {
                id: self.id.clone(),
                summary: None,
                description: None,
            },
            data,
            event_token: self.event_token.clone(),
            ignore_warning: false,
            draft_id: None,
        }
    }
}

