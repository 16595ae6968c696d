use std::collections::BTreeMap;

use serde::{
  Deserialize,
  Serialize,
};

/// Field names the task form posts. The server-rendered template and the
/// page glue both key off these.
pub mod fields {
  pub const TITLE: &str = "title";
  pub const DESCRIPTION: &str = "description";
  pub const CATEGORY: &str = "category";
  pub const PRIORITY: &str = "priority";
  pub const STATUS: &str = "status";
  pub const DUE_DATE: &str = "due_date";
}

/// Verdict the server returns for a background task-form submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskFormResponse {
  pub success: bool,
  #[serde(default)]
  pub message: Option<String>,
  /// Validation failures, one ordered list of messages per offending field.
  #[serde(default)]
  pub errors: BTreeMap<String, Vec<String>>,
}

impl TaskFormResponse {
  /// Human-readable summary of the validation failures: one line per field,
  /// capitalized field name followed by its first error message.
  pub fn alert_message(&self) -> String {
    let mut message = String::from("Please correct the following errors:\n\n");
    for (field, field_errors) in &self.errors {
      let Some(first) = field_errors.first() else {
        continue;
      };
      message.push_str(&format!("- {}: {first}\n", capitalize(field)));
    }
    message
  }
}

fn capitalize(field: &str) -> String {
  let mut chars = field.chars();
  match chars.next() {
    Some(first) => first.to_uppercase().chain(chars).collect(),
    None => String::new(),
  }
}
