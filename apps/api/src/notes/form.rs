//! Form Collector: the three patient fields and their concatenation.

use serde::{Deserialize, Serialize};

pub const DIAGNOSIS_LABEL: &str = "Diagnosis";
pub const HISTORY_LABEL: &str = "History";
pub const CONDITION_LABEL: &str = "Current Condition";

/// Transient patient input, read once when the trigger fires.
/// Missing fields deserialize to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientInputDraft {
    pub diagnosis: String,
    pub history: String,
    pub condition: String,
}

impl PatientInputDraft {
    /// True when every field is empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        [&self.diagnosis, &self.history, &self.condition]
            .iter()
            .all(|field| field.trim().is_empty())
    }

    /// Concatenates the fields in fixed order, each behind its label.
    /// Values are inserted verbatim. A blank draft yields `""`.
    pub fn to_patient_data(&self) -> String {
        if self.is_blank() {
            return String::new();
        }

        format!(
            "{DIAGNOSIS_LABEL}: {}\n{HISTORY_LABEL}: {}\n{CONDITION_LABEL}: {}",
            self.diagnosis, self.history, self.condition
        )
    }
}
