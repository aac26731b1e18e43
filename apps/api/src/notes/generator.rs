//! Note Generator: turns the concatenated patient data into nursing notes.
//!
//! Flow: blank check → fill prompt template → one completion call → first choice text.
//!
//! Patient content is never logged; only lengths are.

use std::sync::Arc;

use tracing::{error, info, warn};

use crate::errors::AppError;
use crate::llm_client::CompletionService;
use crate::notes::form::PatientInputDraft;
use crate::notes::prompts::{build_nursing_notes_prompt, EMPTY_INPUT_WARNING};

/// Result of one trigger action that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteOutcome {
    /// Text of the first completion choice, exactly as returned.
    Generated(String),
    /// Input was blank; no call was made.
    Warning(String),
}

/// Stateless generator. The completion service (credential and model included)
/// is injected at construction.
pub struct NoteGenerator {
    completion: Arc<dyn CompletionService>,
}

impl NoteGenerator {
    pub fn new(completion: Arc<dyn CompletionService>) -> Self {
        Self { completion }
    }

    /// Generates notes for already-concatenated patient data.
    ///
    /// Issues zero calls for blank input and exactly one otherwise.
    /// Service failures are terminal for this trigger; there is no retry.
    pub async fn generate(&self, patient_data: &str) -> Result<NoteOutcome, AppError> {
        if patient_data.trim().is_empty() {
            warn!("Generation requested with blank patient data; skipping LLM call");
            return Ok(NoteOutcome::Warning(EMPTY_INPUT_WARNING.to_string()));
        }

        let prompt = build_nursing_notes_prompt(patient_data);
        info!(
            "Generating nursing notes (patient_data_len={}, prompt_len={})",
            patient_data.len(),
            prompt.len()
        );

        let notes = self.completion.complete(&prompt).await.map_err(|e| {
            error!("Nursing notes generation failed: {e}");
            AppError::Llm(e)
        })?;

        info!("Generated nursing notes (notes_len={})", notes.len());
        Ok(NoteOutcome::Generated(notes))
    }

    pub async fn generate_from_draft(
        &self,
        draft: &PatientInputDraft,
    ) -> Result<NoteOutcome, AppError> {
        self.generate(&draft.to_patient_data()).await
    }
}
