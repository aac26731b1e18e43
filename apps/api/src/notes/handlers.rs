//! Axum route handlers for the nursing notes form and API.

use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    Form, Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::AppError;
use crate::notes::form::PatientInputDraft;
use crate::notes::generator::NoteOutcome;
use crate::notes::page::{Banner, PageView};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GenerateNotesResponse {
    Generated {
        notes: String,
        model: String,
        generated_at: DateTime<Utc>,
    },
    Warning {
        message: String,
    },
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
///
/// Empty form, as on first page load.
pub async fn handle_form_page() -> Html<String> {
    Html(PageView::default().render())
}

/// POST /notes
///
/// The trigger action. Re-renders the page with the submitted values kept, plus
/// either the generated notes, a warning, or an error banner. A service failure
/// returns 502 but still a usable form.
pub async fn handle_form_submit(
    State(state): State<AppState>,
    Form(draft): Form<PatientInputDraft>,
) -> (StatusCode, Html<String>) {
    let result = state.generator.generate_from_draft(&draft).await;

    let (status, banner, notes) = match result {
        Ok(NoteOutcome::Generated(notes)) => (StatusCode::OK, None, Some(notes)),
        Ok(NoteOutcome::Warning(message)) => (StatusCode::OK, Some(Banner::Warning(message)), None),
        Err(e) => (e.status(), Some(Banner::Error(e.user_message())), None),
    };

    let view = PageView {
        draft,
        banner,
        notes,
    };

    (status, Html(view.render()))
}

/// POST /api/v1/notes/generate
///
/// JSON form of the trigger action. Blank input is a 200 with `status: "warning"`.
pub async fn handle_generate_notes(
    State(state): State<AppState>,
    Json(draft): Json<PatientInputDraft>,
) -> Result<Json<GenerateNotesResponse>, AppError> {
    let response = match state.generator.generate_from_draft(&draft).await? {
        NoteOutcome::Generated(notes) => GenerateNotesResponse::Generated {
            notes,
            model: state.config.openai_model.clone(),
            generated_at: Utc::now(),
        },
        NoteOutcome::Warning(message) => GenerateNotesResponse::Warning { message },
    };

    Ok(Json(response))
}
