//! Axum route handler for `POST /api/salary`.

use axum::{extract::State, Json};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::LlmError;
use crate::salary::models::SalaryResponse;
use crate::salary::orchestrator::run_cascade;
use crate::salary::prompts::build_salary_prompt;
use crate::salary::validation::validate_salary_request;
use crate::state::AppState;

/// POST /api/salary
///
/// Validates the payload, renders the prompt, runs the model cascade, and
/// shapes the first terminal parse into the response contract. The credential
/// check runs after validation and before any remote call.
pub async fn handle_salary_estimate(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<SalaryResponse>, AppError> {
    let request = validate_salary_request(&body)?;

    if state.config.gemini_api_key.is_none() {
        return Err(AppError::MissingApiKey);
    }

    info!(
        company = %request.company,
        position = %request.position,
        location = %request.location,
        "salary estimate requested"
    );

    let prompt = build_salary_prompt(&request);
    let outcome = run_cascade(state.llm.as_ref(), &prompt)
        .await
        .map_err(classify_terminal_error)?;

    info!(
        model = outcome.model,
        search_enabled = outcome.search_enabled,
        "salary estimate resolved"
    );

    Ok(Json(SalaryResponse::from_estimate(&request, outcome.estimate)))
}

/// Maps the cascade's terminal error onto the response contract by sniffing
/// the provider message: credential problems and unavailable models get
/// dedicated messages, everything else surfaces the last failure verbatim.
fn classify_terminal_error(err: LlmError) -> AppError {
    let message = err.to_string();
    let lower = message.to_lowercase();

    if lower.contains("api key") || message.contains("API_KEY") {
        AppError::InvalidApiKey(message)
    } else if lower.contains("not found") || message.contains("NOT_FOUND") {
        AppError::ModelUnavailable(message)
    } else {
        AppError::Upstream(message)
    }
}
