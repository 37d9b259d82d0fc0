//! Fallback request orchestrator — tries an ordered cascade of
//! (model, search-mode) attempts until one yields parseable structured output.
//!
//! Model availability varies by credential and account tier, so the cascade
//! walks a fixed preference order: every model with search grounding first
//! (grounding improves factual answers on compensation bands), then every
//! model without it. Attempts are strictly sequential — one in-flight remote
//! call at a time keeps quota usage bounded. The first syntactically valid
//! parse wins, whether its status is `success` or `mismatch`; both are
//! terminal answers.

use tracing::{info, warn};

use crate::llm_client::{strip_json_fences, GenerateText, LlmError};
use crate::salary::models::ParsedEstimate;

/// Preference-ordered model identifiers. Order is the sole tie-break.
pub const MODELS: &[&str] = &["gemini-2.5-flash", "gemini-2.5-pro", "gemini-2.0-flash"];

/// One cascade step: a model identifier and whether search grounding is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelAttempt {
    pub model: &'static str,
    pub search_enabled: bool,
}

/// Builds the full attempt list: all models with search enabled, then all
/// models without. One flat list so the cascade is a single loop.
pub fn build_attempts() -> Vec<ModelAttempt> {
    [true, false]
        .into_iter()
        .flat_map(|search_enabled| {
            MODELS.iter().map(move |&model| ModelAttempt {
                model,
                search_enabled,
            })
        })
        .collect()
}

/// A terminal parse, tagged with the attempt that produced it.
#[derive(Debug)]
pub struct EstimateOutcome {
    pub estimate: ParsedEstimate,
    pub model: &'static str,
    pub search_enabled: bool,
}

/// Normalizes raw model text: strip optional markdown fences, then parse.
/// A failed parse keeps the original text for diagnostics.
fn parse_estimate(raw: &str) -> Result<ParsedEstimate, LlmError> {
    serde_json::from_str(strip_json_fences(raw)).map_err(|source| LlmError::Parse {
        source,
        raw: raw.to_string(),
    })
}

/// Runs the cascade to completion. Remote errors and parse failures alike are
/// logged and advance to the next attempt; only exhaustion of the whole list
/// is an error, surfacing the last recorded failure.
pub async fn run_cascade(
    llm: &dyn GenerateText,
    prompt: &str,
) -> Result<EstimateOutcome, LlmError> {
    let mut last_error: Option<LlmError> = None;

    for attempt in build_attempts() {
        let ModelAttempt {
            model,
            search_enabled,
        } = attempt;

        match llm.generate(model, prompt, search_enabled).await {
            Ok(raw) => match parse_estimate(&raw) {
                Ok(estimate) => {
                    info!(model, search_enabled, "cascade settled");
                    return Ok(EstimateOutcome {
                        estimate,
                        model,
                        search_enabled,
                    });
                }
                Err(e) => {
                    warn!(model, search_enabled, error = %e, "unparseable output, advancing");
                    last_error = Some(e);
                }
            },
            Err(e) => {
                warn!(model, search_enabled, error = %e, "attempt failed, advancing");
                last_error = Some(e);
            }
        }
    }

    Err(last_error.unwrap_or(LlmError::Exhausted))
}
