//! Request, parsed-estimate, and response models for the salary endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A validated salary query. All four fields are trimmed, non-empty strings;
/// no numeric parsing or unit normalization is done on the CTC figure.
#[derive(Debug, Clone)]
pub struct SalaryRequest {
    pub company: String,
    pub position: String,
    pub ctc: String,
    pub location: String,
}

/// Structured output parsed from raw model text.
///
/// The `status` tag admits exactly two values. Anything else fails
/// deserialization, which the cascade treats as a parse failure and moves on
/// — malformed statuses are never passed through to the caller.
///
/// Sub-structures stay as `Value`: their shape is the model's to define and
/// the API relays them verbatim.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ParsedEstimate {
    Mismatch {
        #[serde(default)]
        analysis: Value,
    },
    Success {
        #[serde(default)]
        research_findings: Value,
        #[serde(default)]
        monthly_breakdown: Value,
        #[serde(default)]
        notes: Value,
    },
}

/// Caller-facing response for `POST /api/salary`. All fields are always
/// present; the ones that don't apply to the status are `null`.
#[derive(Debug, Clone, Serialize)]
pub struct SalaryResponse {
    pub success: bool,
    pub status: String,
    pub company: String,
    pub position: String,
    pub ctc: String,
    pub location: String,
    pub analysis: Value,
    pub research_findings: Value,
    pub monthly_breakdown: Value,
    pub notes: Value,
}

impl SalaryResponse {
    /// Maps a terminal parse onto the response contract. A `mismatch` nulls
    /// out the estimate fields no matter what the model supplied alongside
    /// its analysis; a `success` passes the model's sub-structures through
    /// untouched.
    pub fn from_estimate(request: &SalaryRequest, estimate: ParsedEstimate) -> Self {
        let base = |success: bool, status: &str| SalaryResponse {
            success,
            status: status.to_string(),
            company: request.company.clone(),
            position: request.position.clone(),
            ctc: request.ctc.clone(),
            location: request.location.clone(),
            analysis: Value::Null,
            research_findings: Value::Null,
            monthly_breakdown: Value::Null,
            notes: Value::Null,
        };

        match estimate {
            ParsedEstimate::Mismatch { analysis } => SalaryResponse {
                analysis,
                ..base(false, "mismatch")
            },
            ParsedEstimate::Success {
                research_findings,
                monthly_breakdown,
                notes,
            } => SalaryResponse {
                research_findings,
                monthly_breakdown,
                notes,
                ..base(true, "success")
            },
        }
    }
}
