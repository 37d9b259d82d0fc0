//! Input validation for the salary endpoint.
//!
//! The body is inspected as untyped JSON so a non-string field yields the
//! same per-field message as a missing one, instead of a generic
//! deserialization error. Fields are checked in a fixed order and the first
//! violation wins.

use serde_json::Value;

use crate::errors::AppError;
use crate::salary::models::SalaryRequest;

/// Extracts one required field: present, a JSON string, non-blank after trim.
fn required_field(body: &Value, field: &'static str) -> Result<String, AppError> {
    match body.get(field) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        _ => Err(AppError::Validation(field.to_string())),
    }
}

/// Validates the raw request body into a trimmed `SalaryRequest`.
/// Check order: company, position, ctc, location.
pub fn validate_salary_request(body: &Value) -> Result<SalaryRequest, AppError> {
    Ok(SalaryRequest {
        company: required_field(body, "company")?,
        position: required_field(body, "position")?,
        ctc: required_field(body, "ctc")?,
        location: required_field(body, "location")?,
    })
}
