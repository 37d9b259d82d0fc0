//! Salary estimate endpoint: validation, prompt rendering, the model
//! fallback cascade, and response shaping.

pub mod handlers;
pub mod models;
pub mod orchestrator;
pub mod prompts;
pub mod validation;
