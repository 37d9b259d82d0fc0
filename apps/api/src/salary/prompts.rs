//! Prompt template for the salary estimate call.
//!
//! `build_salary_prompt` is a pure function: the same request always renders
//! the same text. All domain reasoning (market bands, tax math) is delegated
//! to the model via this instruction document.

use crate::salary::models::SalaryRequest;

const SALARY_PROMPT_TEMPLATE: &str = r#"You are a compensation analyst specializing in the Indian job market.

A candidate has shared this offer context:
- Company: {company}
- Position: {position}
- Stated CTC: {ctc}
- Location: {location}

Work in two phases.

PHASE 1 — Market-rate plausibility check.
Research the typical total compensation band for this position at this company in this location. Compare the stated CTC against that band. If the stated CTC is implausible for the role (far above or below any credible band, or the role/company pairing does not make sense), stop after this phase and report a mismatch.

PHASE 2 — Monthly in-hand estimate (only if Phase 1 found the CTC plausible).
Estimate the candidate's monthly in-hand salary under the Indian new tax regime. Consider only the CASH portion of the CTC: exclude stock, ESOPs, one-time joining bonuses, and employer gratuity/PF contributions from the in-hand figure, but list the deductions you applied (income tax, employee PF, professional tax) as separate line items.

OUTPUT FORMAT — respond with exactly ONE JSON object and nothing else. No markdown fences, no commentary before or after. Use one of these two mutually exclusive shapes:

If the CTC is implausible:
{"status": "mismatch", "analysis": "<2-4 sentences explaining why the stated CTC does not fit the market band, citing the band you found>"}

If the CTC is plausible:
{"status": "success", "research_findings": {"market_range": "<band you found>", "assessment": "<1-2 sentences>", "sources": ["<source>", "..."]}, "monthly_breakdown": {"gross_monthly": <number>, "income_tax": <number>, "employee_pf": <number>, "professional_tax": <number>, "other_deductions": <number>, "in_hand": <number>}, "notes": ["<assumption or caveat>", "..."]}

All monetary values in the monthly_breakdown are INR per month as plain numbers."#;

/// Renders the two-phase instruction document for one validated request.
pub fn build_salary_prompt(request: &SalaryRequest) -> String {
    SALARY_PROMPT_TEMPLATE
        .replace("{company}", &request.company)
        .replace("{position}", &request.position)
        .replace("{ctc}", &request.ctc)
        .replace("{location}", &request.location)
}
