use serde_json::{json, Value};

use super::{as_object, exact_len, extract::extract_json_object, req_array, req_str, string_items};
use crate::domain::errors::Result;
use crate::domain::models::{WeeklyReflection, WeeklyReflectionInput};

pub const DEBUG_PREFIX: &str = "WCR";
pub const TEMPERATURE: f32 = 0.4;

const SYSTEM_PROMPT: &str = "You are a compassionate reflection guide. \
Return ONLY valid JSON matching the contract. No markdown. No commentary. \
Be grounding and reassuring, never shame the user. \
Normalize imperfect weeks and emphasize progress over performance. \
Match tone to how_the_week_felt and energy_level. \
did_well length must be exactly 3. adjustments length must be exactly 2. \
Always include all required keys with string values.";

pub fn system_prompt() -> &'static str {
    SYSTEM_PROMPT
}

fn contract_example() -> Value {
    json!({
        "week_summary": "",
        "did_well": ["", "", ""],
        "adjustments": ["", ""],
        "next_week_focus": "",
        "momentum_check": "",
        "encouragement": ""
    })
}

pub fn user_prompt(input: &WeeklyReflectionInput) -> String {
    let example = serde_json::to_string_pretty(&contract_example())
        .expect("contract example must serialize");

    let mut lines = vec![
        format!("Platform: {}", input.platform),
        format!("How the week felt: {}", input.how_the_week_felt),
        format!("Energy level: {}", input.energy_level),
    ];
    if let Some(count) = input.posts_published {
        lines.push(format!("Posts published: {}", count));
    }
    if !input.what_worked.trim().is_empty() {
        lines.push(format!("What worked: {}", input.what_worked));
    }
    if !input.what_felt_hard.trim().is_empty() {
        lines.push(format!("What felt hard: {}", input.what_felt_hard));
    }
    if !input.surprises.trim().is_empty() {
        lines.push(format!("Surprises: {}", input.surprises));
    }
    if let Some(level) = input
        .confidence_level
        .as_deref()
        .filter(|s| !s.trim().is_empty())
    {
        lines.push(format!("Confidence level: {}", level));
    }
    lines.push("Return JSON exactly in this shape:".to_string());
    lines.push(example);
    lines.join("\n")
}

pub fn validate(raw: &str) -> Result<WeeklyReflection> {
    let value = extract_json_object(raw)?;
    let root = as_object(&value, "response")?;

    let week_summary = req_str(root, "week_summary")?;
    let next_week_focus = req_str(root, "next_week_focus")?;
    let momentum_check = req_str(root, "momentum_check")?;
    let encouragement = req_str(root, "encouragement")?;

    let did_well_raw = req_array(root, "did_well")?;
    exact_len(did_well_raw, "did_well", 3)?;
    let did_well = string_items(did_well_raw, "did_well")?;

    let adjustments_raw = req_array(root, "adjustments")?;
    exact_len(adjustments_raw, "adjustments", 2)?;
    let adjustments = string_items(adjustments_raw, "adjustments")?;

    Ok(WeeklyReflection {
        week_summary,
        did_well,
        adjustments,
        next_week_focus,
        momentum_check,
        encouragement,
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────
