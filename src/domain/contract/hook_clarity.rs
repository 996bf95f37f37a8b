use serde_json::{json, Value};

use super::{
    as_object, bounded_len, coerce_number, exact_len, extract::extract_json_object, req_array,
    req_object, req_str, string_items,
};
use crate::domain::errors::Result;
use crate::domain::models::{BestPick, HookClarityInput, HookClarityReport, HookRewrite};

pub const DEBUG_PREFIX: &str = "HCA";
pub const TEMPERATURE: f32 = 0.4;

const SYSTEM_PROMPT: &str = "You are an expert content strategist. Evaluate the clarity of the hook. \
Do not use explicit rules or heuristics; use holistic judgment. \
Return ONLY valid JSON matching the contract. No markdown. No extra keys. \
Score must be an integer from 0 to 100. \
issues array length must be 0 to 3. \
rewrites array length must be exactly 5. \
best_pick.variations length must be exactly 2. \
If you cannot provide enough items, use empty strings to fill required fields. \
Always include all required keys with string values.";

pub fn system_prompt() -> &'static str {
    SYSTEM_PROMPT
}

fn contract_example() -> Value {
    json!({
        "score": 0,
        "verdict": "",
        "issues": ["", "", ""],
        "best_pick": {
            "rewritten_hook": "",
            "approach": "",
            "why": "",
            "variations": ["", ""]
        },
        "rewrites": [
            { "rewritten_hook": "", "approach": "", "why": "" },
            { "rewritten_hook": "", "approach": "", "why": "" },
            { "rewritten_hook": "", "approach": "", "why": "" },
            { "rewritten_hook": "", "approach": "", "why": "" },
            { "rewritten_hook": "", "approach": "", "why": "" }
        ]
    })
}

pub fn user_prompt(input: &HookClarityInput) -> String {
    let example = serde_json::to_string_pretty(&contract_example())
        .expect("contract example must serialize");

    let mut lines = vec![
        format!("Hook: {}", input.hook_text),
        format!("Platform: {}", input.platform),
        format!("Tone: {}", input.tone),
    ];
    if let Some(niche) = input.niche.as_deref().filter(|s| !s.trim().is_empty()) {
        lines.push(format!("Niche: {}", niche));
    }
    if let Some(audience) = input.audience.as_deref().filter(|s| !s.trim().is_empty()) {
        lines.push(format!("Audience: {}", audience));
    }
    lines.push("Return JSON exactly in this shape:".to_string());
    lines.push(example);
    lines.join("\n")
}

pub fn validate(raw: &str) -> Result<HookClarityReport> {
    let value = extract_json_object(raw)?;
    let root = as_object(&value, "response")?;

    // Score has no lower bound to reject; stray values are pulled back
    // into 0..=100 and rounded to an integer.
    let score = coerce_number(root, "score")?.round().clamp(0.0, 100.0) as u8;
    let verdict = req_str(root, "verdict")?;

    let issues_raw = req_array(root, "issues")?;
    bounded_len(issues_raw, "issues", 0, 3)?;
    let issues = string_items(issues_raw, "issues")?;

    let best_pick_raw = req_object(root, "best_pick")?;
    let variations_raw = req_array(best_pick_raw, "variations")?;
    exact_len(variations_raw, "variations", 2)?;
    let best_pick = BestPick {
        rewritten_hook: req_str(best_pick_raw, "rewritten_hook")?,
        approach: req_str(best_pick_raw, "approach")?,
        why: req_str(best_pick_raw, "why")?,
        variations: string_items(variations_raw, "variations")?,
    };

    let rewrites_raw = req_array(root, "rewrites")?;
    exact_len(rewrites_raw, "rewrites", 5)?;
    let mut rewrites = Vec::with_capacity(rewrites_raw.len());
    for rewrite in rewrites_raw {
        let obj = as_object(rewrite, "'rewrites' entry")?;
        rewrites.push(HookRewrite {
            rewritten_hook: req_str(obj, "rewritten_hook")?,
            approach: req_str(obj, "approach")?,
            why: req_str(obj, "why")?,
        });
    }

    Ok(HookClarityReport {
        score,
        verdict,
        issues,
        best_pick,
        rewrites,
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────
