use serde_json::{json, Value};

use super::{
    as_object, coerce_number, exact_len, extract::extract_json_object, req_array, req_object,
    req_str, unexpected,
};
use crate::domain::errors::Result;
use crate::domain::models::{
    ContentDirectionInput, ContentDirectionPlan, ContentIdea, PostingRhythm,
};

pub const DEBUG_PREFIX: &str = "CDP";
pub const TEMPERATURE: f32 = 0.4;

const SYSTEM_PROMPT: &str = "You are a calm, practical content strategist. Provide a gentle weekly plan. \
Return ONLY valid JSON matching the contract. No markdown. No extra keys. \
Respect energy_level: LOW means fewer posts, simpler formats, reassurance; \
MEDIUM is balanced; HIGH can include more ideas but keep the tone calm. \
Avoid hustle language. Never guilt the user. Normalize rest as part of the plan. \
ideas length must be exactly 5. \
effort must be low or medium. \
Always include all required keys with string values.";

pub fn system_prompt() -> &'static str {
    SYSTEM_PROMPT
}

/// Keys and nesting here are exactly what `validate` requires.
fn contract_example() -> Value {
    json!({
        "weekly_direction": "",
        "posting_rhythm": {
            "posts": 0,
            "note": ""
        },
        "ideas": [
            { "title": "", "format": "", "effort": "low" },
            { "title": "", "format": "", "effort": "low" },
            { "title": "", "format": "", "effort": "low" },
            { "title": "", "format": "", "effort": "medium" },
            { "title": "", "format": "", "effort": "medium" }
        ],
        "one_post_fallback": "",
        "encouragement": ""
    })
}

pub fn user_prompt(input: &ContentDirectionInput) -> String {
    let example = serde_json::to_string_pretty(&contract_example())
        .expect("contract example must serialize");

    let mut lines = Vec::new();
    if let Some(niche) = input.niche.as_deref().filter(|n| !n.trim().is_empty()) {
        lines.push(format!("Niche: {}", niche));
    }
    lines.push(format!("Main goal: {}", input.main_goal));
    lines.push(format!("Energy level: {}", input.energy_level));
    lines.push(format!("Platform: {}", input.platform));
    lines.push(format!("Posting days: {}", input.posting_days));
    lines.push(format!("Tone: {}", input.tone));
    lines.push("Return JSON exactly in this shape:".to_string());
    lines.push(example);
    lines.join("\n")
}

pub fn validate(raw: &str) -> Result<ContentDirectionPlan> {
    let value = extract_json_object(raw)?;
    let root = as_object(&value, "response")?;

    let weekly_direction = req_str(root, "weekly_direction")?;
    let one_post_fallback = req_str(root, "one_post_fallback")?;
    let encouragement = req_str(root, "encouragement")?;

    let rhythm = req_object(root, "posting_rhythm")?;
    let posts = coerce_number(rhythm, "posts")?;
    if posts < 1.0 {
        return Err(unexpected(format!("'posts' must be at least 1, got {}", posts)));
    }
    let note = req_str(rhythm, "note")?;

    let ideas_raw = req_array(root, "ideas")?;
    exact_len(ideas_raw, "ideas", 5)?;
    let mut ideas = Vec::with_capacity(ideas_raw.len());
    for idea in ideas_raw {
        let obj = as_object(idea, "'ideas' entry")?;
        ideas.push(ContentIdea {
            title: req_str(obj, "title")?,
            format: req_str(obj, "format")?,
            effort: req_str(obj, "effort")?.parse()?,
        });
    }

    Ok(ContentDirectionPlan {
        weekly_direction,
        posting_rhythm: PostingRhythm {
            posts: posts.round().max(0.0) as u32,
            note,
        },
        ideas,
        one_post_fallback,
        encouragement,
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────
