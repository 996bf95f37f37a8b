use std::fmt;

use serde_json::{json, Value};

use super::{
    as_object, bounded_len, exact_len, extract::extract_json_object, req_array, req_str,
    string_items,
};
use crate::domain::errors::Result;
use crate::domain::models::{EngagementSignalInput, EngagementSignalReport, NextAction, Signal};

pub const DEBUG_PREFIX: &str = "ESI";
pub const TEMPERATURE: f32 = 0.4;

const SYSTEM_PROMPT: &str = "You are a calm, direct analyst of engagement signals. \
Return ONLY valid JSON matching the contract. No markdown. No extra keys. \
Be calm, direct, not salesy. Interpret metrics as signals, not vanity. \
If metrics are missing, infer cautiously and set confidence to low more often. \
Keep next_actions extremely doable and match energy_level. \
Never recommend hustle language or posting 3x/day. \
Avoid list should prevent panic moves. \
Use platform norms: IG saves/shares/profile visits show intent; TikTok watch time and shares matter; \
YouTube Shorts retention and viewers-to-subs signal packaging. \
signals length must be 3 to 5. next_actions length must be exactly 3. avoid length must be exactly 2. \
confidence must be low|medium|high. effort must be low|medium.";

pub fn system_prompt() -> &'static str {
    SYSTEM_PROMPT
}

fn contract_example() -> Value {
    json!({
        "overall_read": "",
        "signals": [
            { "signal_name": "", "what_it_means": "", "confidence": "low" },
            { "signal_name": "", "what_it_means": "", "confidence": "medium" },
            { "signal_name": "", "what_it_means": "", "confidence": "high" }
        ],
        "next_actions": [
            { "action": "", "why": "", "effort": "low" },
            { "action": "", "why": "", "effort": "low" },
            { "action": "", "why": "", "effort": "medium" }
        ],
        "avoid": ["", ""],
        "simple_experiment": "",
        "encouragement": ""
    })
}

// Metric lines always render; absent values read "not provided" so the
// model is told what it does not know.
fn metric<T: fmt::Display>(label: &str, value: Option<T>) -> String {
    match value {
        Some(v) => format!("{}: {}", label, v),
        None => format!("{}: not provided", label),
    }
}

pub fn user_prompt(input: &EngagementSignalInput) -> String {
    let example = serde_json::to_string_pretty(&contract_example())
        .expect("contract example must serialize");

    let mut lines = vec![
        format!("Platform: {}", input.platform),
        format!("Content type: {}", input.content_type),
        format!("Goal: {}", input.goal),
        metric("Views", input.views),
        metric("Avg watch time seconds", input.avg_watch_time_seconds),
        metric("Retention percent", input.retention_percent),
        metric("Likes", input.likes),
        metric("Comments", input.comments),
        metric("Shares", input.shares),
        metric("Saves", input.saves),
        metric("Profile visits", input.profile_visits),
        metric("Follows from post", input.follows_from_post),
    ];

    if let Some(topic) = input.post_topic.as_deref().filter(|s| !s.trim().is_empty()) {
        lines.push(format!("Post topic: {}", topic));
    }
    if let Some(fit) = input.audience_fit {
        lines.push(format!("Audience fit: {}", fit));
    }
    if let Some(level) = input.energy_level {
        lines.push(format!("Energy level: {}", level));
    }
    if let Some(notes) = input.notes.as_deref().filter(|s| !s.trim().is_empty()) {
        lines.push(format!("Notes: {}", notes));
    }

    lines.push("Return JSON exactly in this shape:".to_string());
    lines.push(example);
    lines.join("\n")
}

pub fn validate(raw: &str) -> Result<EngagementSignalReport> {
    let value = extract_json_object(raw)?;
    let root = as_object(&value, "response")?;

    let overall_read = req_str(root, "overall_read")?;
    let simple_experiment = req_str(root, "simple_experiment")?;
    let encouragement = req_str(root, "encouragement")?;

    let signals_raw = req_array(root, "signals")?;
    bounded_len(signals_raw, "signals", 3, 5)?;
    let mut signals = Vec::with_capacity(signals_raw.len());
    for signal in signals_raw {
        let obj = as_object(signal, "'signals' entry")?;
        signals.push(Signal {
            signal_name: req_str(obj, "signal_name")?,
            what_it_means: req_str(obj, "what_it_means")?,
            confidence: req_str(obj, "confidence")?.parse()?,
        });
    }

    let actions_raw = req_array(root, "next_actions")?;
    exact_len(actions_raw, "next_actions", 3)?;
    let mut next_actions = Vec::with_capacity(actions_raw.len());
    for action in actions_raw {
        let obj = as_object(action, "'next_actions' entry")?;
        next_actions.push(NextAction {
            action: req_str(obj, "action")?,
            why: req_str(obj, "why")?,
            effort: req_str(obj, "effort")?.parse()?,
        });
    }

    let avoid_raw = req_array(root, "avoid")?;
    exact_len(avoid_raw, "avoid", 2)?;
    let avoid = string_items(avoid_raw, "avoid")?;

    Ok(EngagementSignalReport {
        overall_read,
        signals,
        next_actions,
        avoid,
        simple_experiment,
        encouragement,
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────
