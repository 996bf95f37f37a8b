use once_cell::sync::Lazy;
use regex::Regex;

use super::unexpected;
use crate::domain::errors::Result;
use crate::domain::models::{MessagePositioning, MessagePositioningInput};

pub const DEBUG_PREFIX: &str = "MPB";
pub const TEMPERATURE: f32 = 0.4;

// This tool replies in labeled plain text, not JSON; the parser below is
// the contract enforcement.

const SYSTEM_PROMPT: &str = "You are an expert positioning strategist. Provide crisp, actionable clarity. \
Respond in plain text, not JSON. No markdown. No extra sections. \
Use exactly three sections with these uppercase labels, each label on its own line: \
MAIN MESSAGE, SUPPORTING IDEAS, REASSURANCE. \
Under MAIN MESSAGE write one short paragraph naming what the user does and who it is for. \
Under SUPPORTING IDEAS list 2 to 4 short ideas, one per line. \
Under REASSURANCE write one warm, grounding sentence. \
Keep every line plain and readable aloud.";

const SECTION_TEMPLATE: &str = "MAIN MESSAGE\n<one short paragraph>\n\nSUPPORTING IDEAS\n- <idea>\n- <idea>\n\nREASSURANCE\n<one warm sentence>";

pub fn system_prompt() -> &'static str {
    SYSTEM_PROMPT
}

pub fn user_prompt(input: &MessagePositioningInput) -> String {
    let mut lines = vec![
        format!("What you do: {}", input.what_you_do),
        format!("Who you help: {}", input.who_you_help),
    ];
    if let Some(problem) = input
        .problem_you_solve
        .as_deref()
        .filter(|s| !s.trim().is_empty())
    {
        lines.push(format!("Problem you solve: {}", problem));
    }
    lines.push(format!("Tone: {}", input.tone));
    lines.push(format!("Platform: {}", input.platform));
    lines.push("Reply exactly in this layout:".to_string());
    lines.push(SECTION_TEMPLATE.to_string());
    lines.join("\n")
}

// ── section parser ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Main,
    Supporting,
    Reassurance,
}

static MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(?:[-•*·]|\d+[.)])\s*").expect("marker regex must compile")
});

/// Matches a header line after stripping decoration the model sometimes
/// adds (markdown emphasis, trailing colon). A header must be the whole
/// line; "REASSURANCE you're fine" is content, not a header.
fn header_for(line: &str) -> Option<Section> {
    let trimmed = line
        .trim()
        .trim_start_matches(['#', '*'])
        .trim_end_matches(['*', ':'])
        .trim();
    if trimmed.eq_ignore_ascii_case("MAIN MESSAGE") {
        Some(Section::Main)
    } else if trimmed.eq_ignore_ascii_case("SUPPORTING IDEAS") {
        Some(Section::Supporting)
    } else if trimmed.eq_ignore_ascii_case("REASSURANCE") {
        Some(Section::Reassurance)
    } else {
        None
    }
}

/// One idea per supporting line. When everything landed on a single line
/// anyway, retry a split on the delimiters models actually use.
fn split_inline_ideas(line: &str) -> Vec<String> {
    for delimiter in ['·', ';', '|', '/'] {
        if line.contains(delimiter) {
            let parts: Vec<String> = line
                .split(delimiter)
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty())
                .collect();
            if parts.len() >= 2 {
                return parts;
            }
        }
    }
    vec![line.to_string()]
}

pub fn parse_sections(raw: &str) -> Result<MessagePositioning> {
    let mut section = Section::None;
    let mut main_lines: Vec<String> = Vec::new();
    let mut supporting: Vec<String> = Vec::new();
    let mut reassurance_lines: Vec<String> = Vec::new();

    for line in raw.lines() {
        if let Some(next) = header_for(line) {
            section = next;
            continue;
        }
        let content = MARKER_RE.replace(line, "").trim().to_string();
        if content.is_empty() {
            continue;
        }
        match section {
            // Prose before the first header is ignored.
            Section::None => {}
            Section::Main => main_lines.push(content),
            Section::Supporting => supporting.push(content),
            Section::Reassurance => reassurance_lines.push(content),
        }
    }

    if supporting.len() == 1 {
        supporting = split_inline_ideas(&supporting[0]);
    }

    let main_message = main_lines.join(" ");
    let reassurance = reassurance_lines.join(" ");

    if main_message.is_empty() {
        return Err(unexpected("MAIN MESSAGE section is missing or empty"));
    }
    if reassurance.is_empty() {
        return Err(unexpected("REASSURANCE section is missing or empty"));
    }
    if supporting.len() < 2 {
        return Err(unexpected(format!(
            "need at least 2 supporting ideas, got {}",
            supporting.len()
        )));
    }

    Ok(MessagePositioning {
        main_message,
        supporting_ideas: supporting,
        reassurance,
    })
}

pub fn validate(raw: &str) -> Result<MessagePositioning> {
    parse_sections(raw)
}

// ── tests ─────────────────────────────────────────────────────────────────────
