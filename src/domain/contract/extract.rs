use serde_json::Value;

use super::unexpected;
use crate::domain::errors::Result;

/// Pulls the first balanced JSON object out of free text.
///
/// Providers are asked for a JSON-object response, but some ignore the
/// flag and wrap the object in prose or markdown fences. The scan starts
/// at the first `{` and tracks brace depth, skipping braces inside
/// double-quoted strings (backslash escapes honored so an escaped quote
/// does not end the string). The balanced slice is then parsed strictly.
pub fn extract_json_object(raw: &str) -> Result<Value> {
    let start = raw
        .find('{')
        .ok_or_else(|| unexpected("response contained no JSON object"))?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in raw[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let slice = &raw[start..start + offset + ch.len_utf8()];
                    return Ok(serde_json::from_str(slice)?);
                }
            }
            _ => {}
        }
    }

    Err(unexpected("response contained an unterminated JSON object"))
}

// ── tests ─────────────────────────────────────────────────────────────────────
