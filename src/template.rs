//! Named-placeholder message rendering.
//!
//! Reason messages in the catalogue are parameterized strings with `{name}`
//! placeholders, resolved by named substitution at error-construction time:
//!
//! ```text
//! "Invalid API arg count, API: {api}, {expected} expected while {provided} provided."
//! ```
//!
//! # Contract
//!
//! Substitution **fails** when a required named value is absent. Several
//! formatting ecosystems silently substitute an empty string instead; that is
//! exactly the failure mode this module refuses, because a message with a
//! hole in it reaches an operator looking like valid diagnostics. Extra
//! supplied values are ignored.
//!
//! Placeholder names are ASCII identifiers (`[A-Za-z0-9_]+`). Literal braces
//! are written `{{` and `}}`.
//!
//! # Allocation
//!
//! One `String` sized to the template is allocated per render; the scan
//! itself is a single pass over the template bytes.

use crate::convenience::ErrorParams;

/// Outcome of scanning one template: the placeholder names it requires.
///
/// A `None` entry means the template is malformed (unterminated `{` or an
/// empty / non-identifier name). Malformed templates cannot occur in the
/// registered catalogue - the definitions tests walk every entry - so the
/// renderer treats a malformed tail as literal text rather than growing the
/// public error taxonomy for an unreachable case.
///
/// Test-only: the table-hygiene tests in `definitions` walk every registered
/// template through this scan; no runtime path needs it.
#[cfg(test)]
pub(crate) fn placeholder_names(template: &str) -> Option<Vec<&str>> {
    let mut names = Vec::new();
    let mut rest = template;
    loop {
        let Some(open) = rest.find('{') else {
            return Some(names);
        };
        let after = &rest[open + 1..];
        if let Some(tail) = after.strip_prefix('{') {
            rest = tail;
            continue;
        }
        let close = after.find('}')?;
        let name = &after[..close];
        if name.is_empty() || !name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_') {
            return None;
        }
        names.push(name);
        rest = &after[close + 1..];
    }
}

/// Substitute `params` into `template`, failing on the first placeholder
/// with no supplied value. Returns the missing placeholder name on failure.
pub(crate) fn render(template: &str, params: &ErrorParams) -> Result<String, String> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut name = String::new();
                let mut closed = false;
                for n in chars.by_ref() {
                    if n == '}' {
                        closed = true;
                        break;
                    }
                    name.push(n);
                }
                if !closed {
                    // Unterminated placeholder: table bug, emitted verbatim.
                    out.push('{');
                    out.push_str(&name);
                    continue;
                }
                match params.get(&name) {
                    Some(value) => out.push_str(value),
                    None => return Err(name),
                }
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                }
                out.push('}');
            }
            other => out.push(other),
        }
    }
    Ok(out)
}

// ============================================================================
// Tests
// ============================================================================
