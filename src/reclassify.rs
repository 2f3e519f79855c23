//! Reclassification of sub-layer ("smut") error triples.
//!
//! The smut sub-layer reports its own `(overallRC, rc, rs)` triples. Most
//! pass through to the SDK caller verbatim; a fixed set of them indicate
//! conditions the SDK must not surface raw and are instead re-raised as the
//! catalogue's `internal` category. This module owns that decision table.
//!
//! Matching is first-match-wins over an ordered rule list. A rule matches
//! when its `overallRC` equals the input exactly, its `rc` is wildcard or
//! equals the input, and its `rs` matcher is wildcard or contains the input.
//! Absence of a match is a valid outcome, not an error: any triple is
//! classifiable.

use crate::catalog::{build_error, ResolvedError};
use crate::convenience::ErrorParams;
use crate::CatalogError;

// ============================================================================
// Rule Records
// ============================================================================

/// Matcher for the `rs` field of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsMatch {
    /// Match any reason code.
    Any,
    /// Match reason codes in the half-open range `start..end`.
    Range {
        /// First matching reason code.
        start: u16,
        /// First reason code past the matching range.
        end: u16,
    },
    /// Match reason codes in an explicit list.
    List(&'static [u16]),
}

impl RsMatch {
    /// Whether this matcher accepts `rs`.
    pub const fn contains(&self, rs: u16) -> bool {
        match self {
            Self::Any => true,
            Self::Range { start, end } => *start <= rs && rs < *end,
            Self::List(values) => {
                let mut i = 0;
                while i < values.len() {
                    if values[i] == rs {
                        return true;
                    }
                    i += 1;
                }
                false
            }
        }
    }
}

/// One reclassification rule: an exact `overallRC`, an exact-or-wildcard
/// `rc`, and an `rs` matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReclassifyRule {
    overall_rc: u16,
    rc: Option<u16>,
    rs: RsMatch,
}

impl ReclassifyRule {
    /// Create a rule. `rc: None` matches any secondary return code.
    pub const fn new(overall_rc: u16, rc: Option<u16>, rs: RsMatch) -> Self {
        Self { overall_rc, rc, rs }
    }

    /// Whether this rule matches the given triple.
    pub const fn matches(&self, overall_rc: u16, rc: u16, rs: u16) -> bool {
        if self.overall_rc != overall_rc {
            return false;
        }
        if let Some(want) = self.rc {
            if want != rc {
                return false;
            }
        }
        self.rs.contains(rs)
    }
}

/// The smut triples that must be presented as internal errors, in match
/// order.
pub static SMUT_INTERNAL_ERRORS: &[ReclassifyRule] = &[
    ReclassifyRule::new(4, Some(4), RsMatch::Range { start: 1, end: 18 }),
    ReclassifyRule::new(2, Some(2), RsMatch::List(&[99])),
    ReclassifyRule::new(25, None, RsMatch::Any),
    ReclassifyRule::new(99, Some(99), RsMatch::List(&[416, 417])),
];

// ============================================================================
// Classification Operations
// ============================================================================

/// Whether a sub-layer error triple must be re-classified as an internal
/// error rather than passed through verbatim.
///
/// Total over all inputs; `false` simply means "surface the raw triple".
///
/// # Example
///
/// ```rust
/// use zvmsdk_errors::classify_sub_layer_error;
///
/// assert!(classify_sub_layer_error(4, 4, 5));
/// assert!(!classify_sub_layer_error(4, 4, 50));
/// assert!(classify_sub_layer_error(25, 999, 999));
/// ```
pub fn classify_sub_layer_error(overall_rc: u16, rc: u16, rs: u16) -> bool {
    for rule in SMUT_INTERNAL_ERRORS {
        if rule.matches(overall_rc, rc, rs) {
            return true;
        }
    }
    false
}

/// Re-wrap a sub-layer triple as the `internal` category when the
/// classification table says so.
///
/// Returns `Ok(None)` for triples that pass through verbatim; otherwise
/// builds the `internal` error (reason code 1) for `module` - or the
/// `zvmsdk` default - with `msg` carrying the sub-layer diagnostics.
///
/// # Errors
///
/// Only [`CatalogError::UnknownModule`] is reachable, for an unregistered
/// `module` name.
pub fn internalize(
    overall_rc: u16,
    rc: u16,
    rs: u16,
    module: Option<&str>,
    msg: &str,
) -> Result<Option<ResolvedError>, CatalogError> {
    if !classify_sub_layer_error(overall_rc, rc, rs) {
        return Ok(None);
    }
    let params = ErrorParams::new().set("msg", msg.to_string());
    build_error("internal", module, 1, &params).map(Some)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Rule Matching
    // ========================================================================

    #[test]
    fn range_rule_is_half_open() {
        assert!(classify_sub_layer_error(4, 4, 1));
        assert!(classify_sub_layer_error(4, 4, 5));
        assert!(classify_sub_layer_error(4, 4, 17));
        assert!(!classify_sub_layer_error(4, 4, 18));
        assert!(!classify_sub_layer_error(4, 4, 50));
        assert!(!classify_sub_layer_error(4, 4, 0));
    }

    #[test]
    fn list_rule_matches_only_listed_values() {
        assert!(classify_sub_layer_error(2, 2, 99));
        assert!(!classify_sub_layer_error(2, 2, 1));
        assert!(classify_sub_layer_error(99, 99, 416));
        assert!(classify_sub_layer_error(99, 99, 417));
        assert!(!classify_sub_layer_error(99, 99, 415));
    }

    #[test]
    fn wildcard_rule_matches_any_rc_and_rs() {
        assert!(classify_sub_layer_error(25, 999, 999));
        assert!(classify_sub_layer_error(25, 0, 0));
        assert!(classify_sub_layer_error(25, 25, 1));
    }

    #[test]
    fn rc_must_match_when_not_wildcard() {
        assert!(!classify_sub_layer_error(4, 5, 5));
        assert!(!classify_sub_layer_error(2, 3, 99));
    }

    #[test]
    fn unlisted_overall_rc_never_matches() {
        assert!(!classify_sub_layer_error(1, 1, 1));
        assert!(!classify_sub_layer_error(100, 100, 1));
        assert!(!classify_sub_layer_error(0, 0, 0));
    }

    // ========================================================================
    // Internalization
    // ========================================================================

    #[test]
    fn matching_triple_becomes_internal_error() {
        let err = internalize(4, 4, 5, Some("guest"), "bad output from smut")
            .unwrap()
            .unwrap();
        assert_eq!(err.overall_rc(), 500);
        assert_eq!(err.mod_id(), 10);
        assert_eq!(err.rc(), 500);
        assert_eq!(err.rs(), 1);
        assert_eq!(
            err.message(),
            Some("Unexpected internal error in ZVM SDK, error: bad output from smut")
        );
    }

    #[test]
    fn non_matching_triple_passes_through() {
        assert_eq!(internalize(8, 8, 2, None, "ignored").unwrap(), None);
    }

    #[test]
    fn internalize_defaults_to_zvmsdk_module() {
        let err = internalize(2, 2, 99, None, "x").unwrap().unwrap();
        assert_eq!(err.mod_id(), 400);
    }

    #[test]
    fn internalize_rejects_unknown_module() {
        let err = internalize(25, 1, 1, Some("tape"), "x").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownModule { .. }));
    }
}
