//! Convenience types and macros for declaring categories and supplying
//! message parameters.
//!
//! # Rules
//!
//! 1. **Category definitions are macro-generated const statics** - the
//!    [`define_categories!`] batch macro is the only intended way to declare
//!    the catalogue, so declaration order, the registry slice, and the doc
//!    comments stay in one place.
//! 2. **Parameter keys are identifiers** - the [`params!`] macro takes bare
//!    identifier keys and arbitrary `Display` values, so call sites read
//!    like the placeholders they fill.
//!
//! # Usage
//!
//! ```rust
//! use zvmsdk_errors::{build_error, params};
//!
//! let err = build_error(
//!     "notExist",
//!     Some("image"),
//!     1,
//!     &params! { object: "rhel82-eckd" },
//! ).unwrap();
//! assert_eq!(err.message(), Some("Object 'rhel82-eckd' does not exist."));
//! ```

use smallvec::SmallVec;
use std::borrow::Cow;

// ============================================================================
// Named Message Parameters
// ============================================================================

/// Named values substituted into a reason-message template.
///
/// Backed by an inline `SmallVec` sized for the catalogue's widest template
/// (four placeholders), so typical construction never touches the heap for
/// the key/value table itself.
///
/// Duplicate keys are last-write-wins, matching what a mapping literal would
/// do.
#[derive(Debug, Clone, Default)]
pub struct ErrorParams {
    entries: SmallVec<[(&'static str, Cow<'static, str>); 4]>,
}

impl ErrorParams {
    /// Create an empty parameter set.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: SmallVec::new(),
        }
    }

    /// Set a named value, replacing any earlier value under the same key.
    ///
    /// Builder-style so parameter sets compose inline:
    ///
    /// ```rust
    /// # use zvmsdk_errors::ErrorParams;
    /// let p = ErrorParams::new().set("api", "CreateGuest").set("expected", "2");
    /// assert_eq!(p.get("api"), Some("CreateGuest"));
    /// ```
    #[inline]
    pub fn set(mut self, key: &'static str, value: impl Into<Cow<'static, str>>) -> Self {
        let value = value.into();
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
        self
    }

    /// Look up a named value.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Number of named values supplied.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no values have been supplied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build an [`ErrorParams`] from identifier keys and `Display` values.
///
/// Values are rendered once, at construction. Keys are bare identifiers so a
/// call site mirrors the template it fills:
///
/// ```rust
/// # use zvmsdk_errors::params;
/// let p = params! { api: "CreateGuest", expected: 2, provided: 3 };
/// assert_eq!(p.get("expected"), Some("2"));
/// ```
#[macro_export]
macro_rules! params {
    () => { $crate::ErrorParams::new() };
    ( $( $key:ident : $value:expr ),+ $(,)? ) => {{
        let mut p = $crate::ErrorParams::new();
        $( p = p.set(stringify!($key), $value.to_string()); )+
        p
    }};
}

// ============================================================================
// Category Definition Macros
// ============================================================================

/// Define a single category as a const static.
///
/// Prefer [`define_categories!`], which also emits the registry slice; this
/// single-entry form is the canonical expansion the batch macro wraps.
#[macro_export]
macro_rules! define_category {
    (
        $(#[$meta:meta])*
        $name:ident, $key:literal, $overall_rc:expr, $rc:expr, $bound:expr, $desc:literal,
        { $( $rs:literal => $msg:literal ),* $(,)? }
    ) => {
        $(#[$meta])*
        pub const $name: $crate::CategoryDef = $crate::CategoryDef::__internal_new(
            $key,
            $overall_rc,
            $rc,
            $bound,
            &[ $( ($rs, $msg) ),* ],
            $desc,
        );
    };
}

/// Define the whole category table in declaration order.
///
/// Emits one const [`CategoryDef`](crate::CategoryDef) per entry plus a
/// `CATALOG` slice holding every entry in declaration order; that order is
/// the lookup and documentation order.
///
/// # Example
///
/// ```rust
/// use zvmsdk_errors::define_categories;
///
/// define_categories! {
///     /// Operation on Tape failed
///     TAPE = ("tape", 300, 300, None, "Operation on Tape failed") {
///         1 => "Tape drive '{drive}' is offline",
///     }
/// }
///
/// assert_eq!(TAPE.key(), "tape");
/// assert_eq!(CATALOG.len(), 1);
/// ```
#[macro_export]
macro_rules! define_categories {
    (
        $(
            $(#[$meta:meta])*
            $name:ident = ($key:literal, $overall_rc:expr, $rc:expr, $bound:expr, $desc:literal) {
                $( $rs:literal => $msg:literal ),* $(,)?
            }
        )+
    ) => {
        $(
            $crate::define_category!(
                $(#[$meta])*
                $name, $key, $overall_rc, $rc, $bound, $desc,
                { $( $rs => $msg ),* }
            );
        )+

        /// Every category in the table, in declaration order.
        pub static CATALOG: &[&$crate::CategoryDef] = &[ $( &$name ),+ ];
    };
}

// ============================================================================
// Tests
// ============================================================================
