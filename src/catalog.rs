//! Category records and error-tuple construction.
//!
//! Every error the SDK reports is a tuple of four integers plus an optional
//! message:
//!
//! - `overallRC` classifies the broad error family (100 invalid input,
//!   101 socket, 300 module-specific, 400 invalid API name, 404 not-exist,
//!   409 conflict, 410 deleted, 500 internal);
//! - `modID` names the module that raised or owns the error;
//! - `rc` is the secondary, category-specific return code. Every current
//!   category sets it equal to `overallRC`, but the field is carried
//!   independently end to end so a future category may diverge;
//! - `rs` is the reason code, the finest-grained discriminator, and keys the
//!   message-template lookup.
//!
//! A [`CategoryDef`] owns one base template (`overallRC`, optional bound
//! module, `rc`), one reason map, and a one-line description used by the
//! documentation generator. [`build_error`] combines a category, a module,
//! a reason code, and named parameters into a [`ResolvedError`].
//!
//! # Governance
//!
//! Category definitions are const statics declared through
//! [`define_categories!`](crate::define_categories); the const constructor
//! validates each entry (non-zero base codes, non-empty templates, unique
//! `rs` keys) so a malformed table is a compile error, not a runtime
//! surprise.

use crate::convenience::ErrorParams;
use crate::registry::{DEFAULT_MODULE, Module};
use crate::template;
use crate::CatalogError;
use std::fmt;

// ============================================================================
// Category Definition (Frozen Table Entry)
// ============================================================================

/// One category of the return-code catalogue.
///
/// # Compile-time Guarantees
///
/// All categories are defined as const statics, providing:
/// - non-zero `overallRC` and `rc`;
/// - every registered reason template non-empty;
/// - unique `rs` keys within the category.
///
/// # No-Copy/No-Clone Semantics
///
/// Like the module registry, category definitions are identity: they exist
/// only as const statics and are used by `&'static` reference.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct CategoryDef {
    key: &'static str,
    overall_rc: u16,
    rc: u16,
    bound_module: Option<&'static Module>,
    reasons: &'static [(u16, &'static str)],
    description: &'static str,
}

impl CategoryDef {
    /// Internal constructor - use through
    /// [`define_categories!`](crate::define_categories).
    ///
    /// # Panics
    ///
    /// Panics (at compile time in const contexts) if `overallRC` or `rc` is
    /// zero, a reason template is empty, or two reasons share an `rs` key.
    #[doc(hidden)]
    pub const fn __internal_new(
        key: &'static str,
        overall_rc: u16,
        rc: u16,
        bound_module: Option<&'static Module>,
        reasons: &'static [(u16, &'static str)],
        description: &'static str,
    ) -> Self {
        assert!(!key.is_empty(), "category key must be non-empty");
        assert!(overall_rc > 0, "overallRC must be non-zero");
        assert!(rc > 0, "rc must be non-zero");

        let mut i = 0;
        while i < reasons.len() {
            assert!(!reasons[i].1.is_empty(), "reason template must be non-empty");
            let mut j = i + 1;
            while j < reasons.len() {
                assert!(reasons[i].0 != reasons[j].0, "duplicate rs key in category");
                j += 1;
            }
            i += 1;
        }

        Self {
            key,
            overall_rc,
            rc,
            bound_module,
            reasons,
            description,
        }
    }

    /// The symbolic category key (`"input"`, `"guest"`, `"notExist"`, ...).
    #[inline]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// The overall return code classifying the error family.
    #[inline]
    pub const fn overall_rc(&self) -> u16 {
        self.overall_rc
    }

    /// The category's secondary return code.
    #[inline]
    pub const fn rc(&self) -> u16 {
        self.rc
    }

    /// The pre-bound module, when the category owns one. `None` means the
    /// caller supplies the module at resolution time (or gets the `zvmsdk`
    /// default).
    #[inline]
    pub const fn bound_module(&self) -> Option<&'static Module> {
        self.bound_module
    }

    /// The registered reason map. May be empty by design: open-ended
    /// categories let callers mint module-specific `rs` values.
    #[inline]
    pub const fn reasons(&self) -> &'static [(u16, &'static str)] {
        self.reasons
    }

    /// One-line description, used only for documentation generation.
    #[inline]
    pub const fn description(&self) -> &'static str {
        self.description
    }

    /// The message template registered for a reason code, if any.
    #[inline]
    pub fn reason_template(&self, rs: u16) -> Option<&'static str> {
        self.reasons
            .iter()
            .find(|(code, _)| *code == rs)
            .map(|(_, template)| *template)
    }

    /// Build a [`ResolvedError`] from this category.
    ///
    /// Module resolution: the bound module when the category has one (a
    /// supplied name must then resolve to the same module), otherwise the
    /// supplied name, otherwise the `zvmsdk` default.
    ///
    /// `rs` need not be registered; when no template exists the result
    /// carries no message and the caller supplies its own.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::UnknownModule`] - supplied name not registered;
    /// - [`CatalogError::ModuleMismatch`] - supplied name resolves to a
    ///   module other than the bound one;
    /// - [`CatalogError::MissingPlaceholder`] - the template for `rs` names
    ///   a value `params` does not supply.
    pub fn build(
        &self,
        module: Option<&str>,
        rs: u16,
        params: &ErrorParams,
    ) -> Result<ResolvedError, CatalogError> {
        let mod_id = match (self.bound_module, module) {
            (Some(bound), None) => bound.id(),
            (Some(bound), Some(name)) => {
                let supplied = Module::resolve(name)?;
                if supplied.id() != bound.id() {
                    return Err(CatalogError::ModuleMismatch {
                        category: self.key,
                        bound: bound.name(),
                        supplied: name.to_string(),
                    });
                }
                bound.id()
            }
            (None, Some(name)) => Module::resolve(name)?.id(),
            (None, None) => DEFAULT_MODULE.id(),
        };

        let message = match self.reason_template(rs) {
            Some(tpl) => {
                let rendered = template::render(tpl, params).map_err(|placeholder| {
                    CatalogError::MissingPlaceholder {
                        category: self.key,
                        rs,
                        placeholder,
                    }
                })?;
                Some(rendered)
            }
            None => None,
        };

        Ok(ResolvedError {
            overall_rc: self.overall_rc,
            mod_id,
            rc: self.rc,
            rs,
            message,
        })
    }
}

// ============================================================================
// Catalogue Operations
// ============================================================================

/// Look up a category by its symbolic key.
///
/// # Errors
///
/// Fails with [`CatalogError::UnknownCategory`] for an unregistered key;
/// like an unknown module name, this is a caller bug to surface, never to
/// paper over.
pub fn lookup(key: &str) -> Result<&'static CategoryDef, CatalogError> {
    for &category in crate::definitions::CATALOG {
        if category.key() == key {
            return Ok(category);
        }
    }
    Err(CatalogError::UnknownCategory {
        key: key.to_string(),
    })
}

/// Build a [`ResolvedError`] from a category key, an optional module name, a
/// reason code, and named message parameters.
///
/// This is [`lookup`] followed by [`CategoryDef::build`]; see the latter for
/// the resolution rules and error conditions.
///
/// # Example
///
/// ```rust
/// use zvmsdk_errors::{build_error, params};
///
/// let err = build_error(
///     "input",
///     None,
///     1,
///     &params! { api: "CreateGuest", expected: 2, provided: 3 },
/// ).unwrap();
///
/// assert_eq!(err.overall_rc(), 100);
/// assert_eq!(err.mod_id(), 400);
/// assert_eq!(err.rc(), 100);
/// assert_eq!(err.rs(), 1);
/// ```
pub fn build_error(
    category: &str,
    module: Option<&str>,
    rs: u16,
    params: &ErrorParams,
) -> Result<ResolvedError, CatalogError> {
    lookup(category)?.build(module, rs, params)
}

// ============================================================================
// Resolved Error (Caller-Facing Result)
// ============================================================================

/// A fully populated structured error: the four-integer tuple plus the
/// rendered message, when the category registers one for the reason code.
///
/// Immutable once built; the catalogue does not persist or log it - that is
/// the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedError {
    overall_rc: u16,
    mod_id: u16,
    rc: u16,
    rs: u16,
    message: Option<String>,
}

impl ResolvedError {
    /// The overall return code.
    #[inline]
    pub const fn overall_rc(&self) -> u16 {
        self.overall_rc
    }

    /// The owning module's identifier.
    #[inline]
    pub const fn mod_id(&self) -> u16 {
        self.mod_id
    }

    /// The secondary return code.
    #[inline]
    pub const fn rc(&self) -> u16 {
        self.rc
    }

    /// The reason code.
    #[inline]
    pub const fn rs(&self) -> u16 {
        self.rs
    }

    /// The rendered message, absent for reason codes the category leaves to
    /// the caller.
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for ResolvedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "overallRC: {}, modID: {}, rc: {}, rs: {}",
            self.overall_rc, self.mod_id, self.rc, self.rs
        )?;
        if let Some(msg) = &self.message {
            write!(f, ", errmsg: {}", msg)?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
