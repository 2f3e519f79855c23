//! # zvmsdk-errors
//!
//! Structured return-code catalogue for a z/VM virtualization-management
//! SDK.
//!
//! Every failure the SDK reports - internally between modules and across
//! its client/server boundary - is a tuple of four integers plus an
//! optional message:
//!
//! - **overallRC**: top-level return code classifying the broad error
//!   family across the whole SDK;
//! - **modID**: which internal module raised or owns the error;
//! - **rc**: secondary, category-specific return code (mirrors `overallRC`
//!   in every current category, carried independently regardless);
//! - **rs**: reason code, the finest-grained discriminator, which keys the
//!   message-template lookup.
//!
//! This crate is the single source of truth for those tuples: the module
//! registry, the category table with its reason-message templates, and the
//! reclassification rules that decide when a sub-layer ("smut") triple must
//! be re-raised as an internal error. There is no runtime state - every
//! table is a const static, every operation a pure read, safe from any
//! number of threads.
//!
//! ## Quick Start
//!
//! ```rust
//! use zvmsdk_errors::{build_error, params};
//!
//! let err = build_error(
//!     "input",
//!     None,
//!     1,
//!     &params! { api: "CreateGuest", expected: 2, provided: 3 },
//! ).unwrap();
//!
//! assert_eq!(err.overall_rc(), 100);
//! assert_eq!(err.mod_id(), 400); // zvmsdk default
//! assert_eq!(
//!     err.message(),
//!     Some("Invalid API arg count, API: CreateGuest, 2 expected while 3 provided.")
//! );
//! ```
//!
//! ## Module Binding
//!
//! Some categories pre-bind their module (`guest` errors always carry the
//! guest module id); others leave it to the caller, falling back to the
//! `zvmsdk` default. Supplying a module name for a bound category is a
//! contract violation unless it names the bound module:
//!
//! ```rust
//! use zvmsdk_errors::{build_error, params, CatalogError};
//!
//! let err = build_error("guest", Some("network"), 1, &params! { msg: "x" });
//! assert!(matches!(err, Err(CatalogError::ModuleMismatch { .. })));
//! ```
//!
//! ## Sub-layer Reclassification
//!
//! ```rust
//! use zvmsdk_errors::{classify_sub_layer_error, internalize};
//!
//! // This smut triple must not reach the caller verbatim.
//! assert!(classify_sub_layer_error(4, 4, 5));
//!
//! let err = internalize(4, 4, 5, Some("guest"), "unexpected smut output")
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(err.overall_rc(), 500);
//! ```
//!
//! ## Contract Violations
//!
//! All four local error conditions - [`CatalogError::UnknownModule`],
//! [`CatalogError::UnknownCategory`], [`CatalogError::ModuleMismatch`],
//! [`CatalogError::MissingPlaceholder`] - are programming errors in the
//! calling code, surfaced immediately at the call boundary. There is no
//! silent defaulting and no partially built result; they exist to catch
//! integration bugs during development, not to model runtime failures of
//! the surrounding SDK.
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` on [`ResolvedError`] for the SDK's
//!   client/server boundary.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::fmt;
use std::result;

pub mod catalog;
pub mod convenience;
pub mod definitions;
pub mod docgen;
pub mod reclassify;
pub mod registry;
pub(crate) mod template;

pub use catalog::*;
pub use convenience::*;
pub use definitions::CATALOG;
pub use reclassify::*;
pub use registry::*;

/// Type alias for Results using the catalogue's error type.
pub type Result<T> = result::Result<T, CatalogError>;

// ============================================================================
// Local Error Taxonomy
// ============================================================================

/// Contract violations detectable at the catalogue's call boundary.
///
/// Each variant is a caller bug, not a runtime failure mode: fail fast, do
/// not retry, do not guess a fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The module name is not in the registry.
    UnknownModule {
        /// The unregistered name as supplied.
        name: String,
    },
    /// The category key is not in the catalogue.
    UnknownCategory {
        /// The unregistered key as supplied.
        key: String,
    },
    /// A module name was supplied for a category that pre-binds a different
    /// module.
    ModuleMismatch {
        /// The category whose binding was contradicted.
        category: &'static str,
        /// The module the category binds.
        bound: &'static str,
        /// The conflicting name as supplied.
        supplied: String,
    },
    /// A message template names a value the caller did not supply.
    MissingPlaceholder {
        /// The category owning the template.
        category: &'static str,
        /// The reason code keying the template.
        rs: u16,
        /// The placeholder with no supplied value.
        placeholder: String,
    },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownModule { name } => {
                write!(f, "module '{}' is not registered", name)
            }
            Self::UnknownCategory { key } => {
                write!(f, "error category '{}' is not registered", key)
            }
            Self::ModuleMismatch {
                category,
                bound,
                supplied,
            } => {
                write!(
                    f,
                    "category '{}' is bound to module '{}' but module '{}' was supplied",
                    category, bound, supplied
                )
            }
            Self::MissingPlaceholder {
                category,
                rs,
                placeholder,
            } => {
                write!(
                    f,
                    "no value supplied for placeholder '{}' (category '{}', rs {})",
                    placeholder, category, rs
                )
            }
        }
    }
}

impl std::error::Error for CatalogError {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn display_names_the_offending_values() {
        let err = CatalogError::UnknownModule {
            name: "tape".to_string(),
        };
        assert_eq!(err.to_string(), "module 'tape' is not registered");

        let err = CatalogError::ModuleMismatch {
            category: "guest",
            bound: "guest",
            supplied: "network".to_string(),
        };
        assert!(err.to_string().contains("guest"));
        assert!(err.to_string().contains("network"));

        let err = CatalogError::MissingPlaceholder {
            category: "input",
            rs: 1,
            placeholder: "expected".to_string(),
        };
        assert!(err.to_string().contains("'expected'"));
        assert!(err.to_string().contains("rs 1"));
    }

    #[test]
    fn catalog_error_is_a_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&CatalogError::UnknownCategory {
            key: "x".to_string(),
        });
    }
}
