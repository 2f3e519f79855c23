//! Module registry - maps SDK module names to their fixed numeric identifiers.
//!
//! Every error tuple produced by the catalogue carries a `modID` telling the
//! consumer which internal module raised or owns the error. The set of
//! modules and their identifiers is frozen:
//!
//! | ModName   | ModID |
//! |-----------|-------|
//! | smut      | 1     |
//! | guest     | 10    |
//! | network   | 20    |
//! | volume    | 30    |
//! | image     | 40    |
//! | monitor   | 50    |
//! | sdkserver | 100   |
//! | sdkclient | 110   |
//! | zvmsdk    | 400   |
//!
//! `zvmsdk` is the designated default: it is used whenever a category leaves
//! the module unbound and the caller supplies none.
//!
//! # Governance
//!
//! Modules are locked at compile time with no runtime construction: the
//! private field prevents user construction, and only the const instances in
//! [`modules`] exist. Adding a module means extending this table, never
//! configuring one at runtime.
//!
//! # Zero-Allocation Guarantee
//!
//! Resolution is a linear scan over a nine-entry const slice with no heap
//! use on the success path; only the failure path allocates, to carry the
//! offending name back to the caller.

use crate::CatalogError;

/// A registered SDK module with its fixed numeric identifier.
///
/// # No-Copy, No-Move Semantics
///
/// This type does not implement Copy or Clone and cannot be constructed at
/// runtime. Modules exist only as const statics in [`modules`]; all usage is
/// by `&'static` reference, making identity comparison a pointer-free
/// id/name comparison with no governance risk.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Module {
    name: &'static str,
    id: u16,
    _private: (),
}

impl Module {
    /// Internal constructor - not for user code, enforces const-only usage.
    #[doc(hidden)]
    pub const fn __internal_new(name: &'static str, id: u16) -> Self {
        Self {
            name,
            id,
            _private: (),
        }
    }

    /// The registered module name (`"guest"`, `"sdkserver"`, ...).
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The fixed numeric identifier carried as `modID` in error tuples.
    #[inline]
    pub const fn id(&self) -> u16 {
        self.id
    }

    /// Look up a module by its registered name.
    ///
    /// # Errors
    ///
    /// Fails with [`CatalogError::UnknownModule`] when the name is not
    /// registered. This is always a caller bug; callers must fail fast
    /// rather than guess a fallback module.
    pub fn resolve(name: &str) -> Result<&'static Module, CatalogError> {
        for &module in REGISTRY {
            if module.name == name {
                return Ok(module);
            }
        }
        Err(CatalogError::UnknownModule {
            name: name.to_string(),
        })
    }
}

/// Canonical module instances.
///
/// These are the **only** `Module` values that can exist. The private field
/// in [`Module`] prevents runtime construction.
pub mod modules {
    use super::Module;

    /// SMUT sub-layer (the privileged systems-management utility under the SDK).
    pub const SMUT: Module = Module::__internal_new("smut", 1);

    /// Guest (virtual machine) management.
    pub const GUEST: Module = Module::__internal_new("guest", 10);

    /// Network and vswitch management.
    pub const NETWORK: Module = Module::__internal_new("network", 20);

    /// Volume management.
    pub const VOLUME: Module = Module::__internal_new("volume", 30);

    /// Image management.
    pub const IMAGE: Module = Module::__internal_new("image", 40);

    /// Monitoring and inspection.
    pub const MONITOR: Module = Module::__internal_new("monitor", 50);

    /// SDK server side of the client/server transport.
    pub const SDKSERVER: Module = Module::__internal_new("sdkserver", 100);

    /// SDK client side of the client/server transport.
    pub const SDKCLIENT: Module = Module::__internal_new("sdkclient", 110);

    /// General SDK layer; the default module when none is specified.
    pub const ZVMSDK: Module = Module::__internal_new("zvmsdk", 400);
}

/// Every registered module, in registry order.
pub static REGISTRY: &[&Module] = &[
    &modules::SMUT,
    &modules::GUEST,
    &modules::NETWORK,
    &modules::VOLUME,
    &modules::IMAGE,
    &modules::MONITOR,
    &modules::SDKSERVER,
    &modules::SDKCLIENT,
    &modules::ZVMSDK,
];

/// The module used when a category leaves `modID` unbound and the caller
/// supplies no module name.
pub static DEFAULT_MODULE: &Module = &modules::ZVMSDK;

/// Resolve a module name to its fixed numeric identifier.
///
/// # Errors
///
/// Fails with [`CatalogError::UnknownModule`] for any unregistered name.
///
/// # Example
///
/// ```rust
/// use zvmsdk_errors::resolve_module_id;
///
/// assert_eq!(resolve_module_id("guest").unwrap(), 10);
/// assert!(resolve_module_id("tape").is_err());
/// ```
#[inline]
pub fn resolve_module_id(name: &str) -> Result<u16, CatalogError> {
    Module::resolve(name).map(Module::id)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Registry Governance Tests
    // ========================================================================

    #[test]
    fn modules_are_frozen_at_compile_time() {
        // This compiles - using const module
        const _M: &Module = &modules::GUEST;

        // This would NOT compile (module cannot be constructed):
        // let m = Module { name: "fake", id: 999, _private: () };
    }

    #[test]
    fn every_identifier_is_unique() {
        for (i, a) in REGISTRY.iter().enumerate() {
            for b in &REGISTRY[i + 1..] {
                assert_ne!(a.id(), b.id(), "{} and {} share an id", a.name(), b.name());
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn default_module_is_zvmsdk() {
        assert_eq!(DEFAULT_MODULE.name(), "zvmsdk");
        assert_eq!(DEFAULT_MODULE.id(), 400);
    }

    // ========================================================================
    // Resolution Tests
    // ========================================================================

    #[test]
    fn documented_identifiers_resolve() {
        let expected = [
            ("smut", 1),
            ("guest", 10),
            ("network", 20),
            ("volume", 30),
            ("image", 40),
            ("monitor", 50),
            ("sdkserver", 100),
            ("sdkclient", 110),
            ("zvmsdk", 400),
        ];
        for (name, id) in expected {
            assert_eq!(resolve_module_id(name).unwrap(), id, "module {}", name);
        }
    }

    #[test]
    fn unregistered_name_fails_fast() {
        let err = resolve_module_id("tape").unwrap_err();
        assert!(matches!(err, CatalogError::UnknownModule { ref name } if name == "tape"));
    }

    #[test]
    fn resolution_is_case_sensitive() {
        assert!(resolve_module_id("Guest").is_err());
        assert!(resolve_module_id("GUEST").is_err());
    }
}
