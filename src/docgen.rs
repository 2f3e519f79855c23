//! Offline documentation generation over the catalogue.
//!
//! The catalogue's descriptions and reason templates double as the source of
//! the SDK's human-facing error documentation. This module renders them as
//! markdown: the module-identifier table first, then one section per
//! category in declaration order. Output is deterministic, so generated
//! documentation can be committed and diffed.
//!
//! This is a read-only, offline consumer of the tables - no runtime path
//! depends on it.

use crate::definitions::CATALOG;
use crate::registry::REGISTRY;
use std::fmt;

/// Write the catalogue documentation into any [`fmt::Write`] sink.
pub fn write_markdown(out: &mut impl fmt::Write) -> fmt::Result {
    writeln!(out, "# SDK return code catalogue")?;
    writeln!(out)?;

    writeln!(out, "## Modules")?;
    writeln!(out)?;
    writeln!(out, "| ModName | ModID |")?;
    writeln!(out, "|---------|-------|")?;
    for module in REGISTRY {
        writeln!(out, "| {} | {} |", module.name(), module.id())?;
    }
    writeln!(out)?;

    writeln!(out, "## Categories")?;
    for category in CATALOG {
        writeln!(out)?;
        writeln!(out, "### `{}` - {}", category.key(), category.description())?;
        writeln!(out)?;
        match category.bound_module() {
            Some(module) => writeln!(
                out,
                "overallRC: {}, rc: {}, modID: {} ({})",
                category.overall_rc(),
                category.rc(),
                module.id(),
                module.name(),
            )?,
            None => writeln!(
                out,
                "overallRC: {}, rc: {}, modID: supplied by the caller",
                category.overall_rc(),
                category.rc(),
            )?,
        }
        writeln!(out)?;
        if category.reasons().is_empty() {
            writeln!(out, "Reason codes are minted by the calling module.")?;
        } else {
            writeln!(out, "| rs | message |")?;
            writeln!(out, "|----|---------|")?;
            for (rs, template) in category.reasons() {
                writeln!(out, "| {} | {} |", rs, template)?;
            }
        }
    }
    Ok(())
}

/// Render the catalogue documentation to a `String`.
pub fn render_markdown() -> String {
    let mut out = String::new();
    // fmt::Write on String is infallible
    let _ = write_markdown(&mut out);
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_every_category_and_module() {
        let doc = render_markdown();
        for category in CATALOG {
            assert!(doc.contains(category.key()), "missing {}", category.key());
            assert!(doc.contains(category.description()));
        }
        for module in REGISTRY {
            assert!(doc.contains(module.name()));
        }
    }

    #[test]
    fn templates_appear_unrendered() {
        let doc = render_markdown();
        assert!(doc.contains("Object '{object}' does not exist."));
        assert!(doc.contains("{api}"));
    }

    #[test]
    fn open_ended_categories_are_marked() {
        let doc = render_markdown();
        assert!(doc.contains("Reason codes are minted by the calling module."));
    }

    #[test]
    fn output_is_deterministic() {
        assert_eq!(render_markdown(), render_markdown());
    }
}
