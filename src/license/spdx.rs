/// Upper-cased spellings and the canonical registry key each one resolves to.
const ALIASES: &[(&str, &str)] = &[
    ("MIT", "MIT"),
    ("APACHE-2.0", "Apache-2.0"),
    ("APACHE 2.0", "Apache-2.0"),
    ("GPL-3.0", "GPL-3.0"),
    ("GPL-2.0", "GPL-2.0"),
    ("BSD-3-CLAUSE", "BSD-3-Clause"),
    ("BSD-2-CLAUSE", "BSD-2-Clause"),
    ("ISC", "ISC"),
    ("AGPL-3.0", "AGPL-3.0"),
    ("UNLICENSE", "Unlicense"),
    ("LGPL-3.0", "LGPL-3.0"),
    ("MPL-2.0", "MPL-2.0"),
];

/// Map a raw license string to its canonical registry key.
///
/// The input is trimmed and upper-cased, then matched exactly against a fixed
/// alias table. Anything outside the table, valid SPDX or not, yields `None`.
pub fn normalize(raw: &str) -> Option<&'static str> {
    let folded = raw.trim().to_uppercase();
    if folded.is_empty() {
        return None;
    }
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == folded)
        .map(|(_, canonical)| *canonical)
}

/// Canonical keys the alias table can produce.
#[cfg(test)]
fn canonical_keys() -> impl Iterator<Item = &'static str> {
    ALIASES.iter().map(|(_, canonical)| *canonical)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::license::registry::Registry;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_alternate_spellings() {
        assert_eq!(normalize("apache 2.0"), Some("Apache-2.0"));
        assert_eq!(normalize("Apache-2.0"), Some("Apache-2.0"));
        assert_eq!(normalize("  mit  "), Some("MIT"));
        assert_eq!(normalize("bsd-3-clause"), Some("BSD-3-Clause"));
        assert_eq!(normalize("unlicense"), Some("Unlicense"));
    }

    #[test]
    fn test_normalize_rejects_unlisted() {
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("   "), None);
        assert_eq!(normalize("Foo-Custom-1.0"), None);
        // Valid SPDX, but not in the alias table
        assert_eq!(normalize("0BSD"), None);
        assert_eq!(normalize("MIT OR Apache-2.0"), None);
        // No partial matches
        assert_eq!(normalize("MIT License"), None);
    }

    #[test]
    fn test_alias_targets_resolve_in_registry() {
        let registry = Registry::builtin();
        for key in canonical_keys() {
            assert!(registry.lookup(key).is_some(), "{}", key);
        }
    }

    #[test]
    fn test_canonical_keys_are_fixed_points() {
        for key in canonical_keys() {
            assert_eq!(normalize(key), Some(key));
        }
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(raw in "\\PC{0,24}") {
            if let Some(key) = normalize(&raw) {
                prop_assert_eq!(normalize(key), Some(key));
            }
        }

        #[test]
        fn prop_case_and_padding_do_not_matter(
            idx in 0..ALIASES.len(),
            pad_left in " {0,3}",
            pad_right in " {0,3}",
            lower in any::<bool>(),
        ) {
            let (alias, canonical) = ALIASES[idx];
            let spelled = if lower { alias.to_lowercase() } else { alias.to_string() };
            let raw = format!("{pad_left}{spelled}{pad_right}");
            prop_assert_eq!(normalize(&raw), Some(canonical));
        }
    }
}
