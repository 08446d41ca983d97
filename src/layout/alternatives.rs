// SPDX-License-Identifier: GPL-3.0-only

//! Bashkir alternative characters reachable by long-press.
//!
//! Each mapped base letter of the Cyrillic layout carries one or more
//! Bashkir-specific variants. The table is keyed by the lowercased base
//! grapheme; uppercase variants are derived mechanically at lookup time so
//! the table never stores both cases.

use std::collections::HashMap;

/// Alternatives for one base grapheme, in both cases.
///
/// `lowercase` and `uppercase` always have equal length, and
/// `uppercase[i]` is the uppercase fold of `lowercase[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlternativesEntry {
    /// Lowercase variants in presentation order.
    pub lowercase: Vec<String>,
    /// Uppercase variants, derived from `lowercase`.
    pub uppercase: Vec<String>,
}

impl AlternativesEntry {
    /// Returns the variant list matching the given case context.
    pub fn for_case(&self, uppercase: bool) -> &[String] {
        if uppercase {
            &self.uppercase
        } else {
            &self.lowercase
        }
    }
}

/// Static base-grapheme to Bashkir-variant mapping.
#[derive(Debug, Clone)]
pub struct AlternativeCharacters {
    mapping: HashMap<String, Vec<String>>,
}

impl AlternativeCharacters {
    /// Creates a provider from an explicit lowercase mapping.
    pub fn new(mapping: HashMap<String, Vec<String>>) -> Self {
        Self { mapping }
    }

    /// Looks up the alternatives for a base grapheme.
    ///
    /// The lookup is case-insensitive (keyed by the lowercased grapheme) and
    /// returns `None` for graphemes with no mapped variant. Pure function;
    /// safe to call from anywhere.
    pub fn lookup(&self, base: &str) -> Option<AlternativesEntry> {
        let lowercase = self.mapping.get(&base.to_lowercase())?.clone();
        let uppercase = lowercase.iter().map(|s| s.to_uppercase()).collect();
        Some(AlternativesEntry {
            lowercase,
            uppercase,
        })
    }

    /// Returns `true` if the grapheme has any mapped alternatives.
    pub fn has_alternatives(&self, base: &str) -> bool {
        self.mapping.contains_key(&base.to_lowercase())
    }
}

impl Default for AlternativeCharacters {
    /// The fixed ten-entry Bashkir mapping.
    fn default() -> Self {
        let pairs: [(&str, &[&str]); 10] = [
            ("з", &["ҙ"]),
            ("с", &["ҫ"]),
            ("а", &["ә"]),
            ("у", &["ү"]),
            ("х", &["һ"]),
            ("о", &["ө"]),
            ("н", &["ң"]),
            ("г", &["ғ"]),
            ("к", &["ҡ"]),
            ("ь", &["ъ"]),
        ];

        let mapping = pairs
            .into_iter()
            .map(|(base, variants)| {
                (
                    base.to_string(),
                    variants.iter().map(|v| v.to_string()).collect(),
                )
            })
            .collect();

        Self { mapping }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// The default table maps every documented Bashkir variant.
    #[test]
    fn test_bashkir_alternatives() {
        let provider = AlternativeCharacters::default();
        assert_eq!(
            provider.lookup("з").unwrap().lowercase,
            vec!["ҙ".to_string()]
        );
        assert_eq!(
            provider.lookup("с").unwrap().lowercase,
            vec!["ҫ".to_string()]
        );
        assert_eq!(
            provider.lookup("к").unwrap().lowercase,
            vec!["ҡ".to_string()]
        );
        assert_eq!(
            provider.lookup("ь").unwrap().lowercase,
            vec!["ъ".to_string()]
        );
        assert!(provider.lookup("p").is_none());
        assert!(provider.lookup("ж").is_none());
    }

    /// Lookup is case-insensitive.
    #[test]
    fn test_case_insensitive_lookup() {
        let provider = AlternativeCharacters::default();
        assert_eq!(provider.lookup("К"), provider.lookup("к"));
        assert_eq!(provider.lookup("Н"), provider.lookup("н"));
    }

    /// Uppercase variants are element-wise folds of the lowercase list.
    #[test]
    fn test_uppercase_mechanically_derived() {
        let provider = AlternativeCharacters::default();
        for base in ["з", "с", "а", "у", "х", "о", "н", "г", "к", "ь"] {
            let entry = provider.lookup(base).unwrap();
            assert_eq!(entry.lowercase.len(), entry.uppercase.len());
            for (lower, upper) in entry.lowercase.iter().zip(&entry.uppercase) {
                assert_eq!(upper, &lower.to_uppercase());
            }
        }

        // Spot-check a concrete fold.
        let entry = provider.lookup("н").unwrap();
        assert_eq!(entry.uppercase, vec!["Ң".to_string()]);
    }

    /// `for_case` selects the matching variant list.
    #[test]
    fn test_for_case_selection() {
        let provider = AlternativeCharacters::default();
        let entry = provider.lookup("г").unwrap();
        assert_eq!(entry.for_case(false), ["ғ".to_string()]);
        assert_eq!(entry.for_case(true), ["Ғ".to_string()]);
    }

    /// `has_alternatives` agrees with `lookup`.
    #[test]
    fn test_has_alternatives() {
        let provider = AlternativeCharacters::default();
        assert!(provider.has_alternatives("о"));
        assert!(provider.has_alternatives("О"));
        assert!(!provider.has_alternatives("ы"));
    }
}
