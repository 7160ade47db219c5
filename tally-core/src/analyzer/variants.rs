//! Variant dictionary.
//!
//! Folds known spelling variants (Hebrew spellings, transliterations,
//! definite-article forms) onto a single canonical word. The table is small
//! and fixed; anything it misses is left to the consolidation pass.

use rustc_hash::FxHashMap;
use tally_types::VariantError;

/// Built-in `(canonical, variants)` groups.
pub const BUILTIN_VARIANTS: &[(&str, &[&str])] = &[
    ("קאשבק", &["קאש בק", "קש בק", "קשבק", "cashback", "cash back"]),
    ("כרטיס", &["כרטיס אשראי", "הכרטיס"]),
    ("הטבות", &["הטבה"]),
    ("נקודות", &["נקודת"]),
    ("קניות", &["קנייה", "קניה"]),
];

/// Immutable lowercase-variant -> canonical-word lookup.
///
/// Canonical words are not stored as keys; a word with no entry is its own
/// canonical form.
#[derive(Debug, Clone)]
pub struct VariantMap {
    map: FxHashMap<Box<str>, Box<str>>,
}

impl Default for VariantMap {
    fn default() -> Self {
        Self::builtin()
    }
}

impl VariantMap {
    /// The built-in dictionary.
    pub fn builtin() -> Self {
        Self::build(BUILTIN_VARIANTS)
    }

    /// A dictionary that maps nothing.
    pub fn empty() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    /// Builds a dictionary from custom groups.
    ///
    /// Variants and canonical words are lower-cased. Listing the same variant
    /// twice under one canonical word is allowed.
    ///
    /// # Errors
    ///
    /// Returns [`VariantError::Conflict`] if a variant is listed under two
    /// canonical words, and [`VariantError::Chained`] if a canonical word is
    /// itself a variant of a different word (which would break idempotence).
    pub fn from_groups(groups: &[(&str, &[&str])]) -> Result<Self, VariantError> {
        let mut map: FxHashMap<Box<str>, Box<str>> = FxHashMap::default();

        for (canonical, variants) in groups {
            let canonical = canonical.to_lowercase();
            for variant in *variants {
                let variant = variant.to_lowercase();
                match map.get(variant.as_str()) {
                    Some(existing) if &**existing != canonical.as_str() => {
                        return Err(VariantError::Conflict {
                            variant,
                            first: existing.to_string(),
                            second: canonical,
                        });
                    }
                    Some(_) => {}
                    None => {
                        map.insert(variant.into(), canonical.as_str().into());
                    }
                }
            }
        }

        for (canonical, _) in groups {
            let canonical = canonical.to_lowercase();
            if let Some(target) = map.get(canonical.as_str()) {
                if &**target != canonical.as_str() {
                    return Err(VariantError::Chained {
                        canonical,
                        target: target.to_string(),
                    });
                }
            }
        }

        Ok(Self { map })
    }

    fn build(groups: &[(&str, &[&str])]) -> Self {
        let mut map = FxHashMap::default();
        for (canonical, variants) in groups {
            for variant in *variants {
                map.insert(variant.to_lowercase().into(), canonical.to_lowercase().into());
            }
        }
        Self { map }
    }

    /// Number of variant spellings.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if no variants are mapped.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Lower-cases `word` and folds it onto its canonical form.
    pub fn normalize(&self, word: &str) -> String {
        let lowered = word.to_lowercase();
        match self.map.get(lowered.as_str()) {
            Some(canonical) => canonical.to_string(),
            None => lowered,
        }
    }

    /// Lookup for a word that is already lower-case. Does not allocate.
    #[inline]
    pub fn canonical<'a>(&'a self, lowered: &'a str) -> &'a str {
        self.map.get(lowered).map_or(lowered, |c| &**c)
    }
}
