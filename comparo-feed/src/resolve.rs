use crate::tabular::RawRow;
use crate::text::KeyNormalization;

/// Looks up a field by its accepted column names.
///
/// Synonyms are normalized with the same rules as the headers they are
/// matched against, so `"Note Globale"` in a synonym table matches a
/// `note_globale` header and vice versa.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldResolver {
    normalization: KeyNormalization,
}

impl FieldResolver {
    pub fn new(normalization: KeyNormalization) -> Self {
        Self { normalization }
    }

    pub fn normalization(&self) -> KeyNormalization {
        self.normalization
    }

    /// First synonym (in priority order) with a non-empty value, trimmed.
    ///
    /// Returns `None` rather than `""` so callers can apply field defaults.
    pub fn resolve<'r>(&self, row: &'r RawRow, synonyms: &[&str]) -> Option<&'r str> {
        synonyms.iter().find_map(|synonym| {
            let key = self.normalization.apply(synonym);
            row.get(&key).map(str::trim).filter(|v| !v.is_empty())
        })
    }

    pub fn resolve_owned(&self, row: &RawRow, synonyms: &[&str]) -> Option<String> {
        self.resolve(row, synonyms).map(String::from)
    }
}

#[cfg(test)]
#[path = "tests/resolve_tests.rs"]
mod tests;
