//! Column schema for feature matrices.
//!
//! A [`Schema`] maps column names to column indices. It exists so that an
//! upstream feature-engineering collaborator can hand over a matrix together
//! with a stable name-to-index mapping; the balancing components themselves
//! only ever address columns by index.

use std::collections::HashMap;

/// Column names for a feature matrix.
///
/// Columns may be unnamed; name lookup is only available for named columns.
/// Names are expected to be unique - on duplicates, lookup resolves to the
/// first occurrence.
#[derive(Clone, Debug, Default)]
pub struct Schema {
    names: Vec<Option<String>>,
    by_name: HashMap<String, usize>,
}

impl Schema {
    /// Schema of `n_columns` unnamed columns.
    pub fn unnamed(n_columns: usize) -> Self {
        Self {
            names: vec![None; n_columns],
            by_name: HashMap::new(),
        }
    }

    /// Schema from a list of column names, in column order.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<Option<String>> = names.into_iter().map(|n| Some(n.into())).collect();
        let mut by_name = HashMap::with_capacity(names.len());
        for (idx, name) in names.iter().enumerate() {
            if let Some(name) = name {
                by_name.entry(name.clone()).or_insert(idx);
            }
        }
        Self { names, by_name }
    }

    /// Number of columns described by this schema.
    #[inline]
    pub fn n_columns(&self) -> usize {
        self.names.len()
    }

    /// Name of a column, if it has one.
    pub fn name(&self, column: usize) -> Option<&str> {
        self.names.get(column).and_then(|n| n.as_deref())
    }

    /// Index of a named column.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unnamed_schema() {
        let schema = Schema::unnamed(3);
        assert_eq!(schema.n_columns(), 3);
        assert_eq!(schema.name(0), None);
        assert_eq!(schema.column("anything"), None);
    }

    #[test]
    fn named_lookup() {
        let schema = Schema::from_names(["depth", "temp", "wind"]);
        assert_eq!(schema.n_columns(), 3);
        assert_eq!(schema.column("temp"), Some(1));
        assert_eq!(schema.name(2), Some("wind"));
        assert_eq!(schema.column("snowfall"), None);
    }

    #[test]
    fn duplicate_names_resolve_to_first() {
        let schema = Schema::from_names(["a", "b", "a"]);
        assert_eq!(schema.column("a"), Some(0));
    }
}
