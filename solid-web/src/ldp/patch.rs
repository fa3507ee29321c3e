//! SPARQL Update bodies for `PATCH`.

use std::fmt;

/// A SPARQL Update document built from raw triple statements.
///
/// Statements are inserted verbatim (e.g. `<a> <b> <c> .`); they are not
/// validated or escaped.
///
/// ```
/// # use solid_web::SparqlPatch;
/// let patch = SparqlPatch::new(["<a> <b> <c> ."], ["<d> <e> <f> ."]);
/// assert_eq!(
///     patch.to_string(),
///     "DELETE DATA { <a> <b> <c> . } ;\nINSERT DATA { <d> <e> <f> . }"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SparqlPatch {
    deletions: Vec<String>,
    insertions: Vec<String>,
}

impl SparqlPatch {
    /// Build from deletions and insertions, each kept in the given order.
    pub fn new<D, I>(to_delete: D, to_insert: I) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            deletions: to_delete.into_iter().map(Into::into).collect(),
            insertions: to_insert.into_iter().map(Into::into).collect(),
        }
    }

    /// Append a statement to delete.
    pub fn delete(mut self, statement: impl Into<String>) -> Self {
        self.deletions.push(statement.into());
        self
    }

    /// Append a statement to insert.
    pub fn insert(mut self, statement: impl Into<String>) -> Self {
        self.insertions.push(statement.into());
        self
    }

    /// `true` when there is nothing to delete or insert.
    pub fn is_empty(&self) -> bool {
        self.deletions.is_empty() && self.insertions.is_empty()
    }

    fn clauses(&self) -> impl Iterator<Item = (&'static str, &str)> {
        let deletions = self.deletions.iter().map(|s| ("DELETE", s.as_str()));
        let insertions = self.insertions.iter().map(|s| ("INSERT", s.as_str()));
        deletions.chain(insertions)
    }
}

impl fmt::Display for SparqlPatch {
    /// All `DELETE DATA` clauses, then all `INSERT DATA` clauses, joined by `" ;\n"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (op, statement)) in self.clauses().enumerate() {
            if i > 0 {
                f.write_str(" ;\n")?;
            }
            write!(f, "{op} DATA {{ {statement} }}")?;
        }
        Ok(())
    }
}
