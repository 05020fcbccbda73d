use std::fmt;

use serde::Serialize;

/// Semantic type an annotated column is exposed as in the symbol index.
///
/// The variant names are the type names the index shows as an attribute's
/// return type (`@return [Decimal]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SemanticType {
    Decimal,
    Int,
    Date,
    DateTime,
    String,
    Bool,
}

impl SemanticType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Decimal => "Decimal",
            Self::Int => "Int",
            Self::Date => "Date",
            Self::DateTime => "DateTime",
            Self::String => "String",
            Self::Bool => "Bool",
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable table from a declared column type token to its semantic type.
///
/// Lookups are exact and case-sensitive. A token without an entry is not an
/// error; the attribute carrying it is simply not indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMapping {
    entries: &'static [(&'static str, SemanticType)],
}

impl TypeMapping {
    /// Column types written by the Rails schema annotator.
    pub const RAILS: TypeMapping = TypeMapping::new(&[
        ("decimal", SemanticType::Decimal),
        ("integer", SemanticType::Int),
        ("date", SemanticType::Date),
        ("datetime", SemanticType::DateTime),
        ("string", SemanticType::String),
        ("boolean", SemanticType::Bool),
    ]);

    pub const fn new(entries: &'static [(&'static str, SemanticType)]) -> Self {
        Self { entries }
    }

    pub fn resolve(&self, token: &str) -> Option<SemanticType> {
        self.entries
            .iter()
            .find(|(declared, _)| *declared == token)
            .map(|(_, semantic)| *semantic)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.resolve(token).is_some()
    }

    /// Declared type tokens in table order.
    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(declared, _)| *declared)
    }
}

impl Default for TypeMapping {
    fn default() -> Self {
        Self::RAILS
    }
}
