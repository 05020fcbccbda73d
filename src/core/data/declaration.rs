use serde::Serialize;

use super::type_mapping::{SemanticType, TypeMapping};

/// Single-line range in a source unit.
///
/// Lines and columns are 0-indexed. Columns count chars, and `end_col` is
/// exclusive: it equals the char length of the line without its terminator,
/// so slicing the line by `start_col..end_col` gives back the whole line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub source_id: String,
    pub start_line: usize,
    pub start_col: usize,
    pub end_line: usize,
    pub end_col: usize,
}

impl Location {
    /// Location covering all of `text`, found at `line` of `source_id`.
    pub fn whole_line(source_id: impl Into<String>, line: usize, text: &str) -> Self {
        Self {
            source_id: source_id.into(),
            start_line: line,
            start_col: 0,
            end_line: line,
            end_col: text.chars().count(),
        }
    }

    /// The covered text of `line`, or `None` if the columns fall outside it.
    pub fn slice<'a>(&self, line: &'a str) -> Option<&'a str> {
        let byte_at = |col: usize| {
            line.char_indices()
                .map(|(idx, _)| idx)
                .chain(std::iter::once(line.len()))
                .nth(col)
        };
        let start = byte_at(self.start_col)?;
        let end = byte_at(self.end_col)?;
        line.get(start..end)
    }
}

/// Attribute line recognized in an annotation block, before type translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeAnnotation {
    pub name: String,
    /// Raw type token as written in the comment (e.g. `integer`).
    pub declared_type: String,
    pub span: Location,
}

impl AttributeAnnotation {
    /// Translate the declared type, or `None` if the mapping does not know it.
    pub fn resolve(&self, mapping: &TypeMapping) -> Option<DeclaredAttribute> {
        mapping
            .resolve(&self.declared_type)
            .map(|semantic_type| DeclaredAttribute {
                name: self.name.clone(),
                semantic_type,
                location: self.span.clone(),
            })
    }
}

/// Attribute as handed to the symbol index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclaredAttribute {
    pub name: String,
    pub semantic_type: SemanticType,
    pub location: Location,
}

/// All indexed attributes of one model class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDeclaration {
    #[serde(rename = "entityName")]
    pub model_name: String,
    /// In order of appearance in the annotation block.
    pub attributes: Vec<DeclaredAttribute>,
}
