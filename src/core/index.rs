//! Declaration sinks and the in-memory symbol index.

use std::collections::BTreeMap;

use rayon::prelude::*;

use super::{
    data::{DeclaredAttribute, Location, ModelDeclaration, SemanticType},
    loader::SourceUnit,
    observer::ParseObserver,
    parsers::AnnotationParser,
};

/// Receives the declarations produced for each source unit.
pub trait DeclarationSink {
    fn accept(&mut self, declarations: Vec<ModelDeclaration>);
}

impl DeclarationSink for Vec<ModelDeclaration> {
    fn accept(&mut self, declarations: Vec<ModelDeclaration>) {
        self.extend(declarations);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinScope {
    Instance,
}

/// An attribute reader registered on a model class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributePin {
    pub name: String,
    /// Owning model class.
    pub namespace: String,
    pub return_type: SemanticType,
    pub location: Location,
    pub scope: PinScope,
    pub attribute: bool,
}

impl AttributePin {
    pub fn new(namespace: &str, attribute: DeclaredAttribute) -> Self {
        Self {
            name: attribute.name,
            namespace: namespace.to_string(),
            return_type: attribute.semantic_type,
            location: attribute.location,
            scope: PinScope::Instance,
            attribute: true,
        }
    }

    /// YARD doc carried by the pin.
    pub fn comments(&self) -> String {
        format!("@return [{}]", self.return_type)
    }

    /// `Account#balance`
    pub fn path(&self) -> String {
        format!("{}#{}", self.namespace, self.name)
    }
}

/// Attribute pins keyed by model name.
///
/// A model declared in several units keeps its attributes in registration
/// order.
#[derive(Debug, Default)]
pub struct SymbolIndex {
    models: BTreeMap<String, Vec<AttributePin>>,
}

impl SymbolIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, declaration: ModelDeclaration) {
        let pins = self
            .models
            .entry(declaration.model_name.clone())
            .or_default();
        pins.extend(
            declaration
                .attributes
                .into_iter()
                .map(|attribute| AttributePin::new(&declaration.model_name, attribute)),
        );
    }

    pub fn model_names(&self) -> impl Iterator<Item = &str> {
        self.models.keys().map(String::as_str)
    }

    pub fn contains_model(&self, model_name: &str) -> bool {
        self.models.contains_key(model_name)
    }

    pub fn attributes_of(&self, model_name: &str) -> &[AttributePin] {
        self.models
            .get(model_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// First registered pin named `attribute` on `model_name`.
    pub fn lookup(&self, model_name: &str, attribute: &str) -> Option<&AttributePin> {
        self.attributes_of(model_name)
            .iter()
            .find(|pin| pin.name == attribute)
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    pub fn pin_count(&self) -> usize {
        self.models.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Index contents as declaration records, one per model.
    pub fn records(&self) -> Vec<ModelDeclaration> {
        self.models
            .iter()
            .map(|(model_name, pins)| ModelDeclaration {
                model_name: model_name.clone(),
                attributes: pins
                    .iter()
                    .map(|pin| DeclaredAttribute {
                        name: pin.name.clone(),
                        semantic_type: pin.return_type,
                        location: pin.location.clone(),
                    })
                    .collect(),
            })
            .collect()
    }
}

impl DeclarationSink for SymbolIndex {
    fn accept(&mut self, declarations: Vec<ModelDeclaration>) {
        for declaration in declarations {
            self.register(declaration);
        }
    }
}

/// Parse every unit and forward the results to `sink`.
///
/// Units are parsed in parallel but reach the sink in the order given, so the
/// sink sees the same sequence on every run. Returns the number of
/// declarations forwarded.
pub fn index_units<O, S>(units: &[SourceUnit], parser: &AnnotationParser<'_, O>, sink: &mut S) -> usize
where
    O: ParseObserver + Sync + ?Sized,
    S: DeclarationSink + ?Sized,
{
    let parsed: Vec<Vec<ModelDeclaration>> = units
        .par_iter()
        .map(|unit| parser.parse(&unit.source_id, &unit.text))
        .collect();

    let mut forwarded = 0;
    for declarations in parsed {
        forwarded += declarations.len();
        sink.accept(declarations);
    }
    forwarded
}
