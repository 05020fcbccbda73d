//! Annotation indexing engine.
//!
//! ## Pipeline
//!
//! 1. **Discovery** (`file_scanner`): config-driven list of model files
//! 2. **Loading** (`loader`): `SourceProvider` yields `(source id, text)` units
//! 3. **Parsing** (`parsers`): one annotation scan per unit, independent of all others
//! 4. **Indexing** (`index`): declarations are forwarded to a `DeclarationSink`
//!
//! `context::ScanContext` wires the four steps together for the CLI.
//!
//! ## Module Structure
//!
//! - `context`: ScanContext orchestrating the pipeline
//! - `data`: Declarations, locations, and the type mapping
//! - `file_scanner`: Directory walking with include/ignore patterns
//! - `index`: DeclarationSink trait and the in-memory SymbolIndex
//! - `loader`: SourceProvider trait and the on-disk FilesLoader
//! - `observer`: Parse diagnostics (ParseObserver and implementations)
//! - `parsers`: Annotation block parser and its line rules

pub mod context;
pub mod data;
pub mod file_scanner;
pub mod index;
pub mod loader;
pub mod observer;
pub mod parsers;

pub use context::ScanContext;
pub use data::{
    AttributeAnnotation, DeclaredAttribute, Location, ModelDeclaration, SemanticType, TypeMapping,
};
pub use index::{AttributePin, DeclarationSink, PinScope, SymbolIndex, index_units};
pub use loader::{FilesLoader, LoadFailure, LoadedSources, SourceProvider, SourceUnit};
pub use observer::{
    Level, NoopObserver, ParseEvent, ParseObserver, RecordedEvent, RecordingObserver,
    TracingObserver,
};
pub use parsers::{AnnotationParser, parse_annotations};
