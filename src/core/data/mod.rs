//! Core data types shared by the parser, the index, and the CLI.
//!
//! ## Module Structure
//!
//! - `declaration`: Parsed annotations and the declarations handed to the index
//! - `type_mapping`: Declared column type → semantic type table

pub mod declaration;
pub mod type_mapping;

pub use declaration::{AttributeAnnotation, DeclaredAttribute, Location, ModelDeclaration};
pub use type_mapping::{SemanticType, TypeMapping};
