//! annopin - ActiveRecord schema annotations as typed attribute declarations
//!
//! Schema annotators write a comment block above every model class listing
//! its columns and their types. annopin parses those blocks and produces one
//! declaration per model, each attribute carrying a semantic type and the exact
//! comment line it came from, ready to be registered in a code-intelligence
//! index.
//!
//! ```
//! use annopin::core::{SemanticType, parse_annotations};
//!
//! let source = "# id integer\n# balance decimal\nclass Account < ApplicationRecord\nend\n";
//! let declarations = parse_annotations("app/models/account.rb", source);
//!
//! assert_eq!(declarations[0].model_name, "Account");
//! assert_eq!(declarations[0].attributes[1].semantic_type, SemanticType::Decimal);
//! ```
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Parsing, loading, and indexing engine

pub mod cli;
pub mod config;
pub mod core;
