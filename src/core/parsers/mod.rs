//! Source parsers.
//!
//! - `annotation`: Schema annotation block parser (state machine)
//! - `line`: Per-line classification rules used by the annotation parser

pub mod annotation;
pub mod line;

pub use annotation::{AnnotationParser, parse_annotations};
