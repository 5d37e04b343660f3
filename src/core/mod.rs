//! Extraction engine and everything it is built from.
//!
//! ## Module Structure
//!
//! - `context`: Per-run scan context (config, files, parallel extraction)
//! - `data`: Instances, declarations, values and source locations
//! - `extract`: Styled-component detection and value resolution
//! - `file_scanner`: Source file discovery
//! - `normalize`: Property names and shorthand expansion
//! - `parsers`: swc source parser and CSS declaration parser
//! - `stats`: Aggregate statistics over instances

pub mod context;
pub mod data;
pub mod extract;
pub mod file_scanner;
pub mod normalize;
pub mod parsers;
pub mod stats;

pub use context::{ScanContext, ScanOutput};
pub use data::*;
pub use extract::{FileExtraction, analyze_source, extract};
