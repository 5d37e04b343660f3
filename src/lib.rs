//! styled-census - usage inventory for styled-components
//!
//! styled-census is a CLI tool and library that finds every styled-components
//! definition in a JavaScript/TypeScript code base and reports the elements,
//! components, properties and values they use. Properties are normalized to
//! kebab-case and CSS shorthands are expanded to longhands so that identical
//! styling intent aggregates under identical keys.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands and terminal output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine, normalization and statistics
//! - `issues`: Diagnostics collected during extraction
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod utils;
