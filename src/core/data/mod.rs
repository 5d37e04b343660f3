//! Core data types shared by extraction, statistics and reporting.
//!
//! ## Module Structure
//!
//! - `instance`: One styled-component definition and its declarations
//! - `source`: Source code location types (SourceContext, SourceLocation)
//! - `style_value`: Normalized semantic value of a single declaration

pub mod instance;
pub mod source;
pub mod style_value;

pub use instance::{Instance, StyleDeclaration};
pub use source::{SourceContext, SourceLocation};
pub use style_value::{EXPRESSION_SENTINEL, StyleValue};
