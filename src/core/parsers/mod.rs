//! Parsers for source code and CSS text.
//!
//! - `css`: Leaf declaration parser for CSS found in tagged templates
//! - `jsx`: JS/JSX/TS/TSX source file parser (uses swc for AST generation)

pub mod css;
pub mod jsx;
