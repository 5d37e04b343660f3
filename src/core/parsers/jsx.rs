use anyhow::{Result, anyhow};
use std::path::Path;
use std::sync::Arc;
use swc_common::{FileName, Globals, SourceMap};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

pub struct ParsedJSX {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
}

/// Pick the parser syntax from the file extension.
///
/// Plain `.ts` files are parsed without JSX so that generic arrow functions
/// (`<T>(x: T) => x`) keep working. Everything else, including `.js`, is
/// parsed as TSX: type annotations and JSX in JavaScript files are accepted.
fn syntax_for(file_path: &str) -> Syntax {
    let tsx = !matches!(
        Path::new(file_path).extension().and_then(|e| e.to_str()),
        Some("ts" | "mts" | "cts")
    );

    Syntax::Typescript(TsSyntax {
        tsx,
        decorators: true,
        ..Default::default()
    })
}

/// Parse JS/JSX/TS/TSX source code string into an AST.
///
/// Each call gets its own `SourceMap`, so files can be parsed in parallel.
pub fn parse_jsx_source(code: String, file_path: &str) -> Result<ParsedJSX> {
    use swc_common::GLOBALS;

    let source_map: Arc<SourceMap> = Arc::default();

    // Wrap in GLOBALS.set() for thread safety
    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let mut parser = Parser::new(syntax_for(file_path), StringInput::from(&*source_file), None);

        let module = parser
            .parse_module()
            .map_err(|e| anyhow!("{}", e.kind().msg()))?;

        Ok(ParsedJSX {
            module,
            source_map: source_map.clone(),
        })
    })
}
