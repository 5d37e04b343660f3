use swc_common::errors::SourceMapper;
use swc_common::{SourceMap, Span};
use swc_ecma_ast::Expr;

use crate::core::{SourceContext, SourceLocation};

/// Position and text lookups against the original source of one file.
#[derive(Clone, Copy)]
pub struct SourceText<'a> {
    file_path: &'a str,
    source_map: &'a SourceMap,
}

impl<'a> SourceText<'a> {
    pub fn new(file_path: &'a str, source_map: &'a SourceMap) -> Self {
        Self {
            file_path,
            source_map,
        }
    }

    pub fn file_path(&self) -> &'a str {
        self.file_path
    }

    /// Original source text covered by `span`.
    pub fn slice(&self, span: Span) -> Option<String> {
        self.source_map.span_to_snippet(span).ok()
    }

    /// 1-indexed line and column of the start of `span`.
    pub fn location(&self, span: Span) -> SourceLocation {
        let loc = self.source_map.lookup_char_pos(span.lo);
        SourceLocation::new(self.file_path, loc.line, loc.col_display + 1)
    }

    pub fn context(&self, span: Span) -> SourceContext {
        SourceContext::new(self.location(span), &self.slice(span).unwrap_or_default())
    }
}

/// Strip parentheses and TypeScript-only wrappers (`as`, `satisfies`, `!`,
/// `<T>x`, `as const`, `f<T>`) that do not change what an expression refers to.
pub fn strip_wrappers(mut expr: &Expr) -> &Expr {
    loop {
        expr = match expr {
            Expr::Paren(e) => &*e.expr,
            Expr::TsAs(e) => &*e.expr,
            Expr::TsSatisfies(e) => &*e.expr,
            Expr::TsNonNull(e) => &*e.expr,
            Expr::TsTypeAssertion(e) => &*e.expr,
            Expr::TsConstAssertion(e) => &*e.expr,
            Expr::TsInstantiation(e) => &*e.expr,
            _ => return expr,
        };
    }
}

/// Human readable name of an expression kind, for diagnostics.
pub fn expr_kind(expr: &Expr) -> &'static str {
    match expr {
        Expr::Cond(_) => "conditional expression",
        Expr::Call(_) => "call expression",
        Expr::New(_) => "new expression",
        Expr::Bin(_) => "binary expression",
        Expr::Unary(_) => "unary expression",
        Expr::Update(_) => "update expression",
        Expr::Assign(_) => "assignment",
        Expr::Tpl(_) => "template literal",
        Expr::TaggedTpl(_) => "tagged template",
        Expr::Arrow(_) => "arrow function",
        Expr::Fn(_) => "function expression",
        Expr::Object(_) => "object literal",
        Expr::Array(_) => "array literal",
        Expr::Lit(_) => "literal",
        Expr::OptChain(_) => "optional chain",
        Expr::Seq(_) => "sequence expression",
        Expr::Await(_) => "await expression",
        Expr::This(_) => "this",
        Expr::JSXElement(_) | Expr::JSXFragment(_) => "JSX",
        _ => "expression",
    }
}
