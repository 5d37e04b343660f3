//! Resolves the right-hand side of a style property into a `StyleValue`.
//!
//! ```ignore
//! 'salmon'                          → Str("salmon")
//! 12                                → Number { raw: "12" }
//! SIZE                              → Reference("SIZE")
//! props.theme.colors.primary        → Reference("theme.colors.primary")   (props name: "props")
//! p => p.theme.space[2]             → Reference("theme.space[2]")
//! p => 'red'                        → Reference("'red'")
//! p => 'a:b'                        → Expression
//! p => p.active ? 'red' : 'blue'    → Expression
//! (a, b) => a                       → Expression
//! ```

use swc_common::{Span, Spanned};
use swc_ecma_ast::{BlockStmtOrExpr, Expr, Lit, Pat};

use crate::core::StyleValue;
use crate::core::extract::source_text::{SourceText, expr_kind, strip_wrappers};
use crate::issues::{Diagnostic, DiagnosticKind};

pub struct ValueResolver<'a> {
    source: SourceText<'a>,
}

impl<'a> ValueResolver<'a> {
    pub fn new(source: SourceText<'a>) -> Self {
        Self { source }
    }

    /// Resolve `expr` with `props_name` as the parameter whose prefix is
    /// stripped from member paths.
    pub fn resolve(
        &self,
        expr: &Expr,
        props_name: Option<&str>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> StyleValue {
        match strip_wrappers(expr) {
            Expr::Lit(Lit::Str(s)) => match s.value.as_str() {
                Some(value) => StyleValue::Str(value.to_string()),
                None => self.unsupported(expr, "string literal with lone surrogates", diagnostics),
            },
            Expr::Lit(Lit::Num(n)) => StyleValue::Number {
                value: n.value,
                raw: n
                    .raw
                    .as_ref()
                    .map(|raw| raw.to_string())
                    .unwrap_or_else(|| n.value.to_string()),
            },
            Expr::Ident(ident) => StyleValue::reference(ident.sym.to_string()),
            Expr::Arrow(arrow) if arrow.params.len() == 1 => match &*arrow.body {
                BlockStmtOrExpr::Expr(body) => match strip_wrappers(body) {
                    // A literal returned from a factory is recorded as its
                    // source text, quotes included.
                    lit @ Expr::Lit(Lit::Str(_) | Lit::Num(_)) => {
                        self.source_reference(lit.span(), None, diagnostics)
                    }
                    _ => self.resolve(body, param_name(&arrow.params[0]), diagnostics),
                },
                BlockStmtOrExpr::BlockStmt(_) => {
                    self.unsupported(expr, "arrow function with a block body", diagnostics)
                }
            },
            Expr::Arrow(arrow) => {
                let kind = format!("arrow function with {} parameters", arrow.params.len());
                self.unsupported(expr, &kind, diagnostics)
            }
            Expr::Member(member) => self.source_reference(member.span, props_name, diagnostics),
            other => self.unsupported(other, expr_kind(other), diagnostics),
        }
    }

    /// Reference built from the source text under `span`, with the props
    /// parameter prefix removed.
    fn source_reference(
        &self,
        span: Span,
        props_name: Option<&str>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> StyleValue {
        let Some(text) = self.source.slice(span) else {
            diagnostics.push(Diagnostic::source(
                DiagnosticKind::MissingSource,
                self.source.context(span),
                "Cannot read source text of expression",
            ));
            return StyleValue::Str(String::new());
        };
        let path = props_name
            .and_then(|name| text.strip_prefix(name))
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(&text);
        StyleValue::reference(path)
    }

    fn unsupported(
        &self,
        expr: &Expr,
        kind: &str,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> StyleValue {
        diagnostics.push(Diagnostic::source(
            DiagnosticKind::UnsupportedValue,
            self.source.context(expr.span()),
            format!("Cannot resolve {}, recorded as $EXPRESSION$", kind),
        ));
        StyleValue::Expression
    }
}

/// Name of a props factory parameter. Destructured parameters have no single
/// name, so nothing is stripped from their member paths.
pub fn param_name(pat: &Pat) -> Option<&str> {
    match pat {
        Pat::Ident(binding) => Some(&*binding.id.sym),
        _ => None,
    }
}
