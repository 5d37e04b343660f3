//! Single-pass visitor that finds styled-component definition sites.
//!
//! A definition site is a call or tagged template whose callee/tag is either
//! `styled.<tag>` (element form) or `styled(<Component>)` (component form):
//!
//! ```ignore
//! styled.p({ margin: 0 })
//! styled.h1(props => ({ color: props.theme.colors.primary }))
//! styled(Text)`font-weight: bold;`
//! ```
//!
//! Sites are recorded in pre-order, so an outer definition always comes
//! before the definitions nested in its arguments.

use std::fmt::Write;

use swc_common::{Span, Spanned};
use swc_ecma_ast::{
    BlockStmtOrExpr, CallExpr, Callee, Expr, MemberExpr, MemberProp, Module, ObjectLit, Prop,
    PropName, PropOrSpread, TaggedTpl, Tpl,
};
use swc_ecma_visit::{Visit, VisitWith};

use crate::core::extract::FileExtraction;
use crate::core::extract::source_text::{SourceText, strip_wrappers};
use crate::core::extract::value_resolver::{ValueResolver, param_name};
use crate::core::normalize::{ShorthandError, normalize, normalize_css};
use crate::core::parsers::css::parse_declarations;
use crate::core::{Instance, StyleDeclaration, StyleValue};
use crate::issues::{Diagnostic, DiagnosticKind};

/// The callee/tag of a definition site.
#[derive(Clone, Copy)]
enum StyledTarget<'n> {
    /// `styled.div`
    Element(&'n MemberExpr),
    /// `styled(Text)`
    Component(&'n CallExpr),
}

impl<'n> StyledTarget<'n> {
    fn detect(expr: &'n Expr) -> Option<Self> {
        match strip_wrappers(expr) {
            Expr::Member(member) if is_styled(&member.obj) => Some(StyledTarget::Element(member)),
            Expr::Call(call) => match &call.callee {
                Callee::Expr(callee) if is_styled(callee) => Some(StyledTarget::Component(call)),
                _ => None,
            },
            _ => None,
        }
    }
}

fn is_styled(expr: &Expr) -> bool {
    matches!(strip_wrappers(expr), Expr::Ident(ident) if ident.sym == "styled")
}

pub struct StyledAnalyzer<'a> {
    source: SourceText<'a>,
    resolver: ValueResolver<'a>,
    instances: Vec<Instance>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> StyledAnalyzer<'a> {
    pub fn new(source: SourceText<'a>) -> Self {
        Self {
            source,
            resolver: ValueResolver::new(source),
            instances: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn analyze(mut self, module: &Module) -> FileExtraction {
        self.visit_module(module);
        FileExtraction {
            instances: self.instances,
            diagnostics: self.diagnostics,
        }
    }

    fn record_call(&mut self, node: &CallExpr, target: StyledTarget<'_>) {
        let component = self.component_name(target, node.span);
        let mut styles = Vec::new();

        for arg in &node.args {
            if let Some(spread) = arg.spread {
                self.diagnostics.push(Diagnostic::source(
                    DiagnosticKind::UnsupportedProperty,
                    self.source.context(spread.with_hi(arg.expr.span().hi)),
                    "Spread argument is skipped",
                ));
                continue;
            }
            match strip_wrappers(&arg.expr) {
                Expr::Object(object) => self.collect_object(object, None, &mut styles),
                Expr::Arrow(arrow) => {
                    let props_name = arrow.params.first().and_then(param_name);
                    let object = match &*arrow.body {
                        BlockStmtOrExpr::Expr(body) => match strip_wrappers(body) {
                            Expr::Object(object) => Some(object),
                            _ => None,
                        },
                        BlockStmtOrExpr::BlockStmt(_) => None,
                    };
                    match object {
                        Some(object) => self.collect_object(object, props_name, &mut styles),
                        None => self.diagnostics.push(Diagnostic::source(
                            DiagnosticKind::UnsupportedValue,
                            self.source.context(arrow.span),
                            "Style factory does not return an object literal",
                        )),
                    }
                }
                _ => {}
            }
        }

        self.push_instance(node.span, component, styles);
    }

    fn record_template(&mut self, node: &TaggedTpl, target: StyledTarget<'_>) {
        let component = self.component_name(target, node.span);
        let css = self.template_css(&node.tpl);

        let mut styles = Vec::new();
        for declaration in parse_declarations(&css) {
            let value = StyleValue::from_css_text(declaration.value);
            let normalized = normalize_css(&declaration.property, value);
            self.push_declarations(normalized, node.tpl.span, &mut styles);
        }

        self.push_instance(node.span, component, styles);
    }

    /// Concatenate raw quasi text with the rendered token of each interpolation.
    fn template_css(&mut self, tpl: &Tpl) -> String {
        let mut css = String::new();
        for (idx, quasi) in tpl.quasis.iter().enumerate() {
            css.push_str(&quasi.raw);
            if let Some(expr) = tpl.exprs.get(idx) {
                let value = self.resolver.resolve(expr, None, &mut self.diagnostics);
                let _ = write!(css, "{}", value);
            }
        }
        css
    }

    fn component_name(&mut self, target: StyledTarget<'_>, site: Span) -> String {
        match target {
            StyledTarget::Component(call) => {
                let first = call
                    .args
                    .first()
                    .filter(|arg| arg.spread.is_none())
                    .map(|arg| strip_wrappers(&arg.expr));
                if let Some(Expr::Ident(ident)) = first {
                    return ident.sym.to_string();
                }
            }
            StyledTarget::Element(member) => {
                if let MemberProp::Ident(prop) = &member.prop {
                    return prop.sym.to_string();
                }
            }
        }

        self.diagnostics.push(Diagnostic::source(
            DiagnosticKind::UnknownComponent,
            self.source.context(site),
            "Cannot find component name",
        ));
        String::new()
    }

    fn collect_object(
        &mut self,
        object: &ObjectLit,
        props_name: Option<&str>,
        styles: &mut Vec<StyleDeclaration>,
    ) {
        for prop in &object.props {
            let prop = match prop {
                PropOrSpread::Prop(prop) => prop,
                PropOrSpread::Spread(spread) => {
                    self.diagnostics.push(Diagnostic::source(
                        DiagnosticKind::UnsupportedProperty,
                        self.source.context(spread.span()),
                        "Spread in style object is skipped",
                    ));
                    continue;
                }
            };

            match &**prop {
                Prop::KeyValue(kv) => {
                    // Nested selectors and media queries: keep the leaf declarations.
                    if let Expr::Object(nested) = strip_wrappers(&kv.value) {
                        self.collect_object(nested, props_name, styles);
                        continue;
                    }
                    let name = self.property_key(&kv.key);
                    let value = self.resolver.resolve(&kv.value, props_name, &mut self.diagnostics);
                    self.push_declarations(normalize(&name, value), prop.span(), styles);
                }
                Prop::Shorthand(ident) => {
                    let value = StyleValue::reference(ident.sym.to_string());
                    self.push_declarations(normalize(&ident.sym, value), ident.span, styles);
                }
                other => {
                    let kind = match other {
                        Prop::Method(_) => "Method",
                        Prop::Getter(_) => "Getter",
                        Prop::Setter(_) => "Setter",
                        _ => "Property",
                    };
                    self.diagnostics.push(Diagnostic::source(
                        DiagnosticKind::UnsupportedProperty,
                        self.source.context(other.span()),
                        format!("{} in style object is skipped", kind),
                    ));
                }
            }
        }
    }

    fn property_key(&mut self, key: &PropName) -> String {
        match key {
            PropName::Ident(ident) => return ident.sym.to_string(),
            PropName::Str(s) => {
                if let Some(value) = s.value.as_str() {
                    return value.to_string();
                }
            }
            PropName::Num(n) => return n.value.to_string(),
            _ => {}
        }

        self.diagnostics.push(Diagnostic::source(
            DiagnosticKind::UnknownPropertyKey,
            self.source.context(key.span()),
            "Cannot determine property key",
        ));
        String::new()
    }

    fn push_declarations(
        &mut self,
        normalized: Result<Vec<StyleDeclaration>, ShorthandError>,
        span: Span,
        styles: &mut Vec<StyleDeclaration>,
    ) {
        match normalized {
            Ok(declarations) => styles.extend(declarations),
            Err(err) => self.diagnostics.push(Diagnostic::source(
                DiagnosticKind::ShorthandExpansion,
                self.source.context(span),
                err.to_string(),
            )),
        }
    }

    fn push_instance(&mut self, site: Span, component: String, styles: Vec<StyleDeclaration>) {
        let location = self.source.location(site);
        self.instances.push(Instance {
            filename: self.source.file_path().to_string(),
            line: location.line,
            column: location.col,
            component,
            styles,
        });
    }
}

impl Visit for StyledAnalyzer<'_> {
    fn visit_call_expr(&mut self, node: &CallExpr) {
        if let Callee::Expr(callee) = &node.callee
            && let Some(target) = StyledTarget::detect(callee)
        {
            self.record_call(node, target);
        }
        node.visit_children_with(self);
    }

    fn visit_tagged_tpl(&mut self, node: &TaggedTpl) {
        if let Some(target) = StyledTarget::detect(&node.tag) {
            self.record_template(node, target);
        }
        node.visit_children_with(self);
    }
}
