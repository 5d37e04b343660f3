//! Leaf declaration parser for CSS text reconstructed from tagged templates.
//!
//! The text of a styled template is a declaration list, optionally with
//! nested rules (`&:hover { ... }`) and at-rules (`@media ... { ... }`).
//! Only leaf `property: value` pairs are kept, in source order, with the
//! value text exactly as written. Selectors and at-rule preludes are dropped.
//!
//! Built on `cssparser`'s rule body parser, which also recovers from invalid
//! items by skipping to the next `;`.

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, Parser, ParserInput, ParserState,
    QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser, Token,
};

/// A single leaf declaration as written in CSS text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssDeclaration {
    pub property: String,
    pub value: String,
}

impl CssDeclaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

/// Parse CSS text into its leaf declarations, flattening nested blocks.
pub fn parse_declarations(css: &str) -> Vec<CssDeclaration> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    parse_rule_body(&mut parser)
}

fn parse_rule_body<'i>(input: &mut Parser<'i, '_>) -> Vec<CssDeclaration> {
    let mut collector = DeclarationCollector;
    RuleBodyParser::new(input, &mut collector)
        .filter_map(Result::ok)
        .flatten()
        .collect()
}

/// Consume everything left in the current delimited input.
fn skip_remaining<'i>(input: &mut Parser<'i, '_>) {
    while input.next_including_whitespace_and_comments().is_ok() {}
}

/// Append a piece of value text, joining pieces with a single space.
fn push_segment(value: &mut String, segment: &str) {
    let segment = segment.trim();
    if segment.is_empty() {
        return;
    }
    if !value.is_empty() {
        value.push(' ');
    }
    value.push_str(segment);
}

/// Every item (declaration, nested rule, at-rule) yields the list of leaf
/// declarations it contains.
struct DeclarationCollector;

impl<'i> DeclarationParser<'i> for DeclarationCollector {
    type Declaration = Vec<CssDeclaration>;
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let mut value = String::new();
        let mut segment_start = input.position();
        loop {
            let before = input.position();
            let token = match input.next_including_whitespace_and_comments() {
                Ok(token) => token.clone(),
                Err(_) => break,
            };
            match token {
                // `a:hover { ... }` looks like a declaration until the block
                // shows up; reject it so the body parser retries it as a
                // nested rule.
                Token::CurlyBracketBlock => return Err(input.new_custom_error(())),
                // Comments separate tokens but are not part of the value.
                Token::Comment(_) => {
                    push_segment(&mut value, input.slice(segment_start..before));
                    segment_start = input.position();
                }
                // Consume blocks now so positions stay on top-level tokens.
                Token::Function(_) | Token::ParenthesisBlock | Token::SquareBracketBlock => {
                    let _ = input.parse_nested_block(|nested| {
                        skip_remaining(nested);
                        Ok::<(), ParseError<'i, ()>>(())
                    });
                }
                _ => {}
            }
        }
        push_segment(&mut value, input.slice_from(segment_start));

        Ok(vec![CssDeclaration::new(name.as_ref(), value)])
    }
}

impl<'i> QualifiedRuleParser<'i> for DeclarationCollector {
    type Prelude = ();
    type QualifiedRule = Vec<CssDeclaration>;
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        skip_remaining(input);
        Ok(())
    }

    fn parse_block<'t>(
        &mut self,
        _prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        Ok(parse_rule_body(input))
    }
}

impl<'i> AtRuleParser<'i> for DeclarationCollector {
    type Prelude = ();
    type AtRule = Vec<CssDeclaration>;
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        _name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::Prelude, ParseError<'i, Self::Error>> {
        skip_remaining(input);
        Ok(())
    }

    fn rule_without_block(
        &mut self,
        _prelude: Self::Prelude,
        _start: &ParserState,
    ) -> Result<Self::AtRule, ()> {
        Ok(Vec::new())
    }

    fn parse_block<'t>(
        &mut self,
        _prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> Result<Self::AtRule, ParseError<'i, Self::Error>> {
        Ok(parse_rule_body(input))
    }
}

impl<'i> RuleBodyItemParser<'i, Vec<CssDeclaration>, ()> for DeclarationCollector {
    fn parse_qualified(&self) -> bool {
        true
    }

    fn parse_declarations(&self) -> bool {
        true
    }
}
