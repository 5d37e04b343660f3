//! CSS shorthand expansion.
//!
//! lightningcss decides whether a property is a shorthand, which longhands it
//! has, and whether the value is valid for it. The longhand values themselves
//! are cut out of the author's text, so `padding: .5rem` expands to
//! `padding-top: .5rem` and not to a re-printed `0.5rem`.
//!
//! Only positional shorthands are expanded: four sides (`margin`, `padding`,
//! `inset`, `scroll-margin`, ...) and pairs (`margin-block`, `overflow`,
//! `gap`, ...). Every other shorthand (`background`, `font`, `flex`) is kept
//! as written because its longhands cannot be traced back to source text.

use cssparser::{ParseError, Parser, ParserInput, Token};
use lightningcss::properties::{Property, PropertyId};
use lightningcss::stylesheet::ParserOptions;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShorthandError {
    #[error("Cannot map {count} value(s) of `{property}: {value}` onto {longhands} longhands")]
    Components {
        property: String,
        value: String,
        count: usize,
        longhands: usize,
    },
}

/// Outcome of a successful expansion attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum Expansion {
    /// `(name, value)` pairs in the canonical longhand order.
    Longhands(Vec<(String, String)>),
    /// Not a positional shorthand, or a value lightningcss does not understand.
    NotApplicable,
}

/// How the components of a positional shorthand are spread over longhands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    /// top, right, bottom, left
    Sides,
    /// start/end, x/y, row/column
    Pair,
}

impl Family {
    fn size(self) -> usize {
        match self {
            Family::Sides => 4,
            Family::Pair => 2,
        }
    }

    /// Index of the component each slot takes, for `count` components.
    fn component_indices(self, count: usize) -> Option<&'static [usize]> {
        match (self, count) {
            (Family::Sides, 1) => Some(&[0, 0, 0, 0]),
            (Family::Sides, 2) => Some(&[0, 1, 0, 1]),
            (Family::Sides, 3) => Some(&[0, 1, 2, 1]),
            (Family::Sides, 4) => Some(&[0, 1, 2, 3]),
            (Family::Pair, 1) => Some(&[0, 0]),
            (Family::Pair, 2) => Some(&[0, 1]),
            _ => None,
        }
    }
}

/// Expand `property: value` into its longhands.
pub fn expand_shorthand(property: &str, value: &str) -> Result<Expansion, ShorthandError> {
    // `grid-row: 2` means `grid-row-end: auto`, not a repeated value.
    if property.starts_with("grid-") {
        return Ok(Expansion::NotApplicable);
    }

    let property_id = PropertyId::from(property);
    let Some(longhand_ids) = property_id.longhands() else {
        return Ok(Expansion::NotApplicable);
    };
    let names: Vec<String> = longhand_ids.iter().map(|id| id.name().to_string()).collect();
    let Some((family, slotted)) = positional_slots(&names) else {
        return Ok(Expansion::NotApplicable);
    };

    match Property::parse_string(property_id, value, ParserOptions::default()) {
        Ok(Property::Unparsed(_) | Property::Custom(_)) | Err(_) => {
            return Ok(Expansion::NotApplicable);
        }
        Ok(_) => {}
    }

    let Some(components) = component_values(value) else {
        return Ok(Expansion::NotApplicable);
    };
    let Some(indices) = family.component_indices(components.len()) else {
        return Err(ShorthandError::Components {
            property: property.to_string(),
            value: value.to_string(),
            count: components.len(),
            longhands: family.size(),
        });
    };

    Ok(Expansion::Longhands(
        slotted
            .into_iter()
            .zip(indices)
            .map(|(name, &idx)| (name, components[idx].clone()))
            .collect(),
    ))
}

/// Order longhand names by their positional slot. `None` unless every name
/// belongs to the same family and each slot is filled exactly once.
fn positional_slots(names: &[String]) -> Option<(Family, Vec<String>)> {
    let mut family = None;
    let mut slots: Vec<Option<String>> = Vec::new();

    for name in names {
        let (name_family, slot) = slot_of(name)?;
        match family {
            None => {
                family = Some(name_family);
                slots = vec![None; name_family.size()];
            }
            Some(current) if current != name_family => return None,
            Some(_) => {}
        }
        let entry = slots.get_mut(slot)?;
        if entry.replace(name.clone()).is_some() {
            return None;
        }
    }

    let family = family?;
    let slotted = slots.into_iter().collect::<Option<Vec<_>>>()?;
    Some((family, slotted))
}

fn slot_of(name: &str) -> Option<(Family, usize)> {
    let side = |suffix: &str| name == suffix || name.ends_with(&format!("-{}", suffix));
    if side("top") {
        Some((Family::Sides, 0))
    } else if side("right") {
        Some((Family::Sides, 1))
    } else if side("bottom") {
        Some((Family::Sides, 2))
    } else if side("left") {
        Some((Family::Sides, 3))
    } else if name.ends_with("-start") || name.ends_with("-x") || name == "row-gap" {
        Some((Family::Pair, 0))
    } else if name.ends_with("-end") || name.ends_with("-y") || name == "column-gap" {
        Some((Family::Pair, 1))
    } else {
        None
    }
}

/// Split a value into its top-level component values, each as written.
/// Returns `None` for comma or delimiter separated values (`a, b`, `1 / 2`,
/// `!important`), which have no positional meaning.
fn component_values(value: &str) -> Option<Vec<String>> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    let mut components = Vec::new();

    loop {
        parser.skip_whitespace();
        let start = parser.position();
        let token = match parser.next() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };
        match token {
            Token::Comma | Token::Delim(_) => return None,
            Token::Function(_)
            | Token::ParenthesisBlock
            | Token::SquareBracketBlock
            | Token::CurlyBracketBlock => {
                parser
                    .parse_nested_block(|nested| {
                        while nested.next().is_ok() {}
                        Ok::<(), ParseError<'_, ()>>(())
                    })
                    .ok()?;
            }
            _ => {}
        }
        components.push(parser.slice_from(start).trim().to_string());
    }

    Some(components)
}
