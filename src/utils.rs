//! Common utility functions shared across the codebase.

use std::path::Path;

/// Returns true when a styled target name refers to a component rather than
/// an HTML element.
///
/// The classification is purely syntactic: components start with an ASCII
/// uppercase letter (`Text`, `Box`), everything else is an element (`div`, `h1`).
///
/// # Examples
///
/// ```
/// use styled_census::utils::is_component_name;
///
/// assert!(is_component_name("Text"));
/// assert!(!is_component_name("div"));
/// assert!(!is_component_name(""));
/// ```
pub fn is_component_name(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Converts a JavaScript object key into a kebab-case CSS property name.
///
/// Words are split the way lodash's `kebabCase` splits them: a capital
/// after a lowercase letter starts a word, a run of capitals is one word
/// (its last capital starts the next word when a lowercase letter follows),
/// and digits form their own words. Names that already contain a hyphen are
/// treated as CSS-authored (`font-weight`, `--custom-prop`) and returned
/// unchanged.
///
/// # Examples
///
/// ```
/// use styled_census::utils::kebab_case;
///
/// assert_eq!(kebab_case("fontWeight"), "font-weight");
/// assert_eq!(kebab_case("WebkitTransition"), "webkit-transition");
/// assert_eq!(kebab_case("COLOR"), "color");
/// assert_eq!(kebab_case("margin-top"), "margin-top");
/// ```
pub fn kebab_case(name: &str) -> String {
    if name.contains('-') {
        return name.to_string();
    }

    let chars: Vec<char> = name.chars().collect();
    let mut result = String::with_capacity(name.len() + 4);
    for (idx, &c) in chars.iter().enumerate() {
        if idx > 0 && starts_word(chars[idx - 1], c, chars.get(idx + 1).copied()) {
            result.push('-');
        }
        result.push(c.to_ascii_lowercase());
    }
    result
}

fn starts_word(prev: char, c: char, next: Option<char>) -> bool {
    if c.is_ascii_uppercase() {
        !prev.is_ascii_uppercase() || next.is_some_and(|n| n.is_ascii_lowercase())
    } else if c.is_ascii_digit() {
        !prev.is_ascii_digit()
    } else {
        c.is_ascii_lowercase() && prev.is_ascii_digit()
    }
}

/// Render a path for display, dropping a leading `./`.
pub fn display_path(path: &Path) -> String {
    path.strip_prefix(".")
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}
