//! Name derivation for generated types and fields.
//!
//! Synthetic nested types are named from the enclosing type, the field and
//! a counter carried by [`NameContext`]. The context is a plain value: each
//! derivation returns the name together with the advanced context, so the
//! walk threads it explicitly instead of sharing a global counter.

/// Counter state for synthetic type names within one generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NameContext {
    counter: u32,
}

impl NameContext {
    /// Creates a context for a fresh generation run.
    #[must_use]
    pub const fn new() -> Self {
        Self { counter: 0 }
    }

    /// Returns the number of names derived so far.
    #[must_use]
    pub const fn derived(&self) -> u32 {
        self.counter
    }

    /// Derives the name of a nested type for `field` inside `parent`.
    ///
    /// The name has the form `{parent}_{Field}_{n}`. The pascal-cased field
    /// never contains `_`, so the counter suffix is always recoverable and
    /// two derivations in one run never collide.
    #[must_use]
    pub fn derive(self, parent: &str, field: &str) -> (String, Self) {
        let next = Self {
            counter: self.counter + 1,
        };
        let name = format!("{}_{}_{}", parent, to_pascal_case(field), next.counter);
        (name, next)
    }
}

impl Default for NameContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Converts a string to PascalCase.
///
/// This is the title-casing used to normalize field names and to build
/// type names from resource type keys.
#[must_use]
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;

    for c in s.chars() {
        if c == '_' || c == '-' {
            capitalize_next = true;
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Converts a string to snake_case.
#[must_use]
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_lower = false;
    for c in s.chars() {
        if c.is_ascii_uppercase() {
            if prev_lower {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
            prev_lower = false;
        } else {
            result.push(c);
            prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        }
    }
    result
}

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// Keywords that cannot be written as raw identifiers.
const NON_RAW_KEYWORDS: &[&str] = &["self", "Self", "super", "crate", "_"];

/// Turns a snake_case name into a usable Rust field identifier.
#[must_use]
pub fn rust_ident(name: &str) -> String {
    if NON_RAW_KEYWORDS.contains(&name) {
        format!("{}_", name)
    } else if KEYWORDS.contains(&name) {
        format!("r#{}", name)
    } else {
        name.to_string()
    }
}

/// Returns true if `name` can be turned into generated identifiers.
///
/// Accepted names start with an ASCII letter or `_`, continue with ASCII
/// alphanumerics or `_`, and contain at least one alphanumeric character.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && name.chars().any(|c| c.is_ascii_alphanumeric())
}
