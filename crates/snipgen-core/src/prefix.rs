//! Rules that turn a snippet name into the prefix typed to trigger it.

use heck::ToKebabCase;

/// Derives a snippet prefix from its name.
///
/// Implementations must be deterministic and total: any non-empty name
/// produces a non-empty prefix.
pub trait PrefixStrategy {
    fn derive(&self, name: &str) -> String;
}

/// `"For Loop"` becomes `"for-loop"`, `"functionHeader"` becomes `"function-header"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KebabCase;

/// First letter of every word, lower-cased: `"For Each Loop"` becomes `"fel"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Initials;

/// Uses the name as the prefix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Verbatim;

impl PrefixStrategy for KebabCase {
    fn derive(&self, name: &str) -> String {
        or_name(name.to_kebab_case(), name)
    }
}

impl PrefixStrategy for Initials {
    fn derive(&self, name: &str) -> String {
        let initials: String = name
            .to_kebab_case()
            .split('-')
            .filter_map(|word| word.chars().next())
            .collect();
        or_name(initials, name)
    }
}

impl PrefixStrategy for Verbatim {
    fn derive(&self, name: &str) -> String {
        name.to_string()
    }
}

/// The strategy used when the caller does not pick one.
pub fn default_strategy() -> &'static dyn PrefixStrategy {
    &KebabCase
}

// Names without any alphanumeric character have no words to work with.
fn or_name(derived: String, name: &str) -> String {
    if !derived.is_empty() {
        return derived;
    }
    match name.trim() {
        "" => name.to_string(),
        trimmed => trimmed.to_string(),
    }
}
