//! JavaScript identifier helpers.

use phf::phf_set;

/// Words that can never be used as a binding name in module code.
static RESERVED_WORDS: phf::Set<&'static str> = phf_set! {
    "arguments", "await", "break", "case", "catch", "class", "const", "continue",
    "debugger", "default", "delete", "do", "else", "enum", "eval", "export",
    "extends", "false", "finally", "for", "function", "if", "implements", "import",
    "in", "instanceof", "interface", "let", "new", "null", "package", "private",
    "protected", "public", "return", "static", "super", "switch", "this", "throw",
    "true", "try", "typeof", "var", "void", "while", "with", "yield",
};

/// Check if a word is reserved in strict mode code.
#[inline]
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(name)
}

/// Check if `name` can be written as a plain identifier binding.
///
/// Only ASCII identifiers are accepted. Anything else is treated as needing
/// quoted property access.
pub fn is_identifier_name(name: &str) -> bool {
    let mut bytes = name.bytes();
    let Some(first) = bytes.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == b'_' || first == b'$') {
        return false;
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'$') && !is_reserved_word(name)
}
