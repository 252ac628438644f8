//! Words that cannot name an event.

/// Rust keywords (strict, reserved and weak). An event name in this set
/// would not be a usable shortcut identifier.
pub const RESERVED_WORDS: &[&str] = &[
    // strict
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while",
    // reserved
    "abstract", "become", "box", "do", "final", "gen", "macro", "override", "priv", "try",
    "typeof", "unsized", "virtual", "yield",
    // weak
    "default", "macro_rules", "raw", "safe", "union",
];

/// Returns true when `word` may not be used as an event name.
pub fn is_reserved(word: &str) -> bool {
    RESERVED_WORDS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_reserved() {
        assert!(is_reserved("default"));
    }

    #[test]
    fn keywords_are_reserved() {
        for word in ["fn", "match", "Self", "yield", "union"] {
            assert!(is_reserved(word), "{word} should be reserved");
        }
    }

    #[test]
    fn ordinary_words_are_allowed() {
        for word in ["freeze", "condense", "melt", "Default", "matches"] {
            assert!(!is_reserved(word), "{word} should be allowed");
        }
    }
}
