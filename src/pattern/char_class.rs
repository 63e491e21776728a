//! Character classes for building functional fragments.

/// A set of characters a class fragment will step over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSet {
    pub negated: bool,
    pub kind: CharSetKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharSetKind {
    Digit,      // 0-9
    HexDigit,   // 0-9 a-f A-F
    Alpha,      // alphabetic
    IdentStart, // alphabetic or '_'
    IdentBody,  // alphanumeric or '_'
    Whitespace, // Unicode white space
    Custom(Vec<CharClass>),
}

/// One member of a custom set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharClass {
    Single(char),
    Range(char, char),
}

impl CharSet {
    pub fn new(kind: CharSetKind) -> Self {
        Self {
            negated: false,
            kind,
        }
    }

    pub fn negate(self) -> Self {
        Self {
            negated: !self.negated,
            kind: self.kind,
        }
    }

    pub fn digit() -> Self {
        Self::new(CharSetKind::Digit)
    }

    pub fn hex_digit() -> Self {
        Self::new(CharSetKind::HexDigit)
    }

    pub fn alpha() -> Self {
        Self::new(CharSetKind::Alpha)
    }

    pub fn ident_start() -> Self {
        Self::new(CharSetKind::IdentStart)
    }

    pub fn ident_body() -> Self {
        Self::new(CharSetKind::IdentBody)
    }

    pub fn whitespace() -> Self {
        Self::new(CharSetKind::Whitespace)
    }

    /// Test whether `ch` is a member of this set.
    pub fn matches(&self, ch: char) -> bool {
        let base = kind_matches(&self.kind, ch);
        if self.negated { !base } else { base }
    }
}

fn kind_matches(kind: &CharSetKind, ch: char) -> bool {
    match kind {
        CharSetKind::Digit => ch.is_ascii_digit(),
        CharSetKind::HexDigit => ch.is_ascii_hexdigit(),
        CharSetKind::Alpha => ch.is_alphabetic(),
        CharSetKind::IdentStart => ch.is_alphabetic() || ch == '_',
        CharSetKind::IdentBody => ch.is_alphanumeric() || ch == '_',
        CharSetKind::Whitespace => ch.is_whitespace(),
        CharSetKind::Custom(classes) => classes.iter().any(|c| char_in_class(c, ch)),
    }
}

/// Test whether `ch` falls within a single `CharClass`.
pub fn char_in_class(class: &CharClass, ch: char) -> bool {
    match class {
        CharClass::Single(c) => *c == ch,
        CharClass::Range(lo, hi) => *lo <= ch && ch <= *hi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_is_ascii_only() {
        assert!(CharSet::digit().matches('0'));
        assert!(CharSet::digit().matches('9'));
        assert!(!CharSet::digit().matches('a'));
        assert!(!CharSet::digit().matches('٣'));
    }

    #[test]
    fn hex_digit_both_cases() {
        for ch in ['0', '7', 'a', 'f', 'A', 'F'] {
            assert!(CharSet::hex_digit().matches(ch), "expected hex: {ch}");
        }
        assert!(!CharSet::hex_digit().matches('g'));
        assert!(!CharSet::hex_digit().matches('x'));
    }

    #[test]
    fn identifier_start_and_body() {
        assert!(CharSet::ident_start().matches('_'));
        assert!(CharSet::ident_start().matches('q'));
        assert!(!CharSet::ident_start().matches('1'));
        assert!(CharSet::ident_body().matches('1'));
        assert!(CharSet::ident_body().matches('_'));
        assert!(!CharSet::ident_body().matches('-'));
    }

    #[test]
    fn whitespace_includes_tabs() {
        assert!(CharSet::whitespace().matches(' '));
        assert!(CharSet::whitespace().matches('\t'));
        assert!(!CharSet::whitespace().matches('x'));
    }

    #[test]
    fn negated_digit_matches_non_digits() {
        let cs = CharSet::digit().negate();
        assert!(cs.matches('x'));
        assert!(!cs.matches('4'));
        assert_eq!(cs.negate(), CharSet::digit());
    }

    #[test]
    fn custom_range_and_single() {
        let cs = CharSet::new(CharSetKind::Custom(vec![
            CharClass::Range('a', 'c'),
            CharClass::Single('z'),
        ]));
        assert!(cs.matches('a'));
        assert!(cs.matches('b'));
        assert!(cs.matches('z'));
        assert!(!cs.matches('d'));
        assert!(!cs.matches('A'));
    }
}
