/// One input position as seen by a fragment.
///
/// `End` is delivered once, after the last character, so fragments can
/// accept at the final boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Char(char),
    End,
}

impl Symbol {
    /// The character at this position, or `None` at end of input.
    pub fn char(self) -> Option<char> {
        match self {
            Symbol::Char(ch) => Some(ch),
            Symbol::End => None,
        }
    }

    pub fn is_end(self) -> bool {
        matches!(self, Symbol::End)
    }
}

impl From<char> for Symbol {
    fn from(ch: char) -> Self {
        Symbol::Char(ch)
    }
}
