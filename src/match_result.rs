use std::fmt;

/// The single verdict of one engine run.
///
/// On success `text` is the accepted prefix; on failure it is everything
/// consumed before the automaton died.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub success: bool,
    pub text: String,
}

impl Match {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            success: true,
            text: text.into(),
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            success: false,
            text: text.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = if self.success { "MATCH" } else { "NO MATCH" };
        write!(f, "{} {:?}", label, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_quotes_text() {
        assert_eq!(Match::success("12").to_string(), r#"MATCH "12""#);
        assert_eq!(Match::failure("").to_string(), r#"NO MATCH """#);
    }

    #[test]
    fn constructors_set_flag() {
        assert!(Match::success("a").is_success());
        assert!(!Match::failure("a").is_success());
    }
}
