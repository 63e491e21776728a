//! Errors raised while constructing an automaton.
//!
//! Match failures are not errors; they are reported through [`Match`](crate::Match).

use thiserror::Error;

use crate::pattern::FragmentId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A literal chain was requested for an empty string.
    #[error("literal chain needs at least one character")]
    EmptyLiteral,
    /// A handle does not name a fragment of this automaton.
    #[error("fragment {0} does not exist")]
    UnknownFragment(FragmentId),
    /// Only literal fragments have editable successor lists.
    #[error("fragment {0} is not a literal and cannot be linked")]
    NotLinkable(FragmentId),
}
