//! Matcher fragments: the states of an automaton.
//!
//! Fragments live in an [`Automaton`](super::Automaton) arena and refer to
//! each other by [`FragmentId`], so loops and back-references never form
//! ownership cycles.

use std::fmt;

use crate::symbol::Symbol;

/// Stable handle to a fragment inside its automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FragmentId(pub(crate) usize);

impl FragmentId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for FragmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One entry in the list a fragment returns from [`Fragment::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Next {
    /// Continue matching in this fragment.
    Fragment(FragmentId),
    /// The automaton may stop here successfully.
    Accept,
}

impl From<FragmentId> for Next {
    fn from(id: FragmentId) -> Self {
        Next::Fragment(id)
    }
}

/// Transition function of a functional fragment.
pub type StepFn = Box<dyn Fn(Symbol) -> Vec<Next> + Send + Sync>;

/// An automaton state.
///
/// Stepping is pure: the result depends only on the symbol.
pub enum Fragment {
    /// Delegates entirely to a wrapped function.
    Func(StepFn),
    /// Matches exactly `target` and moves to `nexts`.
    Literal { target: char, nexts: Vec<Next> },
}

impl Fragment {
    /// Successors of this fragment on `symbol`. Empty means dead end.
    pub fn step(&self, symbol: Symbol) -> Vec<Next> {
        match self {
            Fragment::Func(f) => f(symbol),
            Fragment::Literal { target, nexts } => match symbol {
                Symbol::Char(ch) if ch == *target => nexts.clone(),
                _ => Vec::new(),
            },
        }
    }

    /// Ids named by a literal's successor list. Functional fragments are opaque.
    pub(crate) fn linked_ids(&self) -> impl Iterator<Item = FragmentId> + '_ {
        let nexts: &[Next] = match self {
            Fragment::Literal { nexts, .. } => nexts,
            Fragment::Func(_) => &[],
        };
        nexts.iter().filter_map(|n| match n {
            Next::Fragment(id) => Some(*id),
            Next::Accept => None,
        })
    }
}

impl fmt::Debug for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Func(_) => f.write_str("Func(..)"),
            Fragment::Literal { target, nexts } => f
                .debug_struct("Literal")
                .field("target", target)
                .field("nexts", nexts)
                .finish(),
        }
    }
}
