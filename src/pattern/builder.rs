//! Arena construction of automata.
//!
//! An [`AutomatonBuilder`] allocates fragments and wires their successor
//! lists; [`AutomatonBuilder::build`] checks every handle and freezes the
//! result into an immutable, shareable [`Automaton`].

use itertools::Itertools;

use crate::error::BuildError;
use crate::lexer::Lexer;
use crate::match_result::Match;
use crate::symbol::Symbol;

use super::char_class::CharSet;
use super::fragment::{Fragment, FragmentId, Next};

/// First and last fragment of a literal chain.
///
/// Continuations are attached by linking `last`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chain {
    pub first: FragmentId,
    pub last: FragmentId,
}

/// A frozen fragment graph plus the fragments a match starts from.
#[derive(Debug)]
pub struct Automaton {
    fragments: Vec<Fragment>,
    start: Vec<FragmentId>,
}

impl Automaton {
    /// An automaton with no fragments. Every input fails with empty text.
    pub fn empty() -> Self {
        Self {
            fragments: Vec::new(),
            start: Vec::new(),
        }
    }

    pub fn get(&self, id: FragmentId) -> Option<&Fragment> {
        self.fragments.get(id.0)
    }

    /// Initial active set for a new match.
    pub fn start(&self) -> &[FragmentId] {
        &self.start
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// A fresh engine positioned at the start set.
    pub fn lexer(&self) -> Lexer<'_> {
        Lexer::new(self)
    }

    /// Match `input` from its first character.
    pub fn lex(&self, input: &str) -> Match {
        self.lexer().lex(input.chars())
    }
}

#[derive(Debug, Default)]
pub struct AutomatonBuilder {
    fragments: Vec<Fragment>,
    start: Vec<FragmentId>,
}

impl AutomatonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, fragment: Fragment) -> FragmentId {
        let id = FragmentId(self.fragments.len());
        self.fragments.push(fragment);
        id
    }

    fn check(&self, id: FragmentId) -> Result<(), BuildError> {
        if id.0 < self.fragments.len() {
            Ok(())
        } else {
            Err(BuildError::UnknownFragment(id))
        }
    }

    fn check_all(&self, nexts: &[Next]) -> Result<(), BuildError> {
        for next in nexts {
            if let Next::Fragment(id) = next {
                self.check(*id)?;
            }
        }
        Ok(())
    }

    /// A literal-symbol fragment with no successors yet.
    pub fn literal(&mut self, target: char) -> FragmentId {
        self.push(Fragment::Literal {
            target,
            nexts: Vec::new(),
        })
    }

    /// One literal fragment per character of `text`, each linked to the next.
    pub fn chain(&mut self, text: &str) -> Result<Chain, BuildError> {
        let ids: Vec<FragmentId> = text.chars().map(|ch| self.literal(ch)).collect();
        let (Some(&first), Some(&last)) = (ids.first(), ids.last()) else {
            return Err(BuildError::EmptyLiteral);
        };
        for (from, to) in ids.iter().copied().tuple_windows() {
            self.link(from, to)?;
        }
        Ok(Chain { first, last })
    }

    /// A functional fragment.
    ///
    /// `make` receives the id the fragment will have, so the step function
    /// can name itself to repeat. Any other id it returns must come from
    /// this builder.
    pub fn func<F, S>(&mut self, make: F) -> FragmentId
    where
        F: FnOnce(FragmentId) -> S,
        S: Fn(Symbol) -> Vec<Next> + Send + Sync + 'static,
    {
        let id = FragmentId(self.fragments.len());
        let step = make(id);
        self.push(Fragment::Func(Box::new(step)))
    }

    /// One character from `set`, then `nexts`.
    pub fn class(&mut self, set: CharSet, nexts: Vec<Next>) -> Result<FragmentId, BuildError> {
        self.check_all(&nexts)?;
        Ok(self.func(move |_| {
            move |symbol: Symbol| match symbol.char() {
                Some(ch) if set.matches(ch) => nexts.clone(),
                _ => Vec::new(),
            }
        }))
    }

    /// One or more characters from `set`.
    ///
    /// After each character the fragment stays active and `exit` is offered
    /// alongside it. Zero-or-more is expressed by listing both the loop and
    /// its exit in the predecessor's successors.
    pub fn one_or_more(&mut self, set: CharSet, exit: Vec<Next>) -> Result<FragmentId, BuildError> {
        self.check_all(&exit)?;
        Ok(self.func(move |me| {
            let nexts: Vec<Next> = std::iter::once(Next::Fragment(me)).chain(exit).collect();
            move |symbol: Symbol| match symbol.char() {
                Some(ch) if set.matches(ch) => nexts.clone(),
                _ => Vec::new(),
            }
        }))
    }

    /// A fragment that accepts on any symbol, including end of input.
    ///
    /// Placing it among a fragment's successors marks the boundary after
    /// that fragment as an accepting point.
    pub fn accept_end(&mut self) -> FragmentId {
        self.func(|_| |_: Symbol| vec![Next::Accept])
    }

    /// Append `next` to the successor list of literal fragment `from`.
    pub fn link(&mut self, from: FragmentId, next: impl Into<Next>) -> Result<(), BuildError> {
        let next = next.into();
        self.check_all(&[next])?;
        match self.fragments.get_mut(from.0) {
            Some(Fragment::Literal { nexts, .. }) => {
                nexts.push(next);
                Ok(())
            }
            Some(Fragment::Func(_)) => Err(BuildError::NotLinkable(from)),
            None => Err(BuildError::UnknownFragment(from)),
        }
    }

    pub fn link_all(
        &mut self,
        from: FragmentId,
        nexts: impl IntoIterator<Item = Next>,
    ) -> Result<(), BuildError> {
        for next in nexts {
            self.link(from, next)?;
        }
        Ok(())
    }

    /// Add `id` to the start set. Order is kept and decides hook order.
    pub fn start(&mut self, id: FragmentId) -> Result<&mut Self, BuildError> {
        self.check(id)?;
        self.start.push(id);
        Ok(self)
    }

    pub fn build(self) -> Result<Automaton, BuildError> {
        for id in &self.start {
            self.check(*id)?;
        }
        for fragment in &self.fragments {
            for id in fragment.linked_ids() {
                self.check(id)?;
            }
        }
        log::debug!(
            "built automaton: {} fragments, start [{}]",
            self.fragments.len(),
            self.start.iter().join(", ")
        );
        Ok(Automaton {
            fragments: self.fragments,
            start: self.start,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_ids(automaton: &Automaton, id: FragmentId, ch: char) -> Vec<Next> {
        automaton.get(id).unwrap().step(Symbol::Char(ch))
    }

    #[test]
    fn chain_links_each_char_to_the_next() {
        let mut b = AutomatonBuilder::new();
        let chain = b.chain("var").unwrap();
        let a = b.build().unwrap();
        assert_eq!(a.len(), 3);
        assert_eq!(chain.first, FragmentId(0));
        assert_eq!(chain.last, FragmentId(2));
        assert_eq!(step_ids(&a, FragmentId(0), 'v'), vec![Next::Fragment(FragmentId(1))]);
        assert_eq!(step_ids(&a, FragmentId(1), 'a'), vec![Next::Fragment(FragmentId(2))]);
        assert!(step_ids(&a, FragmentId(2), 'r').is_empty());
        assert!(step_ids(&a, FragmentId(0), 'x').is_empty());
    }

    #[test]
    fn single_char_chain_is_first_and_last() {
        let mut b = AutomatonBuilder::new();
        let chain = b.chain("x").unwrap();
        assert_eq!(chain.first, chain.last);
    }

    #[test]
    fn empty_chain_is_a_build_error() {
        let mut b = AutomatonBuilder::new();
        assert_eq!(b.chain(""), Err(BuildError::EmptyLiteral));
    }

    #[test]
    fn link_rejects_unknown_and_functional_fragments() {
        let mut b = AutomatonBuilder::new();
        let lit = b.literal('a');
        let end = b.accept_end();
        assert_eq!(
            b.link(lit, FragmentId(9)),
            Err(BuildError::UnknownFragment(FragmentId(9)))
        );
        assert_eq!(b.link(end, lit), Err(BuildError::NotLinkable(end)));
        assert_eq!(
            b.link(FragmentId(5), lit),
            Err(BuildError::UnknownFragment(FragmentId(5)))
        );
        assert_eq!(b.link(lit, end), Ok(()));
    }

    #[test]
    fn start_rejects_unknown_fragment() {
        let mut b = AutomatonBuilder::new();
        assert!(matches!(
            b.start(FragmentId(0)),
            Err(BuildError::UnknownFragment(_))
        ));
    }

    #[test]
    fn class_checks_successors_up_front() {
        let mut b = AutomatonBuilder::new();
        assert_eq!(
            b.class(CharSet::digit(), vec![Next::Fragment(FragmentId(3))]),
            Err(BuildError::UnknownFragment(FragmentId(3)))
        );
    }

    #[test]
    fn one_or_more_returns_itself_then_exit() {
        let mut b = AutomatonBuilder::new();
        let digits = b.one_or_more(CharSet::digit(), vec![Next::Accept]).unwrap();
        let a = b.build().unwrap();
        assert_eq!(
            step_ids(&a, digits, '7'),
            vec![Next::Fragment(digits), Next::Accept]
        );
        assert!(step_ids(&a, digits, 'x').is_empty());
        assert!(a.get(digits).unwrap().step(Symbol::End).is_empty());
    }

    #[test]
    fn accept_end_accepts_everything() {
        let mut b = AutomatonBuilder::new();
        let end = b.accept_end();
        let a = b.build().unwrap();
        assert_eq!(step_ids(&a, end, 'q'), vec![Next::Accept]);
        assert_eq!(a.get(end).unwrap().step(Symbol::End), vec![Next::Accept]);
    }

    #[test]
    fn loop_back_to_own_start() {
        let mut b = AutomatonBuilder::new();
        let ab = b.chain("ab").unwrap();
        b.link(ab.last, ab.first).unwrap();
        b.start(ab.first).unwrap();
        let a = b.build().unwrap();
        assert_eq!(a.start(), &[ab.first]);
        assert_eq!(step_ids(&a, ab.last, 'b'), vec![Next::Fragment(ab.first)]);
    }

    #[test]
    fn automaton_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Automaton>();
    }

    #[test]
    fn empty_automaton_has_no_start() {
        let a = Automaton::empty();
        assert!(a.is_empty());
        assert!(a.start().is_empty());
    }
}
