//! The matching engine.
//!
//! A [`Lexer`] owns the active fragment set, the text matched along the live
//! path and a list of hooks: snapshots of the matched text taken each time
//! an active fragment accepted. When every path dies, or input runs out, the
//! most recent hook is the result. With no hooks the match fails with
//! whatever was consumed.

use itertools::Itertools;

use crate::match_result::Match;
use crate::pattern::{Automaton, FragmentId, Next};
use crate::symbol::Symbol;

/// Engine lifecycle. `Succeeded` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexState {
    Running,
    Succeeded,
    Failed,
}

impl LexState {
    pub fn is_running(self) -> bool {
        self == LexState::Running
    }
}

/// Matched text at an accepting boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hook {
    text: String,
}

impl Hook {
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// One in-flight match over an [`Automaton`].
///
/// Feed characters with [`feed`](Lexer::feed), then call
/// [`finish`](Lexer::finish) to consume the engine into its [`Match`].
#[derive(Debug)]
pub struct Lexer<'a> {
    automaton: &'a Automaton,
    active: Vec<FragmentId>,
    matched: String,
    /// Oldest first; the last entry is the most recent hook.
    hooks: Vec<Hook>,
    state: LexState,
}

impl<'a> Lexer<'a> {
    /// Start from the automaton's start set.
    pub fn new(automaton: &'a Automaton) -> Self {
        Self::with_active(automaton, automaton.start().to_vec())
    }

    /// Start from an explicit active set.
    ///
    /// An empty set is already failed.
    pub fn with_active(automaton: &'a Automaton, active: Vec<FragmentId>) -> Self {
        let state = if active.is_empty() {
            LexState::Failed
        } else {
            LexState::Running
        };
        Self {
            automaton,
            active,
            matched: String::new(),
            hooks: Vec::new(),
            state,
        }
    }

    pub fn state(&self) -> LexState {
        self.state
    }

    /// Text consumed along the live path.
    pub fn matched(&self) -> &str {
        &self.matched
    }

    /// The active set, in the order fragments will be stepped.
    pub fn active(&self) -> &[FragmentId] {
        &self.active
    }

    /// Recorded hooks, most recent first.
    pub fn hooks(&self) -> impl Iterator<Item = &Hook> {
        self.hooks.iter().rev()
    }

    /// Step every active fragment over `symbol`.
    ///
    /// Returns the successor fragments in active-set order, and how many
    /// fragments accepted.
    fn advance(&self, symbol: Symbol) -> (Vec<FragmentId>, usize) {
        let mut next = Vec::new();
        let mut accepts = 0;
        for &id in &self.active {
            let Some(fragment) = self.automaton.get(id) else {
                log::warn!("dropping unknown fragment {id}");
                continue;
            };
            for n in fragment.step(symbol) {
                match n {
                    Next::Fragment(to) => next.push(to),
                    Next::Accept => accepts += 1,
                }
            }
        }
        (next, accepts)
    }

    /// Snapshot the matched text once per accept. Must run before `matched`
    /// is extended, so each hook ends at the boundary before the symbol.
    fn record_hooks(&mut self, accepts: usize) {
        for _ in 0..accepts {
            log::debug!("hook at {:?}", self.matched);
            self.hooks.push(Hook {
                text: self.matched.clone(),
            });
        }
    }

    fn settle(&mut self) {
        self.active.clear();
        self.state = if self.hooks.is_empty() {
            LexState::Failed
        } else {
            LexState::Succeeded
        };
        log::debug!(
            "{:?} after {:?} with {} hook(s)",
            self.state,
            self.matched,
            self.hooks.len()
        );
    }

    /// Consume one character. No-op once the engine has terminated.
    pub fn feed(&mut self, ch: char) -> LexState {
        if !self.state.is_running() {
            return self.state;
        }
        let (next, accepts) = self.advance(Symbol::Char(ch));
        log::trace!(
            "{:?}: [{}] -> [{}], {} accept(s)",
            ch,
            self.active.iter().join(", "),
            next.iter().join(", "),
            accepts
        );
        self.record_hooks(accepts);
        if next.is_empty() {
            self.settle();
        } else {
            self.matched.push(ch);
            self.active = next;
        }
        self.state
    }

    /// Resolve the match, treating the current position as end of input.
    ///
    /// Still-active fragments are stepped once with [`Symbol::End`] so they
    /// can accept at the final boundary; whatever they return is discarded.
    pub fn finish(mut self) -> Match {
        if self.state.is_running() {
            let (_, accepts) = self.advance(Symbol::End);
            self.record_hooks(accepts);
            self.settle();
        }
        match self.hooks.pop() {
            Some(hook) => Match::success(hook.text),
            None => Match::failure(self.matched),
        }
    }

    /// Feed `input` until the engine terminates or input runs out.
    pub fn lex(mut self, input: impl IntoIterator<Item = char>) -> Match {
        for ch in input {
            if !self.feed(ch).is_running() {
                break;
            }
        }
        self.finish()
    }
}
