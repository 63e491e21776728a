//! A fragment-based matching engine.
//!
//! Automata are graphs of small matcher fragments held in an arena. A
//! [`Lexer`] steps every active fragment over each input character, keeps
//! hooks at accepting boundaries, and resolves to a single [`Match`].
//!
//! # Example
//!
//! ```rust
//! use hooklex::{AutomatonBuilder, Match};
//!
//! // (ab)*, accepting after each complete "ab"
//! let mut builder = AutomatonBuilder::new();
//! let ab = builder.chain("ab").unwrap();
//! let end = builder.accept_end();
//! builder.link(ab.last, ab.first).unwrap();
//! builder.link(ab.last, end).unwrap();
//! builder.start(ab.first).unwrap();
//! let automaton = builder.build().unwrap();
//!
//! assert_eq!(automaton.lex("ababx"), Match::success("abab"));
//! assert_eq!(automaton.lex("a"), Match::failure("a"));
//! ```

mod error;
pub mod grammar;
mod lexer;
mod match_result;
pub mod pattern;
pub mod stream;
mod symbol;

pub use error::BuildError;
pub use lexer::{Hook, LexState, Lexer};
pub use match_result::Match;
pub use pattern::{Automaton, AutomatonBuilder, CharSet, Chain, FragmentId, Next};
pub use symbol::Symbol;
