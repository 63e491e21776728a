//! Automaton fragments and the builders that wire them together.
//!
//! A fragment is one automaton state. Stepping it with a [`Symbol`](crate::Symbol)
//! yields the fragments reachable on that symbol, plus [`Next::Accept`] when
//! the match may legally end at the boundary before it.
//!
//! | Builder call     | Fragment                                        |
//! |------------------|-------------------------------------------------|
//! | `literal(c)`     | Exactly `c`, then its linked successors         |
//! | `chain("text")`  | One literal per character, linked in order      |
//! | `class(set, n)`  | One character from `set`, then `n`              |
//! | `one_or_more`    | Characters from a set, repeating itself         |
//! | `accept_end()`   | Accepts on any symbol, marking a boundary       |
//! | `func(make)`     | Arbitrary step function                         |

pub mod builder;
pub mod char_class;
pub mod fragment;

pub use builder::{Automaton, AutomatonBuilder, Chain};
pub use char_class::{CharClass, CharSet, CharSetKind};
pub use fragment::{Fragment, FragmentId, Next, StepFn};
