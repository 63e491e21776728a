//! Streaming input: a threaded producer/engine pipeline and line sources.
//!
//! The engine only needs a sequential supply of characters with a visible
//! end. Closing the channel (dropping the sender) is end of input.

use std::io::{self, BufRead};
use std::sync::mpsc::{self, Receiver};
use std::thread;

use crate::match_result::Match;
use crate::pattern::Automaton;

/// Run the engine over characters arriving on `input`.
///
/// Returns as soon as the engine terminates, dropping `input` so the
/// producer sees a closed channel.
pub fn lex_channel(automaton: &Automaton, input: Receiver<char>) -> Match {
    automaton.lexer().lex(input)
}

/// Match `input` with the producer and the engine on separate threads.
///
/// Characters cross a bounded channel of `capacity` slots; `0` makes every
/// send a rendezvous with the engine. The engine publishes exactly one
/// result on its own channel.
pub fn run_pipeline<I>(automaton: &Automaton, input: I, capacity: usize) -> Match
where
    I: IntoIterator<Item = char>,
    I::IntoIter: Send,
{
    let (char_tx, char_rx) = mpsc::sync_channel::<char>(capacity);
    let (match_tx, match_rx) = mpsc::sync_channel::<Match>(1);
    let input = input.into_iter();

    thread::scope(|s| {
        s.spawn(move || {
            let mut sent = 0usize;
            for ch in input {
                if char_tx.send(ch).is_err() {
                    log::trace!("engine finished after {sent} char(s); producer stopping");
                    return;
                }
                sent += 1;
            }
            log::trace!("producer closed after {sent} char(s)");
        });
        s.spawn(move || {
            let result = lex_channel(automaton, char_rx);
            // The receiver outlives the scope, so this cannot fail.
            let _ = match_tx.send(result);
        });
    });

    match_rx
        .recv()
        .unwrap_or_else(|_| Match::failure(String::new()))
}

/// Each line of `reader` as an independent character source.
///
/// Line terminators (`\n` or `\r\n`) are stripped.
pub fn lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.lines()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{AutomatonBuilder, CharSet};
    use std::io::Cursor;

    fn digits() -> Automaton {
        let mut b = AutomatonBuilder::new();
        let end = b.accept_end();
        let d = b.one_or_more(CharSet::digit(), vec![end.into()]).unwrap();
        b.start(d).unwrap();
        b.build().unwrap()
    }

    #[test]
    fn pipeline_matches_like_direct_lex() {
        let a = digits();
        for input in ["123x", "123", "x", ""] {
            for capacity in [0, 1, 16] {
                assert_eq!(
                    run_pipeline(&a, input.chars().collect::<Vec<_>>(), capacity),
                    a.lex(input),
                    "input {input:?}, capacity {capacity}"
                );
            }
        }
    }

    #[test]
    fn pipeline_stops_producer_when_engine_dies() {
        let a = digits();
        // Endless input: only terminates because the engine hangs up.
        let input = "12".chars().chain(std::iter::repeat('x'));
        assert_eq!(run_pipeline(&a, input, 0), Match::success("12"));
    }

    #[test]
    fn closing_channel_is_end_of_input() {
        let a = digits();
        let (tx, rx) = mpsc::sync_channel(4);
        tx.send('4').unwrap();
        tx.send('2').unwrap();
        drop(tx);
        assert_eq!(lex_channel(&a, rx), Match::success("42"));
    }

    #[test]
    fn closing_before_any_input() {
        let a = digits();
        let (tx, rx) = mpsc::sync_channel::<char>(0);
        drop(tx);
        assert_eq!(lex_channel(&a, rx), Match::failure(""));
    }

    #[test]
    fn lines_strip_terminators() {
        let input = Cursor::new("12\r\nab\n\n7");
        let got: Vec<String> = lines(input).collect::<io::Result<_>>().unwrap();
        assert_eq!(got, vec!["12", "ab", "", "7"]);
    }
}
