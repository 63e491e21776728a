//! Named demo automata.
//!
//! These are ordinary fragment graphs built on the public builder API; the
//! engine knows nothing about them.

use itertools::Itertools;
use phf::{Map, phf_map};

use crate::error::BuildError;
use crate::pattern::{Automaton, AutomatonBuilder, CharSet, FragmentId};

pub struct GrammarInfo {
    build: fn(&mut AutomatonBuilder) -> Result<(), BuildError>,
    pub summary: &'static str,
}

impl GrammarInfo {
    pub fn build(&self) -> Result<Automaton, BuildError> {
        let mut builder = AutomatonBuilder::new();
        (self.build)(&mut builder)?;
        builder.build()
    }
}

/// Grammars by name. Keep names sorted alphabetically.
const GRAMMAR_MAP: Map<&'static str, GrammarInfo> = phf_map! {
    "ab" => GrammarInfo {
        build: ab,
        summary: "literal \"ab\" with no accepting boundary (never matches)",
    },
    "ab-star" => GrammarInfo {
        build: ab_star,
        summary: "(ab)*, accepting after each complete \"ab\"",
    },
    "digits" => GrammarInfo {
        build: digits,
        summary: "one or more ASCII digits",
    },
    "hex" => GrammarInfo {
        build: hex,
        summary: "\"0x\" followed by one or more hex digits",
    },
    "ident" => GrammarInfo {
        build: ident,
        summary: "a letter or '_', then letters, digits or '_'",
    },
    "keyword" => GrammarInfo {
        build: keyword,
        summary: "one of: fn, for, let, var",
    },
    "number" => GrammarInfo {
        build: number,
        summary: "hex or decimal digits, tried side by side",
    },
    "var" => GrammarInfo {
        build: var,
        summary: "\"var\", whitespace, then an identifier",
    },
    "ws" => GrammarInfo {
        build: ws,
        summary: "one or more whitespace characters",
    },
};

pub fn lookup(name: &str) -> Option<&'static GrammarInfo> {
    GRAMMAR_MAP.get(name)
}

/// All grammar names, sorted.
pub fn names() -> Vec<&'static str> {
    GRAMMAR_MAP.keys().copied().sorted().collect()
}

// ─── Fragment helpers ────────────────────────────────────────────────────────

fn digits_start(b: &mut AutomatonBuilder, end: FragmentId) -> Result<FragmentId, BuildError> {
    b.one_or_more(CharSet::digit(), vec![end.into()])
}

fn hex_start(b: &mut AutomatonBuilder, end: FragmentId) -> Result<FragmentId, BuildError> {
    let body = b.one_or_more(CharSet::hex_digit(), vec![end.into()])?;
    let prefix = b.chain("0x")?;
    b.link(prefix.last, body)?;
    Ok(prefix.first)
}

fn ident_start(b: &mut AutomatonBuilder, end: FragmentId) -> Result<FragmentId, BuildError> {
    let body = b.one_or_more(CharSet::ident_body(), vec![end.into()])?;
    b.class(CharSet::ident_start(), vec![body.into(), end.into()])
}

/// Literal `text` followed by an accepting boundary.
fn keyword_start(
    b: &mut AutomatonBuilder,
    text: &str,
    end: FragmentId,
) -> Result<FragmentId, BuildError> {
    let chain = b.chain(text)?;
    b.link(chain.last, end)?;
    Ok(chain.first)
}

// ─── Grammars ────────────────────────────────────────────────────────────────

fn ab(b: &mut AutomatonBuilder) -> Result<(), BuildError> {
    let chain = b.chain("ab")?;
    b.start(chain.first)?;
    Ok(())
}

fn ab_star(b: &mut AutomatonBuilder) -> Result<(), BuildError> {
    let end = b.accept_end();
    let chain = b.chain("ab")?;
    b.link(chain.last, chain.first)?;
    b.link(chain.last, end)?;
    b.start(chain.first)?;
    Ok(())
}

fn digits(b: &mut AutomatonBuilder) -> Result<(), BuildError> {
    let end = b.accept_end();
    let start = digits_start(b, end)?;
    b.start(start)?;
    Ok(())
}

fn hex(b: &mut AutomatonBuilder) -> Result<(), BuildError> {
    let end = b.accept_end();
    let start = hex_start(b, end)?;
    b.start(start)?;
    Ok(())
}

fn ident(b: &mut AutomatonBuilder) -> Result<(), BuildError> {
    let end = b.accept_end();
    let start = ident_start(b, end)?;
    b.start(start)?;
    Ok(())
}

fn keyword(b: &mut AutomatonBuilder) -> Result<(), BuildError> {
    let end = b.accept_end();
    for text in ["fn", "for", "let", "var"] {
        let start = keyword_start(b, text, end)?;
        b.start(start)?;
    }
    Ok(())
}

fn number(b: &mut AutomatonBuilder) -> Result<(), BuildError> {
    let end = b.accept_end();
    let hex = hex_start(b, end)?;
    let dec = digits_start(b, end)?;
    b.start(hex)?.start(dec)?;
    Ok(())
}

fn var(b: &mut AutomatonBuilder) -> Result<(), BuildError> {
    let end = b.accept_end();
    let name = ident_start(b, end)?;
    let gap = b.one_or_more(CharSet::whitespace(), vec![name.into()])?;
    let kw = b.chain("var")?;
    b.link(kw.last, gap)?;
    b.start(kw.first)?;
    Ok(())
}

fn ws(b: &mut AutomatonBuilder) -> Result<(), BuildError> {
    let end = b.accept_end();
    let start = b.one_or_more(CharSet::whitespace(), vec![end.into()])?;
    b.start(start)?;
    Ok(())
}
