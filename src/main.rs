use anyhow::{Context, Result, bail};
use clap::Parser;
use crossterm::style::Stylize;
use std::io;
use std::process;

use hooklex::{Automaton, Match, grammar, stream};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Grammar to match with (see --list)
    #[arg(value_name = "GRAMMAR", required_unless_present = "list")]
    grammar: Option<String>,

    /// Inputs to match; when none are given each line of stdin is matched
    #[arg(value_name = "INPUT")]
    inputs: Vec<String>,

    /// List the available grammars
    #[arg(short, long)]
    list: bool,

    /// Feed each input from a producer thread through a bounded channel
    #[arg(short, long)]
    threaded: bool,

    /// Channel capacity for --threaded (0 hands over one char at a time)
    #[arg(long, value_name = "N", default_value_t = 0)]
    capacity: usize,

    /// Print plain labels without colour
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable logging
    #[arg(short, long)]
    quiet: bool,
}

fn init_logging(args: &Args) {
    let log_level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    if !args.quiet {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .init();
    }
}

fn list_grammars() {
    for name in grammar::names() {
        if let Some(info) = grammar::lookup(name) {
            println!("{:<10} {}", name, info.summary);
        }
    }
}

fn match_one(automaton: &Automaton, input: &str, args: &Args) -> Match {
    if args.threaded {
        stream::run_pipeline(automaton, input.chars().collect::<Vec<_>>(), args.capacity)
    } else {
        automaton.lex(input)
    }
}

fn print_match(result: &Match, color: bool) {
    if !color {
        println!("{}", result);
        return;
    }
    let label = if result.success {
        "MATCH".green()
    } else {
        "NO MATCH".red()
    };
    println!("{} {:?}", label, result.text);
}

/// Returns whether every input matched.
fn run(args: &Args) -> Result<bool> {
    if args.list {
        list_grammars();
        return Ok(true);
    }
    let Some(name) = args.grammar.as_deref() else {
        bail!("no grammar given");
    };
    let Some(info) = grammar::lookup(name) else {
        bail!("unknown grammar '{}' (try --list)", name);
    };
    let automaton = info
        .build()
        .with_context(|| format!("failed to build grammar '{}'", name))?;
    log::info!("grammar '{}': {} fragments", name, automaton.len());

    let mut all_matched = true;
    let mut handle = |input: &str| {
        let result = match_one(&automaton, input, args);
        log::debug!("{:?} -> {:?}", input, result);
        all_matched &= result.success;
        print_match(&result, !args.no_color);
    };

    if args.inputs.is_empty() {
        for line in stream::lines(io::stdin().lock()) {
            let line = line.context("failed to read stdin")?;
            handle(&line);
        }
    } else {
        for input in &args.inputs {
            handle(input);
        }
    }
    Ok(all_matched)
}

fn main() {
    let args = Args::parse();
    init_logging(&args);

    match run(&args) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            eprintln!("error: {:#}", err);
            process::exit(2);
        }
    }
}
