use clap::Parser;
use std::io;

use ellipsis::app::{self, DEFAULT_LIMIT, Options};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Patterns to expand, e.g. "http://node{1...4}/disk{1...8}"
    #[arg(value_name = "PATTERN", required = true)]
    patterns: Vec<String>,

    /// Only check that every pattern uses ellipsis syntax
    #[arg(long)]
    check: bool,

    /// Separator between the values taken from each pattern
    #[arg(short = 's', long, default_value = " ")]
    separator: String,

    /// Print only lines matching this wildcard pattern
    #[arg(short = 'f', long, value_name = "GLOB")]
    filter: Option<String>,

    /// Refuse to expand more than this many combinations
    #[arg(long, default_value_t = DEFAULT_LIMIT)]
    limit: u64,

    /// Describe parsed patterns on stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    let options = Options {
        patterns: args.patterns,
        check: args.check,
        separator: args.separator,
        filter: args.filter,
        limit: args.limit,
        verbose: args.verbose,
    };

    let mut stdout = io::stdout().lock();
    match app::run(&options, &mut stdout) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(2);
        }
    }
}
