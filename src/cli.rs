//! Minimal CLI parsing.

use std::env;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// Print the GraphQL schema (SDL) to stdout and exit
    pub print_schema: bool,
    /// Print usage and exit
    pub help: bool,
}

pub const USAGE: &str = "\
Usage: library-catalog [--print-schema]

Serves the library catalog GraphQL API. Configuration is read from the
environment (HOST, PORT, SEED_DATA, EVENT_CHANNEL_CAPACITY,
GRAPHQL_MAX_DEPTH, GRAPHQL_MAX_COMPLEXITY) and an optional .env file.

Options:
  --print-schema  print the GraphQL schema and exit
  -h, --help      print this message and exit";

impl CliOptions {
    pub fn from_args() -> Self {
        Self::parse(env::args().skip(1))
    }

    /// Unknown arguments are ignored
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = CliOptions::default();
        for arg in args {
            match arg.as_ref() {
                "--print-schema" => options.print_schema = true,
                "-h" | "--help" => options.help = true,
                _ => {}
            }
        }
        options
    }
}
