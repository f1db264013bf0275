use lexopt::{Arg, Parser, ValueExt};
use std::path::PathBuf;

pub(crate) const HELP: &str = "\
Usage: gridsnake [<options>]

Play Snake in the terminal

Options:
  -c <FILE>, --config <FILE>
                    Read configuration from the given file
  --seed <N>        Seed the food placement RNG with the given integer
  -h, --help        Display this help message and exit
  -V, --version     Show the program version and exit
";

/// What the command line asks the program to do
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Arguments {
    Run(RunOptions),
    Help,
    Version,
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct RunOptions {
    /// Configuration file to use instead of the default one
    pub(crate) config: Option<PathBuf>,

    /// Seed for the food placement RNG
    pub(crate) seed: Option<u64>,
}

impl Arguments {
    pub(crate) fn from_parser(mut parser: Parser) -> Result<Arguments, lexopt::Error> {
        let mut opts = RunOptions::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    opts.config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("seed") => opts.seed = Some(parser.value()?.parse()?),
                Arg::Short('h') | Arg::Long("help") => return Ok(Arguments::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Arguments::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Arguments::Run(opts))
    }
}
