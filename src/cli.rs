use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::commands::lucky::Search;
use crate::helpers::parse_filter;
use crate::models::MessageFilter;

#[derive(Parser)]
#[command(name = "oc")]
#[command(about = "Demonstrates operation outcomes and their reports", long_about = None)]
pub struct Cli {
    /// Emit debug diagnostics (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run lucky-number rounds and report their outcomes
    Run {
        #[command(flatten)]
        search: SearchArgs,

        /// Number of rounds to play
        #[arg(long, default_value_t = 1)]
        rounds: u32,

        /// Where reports are written
        #[arg(long, value_enum, default_value_t = SinkKind::Console)]
        sink: SinkKind,

        /// Output round reports as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play one round and list the merged messages of one kind
    Messages {
        #[command(flatten)]
        search: SearchArgs,

        /// Message kind to list: any, info, warning or error
        #[arg(long, default_value = "any", value_parser = parse_filter)]
        filter: MessageFilter,

        /// Where the listing is written
        #[arg(long, value_enum, default_value_t = SinkKind::Console)]
        sink: SinkKind,
    },

    /// Show the usage guide
    Guide,
}

#[derive(Args, Clone, Copy)]
pub struct SearchArgs {
    /// Maximum draws per search
    #[arg(long, default_value_t = 1000)]
    pub attempts: u32,

    /// Draws are taken from 0..RANGE
    #[arg(long, default_value_t = 100_000)]
    pub range: u32,

    /// A draw is lucky when it is a multiple of MODULUS
    #[arg(long, default_value_t = 1000)]
    pub modulus: u32,

    /// Seed for reproducible draws
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SearchArgs {
    pub fn search(&self) -> Search {
        Search {
            attempts: self.attempts,
            range: self.range,
            modulus: self.modulus,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SinkKind {
    /// Styled lines on stdout
    Console,
    /// tracing events on stderr
    Tracing,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MessageKind;

    #[test]
    fn run_defaults() {
        let cli = Cli::try_parse_from(["oc", "run"]).unwrap();
        match cli.command {
            Commands::Run {
                search,
                rounds,
                sink,
                json,
            } => {
                assert_eq!(search.search(), Search::default());
                assert_eq!(search.seed, None);
                assert_eq!(rounds, 1);
                assert_eq!(sink, SinkKind::Console);
                assert!(!json);
            }
            _ => panic!("expected run"),
        }
    }

    #[test]
    fn messages_filter_parses() {
        let cli =
            Cli::try_parse_from(["oc", "messages", "--filter", "warning", "--seed", "3"]).unwrap();
        match cli.command {
            Commands::Messages { search, filter, .. } => {
                assert_eq!(filter, MessageFilter::Kind(MessageKind::Warning));
                assert_eq!(search.seed, Some(3));
            }
            _ => panic!("expected messages"),
        }
    }

    #[test]
    fn messages_filter_rejects_typo() {
        assert!(Cli::try_parse_from(["oc", "messages", "--filter", "eror"]).is_err());
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["oc", "guide", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }
}
