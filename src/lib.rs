#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]

//! Operation outcomes: a severity plus an ordered log of diagnostic messages,
//! returned from fallible operations instead of raising.
//!
//! ```
//! use outcome::{MessageKind, Outcome, Severity};
//!
//! let mut child = Outcome::new();
//! child.add_info("loaded 3 records").add_warning("1 record skipped");
//!
//! let mut parent = Outcome::new();
//! parent.add_info("starting import").incorporate(&child);
//! assert_eq!(parent.severity(), Severity::Warning);
//! assert_eq!(parent.count(MessageKind::Info), 2);
//!
//! let mut lines = Vec::new();
//! parent.log_result(|line| lines.push(line.to_owned()), "import");
//! assert_eq!(lines[0], "The operation 'import' completed successfully.");
//! ```

pub mod cli;
pub mod commands;
pub mod helpers;
pub mod models;
pub mod outcome;
pub mod output;
pub mod sink;
pub mod valued;

pub use models::{Message, MessageFilter, MessageKind, Severity};
pub use outcome::{Outcome, OutcomeView};
pub use sink::{Capture, Sink, Split, TracingSink, Uniform};
pub use valued::ValuedOutcome;

use anyhow::Result;

use cli::{Cli, Commands, SinkKind};
use commands::run::RunOptions;
use output::{ConsoleSink, Output};

/// Runs `body` against the sink the user asked for, then surfaces any
/// terminal write failure.
fn with_sink<T>(
    kind: SinkKind,
    quiet: bool,
    body: impl FnOnce(&mut dyn Sink) -> Result<T>,
) -> Result<T> {
    if quiet {
        return body(&mut Uniform(|_: &str| {}));
    }
    match kind {
        SinkKind::Console => {
            let mut sink = ConsoleSink::stdout();
            let value = body(&mut sink)?;
            sink.finish()?;
            Ok(value)
        }
        SinkKind::Tracing => body(&mut TracingSink),
    }
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run {
            search,
            rounds,
            sink,
            json,
        } => {
            let output = Output::new(json);
            let options = RunOptions {
                rounds,
                search: search.search(),
                seed: search.seed,
            };
            let reports = with_sink(sink, output.is_json(), |sink| {
                commands::run::run(&options, sink)
            })?;
            output.report(&reports)
        }
        Commands::Messages {
            search,
            filter,
            sink,
        } => {
            with_sink(sink, false, |sink| {
                commands::messages::run(&search.search(), search.seed, filter, sink)
            })?;
            Ok(())
        }
        Commands::Guide => {
            let text = commands::guide::run();
            Output::new(false).guide(text)
        }
    }
}
