//! Logging flags for `poker_hand_analyzer`.
//!
//! The report is the only thing written to stdout. Every log line goes to
//! stderr, so `--format json | jq` keeps working with `-vv`.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Flattened into the main `Args` with `#[command(flatten)]`.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct TracingArgs {
    /// More log output: -v for deals and sorts, -vv for every evaluation
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Only log warnings and errors
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbosity")]
    pub quiet: bool,

    /// Log line format
    #[arg(long = "log-format", value_enum, default_value_t = LogFormat::Compact, global = true)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

impl TracingArgs {
    /// Level picked from the flags. Evaluations log at trace, deals and
    /// sorts at debug, the chosen input at info.
    pub fn level(&self) -> &'static str {
        match (self.quiet, self.verbosity) {
            (true, _) => "warn",
            (false, 0) => "info",
            (false, 1) => "debug",
            (false, _) => "trace",
        }
    }

    /// `RUST_LOG` when set, otherwise the flag level for this crate and
    /// warnings for everything else.
    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let level = self.level();
            EnvFilter::new(format!("warn,poker_hand_analyzer={level}"))
        })
    }

    /// Install the global subscriber. Call once, before any work.
    pub fn init_tracing(&self) {
        let compact = (self.log_format == LogFormat::Compact)
            .then(|| fmt::layer().compact().with_writer(std::io::stderr));
        let pretty = (self.log_format == LogFormat::Pretty)
            .then(|| fmt::layer().pretty().with_writer(std::io::stderr));
        let json = (self.log_format == LogFormat::Json)
            .then(|| fmt::layer().json().with_writer(std::io::stderr));

        tracing_subscriber::registry()
            .with(self.filter())
            .with(compact)
            .with(pretty)
            .with(json)
            .init();
    }
}
