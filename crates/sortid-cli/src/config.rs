use anyhow::bail;
use clap::{Parser, Subcommand};
use tracing::Level;

/// Upper bound on `generate --count`, to keep accidental huge requests from
/// flooding the terminal.
pub const MAX_COUNT: usize = 1_000_000;

/// Command-line arguments for the `sortid` binary.
///
/// Flags fall back to environment variables (and a `.env` file), so the same
/// settings can be pinned per shell or per project.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "sortid",
    version,
    about = "Generate and inspect time-ordered, sortable identifiers"
)]
pub struct CliArgs {
    /// Log verbosity written to stderr (`error`, `warn`, `info`, `debug`,
    /// `trace`). `RUST_LOG`, when set, takes precedence.
    ///
    /// Environment variable: `SORTID_LOG_LEVEL`
    #[arg(long, global = true, env = "SORTID_LOG_LEVEL", default_value_t = String::from("warn"))]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print new identifiers, one per line.
    Generate {
        /// How many identifiers to print.
        ///
        /// Environment variable: `SORTID_COUNT`
        #[arg(short = 'n', long, env = "SORTID_COUNT", default_value_t = 1)]
        count: usize,
    },
    /// Check whether an identifier is well formed. Exits with status 1 if not.
    Validate { id: String },
    /// Show the creation time and age of an identifier.
    Inspect { id: String },
    /// Report which of two identifiers was created first.
    Compare { a: String, b: String },
    /// Walk through every operation with sample data.
    Demo,
}

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub log_level: Level,
    pub command: Command,
}

impl TryFrom<CliArgs> for CliConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let Ok(log_level) = args.log_level.parse::<Level>() else {
            bail!(
                "SORTID_LOG_LEVEL ({}) must be one of error, warn, info, debug, trace",
                args.log_level
            );
        };

        if let Command::Generate { count } = args.command {
            if count == 0 {
                bail!("SORTID_COUNT must be greater than 0");
            }
            if count > MAX_COUNT {
                bail!("SORTID_COUNT ({count}) exceeds the maximum of {MAX_COUNT}");
            }
        }

        Ok(Self {
            log_level,
            command: args.command,
        })
    }
}
