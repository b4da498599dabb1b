//! Flags accepted before or after any subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum};

/// Logging, colour, config and report flags shared by every command.
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Log generation steps on stderr: -v files written and skipped,
    /// -vv resolved names and stub sources, -vvv everything.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only report errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never emit ANSI colour codes.
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Extra config file layered over the global and `.stubcraft.toml` files.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// `json` prints the generation report (artifact outcomes, bootstrap
    /// status, spliced binding) instead of confirmation lines.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,
}

/// How results reach stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain otherwise.
    #[default]
    Auto,
    /// Coloured confirmation lines.
    Human,
    /// Confirmation lines without colour.
    Plain,
    /// The generation report as JSON; log lines become JSON too.
    Json,
}

impl OutputFormat {
    /// Settle `Auto` once the stdout kind is known.
    pub fn resolve(self, stdout_is_terminal: bool) -> Self {
        match self {
            Self::Auto if stdout_is_terminal => Self::Human,
            Self::Auto => Self::Plain,
            other => other,
        }
    }

    /// Whether commands print a serialised report rather than prose.
    pub fn is_report(self) -> bool {
        self == Self::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_follows_terminal() {
        assert_eq!(OutputFormat::Auto.resolve(true), OutputFormat::Human);
        assert_eq!(OutputFormat::Auto.resolve(false), OutputFormat::Plain);
        assert_eq!(OutputFormat::Json.resolve(true), OutputFormat::Json);
    }

    #[test]
    fn only_json_is_a_report() {
        assert!(OutputFormat::Json.is_report());
        assert!(!OutputFormat::Plain.is_report());
        assert!(!OutputFormat::Auto.resolve(false).is_report());
    }
}
