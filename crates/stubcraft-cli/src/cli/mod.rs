//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "stubcraft",
    bin_name = "stubcraft",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Repository, contract and binding generator",
    long_about = "Stubcraft generates a repository class, its interface, and \
                  registers the binding in the repository service provider.",
    after_help = "EXAMPLES:\n\
        \x20 stubcraft make UserRepository\n\
        \x20 stubcraft make Admin/UserRepository --force\n\
        \x20 stubcraft make UserRepository --path ../my-app --output-format json\n\
        \x20 stubcraft completions bash > /usr/share/bash-completion/completions/stubcraft",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a repository, its contract, and its binding.
    #[command(
        visible_aliases = ["make:repository", "repo"],
        about = "Create a new repository",
        after_help = "EXAMPLES:\n\
            \x20 stubcraft make UserRepository\n\
            \x20 stubcraft make Admin/UserRepository\n\
            \x20 stubcraft make 'App\\Repositories\\PostRepository' -f"
    )]
    Make(MakeArgs),

    /// Initialise a Stubcraft configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 stubcraft init           # global config\n\
            \x20 stubcraft init --local   # .stubcraft.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 stubcraft completions bash > ~/.local/share/bash-completion/completions/stubcraft\n\
            \x20 stubcraft completions zsh  > ~/.zfunc/_stubcraft\n\
            \x20 stubcraft completions fish > ~/.config/fish/completions/stubcraft.fish"
    )]
    Completions(CompletionsArgs),
}

// ── make ──────────────────────────────────────────────────────────────────────

/// Arguments for `stubcraft make`.
#[derive(Debug, Args)]
pub struct MakeArgs {
    /// Class name, optionally namespaced with `/` or `\`.
    #[arg(value_name = "NAME", help = "The name of the class being generated")]
    pub name: String,

    /// Overwrite existing implementation and contract files.
    #[arg(
        short = 'f',
        long = "force",
        help = "Force the creation if file already exists"
    )]
    pub force: bool,

    /// Project root the layout is resolved against.
    #[arg(
        short = 'p',
        long = "path",
        value_name = "DIR",
        default_value = ".",
        help = "Project root directory"
    )]
    pub path: PathBuf,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `stubcraft init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.stubcraft.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `stubcraft completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_make_command() {
        let cli = Cli::parse_from(["stubcraft", "make", "UserRepository", "-f"]);
        match cli.command {
            Commands::Make(args) => {
                assert_eq!(args.name, "UserRepository");
                assert!(args.force);
                assert_eq!(args.path, PathBuf::from("."));
            }
            other => panic!("expected Make command, got {other:?}"),
        }
    }

    #[test]
    fn make_aliases() {
        for alias in ["make:repository", "repo"] {
            let cli = Cli::parse_from(["stubcraft", alias, "UserRepository"]);
            assert!(matches!(cli.command, Commands::Make(_)), "alias {alias}");
        }
    }

    #[test]
    fn make_requires_name() {
        assert!(Cli::try_parse_from(["stubcraft", "make"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "stubcraft",
            "make",
            "UserRepository",
            "-vv",
            "--output-format",
            "json",
        ]);
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.output_format, OutputFormat::Json);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["stubcraft", "--quiet", "--verbose", "init"]);
        assert!(result.is_err());
    }
}
