//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--data-dir <path>`: Store lines under this directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--json`: Machine-readable output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::types::{Distance, LineName, StationId};

/// Subway - edit the station path of a transit line
#[derive(Parser, Debug)]
#[command(name = "subway")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Store lines under this directory instead of the configured one
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new line from its first section
    #[command(
        name = "create",
        long_about = "Create a new line from its first section.\n\n\
            A line always holds at least one section. The first section fixes \
            the direction of travel: UP is the upstream end, DOWN the downstream end.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Start line 2 with a single 10-unit section
    subway create line-2 Gangnam Yeoksam 10

    # Then extend it
    subway add line-2 Yeoksam Seolleung 7"
    )]
    Create {
        /// Line name
        line: LineName,
        /// Upstream station
        up: StationId,
        /// Downstream station
        down: StationId,
        /// Section distance (positive integer)
        distance: Distance,
    },

    /// Add a section to a line
    #[command(
        name = "add",
        long_about = "Add a section to a line.\n\n\
            Exactly one of UP and DOWN must already be on the line. A section that \
            touches a terminal station extends the line. A section that starts or \
            ends at an inner station splits the existing section there; its distance \
            must be strictly less than the section it splits.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Extend past the tail
    subway add line-2 Seolleung Samseong 5

    # Split Gangnam -> Yeoksam (10) into Gangnam -> Mid (4) and Mid -> Yeoksam (6)
    subway add line-2 Gangnam Mid 4"
    )]
    Add {
        /// Line name
        line: LineName,
        /// Upstream station
        up: StationId,
        /// Downstream station
        down: StationId,
        /// Section distance (positive integer)
        distance: Distance,
    },

    /// Remove a station from a line
    #[command(
        name = "remove",
        long_about = "Remove a station from a line.\n\n\
            Removing an inner station merges its two sections into one whose \
            distance is their sum. Removing a terminal station drops its only \
            section. A line with a single section cannot lose a station.\n\n\
            With --terminal, only the head or tail station may be removed.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Merge around an inner station
    subway remove line-2 Yeoksam

    # Only accept a terminal station
    subway remove line-2 Samseong --terminal"
    )]
    Remove {
        /// Line name
        line: LineName,
        /// Station to remove
        station: StationId,
        /// Refuse unless the station is the head or tail
        #[arg(long)]
        terminal: bool,
    },

    /// List stations from head to tail
    Stations {
        /// Line name
        line: LineName,
    },

    /// List sections as stored
    Sections {
        /// Line name
        line: LineName,
    },

    /// Check a line's structural invariants
    #[command(
        name = "verify",
        long_about = "Check a stored line's structural invariants.\n\n\
            Verifies that the sections form a single linear chain: one head, \
            one tail, no branching, no joins, no cycles, no duplicate pairs. \
            Exits non-zero if any check fails."
    )]
    Verify {
        /// Line name
        line: LineName,
    },

    /// List stored lines
    Lines,

    /// Delete a line
    Delete {
        /// Line name
        line: LineName,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        long_about = "Generate shell completion scripts for tab-completion.\n\n\
            Outputs a completion script for the specified shell. Add the output \
            to your shell's configuration to enable tab-completion for subway commands.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Bash (add to ~/.bashrc)
    subway completion bash >> ~/.bashrc

    # Zsh (add to ~/.zshrc)
    subway completion zsh >> ~/.zshrc

    # Fish
    subway completion fish > ~/.config/fish/completions/subway.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add_with_typed_arguments() {
        let cli = Cli::try_parse_from(["subway", "add", "line-2", "A", "B", "7"]).unwrap();
        match cli.command {
            Command::Add {
                line,
                up,
                down,
                distance,
            } => {
                assert_eq!(line.as_str(), "line-2");
                assert_eq!(up.as_str(), "A");
                assert_eq!(down.as_str(), "B");
                assert_eq!(distance.get(), 7);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn zero_distance_rejected_at_parse_time() {
        assert!(Cli::try_parse_from(["subway", "add", "line-2", "A", "B", "0"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["subway", "lines", "--json", "-q"]).unwrap();
        assert!(cli.json);
        assert!(cli.quiet);
    }

    #[test]
    fn remove_terminal_flag() {
        let cli =
            Cli::try_parse_from(["subway", "remove", "line-2", "A", "--terminal"]).unwrap();
        assert!(matches!(cli.command, Command::Remove { terminal: true, .. }));
    }
}
