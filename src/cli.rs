use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::commands::config::ConfigCommands;
use crate::issue::IssueRef;

#[derive(Parser)]
#[command(
    name = "opinion",
    version,
    about,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Show debug logs on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Fetch an issue with its whole comment thread and print it
    Get(GetArgs),

    /// Configuration file tools
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Clone, PartialEq, Eq, Debug)]
pub struct GetArgs {
    /// Issue reference in owner/repo#nnn format; any single
    /// non-alphanumeric character works in place of `/` and `#`
    #[arg(value_name = "OWNER/REPO#N")]
    pub reference: IssueRef,

    /// Print the assembled issue as JSON instead of a transcript
    #[arg(long)]
    pub json: bool,
}
