use clap::{Parser, Subcommand, ValueEnum};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "sticky", bin_name = "sticky", version)]
#[command(about = "Sticky notes for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for list and get
    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Add a note (words are joined with spaces)
    #[command(alias = "a")]
    Add {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        content: Vec<String>,
    },

    /// List all notes (default)
    #[command(alias = "ls")]
    List,

    /// Show the note at an index
    #[command(alias = "g")]
    Get {
        /// Index as shown by `list`
        index: usize,
    },

    /// Delete the note at an index; later notes move up by one
    #[command(aliases = ["rm", "del"])]
    Delete {
        /// Index as shown by `list`
        index: usize,
    },

    /// Delete the entire notes database
    Purge {
        /// Skip the confirmation prompt (for scripts)
        #[arg(short, long)]
        yes: bool,
    },

    /// Print the path of the notes database
    Path,
}
