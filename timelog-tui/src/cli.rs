use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "timelog")]
#[command(about = "Terminal time tracker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Track time, saving to the data directory (default)
    Run,
    /// Track time in memory only; nothing is saved
    Dev,
    /// Print the saved list and exit
    Print,
    /// Discard all saved data
    Clear,
    /// Print config path and create default file if missing
    ConfigPath,
}
