pub mod strings;

#[derive(clap::Subcommand)]
pub enum Commands {
    /// Handle STRINGS, DLSTRINGS and ILSTRINGS files
    Strings {
        #[command(subcommand)]
        command: strings::StringsCommands,
    },
}

impl Commands {
    pub fn handle(&self) -> miette::Result<()> {
        match self {
            Commands::Strings { command } => command.handle(),
        }
    }
}
