use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "shredspace",
    version,
    about = "Download, update and remove games in your ShredSpace library"
)]
pub struct Cli {
    /// Settings file to use instead of the per-user one
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<Utf8PathBuf>,

    /// Folder holding games.json and app/ (overrides the settings)
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<Utf8PathBuf>,

    /// A shredspace:// link: add that game and install it right away
    pub url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive menu (the default)
    Menu,
    /// Show the games in the library
    List,
    /// Add a game from its descriptor URL
    Add { url: String },
    /// Download and install games, e.g. `1,3` or `latest`
    Update { selection: String },
    /// Remove one game and its files
    Uninstall { index: String },
    /// Regenerate app/index.html
    Render,
    /// Write a .reg file that opens shredspace:// links with this program
    RegisterProtocol {
        /// Executable to register (defaults to the running one)
        #[arg(long, value_name = "PATH")]
        exe: Option<Utf8PathBuf>,
        /// Where to write the file (defaults to register_protocol.reg in the home folder)
        #[arg(long, value_name = "PATH")]
        output: Option<Utf8PathBuf>,
    },
}
