use clap::{Parser, Subcommand};
use directories::ProjectDirs;
use env_logger::Env;
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "phonebook", bin_name = "phonebook", version)]
#[command(about = "Plain text contact list", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Contact file to use instead of the configured one
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Directory holding config.json
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all contacts (default)
    #[command(alias = "ls")]
    List {
        /// Print contacts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a contact
    #[command(alias = "n")]
    Add {
        name: String,
        phone: String,
        /// Identifier, trailing `!` or `.` is dropped
        id: String,
    },

    /// Rename the first contact with the given name
    #[command(alias = "mv")]
    Rename { old_name: String, new_name: String },

    /// Remove every contact with the given name
    #[command(alias = "rm")]
    Remove { name: String },

    /// Find a contact by identifier
    Find { id: String },

    /// Create the contact file with the initial contacts if missing
    Seed,

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, seed-on-start)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Interactive menu
    Menu,
}

impl Commands {
    /// Whether the command works on loaded contacts. `seed` and `config`
    /// run before (or instead of) the usual seed-and-load startup.
    pub fn needs_contacts(&self) -> bool {
        !matches!(self, Commands::Seed | Commands::Config { .. })
    }
}

pub fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

/// `--config-dir`, else the platform config dir, else `./.phonebook`.
pub fn resolve_config_dir(cli: &Cli) -> PathBuf {
    if let Some(dir) = &cli.config_dir {
        return dir.clone();
    }
    ProjectDirs::from("com", "phonebook", "phonebook")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".phonebook"))
}
