//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod api;
pub mod args;
pub mod context;
pub mod device;
pub mod flock;
pub mod incident;
pub mod init;
pub mod settings;
pub mod stats;
pub mod status;

pub use args::{FlockArgs, IncidentFilterArgs, IncidentIdArgs, OutputFormat};
pub use context::CommandContext;

/// canarytools - command-line client for the Thinkst Canary Console
#[derive(Parser, Debug)]
#[command(name = "canarytools")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "CANARY_FORMAT",
        default_value = "table",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "CANARY_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Console hash, e.g. 1234abcd for 1234abcd.canary.tools
    #[arg(long, global = true, env = "CANARY_CONSOLE_HASH", hide_env = true)]
    pub console: Option<String>,

    /// Console API key
    #[arg(long, global = true, env = "CANARY_API_KEY", hide_env = true)]
    pub api_key: Option<String>,

    /// Full console base URL (on-prem consoles, testing)
    #[arg(long, global = true, env = "CANARY_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "CANARY_TIMEOUT", hide_env = true)]
    pub timeout: Option<u64>,

    /// Enable debug logging
    #[arg(long, global = true, env = "CANARY_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Save console and API key to the config file
    Init,

    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// Show console settings
    Settings,

    /// Enable, disable or download API access
    #[command(subcommand)]
    Api(ApiCommands),

    /// List incidents
    #[command(subcommand)]
    Incidents(IncidentsCommands),

    /// Act on a single incident
    #[command(subcommand)]
    Incident(IncidentCommands),

    /// List and inspect devices
    #[command(subcommand)]
    Devices(DevicesCommands),

    /// Flock summaries, settings, users and notes
    #[command(subcommand)]
    Flocks(FlocksCommands),

    /// Device and token overview across every flock
    Stats,
}

/// API access subcommands
#[derive(Subcommand, Debug)]
pub enum ApiCommands {
    /// Enable the console API
    Enable,

    /// Disable the console API (this key stops working too)
    Disable,

    /// Download the API token file
    Download {
        /// Where to write the file
        #[arg(long, short)]
        output: PathBuf,
    },
}

/// Incident listing subcommands
#[derive(Subcommand, Debug)]
pub enum IncidentsCommands {
    /// Acknowledged incidents
    Acknowledged(IncidentFilterArgs),

    /// Unacknowledged incidents (--since is ignored by the console)
    Unacknowledged(IncidentFilterArgs),

    /// All incidents
    All(IncidentFilterArgs),
}

/// Single incident subcommands
#[derive(Subcommand, Debug)]
pub enum IncidentCommands {
    /// Show one incident
    Fetch(IncidentIdArgs),

    /// Acknowledge an incident
    Ack(IncidentIdArgs),

    /// Unacknowledge an incident
    Unack(IncidentIdArgs),

    /// Delete an incident
    Delete(IncidentIdArgs),
}

/// Device subcommands
#[derive(Subcommand, Debug)]
pub enum DevicesCommands {
    /// All devices
    All {
        #[arg(long)]
        tz: Option<String>,
    },

    /// Online devices
    Live {
        #[arg(long)]
        tz: Option<String>,
    },

    /// Offline devices
    Dead {
        #[arg(long)]
        tz: Option<String>,
    },

    /// Devices matching a search string
    Filter {
        /// Search string
        filter: String,

        #[arg(long)]
        tz: Option<String>,
    },

    /// Details for one device
    Info {
        /// Device node id
        node_id: String,

        /// Include device settings
        #[arg(long)]
        settings: bool,

        /// Leave out settings that cannot be changed
        #[arg(long)]
        exclude_fixed_settings: bool,
    },

    /// IP addresses in use by devices
    Ips {
        /// Plain text, one address per line
        #[arg(long)]
        download: bool,

        /// Include IP annotations
        #[arg(long)]
        annotations: bool,

        /// Only this flock
        #[arg(long = "flock")]
        flock_id: Option<String>,
    },
}

/// Flock subcommands
#[derive(Subcommand, Debug)]
pub enum FlocksCommands {
    /// Summary of every flock
    Summaries,

    /// Token and incident counts for one flock
    Summary(FlockArgs),

    /// Sensors in one flock
    List(FlockArgs),

    /// Settings of one flock
    Settings(FlockArgs),

    /// Users with access to one flock
    Users(FlockArgs),

    /// Flocks matching a search string
    Filter {
        /// Search string
        filter: String,
    },

    /// Flocks a user can access
    For {
        /// User email
        email: String,
    },

    /// Flock notes
    #[command(subcommand)]
    Note(NoteCommands),
}

/// Flock note subcommands
#[derive(Subcommand, Debug)]
pub enum NoteCommands {
    /// Show the note
    Get(FlockArgs),

    /// Set the note
    Add {
        /// Note text
        note: String,

        #[command(flatten)]
        flock: FlockArgs,
    },

    /// Remove the note
    Delete(FlockArgs),
}
