//! canarytools CLI - command-line client for the Thinkst Canary Console

use clap::Parser;

mod cli;
mod models;
mod output;

use canarytools::{DeviceInfoQuery, DeviceIpsQuery, Result};
use cli::args::GlobalOptions;
use cli::{
    ApiCommands, Cli, CommandContext, Commands, DevicesCommands, FlocksCommands,
    IncidentCommands, IncidentsCommands, NoteCommands,
};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// `--debug` forces debug level; otherwise `RUST_LOG`, defaulting to warn.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => return cli::init::run(&opts),
        Commands::Status => return cli::status::run(&opts),
        Commands::Version => {
            println!("canarytools version {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        _ => {}
    }

    let ctx = CommandContext::new(&opts)?;

    match cli.command {
        Commands::Init | Commands::Status | Commands::Version => Ok(()),
        Commands::Settings => cli::settings::run(&ctx),
        Commands::Api(api_cmd) => match api_cmd {
            ApiCommands::Enable => cli::api::enable(&ctx),
            ApiCommands::Disable => cli::api::disable(&ctx),
            ApiCommands::Download { output } => cli::api::download(&ctx, &output),
        },
        Commands::Incidents(incidents_cmd) => {
            use cli::incident::Listing;
            match incidents_cmd {
                IncidentsCommands::Acknowledged(args) => {
                    cli::incident::list(&ctx, Listing::Acknowledged, &args)
                }
                IncidentsCommands::Unacknowledged(args) => {
                    cli::incident::list(&ctx, Listing::Unacknowledged, &args)
                }
                IncidentsCommands::All(args) => cli::incident::list(&ctx, Listing::All, &args),
            }
        }
        Commands::Incident(incident_cmd) => {
            use cli::incident::Action;
            match incident_cmd {
                IncidentCommands::Fetch(args) => cli::incident::fetch(&ctx, &args),
                IncidentCommands::Ack(args) => cli::incident::act(&ctx, Action::Acknowledge, &args),
                IncidentCommands::Unack(args) => {
                    cli::incident::act(&ctx, Action::Unacknowledge, &args)
                }
                IncidentCommands::Delete(args) => cli::incident::act(&ctx, Action::Delete, &args),
            }
        }
        Commands::Devices(devices_cmd) => {
            use cli::device::Listing;
            match devices_cmd {
                DevicesCommands::All { tz } => cli::device::list(&ctx, Listing::All, tz.as_deref()),
                DevicesCommands::Live { tz } => {
                    cli::device::list(&ctx, Listing::Live, tz.as_deref())
                }
                DevicesCommands::Dead { tz } => {
                    cli::device::list(&ctx, Listing::Dead, tz.as_deref())
                }
                DevicesCommands::Filter { filter, tz } => {
                    cli::device::filter(&ctx, &filter, tz.as_deref())
                }
                DevicesCommands::Info {
                    node_id,
                    settings,
                    exclude_fixed_settings,
                } => {
                    let query = DeviceInfoQuery::new(node_id)
                        .settings(settings)
                        .exclude_fixed_settings(exclude_fixed_settings);
                    cli::device::info(&ctx, &query)
                }
                DevicesCommands::Ips {
                    download,
                    annotations,
                    flock_id,
                } => {
                    let mut query = DeviceIpsQuery::new()
                        .download(download)
                        .include_annotations(annotations);
                    if let Some(flock_id) = flock_id {
                        query = query.flock_id(flock_id);
                    }
                    cli::device::ips(&ctx, &query)
                }
            }
        }
        Commands::Flocks(flocks_cmd) => match flocks_cmd {
            FlocksCommands::Summaries => cli::flock::summaries(&ctx),
            FlocksCommands::Summary(args) => cli::flock::summary(&ctx, &args),
            FlocksCommands::List(args) => cli::flock::list(&ctx, &args),
            FlocksCommands::Settings(args) => cli::flock::settings(&ctx, &args),
            FlocksCommands::Users(args) => cli::flock::users(&ctx, &args),
            FlocksCommands::Filter { filter } => cli::flock::filter(&ctx, &filter),
            FlocksCommands::For { email } => cli::flock::list_for(&ctx, &email),
            FlocksCommands::Note(note_cmd) => match note_cmd {
                NoteCommands::Get(args) => cli::flock::note_get(&ctx, &args),
                NoteCommands::Add { note, flock } => cli::flock::note_add(&ctx, &note, &flock),
                NoteCommands::Delete(args) => cli::flock::note_delete(&ctx, &args),
            },
        },
        Commands::Stats => cli::stats::run(&ctx),
    }
}
