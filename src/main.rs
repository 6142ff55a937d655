//! SafeYT binary entry point.

mod commands;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use safeyt::cli::{Cli, Commands, ConfigAction};

#[cfg(not(tarpaulin_include))]
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check { link, json } => commands::check::handle(&link, json),
        Commands::Encode {
            link,
            skips,
            from,
            to,
        } => commands::encode::handle(&link, &skips, from.as_deref(), to.as_deref()),
        Commands::Decode { link, json } => commands::decode::handle(&link, json),
        Commands::Edit {
            link,
            add_skips,
            delete_skips,
            from,
            to,
        } => commands::edit::handle(&link, &add_skips, &delete_skips, from.as_deref(), to.as_deref()),
        Commands::Play {
            link,
            duration,
            seek,
            until,
            real_time,
        } => commands::play::handle(&link, duration, seek.as_deref(), until.as_deref(), real_time),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::handle_show(),
            ConfigAction::Edit => commands::config::handle_edit(),
            ConfigAction::Path => commands::config::handle_path(),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    };

    if let Err(err) = result {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
