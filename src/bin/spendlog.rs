use std::{error::Error, fs::OpenOptions, io, sync::Arc};

use clap::Parser;
use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use spendlog::{open_db, run_menu};

/// The interactive console expense tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database.
    #[arg(long, default_value = "expenses.db")]
    db_path: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    setup_logging();

    let args = Args::parse();

    let connection = open_db(&args.db_path)?;
    tracing::info!("opened database at {}", args.db_path);

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut writer = io::stdout();

    run_menu(&mut reader, &mut writer, &connection)?;

    Ok(())
}

/// Log to a file so that stdout stays clean for the menu UI.
fn setup_logging() {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("spendlog.log")
        .expect("Could not create log file");

    let file_log = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(file_log.with_filter(filter::LevelFilter::DEBUG))
        .init();
}
