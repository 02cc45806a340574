//! odeview - plot an ODE solution table in the terminal.

use anyhow::Result;
use clap::Parser;
use odeview::{app::Theme, data::NumericTable, DEFAULT_INPUT};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "odeview")]
#[command(about = "Plot the two signals of an ODE solution table against time", long_about = None)]
struct Args {
    /// Whitespace-delimited table with columns t, U_0(t), U_C(t)
    #[arg(default_value = DEFAULT_INPUT)]
    file: PathBuf,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Color theme
    #[arg(long, value_enum, default_value_t = Theme::GruvboxDark)]
    theme: Theme,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        init_logging(log_path)?;
        tracing::info!("Starting odeview");
    }

    let table = NumericTable::load(&args.file)?;

    let file_name = args
        .file
        .file_name()
        .map(|n| n.to_string_lossy().to_string());
    odeview::tui::render(&table, file_name, args.theme)?;

    tracing::info!("odeview exited");
    Ok(())
}

/// Send tracing output to a file; the terminal belongs to the viewer.
fn init_logging(log_path: &Path) -> Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(log_path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
