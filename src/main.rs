use clap::{Parser, ValueEnum};
use color_eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use std::io::stdout;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use stall_map::config::MapConfig;
use stall_map::coordinator::SelectionPolicy;
use stall_map::model::Floor;
use stall_map::provider::FileProvider;
use stall_map::registry::validate_registry;
use stall_map::telemetry::init_tracing;
use stall_map::ui::App;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Browse stalls and their tenants
    View,
    /// Pick a stall and print it as JSON
    Select,
}

#[derive(Parser, Debug)]
#[command(name = "stall-map")]
#[command(about = "Stall Map - floor plans with live stall occupancy")]
#[command(version)]
struct Args {
    /// JSON snapshot file, or a directory with stalls.csv and tenants.csv
    #[arg(required = true)]
    data: PathBuf,

    /// Directory map or stall picker
    #[arg(long, value_enum, default_value_t = Mode::View, env = "STALL_MAP_MODE")]
    mode: Mode,

    /// Let the picker choose occupied stalls too
    #[arg(long)]
    allow_occupied: bool,

    /// Floor shown first (ground, second, third)
    #[arg(long, default_value = "ground")]
    floor: Floor,

    /// How often to check the data files for edits, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 1000)]
    poll_ms: u64,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(long, value_name = "FILE", env = "STALL_MAP_LOG")]
    log_file: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> MapConfig {
        let policy = match self.mode {
            Mode::View => SelectionPolicy::ViewOnly,
            Mode::Select => SelectionPolicy::Selectable {
                allow_occupied: self.allow_occupied,
            },
        };
        MapConfig {
            policy,
            initial_floor: self.floor,
            poll_interval: Duration::from_millis(self.poll_ms.max(50)),
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    if let Some(log_file) = &args.log_file {
        init_tracing(log_file)?;
    }
    validate_registry()?;

    let config = args.config();
    let provider = FileProvider::open(&args.data).with_poll_interval(config.poll_interval);

    let terminal = ratatui::init();
    let result = execute!(stdout(), EnableMouseCapture)
        .map_err(Into::into)
        .and_then(|()| App::new(Arc::new(provider), &config).run(terminal));
    let released = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();
    released?;

    if let Some(stall) = result? {
        println!("{}", serde_json::to_string_pretty(&stall)?);
    }
    Ok(())
}
