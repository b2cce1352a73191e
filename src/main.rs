//! Inventory CLI - opens the inventory window, or runs a one-shot command

use clap::{Parser, Subcommand};
use inventory::config::{self, Settings};
use inventory::storage::InventoryStore;
use inventory::ui::{self, Theme};
use inventory::App;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "inventory")]
#[command(version)]
#[command(about = "Single-user inventory tracker backed by a local SQLite file")]
#[command(long_about = r#"
Without a subcommand, opens the inventory window: a form to add, update
and delete items, and a sortable table of everything stored.

Example usage:
  inventory
  inventory --database shop.db
  inventory list --json
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the database file (default: inventory.db)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Path to the window stylesheet (default: style.toml)
    #[arg(short, long, global = true)]
    stylesheet: Option<PathBuf>,

    /// Path to the config file (default: inventory.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the database file and table if they don't exist
    Init,

    /// Print every stored item
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let file_config = config::load_config(cli.config.as_deref())?;
    let settings = Settings::resolve(file_config.as_ref(), cli.database, cli.stylesheet);

    // The window owns the screen, so its logs go to a file.
    let log_file = if cli.command.is_none() {
        Some(&settings.log_file)
    } else {
        None
    };
    init_logging(cli.verbose, log_file.map(PathBuf::as_path))?;

    config::ensure_db_dir(&settings.database)?;

    match cli.command {
        None => {
            tracing::info!("Opening window on {:?}", settings.database);
            let store = InventoryStore::open(&settings.database)?;
            let theme = Theme::load_or_default(&settings.stylesheet);
            let mut app = App::new(store)?;
            ui::run(&mut app, &theme)?;
            tracing::info!("Window closed");
        }

        Some(Commands::Init) => {
            let store = InventoryStore::open(&settings.database)?;
            ui::success("Database ready");
            ui::info("Database", &store.path().display().to_string());
            ui::info("Items", &store.count()?.to_string());
        }

        Some(Commands::List { json }) => {
            let store = InventoryStore::open(&settings.database)?;
            let items = store.list()?;

            if json {
                println!("{}", serde_json::to_string_pretty(&items)?);
            } else if items.is_empty() {
                ui::warn("No items stored.");
            } else {
                ui::header(&format!("Inventory ({:?})", settings.database));
                println!("{}", ui::items_table(&items));
                ui::info("Items", &items.len().to_string());
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> anyhow::Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let (file_layer, stderr_layer) = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let layer = fmt::layer().with_ansi(false).with_writer(Mutex::new(file));
            (Some(layer), None)
        }
        None => (None, Some(fmt::layer().with_writer(std::io::stderr))),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();

    Ok(())
}
