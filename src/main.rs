use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use winfetch::{display, logging, signal, ArtCatalog, Collector, ConfigStore};

#[derive(Parser)]
#[command(name = "winfetch")]
#[command(about = "Display system information beside ASCII art")]
#[command(disable_version_flag = true)]
struct Cli {
    /// Path to a custom ASCII art file or name of a built-in art
    #[arg(short, long)]
    ascii_art: Option<String>,

    /// Path to a custom configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// List available built-in ASCII arts
    #[arg(long)]
    list_arts: bool,

    /// Show version information
    #[arg(short, long)]
    version: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!("WinFetch v{}", env!("CARGO_PKG_VERSION"));
        return;
    }

    logging::init();
    signal::install();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let catalog = ArtCatalog::locate();

    if cli.list_arts {
        list_arts(&catalog);
        return Ok(());
    }

    let store = ConfigStore::new(cli.config.as_deref())?;
    let config = store.load();
    let colors_enabled = !cli.no_color && config.colors_enabled;

    let facts = Collector::new().collect_visible(&config.show_info);

    let requested = cli.ascii_art.as_deref().unwrap_or(&config.ascii_art);
    let art = catalog.load(Some(requested));

    let lines = display::render(&facts, art, &config, colors_enabled);
    display::print(&lines)?;
    Ok(())
}

fn list_arts(catalog: &ArtCatalog) {
    let arts = catalog.list_builtins();
    if arts.is_empty() {
        println!("No built-in ASCII arts found.");
        return;
    }
    println!("Available built-in ASCII arts:");
    for name in arts {
        println!(" - {}", name);
    }
}
