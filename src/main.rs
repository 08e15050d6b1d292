// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use student_registry::report;
use student_registry::{logging, AppConfig, Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    let config = AppConfig::from_cli(&cli);
    info!(?config, "starting");

    match cli.command {
        Some(Command::Catalog) => run_catalog(&config)?,
        None => run_ui_mode(&config)?,
    }

    Ok(())
}

fn run_catalog(config: &AppConfig) -> Result<()> {
    if config.json {
        println!("{}", serde_json::to_string_pretty(&report::catalog())?);
    } else {
        print!("{}", report::catalog_text(&config.currency));
    }
    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(config: &AppConfig) -> Result<()> {
    use student_registry::{SessionSummary, StudentRegistry};

    let registry = StudentRegistry::with_ids(config.id_source());
    let mut app = ui::App::new(registry, config.clone());
    ui::run_ui(&mut app)?;

    let summary = SessionSummary::from_registry(&app.registry);
    if config.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", summary.summary(&config.currency));
    }

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_config: &AppConfig) -> Result<()> {
    eprintln!("❌ Interactive mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or list the course catalog: student-registry catalog");
    std::process::exit(1);
}
