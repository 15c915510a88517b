//! Lunch Decider - Main entry point
//!
//! Interactive terminal UI by default, plus headless subcommands for scripting.

use anyhow::{Context, Result};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use serde::Serialize;
use std::io::{stdout, Write};
use std::path::Path;
use std::thread;
use tracing::{debug, error, info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use lunch_decider::app::App;
use lunch_decider::catalog::MenuItem;
use lunch_decider::cli::{Cli, Commands, FilterArgs};
use lunch_decider::config_file::DeciderConfig;
use lunch_decider::criteria::SelectionCriteria;
use lunch_decider::engine::SelectionEngine;
use lunch_decider::error::SelectionError;

/// Initialize tracing on stderr. `RUST_LOG` overrides the default level.
fn init_tracing(default_level: LevelFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(default_level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Main application entry point
fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // The TUI owns the screen, so only errors are logged there by default
    let is_tui = matches!(cli.command, None | Some(Commands::Tui));
    init_tracing(if is_tui {
        LevelFilter::ERROR
    } else {
        LevelFilter::INFO
    });
    debug!("CLI arguments parsed");

    match &cli.command {
        None | Some(Commands::Tui) => {
            info!("Launching terminal UI");
            let engine = load_engine(&cli, None)?;
            run_tui(engine)?;
        }
        Some(Commands::Pick {
            filters,
            seed,
            instant,
            json,
        }) => {
            let mut engine = load_engine(&cli, *seed)?;
            apply_filters(&mut engine, filters);
            run_pick(&mut engine, *instant || *json, *json)?;
        }
        Some(Commands::List { filters, json }) => {
            let mut engine = load_engine(&cli, None)?;
            apply_filters(&mut engine, filters);
            run_list(&engine, *json)?;
        }
        Some(Commands::Cuisines { json }) => {
            let engine = load_engine(&cli, None)?;
            let cuisines = engine.cuisines();
            if *json {
                println!("{}", serde_json::to_string_pretty(&cuisines)?);
            } else {
                for cuisine in cuisines {
                    println!("{}", cuisine);
                }
            }
        }
        Some(Commands::Validate { config }) => {
            info!("Validating settings file: {:?}", config);
            match validate_settings(config, cli.catalog.as_deref()) {
                Ok(()) => {
                    info!("Settings validation successful");
                    println!("✓ Settings file is valid: {}", config.display());
                }
                Err(e) => {
                    error!("Settings validation failed: {:#}", e);
                    eprintln!("✗ Settings validation failed: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::ExportCatalog { output }) => {
            let engine = load_engine(&cli, None)?;
            engine.catalog().save_to_file(output)?;
            println!(
                "✓ Catalog with {} items written to {}",
                engine.catalog().len(),
                output.display()
            );
        }
    }

    Ok(())
}

/// Build the engine from the settings file, catalog override and seed
fn load_engine(cli: &Cli, seed: Option<u64>) -> Result<SelectionEngine> {
    let config = DeciderConfig::load_or_default(cli.config.as_deref())?;
    let catalog = config.load_catalog(cli.catalog.as_deref())?;
    config.build_engine(catalog, seed)
}

/// Apply filter flags, exiting with a hint on invalid values
fn apply_filters(engine: &mut SelectionEngine, filters: &FilterArgs) {
    if filters.is_empty() {
        return;
    }
    if filters.food_type_without_diet() {
        warn!("--food-type has no effect without --diet");
        eprintln!("  Note: --food-type only narrows the pick together with --diet.");
    }
    let result = filters
        .to_update(engine.catalog())
        .and_then(|update| engine.set_criteria(update));
    if let Err(e) = result {
        exit_with_selection_error(&e);
    }
}

/// Print a selection error with a hint and exit with status 1
fn exit_with_selection_error(err: &SelectionError) -> ! {
    error!("{}", err);
    eprintln!("✗ {}", err);
    match err {
        SelectionError::EmptySelectionPool { .. } => {
            eprintln!("  Try fewer filters; `lunch-decider list` shows what matches.");
        }
        SelectionError::InvalidCriteriaValue { .. } => {
            eprintln!(
                "  Diets: vegetarian, non-vegetarian, vegan. Food types: healthy, comfort. \
                 Run `lunch-decider cuisines` for cuisines."
            );
        }
        SelectionError::SelectionInProgress => {}
    }
    std::process::exit(1);
}

#[derive(Serialize)]
struct PickReport<'a> {
    pick: &'a MenuItem,
    criteria: &'a SelectionCriteria,
    pool_size: usize,
}

/// Run one selection and print it, animating the reveal unless `instant`
fn run_pick(engine: &mut SelectionEngine, instant: bool, json: bool) -> Result<()> {
    let pool_size = match engine.start_selection() {
        Ok(size) => size,
        Err(e) => exit_with_selection_error(&e),
    };

    let interval = engine.interval();
    let mut out = stdout();
    let mut pick = None;

    while let Some(step) = engine.advance() {
        if step.is_final() {
            pick = Some(step.item);
            break;
        }
        if !instant {
            write!(out, "\r🎲 {:<40}", step.item.name)?;
            out.flush()?;
            thread::sleep(interval);
        }
    }

    let Some(pick) = pick else {
        anyhow::bail!("Selection ended without a pick");
    };

    if json {
        let report = PickReport {
            pick: &pick,
            criteria: engine.criteria(),
            pool_size,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if !instant {
            write!(out, "\r{:<43}\r", "")?;
        }
        println!("🍽️  {} ({})", pick.name, pick.cuisine);
    }
    Ok(())
}

/// Print the eligible set for the current criteria
fn run_list(engine: &SelectionEngine, json: bool) -> Result<()> {
    let eligible = match engine.eligible() {
        Ok(items) => items,
        Err(e) => exit_with_selection_error(&e),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&eligible)?);
    } else {
        println!("{} options for {}:", eligible.len(), engine.criteria());
        for item in &eligible {
            println!("  {} ({})", item.name, item.cuisine);
        }
    }
    Ok(())
}

/// Load, validate and dry-run a settings file
fn validate_settings(path: &Path, catalog_override: Option<&Path>) -> Result<()> {
    let config = DeciderConfig::load_from_file(path)?;
    config.validate()?;
    let catalog = config.load_catalog(catalog_override)?;
    config.build_engine(catalog, None)?;
    Ok(())
}

/// Run the interactive terminal UI
fn run_tui(engine: SelectionEngine) -> Result<()> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode().context("Failed to enable raw mode")?;
    if let Err(e) = crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e).context("Failed to enter alternate screen");
    }

    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .context("Failed to create terminal")
        .and_then(|mut terminal| {
            let mut app = App::new(engine);
            app.run(&mut terminal).map_err(anyhow::Error::from)
        });

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result
}
