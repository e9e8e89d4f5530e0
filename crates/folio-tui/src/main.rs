//! Folio - terminal viewer for a portfolio of PDF and image projects.
//!
//! Loads the catalog (explicit path, user catalog file or the built-in one),
//! then either runs the interactive gallery or one of the listing commands.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use folio_core::{
    AssetResolver, Catalog, GalleryController, Opener,
    config::{Config, Directories},
};
use folio_tui::{app::App, commands, keys, render};
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use std::io;

mod cli;

use cli::{Cli, Commands};

/// Set up logging with file output. TUI must log to file since it uses the terminal for display.
fn setup_logging(debug_flag: bool) {
    let level = if debug_flag || cfg!(debug_assertions) {
        "debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let log_filename = format!("folio-tui-{timestamp}.log");
    let log_path = std::path::Path::new("/tmp").join(&log_filename);

    let symlink_path = std::path::Path::new("/tmp/folio-tui.log");
    let _ = std::fs::remove_file(symlink_path);
    #[cfg(unix)]
    let _ = std::os::unix::fs::symlink(&log_path, symlink_path);

    let file_appender = tracing_appender::rolling::never("/tmp", &log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    std::mem::forget(guard);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(filter)
        .init();
}

/// Load config and catalog. `--catalog` wins over the configured path.
fn load(cli: &Cli) -> Result<(Config, Catalog)> {
    let dirs = Directories::new();
    let mut config = Config::load(&dirs.config_file)?;
    if let Some(path) = &cli.catalog {
        config.catalog.path = Some(path.clone());
    }
    let catalog = Catalog::from_config(&config, &dirs)?;
    tracing::info!(
        "Catalog ready: {} projects, {} categories",
        catalog.len(),
        catalog.categories().len()
    );
    Ok((config, catalog))
}

fn new_gallery(config: &Config, catalog: Catalog) -> GalleryController {
    let mut gallery = GalleryController::new(catalog);
    gallery.set_category(&config.ui.start_category);
    gallery
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    let (config, catalog) = match load(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("Failed to load catalog: {e}");
            eprintln!("Failed to load catalog: {e}");
            std::process::exit(1);
        }
    };
    let mut gallery = new_gallery(&config, catalog);
    let resolver = AssetResolver::from_config(&config);
    let opener = Opener::from_config(&config);

    match cli.command {
        Some(Commands::List { category, json }) => {
            print!(
                "{}",
                commands::list_projects(&mut gallery, category.as_deref(), json)?
            );
        }
        Some(Commands::Categories { json }) => {
            print!("{}", commands::list_categories(gallery.catalog(), json)?);
        }
        Some(Commands::Show { id, document, json }) => {
            let id = commands::project_id(gallery.catalog(), &id);
            print!(
                "{}",
                commands::show_project(&mut gallery, &id, document.as_deref(), json)?
            );
        }
        Some(Commands::Open { id, document }) => {
            let id = commands::project_id(gallery.catalog(), &id);
            let message =
                commands::open_project(&mut gallery, &resolver, &opener, &id, document.as_deref())?;
            println!("{message}");
        }
        Some(Commands::Tui) | None => {
            let app = App::new(gallery, resolver, opener, config.ui.grid_columns());
            run_tui(app).await?;
        }
    }

    Ok(())
}

async fn run_tui(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut needs_render = true;

    loop {
        if needs_render {
            let len = app.visible_projects().len();
            app.cursor.clamp(len);
            terminal.draw(|f| render::render_gallery(f, app))?;
            needs_render = false;
        }

        let Some(event_result) = event_stream.next().await else {
            break;
        };
        let event = match event_result {
            Ok(e) => e,
            Err(e) => {
                tracing::error!("Event stream error: {}", e);
                continue;
            }
        };

        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                // A key press clears the previous status message
                app.status_message = None;
                keys::handle_key(app, key.code, key.modifiers);
                needs_render = true;
            }
            Event::Resize(..) => needs_render = true,
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
