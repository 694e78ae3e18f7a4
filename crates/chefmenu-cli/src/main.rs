mod app;
mod event;
mod logger;
mod report;
mod settings;
mod theme;
mod ui;

use std::path::PathBuf;

use anyhow::Context;
use app::App;
use chefmenu_core::{CourseFilter, MenuItem, MenuStore};
use clap::{Parser, Subcommand};
use ratatui::DefaultTerminal;
use settings::Settings;
use tracing::info;

#[derive(Parser)]
#[command(name = "chefmenu")]
#[command(about = "Menu manager for chefs and guests")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a settings file (default: config/chefmenu.toml if present)
    #[arg(short, long, env = "CHEFMENU_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive menu - Default
    Tui {
        /// Screen to open on start, e.g. Chef or GuestFilter
        #[arg(long)]
        open: Option<String>,
    },
    /// Print per-course and overall average prices
    Summary {
        #[arg(long)]
        json: bool,
    },
    /// Print the menu, optionally for one course
    List {
        /// Starter, Main, Dessert, Beverage or All
        #[arg(long, default_value = "All")]
        course: String,

        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    color_eyre::install().ok();
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref())?;
    logger::init_logger(&settings.logging)?;
    info!(name = %settings.app.name, "chefmenu starting");

    match cli.command.unwrap_or(Commands::Tui { open: None }) {
        Commands::Tui { open } => start_tui(&settings, open),
        Commands::Summary { json } => {
            let items = starting_menu(&settings);
            if json {
                println!("{}", report::summary_json(&items)?);
            } else {
                print!("{}", report::summary_text(&items, &settings.app.currency));
            }
            Ok(())
        }
        Commands::List { course, json } => {
            let filter = CourseFilter::from_label(&course)
                .with_context(|| format!("Unknown course '{}'", course))?;
            let items = starting_menu(&settings);
            if json {
                println!("{}", report::list_json(&items, filter)?);
            } else {
                print!("{}", report::list_text(&items, filter, &settings.app.currency));
            }
            Ok(())
        }
    }
}

fn starting_menu(settings: &Settings) -> Vec<MenuItem> {
    if settings.menu.seed_demo_items {
        MenuStore::seeded().list().to_vec()
    } else {
        Vec::new()
    }
}

fn start_tui(settings: &Settings, open: Option<String>) -> anyhow::Result<()> {
    let mut app = App::from_settings(settings);
    if let Some(route) = open {
        app.open_route(&route, None);
    }

    // Initialize terminal (ratatui::init handles raw mode + alternate screen)
    let terminal = ratatui::init();

    let result = run_app(terminal, &mut app);

    // Restore terminal (always, even on error)
    ratatui::restore();

    info!("chefmenu exiting");
    result
}

fn run_app(mut terminal: DefaultTerminal, app: &mut App) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if app.should_quit {
            break;
        }

        // Poll events (non-blocking with 100ms timeout)
        if let Some(evt) = event::poll_event(100)? {
            event::handle_event(app, evt);
        }
    }
    Ok(())
}
