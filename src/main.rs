//! depindocs: a terminal browser for a documentation site.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use depindocs::{app_state, config, input, table, ui};
use ratatui::crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "depindocs")]
#[command(
    about = "Terminal documentation browser with scroll-tracked section highlighting",
    long_about = None
)]
struct Args {
    /// Content directory holding the site's markdown pages
    #[arg(value_name = "CONTENT_DIR", default_value = "content")]
    content: PathBuf,

    /// Route to open first (defaults to the home route)
    #[arg(long)]
    route: Option<String>,

    /// Load team directory rows from a JSON file
    #[arg(long)]
    data: Option<PathBuf>,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let mut cfg = config::Config::load();

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }

    let pages = input::load_pages(&args.content, &cfg.file_extensions)?;

    if pages.is_empty() {
        eprintln!("No matching files found");
        return Ok(());
    }

    let members = match &args.data {
        Some(path) => table::load_members(path)?,
        None => table::sample_members(),
    };

    let mut app = app_state::App::new(pages, &cfg, members);
    if let Some(route) = &args.route {
        app.open_route(route);
    }

    run_tui(app)
}

fn run_tui(mut app: app_state::App) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut app_state::App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_by(-1),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_by(1),
                KeyCode::PageUp => app.scroll_page(false),
                KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_page(true),
                KeyCode::Home | KeyCode::Char('g') => app.scroll_top(),
                KeyCode::End | KeyCode::Char('G') => app.scroll_bottom(),
                KeyCode::Right | KeyCode::Char('n') => app.next_page(),
                KeyCode::Left | KeyCode::Char('p') => app.prev_page(),
                KeyCode::Char('t') => app.toggle_theme(),
                KeyCode::Char('f') => {
                    // The role filter only applies where the tables render.
                    if app.shows_tables() {
                        app.cycle_role_filter();
                    }
                }
                _ => {}
            }
        }
    }
}
