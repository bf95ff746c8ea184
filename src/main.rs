//! Mansion Mystery
//!
//! Walk the mansion, collect the clues, name the culprit.

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use mansion_mystery::tui::App;
use mansion_mystery::{console, CaseFile, Game, Result};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, stdout};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mansion-mystery", version)]
#[command(about = "Explore a mansion, collect clues and accuse a suspect", long_about = None)]
struct Args {
    /// Case file (JSON) to play instead of the built-in Manor Affair
    #[arg(short, long)]
    case: Option<PathBuf>,

    /// Use the line-oriented console instead of the full-screen interface
    #[arg(long)]
    plain: bool,

    /// Print the final accusation as JSON (console mode only)
    #[arg(long, requires = "plain")]
    json: bool,

    /// Override the number of buckets in the suspect index
    #[arg(long)]
    buckets: Option<usize>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let case = match &args.case {
        Some(path) => CaseFile::from_path(path)?,
        None => CaseFile::default(),
    };
    let mut game = Game::from_case(&case, args.buckets)
        .with_context(|| format!("could not set up case \"{}\"", case.title))?;

    if args.plain {
        run_console(&mut game, args.json)
    } else {
        run_tui(game)
    }
}

fn run_console(game: &mut Game, json: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = stdout();
    let accusation = console::run(game, stdin.lock(), &mut stdout)?;

    if json {
        if let Some(accusation) = accusation {
            println!("{}", serde_json::to_string_pretty(&accusation)?);
        }
    }
    Ok(())
}

fn run_tui(game: Game) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(game);
    let outcome = run_app(&mut terminal, &mut app);

    // Cleanup, even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    outcome?;

    match app.game.accusation() {
        Some(accusation) => {
            println!("\n╔════════════════════════════════════════════════════════╗");
            println!("║  {:<54}║", format!("Verdict: {}", accusation.verdict));
            println!("║  {:<54}║", format!("Clues against {}: {}", accusation.accused, accusation.matches));
            println!("╚════════════════════════════════════════════════════════╝\n");
        }
        None => println!("\nYou left the mansion without accusing anyone.\n"),
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;

        if !app.handle_input()? {
            break;
        }
    }
    Ok(())
}
