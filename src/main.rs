//! Terminal quiz runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from
//! `kids_quiz::term`. The event loop blocks on input only until the next
//! countdown tick is due.

use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use kids_quiz::app::{Flow, QuizApp};
use kids_quiz::config::{parse_args, AppConfig, USAGE};
use kids_quiz::core::RoundController;
use kids_quiz::input::handle_key_event;
use kids_quiz::leaderboard::{
    save_player_name, save_timer_enabled, FileStore, KeyValueStore, Leaderboard, Setup,
};
use kids_quiz::term::{FrameBuffer, QuizView, TerminalRenderer, Viewport};
use kids_quiz::types::GameKind;

/// Longest wait for input when no tick is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args).with_context(|| format!("\n{USAGE}"))?;
    if cli.help {
        println!("{USAGE}");
        return Ok(());
    }

    let config = AppConfig::from_env();
    init_logging(&config)?;

    let mut store = FileStore::open(&config.store_path);
    if let Some(name) = &cli.name {
        save_player_name(&mut store, name).context("invalid --name")?;
    }
    if let Some(enabled) = cli.timer {
        save_timer_enabled(&mut store, enabled)?;
    }

    if cli.leaderboard {
        print_standings(&Leaderboard::new(store));
        return Ok(());
    }

    let setup = Setup::load(&store);
    let game = cli.game.unwrap_or(GameKind::Math);
    let seed = cli.seed.or(config.seed).unwrap_or_else(clock_seed);
    tracing::debug!(seed, store = %config.store_path.display(), "configuration loaded");

    let round = RoundController::with_max_time(
        game,
        setup.player_name,
        setup.timer_enabled,
        config.max_time,
        seed,
    );
    let mut app = QuizApp::new(round, Leaderboard::new(store));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run<S: KeyValueStore>(term: &mut TerminalRenderer, app: &mut QuizApp<S>) -> Result<()> {
    let view = QuizView::new();
    let mut fb = FrameBuffer::new(0, 0);
    app.start();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        app.render_into(&view, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next tick.
        if event::poll(app.timeout(Instant::now(), IDLE_POLL))? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(input) = handle_key_event(key, app.mode()) {
                        if app.handle(input) == Flow::Quit {
                            return Ok(());
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        app.poll_timer(Instant::now());
    }
}

fn init_logging(config: &AppConfig) -> Result<()> {
    // Raw mode owns the terminal, so logs only ever go to a file.
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {path}"))?;

    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(kids_quiz::config::DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .try_init()
        .context("failed to install logger")?;
    Ok(())
}

fn print_standings<S: KeyValueStore>(board: &Leaderboard<S>) {
    for game in GameKind::ALL {
        println!("{}", game.display_name());
        let top = board.standings(game);
        if top.is_empty() {
            println!("  (no scores yet)");
        }
        for (i, entry) in top.iter().enumerate() {
            let level = entry.level.map(|l| format!(" level {l}")).unwrap_or_default();
            println!("  {:>2}. {:<16} {:>4}{}  {}", i + 1, entry.name, entry.points, level, entry.date);
        }
        println!();
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
