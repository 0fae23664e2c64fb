//! Terminal UI for supertoe.

mod app;
mod ui;

pub use app::App;
pub use ui::board_lines;

use crate::config::PlayConfig;
use crate::orchestrator::{GameEvent, Orchestrator};
use crate::players::{self, KeyInput};
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use supertoe_core::Mark;
use tokio::sync::{Mutex, mpsc};
use tracing::{error, info, instrument};

/// Pause after each move so automated replies can be followed.
const MOVE_PACE: Duration = Duration::from_millis(400);

/// What the user asked for when a game loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Exit {
    Quit,
    Restart,
}

/// Runs the interactive game until the user quits.
#[instrument(skip(config), fields(game = %config.game()))]
pub async fn run_tui(config: PlayConfig) -> Result<()> {
    info!("Starting supertoe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = play_games(&mut terminal, &config).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Terminal the UI draws into.
type Screen = Terminal<CrosstermBackend<io::Stdout>>;

async fn play_games(terminal: &mut Screen, config: &PlayConfig) -> Result<()> {
    loop {
        let (key_tx, key_rx) = mpsc::unbounded_channel();
        let keys: KeyInput = Arc::new(Mutex::new(key_rx));
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();

        let player_x = players::build(config, Mark::X, Some(&keys))?;
        let player_o = players::build(config, Mark::O, Some(&keys))?;
        let app = App::new(*config.game(), player_x.name(), player_o.name());

        let mut orchestrator = Orchestrator::new(*config.game(), player_x, player_o, event_tx)
            .with_pace(MOVE_PACE);
        let (error_tx, error_rx) = mpsc::unbounded_channel();
        let orchestrator_handle = tokio::spawn(async move {
            if let Err(e) = orchestrator.run().await {
                error!(error = %e, "Orchestrator error");
                let _ = error_tx.send(e.to_string());
            }
        });

        let exit = run_app(terminal, app, key_tx, &mut event_rx, error_rx).await;
        orchestrator_handle.abort();

        match exit? {
            Exit::Quit => return Ok(()),
            Exit::Restart => info!("Restarting game"),
        }
    }
}

async fn run_app(
    terminal: &mut Screen,
    mut app: App,
    key_tx: mpsc::UnboundedSender<KeyCode>,
    event_rx: &mut mpsc::UnboundedReceiver<GameEvent>,
    mut error_rx: mpsc::UnboundedReceiver<String>,
) -> Result<Exit> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        while let Ok(event) = event_rx.try_recv() {
            app.handle_event(event);
        }
        if let Ok(reason) = error_rx.try_recv() {
            app.abort(&reason);
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') => return Ok(Exit::Quit),
                    KeyCode::Char('r') if app.is_game_over() => return Ok(Exit::Restart),
                    code => {
                        // Nobody may be listening once the game is over.
                        let _ = key_tx.send(code);
                    }
                }
            }
        }
    }
}
