pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{AppContext, Result};
use crate::domain::AyahRef;
use crate::quiz::QuizReport;

use self::app::QuizApp;
use self::event::{AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// What a finished quiz leaves behind.
#[derive(Debug)]
pub struct QuizOutcome {
    pub report: QuizReport,
    pub copied: Vec<String>,
}

/// Run the quiz screen until the user finishes.
pub async fn run(ctx: &AppContext, range: Option<(AyahRef, AyahRef)>) -> Result<QuizOutcome> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx, range).await;
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app(
    terminal: &mut Tui,
    ctx: &AppContext,
    range: Option<(AyahRef, AyahRef)>,
) -> Result<QuizOutcome> {
    let mut quiz_app = QuizApp::new(ctx.translations.clone());
    let event_handler = EventHandler::new(Duration::from_millis(100));
    let mut rng = StdRng::from_entropy();

    load_next(terminal, &mut quiz_app, ctx, range, &mut rng).await?;

    loop {
        terminal.draw(|frame| layout::render(frame, &quiz_app))?;

        match event_handler.next()? {
            AppEvent::Key(key) => {
                let action = ctx.config.keybindings.get_action(&key);
                if quiz_app.apply(action) {
                    load_next(terminal, &mut quiz_app, ctx, range, &mut rng).await?;
                }
            }
            AppEvent::Tick => {}
        }

        if quiz_app.should_quit {
            break;
        }
    }

    Ok(QuizOutcome {
        report: quiz_app.session.finish(),
        copied: quiz_app.copied,
    })
}

async fn load_next(
    terminal: &mut Tui,
    quiz_app: &mut QuizApp,
    ctx: &AppContext,
    range: Option<(AyahRef, AyahRef)>,
    rng: &mut StdRng,
) -> Result<()> {
    quiz_app.session.clear();
    quiz_app.is_loading = true;
    terminal.draw(|frame| layout::render(frame, quiz_app))?;

    let result = match range {
        Some((start, end)) => ctx.picker.random_ruku_in_range(start, end, rng).await,
        None => ctx.picker.random_ruku(rng).await,
    };
    quiz_app.is_loading = false;

    match result {
        Ok(ruku) => quiz_app.session.set_ruku(ruku),
        Err(e) => {
            tracing::error!("Failed to load ruku: {}", e);
            let message = e.user_message(&quiz_app.translations);
            quiz_app.set_status(message);
        }
    }
    Ok(())
}
