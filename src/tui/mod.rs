pub mod app;
pub mod event;
pub mod layout;

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::{AppContext, Result};
use crate::store::Store;

use self::app::TuiApp;
use self::event::{Action, AppEvent, EventHandler};

type Tui = Terminal<CrosstermBackend<Stdout>>;

pub async fn run(ctx: Arc<AppContext>) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, ctx).await;
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

async fn run_app(terminal: &mut Tui, ctx: Arc<AppContext>) -> Result<()> {
    let mut tui_app = TuiApp::new();
    let event_handler = EventHandler::new(Duration::from_millis(100));

    load_posts(&mut tui_app, &ctx)?;

    loop {
        terminal.draw(|frame| layout::render(frame, &tui_app))?;

        match event_handler.next()? {
            AppEvent::Key(key) => {
                let action = Action::from(key);
                match action {
                    Action::Quit => {
                        tui_app.should_quit = true;
                    }
                    Action::MoveUp => {
                        tui_app.move_up();
                    }
                    Action::MoveDown => {
                        tui_app.move_down();
                    }
                    Action::NextPane => {
                        tui_app.active_pane = tui_app.active_pane.next();
                    }
                    Action::ToggleChart => {
                        tui_app.toggle_chart();
                    }
                    Action::Download => {
                        tui_app.is_fetching = true;
                        terminal.draw(|frame| layout::render(frame, &tui_app))?;

                        let status = match download(&ctx).await {
                            Ok(stored) => format!("Downloaded feed: {} posts stored", stored),
                            Err(e) => format!("Download failed: {}", e),
                        };

                        load_posts(&mut tui_app, &ctx)?;
                        tui_app.is_fetching = false;
                        tui_app.set_status(status);
                    }
                    Action::Clear => {
                        let status = match ctx.store.clear_posts() {
                            Ok(()) => "Cleared all posts".to_string(),
                            Err(e) => format!("Clear failed: {}", e),
                        };
                        load_posts(&mut tui_app, &ctx)?;
                        tui_app.set_status(status);
                    }
                    Action::None => {}
                }
            }
            AppEvent::Tick => {}
        }

        if tui_app.should_quit {
            break;
        }
    }

    Ok(())
}

async fn download(ctx: &AppContext) -> Result<usize> {
    let posts = ctx.feed.fetch_posts().await?;
    ctx.store
        .insert_posts(&posts, ctx.config.store.on_duplicate)
}

fn load_posts(tui_app: &mut TuiApp, ctx: &AppContext) -> Result<()> {
    tui_app.set_posts(ctx.store.get_all_posts()?);
    Ok(())
}
