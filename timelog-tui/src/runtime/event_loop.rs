use crate::app::App;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use super::action_queue::channel;
use super::actions::run_action;
use super::views::handle_key;

pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let (action_tx, mut action_rx) = channel();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if app.tracker.is_running() {
            app.throbber_state.calc_next();
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(key, app, &action_tx);
                }
            }
        }

        while let Ok(action) = action_rx.try_recv() {
            tracing::debug!(?action, "Running action");
            run_action(action, app);
        }
        app.clamp_list_index();

        if !app.running {
            break;
        }
    }

    Ok(())
}
