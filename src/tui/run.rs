use std::io;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::event::{poll, read, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::cli::CommonArgs;
use crate::db::PatternDb;
use crate::store::Contributions;

use super::events::{activate_day, handle_key_events, handle_mouse_event};
use super::gestures::GestureTracker;
use super::state::TuiState;
use super::views::{draw_grid_view, draw_help_overlay};

pub fn run(common: &CommonArgs) -> anyhow::Result<()> {
    let year = common.resolve_year();
    let mut db =
        PatternDb::new(common.store.as_deref()).context("Failed to open pattern store")?;
    let mut contributions = db
        .load(year)
        .context("Failed to load stored pattern")?
        .unwrap_or_else(|| Contributions::new(year));

    enable_raw_mode()?;
    execute!(io::stdout(), EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut state = TuiState::new();
    let mut tracker = GestureTracker::new();
    terminal.clear()?;

    loop {
        let draw_result = terminal.draw(|f| {
            let size = f.size();
            if state.show_help {
                draw_help_overlay(f, size);
                return;
            }
            draw_grid_view(f, size, &contributions, &mut state);
        });
        if let Err(e) = draw_result {
            eprintln!("TUI draw error: {e}");
        }

        if poll(Duration::from_millis(50))? {
            match read()? {
                Event::Key(key_event) => {
                    if handle_key_events(key_event, &mut state, &mut contributions, &mut db)? {
                        break;
                    }
                }
                Event::Mouse(mouse_event) => {
                    handle_mouse_event(mouse_event, &mut state, &mut contributions, &mut tracker);
                }
                _ => {}
            }
        }

        // timer deadlines run on the tick, not on input
        let now = Instant::now();
        if let Some(day) = tracker.poll(now) {
            state.current_day = day;
            activate_day(&mut state, &mut contributions);
        }
        state.tick(now);
    }

    terminal.clear()?;
    execute!(io::stdout(), DisableMouseCapture)?;
    disable_raw_mode()?;
    Ok(())
}
