pub mod app;
pub mod ui;

use std::{error::Error, io, time::Duration};
use chrono::Local;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use app::{App, Confirmation, InputMode};
use ui::ui;

/// How long the event loop waits for a key before delivering due reminders.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

pub fn run_tui() -> Result<(), Box<dyn Error>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new();

    // Run loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err)
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        // Waking up on a timeout lets reminders fire without a keypress.
        if event::poll(TICK_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                match app.input_mode {
                    InputMode::Normal => match key.code {
                        KeyCode::Char('q') => return Ok(()),
                        KeyCode::Down | KeyCode::Char('j') => app.next(),
                        KeyCode::Up | KeyCode::Char('k') => app.previous(),
                        KeyCode::Char('a') => app.start_add(),
                        KeyCode::Char(' ') | KeyCode::Enter => app.request_completion(),
                        _ => {}
                    },
                    InputMode::Adding => match key.code {
                        KeyCode::Enter => app.handle_input(),
                        KeyCode::Esc => {
                            app.input_mode = InputMode::Normal;
                            app.input_buffer.clear();
                        }
                        KeyCode::Char(c) => {
                            app.input_buffer.push(c);
                        }
                        KeyCode::Backspace => {
                            app.input_buffer.pop();
                        }
                        _ => {}
                    },
                    InputMode::Confirming => match key.code {
                        KeyCode::Char('y') | KeyCode::Char('Y') => {
                            app.resolve_completion(Confirmation::Yes)
                        }
                        KeyCode::Char('n') | KeyCode::Char('N') => {
                            app.resolve_completion(Confirmation::No)
                        }
                        KeyCode::Esc => app.resolve_completion(Confirmation::Dismissed),
                        _ => {}
                    },
                }
            }
        }

        app.tick(Local::now().naive_local());
    }
}
