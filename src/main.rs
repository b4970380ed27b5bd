//! Scramble - a timed word-unscramble game for language learners
//!
//! Pick a level, unscramble the words, beat the clock.

mod app;
mod game;
mod tui;

use app::Coordinator;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::io;
use std::time::{Duration, Instant};
use tui::Tui;

fn main() -> io::Result<()> {
    // Initialize terminal
    let mut terminal = Tui::new()?;
    terminal.enter()?;

    let mut coordinator = Coordinator::new();

    // Main event loop. The countdown ticks once per second; input polling
    // uses a shorter timeout so the post-answer auto-advance fires close
    // to its deadline.
    let tick_rate = Duration::from_secs(1);
    let poll_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    loop {
        // Render
        terminal.draw(|frame| tui::render(frame, &coordinator))?;

        // Calculate timeout for next tick
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO)
            .min(poll_rate);

        // Poll for events with timeout
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Esc => coordinator.on_escape(),
                        KeyCode::Enter => coordinator.on_enter(),
                        KeyCode::Up => coordinator.on_up(),
                        KeyCode::Down => coordinator.on_down(),
                        KeyCode::Tab => coordinator.on_tab(),
                        KeyCode::Backspace => coordinator.on_backspace(),
                        KeyCode::Char(c) => {
                            // Only accept alphabetic characters
                            if c.is_ascii_alphabetic() {
                                coordinator.on_char(c.to_ascii_uppercase());
                            }
                        }
                        _ => {}
                    }
                }
            }
        }

        // Handle timer tick
        if last_tick.elapsed() >= tick_rate {
            coordinator.session.tick();
            last_tick = Instant::now();
        }

        // Fire the auto-advance once its deadline has passed
        coordinator.session.poll_advance(Instant::now());

        if coordinator.should_quit {
            break;
        }
    }

    // Terminal cleanup happens automatically via Tui::drop
    Ok(())
}
