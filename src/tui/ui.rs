//! UI rendering using ratatui
//!
//! Three screens, one per session phase:
//! - LevelSelect: pick a difficulty
//! - Playing: scrambled word, input, feedback, timer
//! - Summary: end-of-round statistics and word lists

use crate::app::session::{FeedbackKind, GameSession};
use crate::app::{Coordinator, Phase};
use crate::game::timer::{self, TimerBand};
use crate::game::word_bank::{self, Level};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Render the appropriate screen for the session's phase
pub fn render(frame: &mut Frame, coordinator: &Coordinator) {
    match coordinator.session.phase() {
        Phase::LevelSelect => render_level_select(frame, coordinator.menu_selected),
        Phase::Playing => render_game(frame, &coordinator.session),
        Phase::Summary => render_summary(frame, &coordinator.session),
    }
}

/// Render the level-select screen
fn render_level_select(frame: &mut Frame, selected: usize) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // Logo
            Constraint::Length(2), // Tagline
            Constraint::Min(8),    // Level list
            Constraint::Length(2), // Categories for selected level
            Constraint::Length(2), // Footer
        ])
        .margin(2)
        .split(area);

    let logo = r#"
 ____   ____ ____      _    __  __ ____  _     _____
/ ___| / ___|  _ \    / \  |  \/  | __ )| |   | ____|
\___ \| |   | |_) |  / _ \ | |\/| |  _ \| |   |  _|
 ___) | |___|  _ <  / ___ \| |  | | |_) | |___| |___
|____/ \____|_| \_\/_/   \_\_|  |_|____/|_____|_____|
"#;
    let logo_widget = Paragraph::new(logo)
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center);
    frame.render_widget(logo_widget, layout[0]);

    let tagline = Paragraph::new("Unscramble the word before the clock runs out")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(tagline, layout[1]);

    let items: Vec<ListItem> = Level::all()
        .iter()
        .enumerate()
        .map(|(i, level)| {
            let style = if i == selected {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::White)
            };
            let prefix = if i == selected { "> " } else { "  " };
            let line = format!(
                "{}{:<14} {} words | {} | {}",
                prefix,
                level.label(),
                word_bank::word_count(*level),
                timer::format_time(timer::time_limit(*level)),
                level.length_hint(),
            );
            ListItem::new(line).style(style)
        })
        .collect();

    let menu = List::new(items).block(Block::default());
    frame.render_widget(menu, layout[2]);

    let categories = word_bank::categories(Level::all()[selected]).join(", ");
    let categories_widget = Paragraph::new(format!("Categories: {}", categories))
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);
    frame.render_widget(categories_widget, layout[3]);

    let footer = Paragraph::new("↑↓ Navigate  Enter Start  Esc Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[4]);
}

/// Render the gameplay screen
fn render_game(frame: &mut Frame, session: &GameSession) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header: title, progress, timer
            Constraint::Min(0),    // Word, input, feedback
        ])
        .split(area);

    render_header(frame, layout[0], session);
    render_play_area(frame, layout[1], session);
}

/// Render the header: title, word progress, score/streak, timer
fn render_header(frame: &mut Frame, area: Rect, session: &GameSession) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12), // Title
            Constraint::Min(20),    // Progress + score
            Constraint::Length(8),  // Timer
        ])
        .split(inner);

    let title = Paragraph::new("SCRAMBLE")
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Left);
    frame.render_widget(title, header_layout[0]);

    let mut status = format!(
        "Word {}/{}   Score: {}",
        session.word_number(),
        session.words_total(),
        session.score(),
    );
    if session.streak() > 1 {
        status.push_str(&format!("   Streak: {}", session.streak()));
    }
    let status_widget = Paragraph::new(status)
        .style(Style::default().fg(Color::Magenta).bold())
        .alignment(Alignment::Center);
    frame.render_widget(status_widget, header_layout[1]);

    let timer_color = match timer::classify(session.time_remaining()) {
        TimerBand::Critical => Color::Red,
        TimerBand::Warning => Color::Yellow,
        TimerBand::Normal => Color::Green,
    };
    let timer_widget = Paragraph::new(timer::format_time(session.time_remaining()))
        .style(Style::default().fg(timer_color).bold())
        .alignment(Alignment::Right);
    frame.render_widget(timer_widget, header_layout[2]);
}

/// Render the scrambled word, category, input and feedback lines
fn render_play_area(frame: &mut Frame, area: Rect, session: &GameSession) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Scrambled word
            Constraint::Length(1), // Category + hint text
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Input line
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Feedback line
            Constraint::Min(0),    // Remaining space
            Constraint::Length(1), // Footer
        ])
        .split(area);

    // Scrambled word, spaced out letter by letter
    let word_display: String = session
        .display_word()
        .chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    let word_widget = Paragraph::new(format!("[ {} ]", word_display))
        .style(Style::default().fg(Color::Cyan).bold())
        .alignment(Alignment::Center);
    frame.render_widget(word_widget, layout[0]);

    if let Some(word) = session.current_word() {
        let info = format!("{}  |  {}", word.category, word.hint);
        let info_widget = Paragraph::new(info)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(info_widget, layout[1]);
    }

    let input_widget = Paragraph::new(format!("> {}_", session.input))
        .style(Style::default().fg(Color::White));
    frame.render_widget(input_widget, layout[3]);

    if let Some(feedback) = session.feedback() {
        let color = match feedback.kind {
            FeedbackKind::Success => Color::Green,
            FeedbackKind::Error => Color::Red,
            FeedbackKind::Hint => Color::Yellow,
        };
        let feedback_widget =
            Paragraph::new(feedback.text.as_str()).style(Style::default().fg(color));
        frame.render_widget(feedback_widget, layout[5]);
    }

    let hint_key = if session.can_reveal() {
        "Tab Hint (-2)"
    } else {
        "Tab (no hints left)"
    };
    let footer = Paragraph::new(format!(
        "Type answer  Enter Submit  {}  ↓ Skip  Esc Menu",
        hint_key
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(footer, layout[7]);
}

/// Render the end-of-round summary
fn render_summary(frame: &mut Frame, session: &GameSession) {
    let area = frame.area();
    let stats = session.stats();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(1), // Final score
            Constraint::Length(1), // Stats line
            Constraint::Length(1), // Spacer
            Constraint::Min(6),    // Word lists
            Constraint::Length(2), // Footer
        ])
        .split(area);

    let title = Paragraph::new("ROUND OVER")
        .style(Style::default().fg(Color::Red).bold())
        .alignment(Alignment::Center);
    frame.render_widget(title, layout[0]);

    let score = Paragraph::new(format!("Final Score: {}", stats.score))
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center);
    frame.render_widget(score, layout[1]);

    let stats_line = format!(
        "Solved: {}/{}  ({}%)   Longest Streak: {}",
        stats.words_solved,
        stats.words_attempted,
        stats.accuracy_percent(),
        stats.longest_streak,
    );
    let stats_widget = Paragraph::new(stats_line)
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);
    frame.render_widget(stats_widget, layout[2]);

    let lists_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[4]);

    let solved_items: Vec<ListItem> = session
        .solved_words()
        .iter()
        .map(|w| {
            ListItem::new(format!("{} - {}", w.word, w.meaning))
                .style(Style::default().fg(Color::Green))
        })
        .collect();
    let solved_list = List::new(solved_items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Solved"),
    );
    frame.render_widget(solved_list, lists_layout[0]);

    let missed_items: Vec<ListItem> = session
        .missed_words()
        .iter()
        .map(|w| {
            ListItem::new(format!("{} - {}", w.word, w.meaning))
                .style(Style::default().fg(Color::Red))
        })
        .collect();
    let missed_list = List::new(missed_items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title("Missed"),
    );
    frame.render_widget(missed_list, lists_layout[1]);

    let footer = Paragraph::new("Enter Play Again  Esc Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[5]);
}
