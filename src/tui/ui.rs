#![allow(dead_code)]
//! UI rendering using ratatui
//!
//! One screen: the board (grid, blanks, status) with an optional
//! possible-words side panel, replaced by a summary once the round ends.

use crate::app::App;
use crate::game::round::{LossReason, Phase};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Render the whole frame from app state.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header: title, budgets, timer
            Constraint::Min(0),    // Board or end-of-round summary
            Constraint::Length(2), // Footer key hints
        ])
        .split(area);

    render_header(frame, layout[0], app);

    match app.round().phase() {
        Phase::Won { word, score } => render_win(frame, layout[1], app, word, *score),
        Phase::Lost { reason } => render_loss(frame, layout[1], *reason),
        _ => render_board(frame, layout[1], app),
    }

    render_footer(frame, layout[2], app);
}

/// Render the header: title, budgets, and timer or word count
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12), // Title
            Constraint::Min(20),    // Budgets
            Constraint::Length(12), // Timer / word count
        ])
        .split(inner);

    let title = Paragraph::new("WORDDROP")
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Left);
    frame.render_widget(title, header_layout[0]);

    let round = app.round();
    let budgets = format!(
        "Shifts: {}  Deletes: {}  Words: {}",
        round.shifts_remaining(),
        round.deletes_remaining(),
        round.feasibility().count()
    );
    let budgets_widget = Paragraph::new(budgets)
        .style(Style::default().fg(Color::Cyan).bold())
        .alignment(Alignment::Center);
    frame.render_widget(budgets_widget, header_layout[1]);

    if let Some(seconds) = round.time_remaining() {
        let timer_color = if seconds <= 10 {
            Color::Red
        } else if seconds <= 30 {
            Color::Yellow
        } else {
            Color::Green
        };
        let timer = Paragraph::new(format_timer(seconds))
            .style(Style::default().fg(timer_color).bold())
            .alignment(Alignment::Right);
        frame.render_widget(timer, header_layout[2]);
    }
}

/// Render the live board, with the words panel alongside when open
fn render_board(frame: &mut Frame, area: Rect, app: &App) {
    if app.show_words {
        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(30),    // Board
                Constraint::Length(24), // Possible words
            ])
            .split(area);
        render_grid_and_blanks(frame, layout[0], app);
        render_words_panel(frame, layout[1], app);
    } else {
        render_grid_and_blanks(frame, area, app);
    }
}

/// Render the grid, the blank pattern, and the status message
fn render_grid_and_blanks(frame: &mut Frame, area: Rect, app: &App) {
    let grid = app.round().grid();
    let rows = grid.rows() as u16;

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),    // Column digits
            Constraint::Length(rows), // Grid rows
            Constraint::Length(1),    // Spacer
            Constraint::Length(1),    // Blank pattern
            Constraint::Length(1),    // Spacer
            Constraint::Length(1),    // Status message
            Constraint::Min(0),
        ])
        .split(area);

    // Digits line up with the cells below them.
    let digits: String = (1..=grid.cols())
        .map(|i| format!(" {}  ", i % 10))
        .collect();
    let digits_widget =
        Paragraph::new(format!("   {}", digits)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(digits_widget, layout[0]);

    let mut lines: Vec<Line> = Vec::new();
    for row in 0..grid.rows() {
        let mut spans: Vec<Span> = Vec::new();
        let marker = if row == app.selected_row { "-> " } else { "   " };
        spans.push(Span::styled(marker, Style::default().fg(Color::Yellow)));
        let is_bottom = row + 1 == grid.rows();
        for col in 0..grid.cols() {
            let (cell_text, style) = match grid.cell(row, col) {
                Some(letter) => {
                    let style = if is_bottom {
                        Style::default().fg(Color::Cyan).bold()
                    } else {
                        Style::default().fg(Color::White)
                    };
                    (format!("[{}] ", letter), style)
                }
                None => (" .  ".to_string(), Style::default().fg(Color::DarkGray)),
            };
            spans.push(Span::styled(cell_text, style));
        }
        lines.push(Line::from(spans));
    }
    frame.render_widget(Paragraph::new(lines), layout[1]);

    let blanks = Paragraph::new(format!("   {}", app.round().blanks()))
        .style(Style::default().fg(Color::Yellow).bold());
    frame.render_widget(blanks, layout[3]);

    let (message_text, message_color) = format_message(&app.message);
    let message = Paragraph::new(message_text).style(Style::default().fg(message_color));
    frame.render_widget(message, layout[5]);
}

/// Render the possible-words side panel
fn render_words_panel(frame: &mut Frame, area: Rect, app: &App) {
    let feasibility = app.round().feasibility();
    let items: Vec<ListItem> = feasibility
        .words()
        .iter()
        .map(|word| ListItem::new(word.to_uppercase()).style(Style::default().fg(Color::White)))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!("Possible ({})", feasibility.count())),
    );
    frame.render_widget(list, area);
}

/// Render the victory summary
fn render_win(frame: &mut Frame, area: Rect, app: &App, word: &str, score: u32) {
    let layout = end_screen_layout(area);

    let title = Paragraph::new("YOU MADE A WORD!")
        .style(Style::default().fg(Color::Green).bold())
        .alignment(Alignment::Center);
    frame.render_widget(title, layout[1]);

    let word_widget = Paragraph::new(word.to_uppercase())
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center);
    frame.render_widget(word_widget, layout[2]);

    let score_widget = Paragraph::new(format!("Score: {}", score))
        .style(Style::default().fg(Color::Magenta).bold())
        .alignment(Alignment::Center);
    frame.render_widget(score_widget, layout[3]);

    let round = app.round();
    let detail = format!(
        "Shifts used: {}   Deletes used: {}   Grid difficulty: {}%",
        round.shift_count(),
        round.delete_count(),
        (round.complexity() * 100.0).round() as u32
    );
    let detail_widget = Paragraph::new(detail)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(detail_widget, layout[4]);
}

/// Render the defeat summary
fn render_loss(frame: &mut Frame, area: Rect, reason: LossReason) {
    let layout = end_screen_layout(area);

    let title = Paragraph::new("GAME OVER")
        .style(Style::default().fg(Color::Red).bold())
        .alignment(Alignment::Center);
    frame.render_widget(title, layout[1]);

    let reason_widget = Paragraph::new(reason.message())
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center);
    frame.render_widget(reason_widget, layout[3]);
}

fn end_screen_layout(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([
            Constraint::Percentage(25), // Top spacer
            Constraint::Length(2),      // Title
            Constraint::Length(2),      // Word
            Constraint::Length(2),      // Score / reason
            Constraint::Length(2),      // Detail
            Constraint::Percentage(25), // Bottom spacer
        ])
        .split(area)
}

/// Render the footer key hints
fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let hints = if app.round().is_over() {
        "N New Game  Esc Quit".to_string()
    } else {
        format!(
            "1-{} Drop  Up/Down Row  S Shift  X Delete  P Words  N New  Esc Quit",
            app.round().grid().cols().min(9)
        )
    };
    let footer = Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Format the countdown for display
fn format_timer(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Pick a color matching the tone of the status message
fn format_message(message: &str) -> (String, Color) {
    if message.is_empty() {
        return (String::new(), Color::White);
    }

    let color = if message.starts_with("Checking") {
        Color::Yellow
    } else if message.contains("Try again") {
        Color::Red
    } else {
        Color::White
    };

    (message.to_string(), color)
}
