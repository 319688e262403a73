use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};
use super::app::{App, InputMode};

pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Table
            Constraint::Length(3), // Messages
            Constraint::Length(3), // Help
        ].as_ref())
        .split(f.area());

    if app.store.is_empty() {
        let empty = Paragraph::new("No assignments yet.")
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL).title("Assignment Tracker"));
        f.render_widget(empty, chunks[0]);
    } else {
        let rows: Vec<Row> = app
            .store
            .list()
            .iter()
            .map(|a| {
                let pending = app.notifier.pending_for(a.id);
                let reminders = if pending == 0 {
                    "-".to_string()
                } else {
                    format!("{} pending", pending)
                };

                Row::new(vec![
                    Cell::from(a.title.clone()),
                    Cell::from(a.deadline.clone()),
                    Cell::from(reminders),
                ])
            })
            .collect();

        let widths = [
            Constraint::Min(24),
            Constraint::Length(12),
            Constraint::Length(12),
        ];

        let table = Table::new(rows, widths)
            .header(Row::new(vec!["Title", "Deadline", "Reminders"])
                .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .bottom_margin(1))
            .block(Block::default().borders(Borders::ALL).title("Assignment Tracker"))
            .row_highlight_style(Style::default().add_modifier(Modifier::BOLD).bg(Color::DarkGray))
            .highlight_symbol(">> ");

        f.render_stateful_widget(table, chunks[0], &mut app.state);
    }

    let notice = Paragraph::new(app.notice.clone().unwrap_or_default())
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title("Messages"));

    f.render_widget(notice, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Normal => "q: Quit | a: Add | Space/Enter: Complete | j/k: Move",
        InputMode::Adding => "Enter: Next Step | Esc: Cancel",
        InputMode::Confirming => "y: Yes | n: No | Esc: Dismiss",
    };

    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(help, chunks[2]);

    // Render the popup if a wizard or dialog is open
    match app.input_mode {
        InputMode::Adding => {
            let area = centered_rect(60, 3, f.area()); // Fixed height of 3 (border + 1 line)
            f.render_widget(Clear, area); // Clear the area first

            let title = match app.add_state.step {
                0 => "Add Assignment: Enter Title",
                1 => "Add Assignment: Enter Deadline (YYYY-MM-DD)",
                _ => "Add Assignment",
            };

            let input = Paragraph::new(app.input_buffer.as_str())
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default().borders(Borders::ALL).title(title));

            f.render_widget(input, area);
        }
        InputMode::Confirming => {
            let area = centered_rect(60, 3, f.area());
            f.render_widget(Clear, area);

            let dialog = Paragraph::new("Have you completed this assignment? (y/n)")
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default().borders(Borders::ALL).title("Complete Assignment"));

            f.render_widget(dialog, area);
        }
        InputMode::Normal => {}
    }
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((r.height - height) / 2),
            Constraint::Length(height),
            Constraint::Length((r.height - height) / 2),
        ].as_ref())
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ].as_ref())
        .split(popup_layout[1])[1]
}
