use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

pub(super) fn draw_setup(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let area = centered_rect(70, 70, size);
    let block = Block::default().title("poker-odds").borders(Borders::ALL);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    let inner_all = inner(area);

    let logo = r#"
 .---. .---. .---. .---.
 | A | | K | | Q | | J |
 | ♠ | | ♥ | | ♦ | | ♣ |
 '---' '---' '---' '---'
       hold'em odds"#;
    let logo_lines: Vec<Line> = logo
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Cyan))))
        .collect();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(logo_lines.len() as u16 + 1), Constraint::Min(3)])
        .split(inner_all);

    let logo_para = Paragraph::new(logo_lines).alignment(Alignment::Center);
    f.render_widget(logo_para, rows[0]);

    let items = app.setup_items_display();
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled("New game:", Style::default().add_modifier(Modifier::BOLD))));
    for (i, it) in items.iter().enumerate() {
        let style = if i == app.setup_index {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(it.clone(), style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] Start  [Q] Quit  [↑/↓] Move  [+/-] Adjust",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true }).alignment(Alignment::Center);
    f.render_widget(para, rows[1]);
}
