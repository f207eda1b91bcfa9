use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Wrap},
    Frame,
};

use super::{bold, centered_rect, selected};

const DIALOG_WIDTH: u16 = 60;
const DIALOG_HEIGHT: u16 = 8;

/// "Return to main menu?" confirmation, drawn over whatever screen is below
pub fn render(f: &mut Frame) {
    let area = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, f.area());

    let body = Paragraph::new(vec![
        Line::from(Span::styled(
            "Your current game progress will be lost.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "Are you sure you want to exit?",
            Style::default().fg(Color::Gray),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(" (n) CANCEL ", bold()),
            Span::raw("    "),
            Span::styled(" (y) EXIT GAME ", selected()),
        ]),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::bordered()
            .title(Span::styled(" RETURN TO MAIN MENU? ", bold()))
            .title_alignment(Alignment::Center),
    );

    f.render_widget(Clear, area);
    f.render_widget(body, area);
}
