pub mod dialog;
pub mod menu;
pub mod playing;
pub mod results;
pub mod screen;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::app::App;

const HORIZONTAL_MARGIN: u16 = 2;
const VERTICAL_MARGIN: u16 = 1;

const TITLE: &str = "TYPE WITH MELO";
const TAGLINE: &str = "Test your typing speed and accuracy";

/// Draw the screen for the current game state, with the exit dialog on top when open
pub fn draw(app: &App, f: &mut Frame) {
    screen::current_screen(app.game.state()).render(app, f);

    if app.game.is_confirming_exit() {
        dialog::render(f);
    }
}

fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// White-on-black inverted style used for the selected option and primary actions
fn selected() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::White)
        .add_modifier(Modifier::BOLD)
}

fn hint() -> Style {
    Style::default()
        .fg(Color::Gray)
        .add_modifier(Modifier::ITALIC)
}

fn header() -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(Span::styled(TITLE, bold())),
        Line::from(Span::styled(TAGLINE, Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center)
}

/// Small bordered box with a label over a big value, like SCORE / 120
fn stat_panel(label: &str, value: String) -> Paragraph<'_> {
    Paragraph::new(vec![
        Line::from(Span::styled(label, Style::default().fg(Color::Gray))),
        Line::from(Span::styled(value, bold())),
    ])
    .alignment(Alignment::Center)
    .block(Block::bordered())
}

fn legend(text: &str) -> Paragraph<'_> {
    Paragraph::new(Span::styled(text, hint())).alignment(Alignment::Center)
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
