use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Gauge, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::{bold, header, legend, stat_panel, HORIZONTAL_MARGIN, VERTICAL_MARGIN};
use crate::app::App;

const PLACEHOLDER: &str = "Type the word here...";

pub fn render(app: &App, f: &mut Frame) {
    let game = &app.game;

    let [title, stats, progress, _, word, input, award, _, keys] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(4),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .horizontal_margin(HORIZONTAL_MARGIN)
    .vertical_margin(VERTICAL_MARGIN)
    .areas(f.area());

    f.render_widget(header(), title);

    let [score, time, words] = Layout::horizontal([Constraint::Ratio(1, 3); 3]).areas(stats);
    f.render_widget(stat_panel("SCORE", format!("{}", game.score().floor())), score);
    f.render_widget(stat_panel("TIME", format!("{}s", game.time_remaining())), time);
    f.render_widget(stat_panel("WORDS", game.correct_words().to_string()), words);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::White).bg(Color::DarkGray))
        .ratio(game.time_fraction())
        .label("");
    f.render_widget(gauge, progress);

    let current = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(
            game.current_word(),
            bold().add_modifier(Modifier::UNDERLINED),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::bordered());
    f.render_widget(current, word);

    // submit is disabled while the input is blank
    let enter_style = if app.input.trim().is_empty() {
        Style::default().add_modifier(Modifier::DIM)
    } else {
        super::selected()
    };
    let line = if app.input.is_empty() {
        Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(app.input.as_str())
    };
    let input_box = Paragraph::new(line).block(
        Block::bordered().title(Line::from(Span::styled(" ENTER ", enter_style)).right_aligned()),
    );
    f.render_widget(input_box, input);

    if !game.is_confirming_exit() {
        let cursor_x = input.x + 1 + app.input.width() as u16;
        let max_x = (input.x + input.width).saturating_sub(2);
        f.set_cursor_position((cursor_x.min(max_x.max(input.x)), input.y + 1));
    }

    if let Some(points) = game.last_award() {
        let toast = Paragraph::new(Span::styled(
            format!("+{} points! Great job!", points.floor()),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center);
        f.render_widget(toast, award);
    }

    f.render_widget(legend("(enter) submit / (esc) main menu"), keys);
}
