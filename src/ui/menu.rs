use ratatui::{
    layout::{Alignment, Constraint, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use super::{bold, header, legend, selected, HORIZONTAL_MARGIN, VERTICAL_MARGIN};
use crate::app::{App, MenuFocus};
use crate::difficulty::Difficulty;
use crate::language::Language;

const HOW_TO_PLAY: [&str; 4] = [
    "• Type the displayed word correctly",
    "• Press Enter to submit your answer",
    "• Score points based on speed and accuracy",
    "• Try to type as many words as possible before time runs out",
];

pub fn render(app: &App, f: &mut Frame) {
    let [title, _, how_to, language, difficulty, start, _, keys] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(HOW_TO_PLAY.len() as u16 + 2),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .horizontal_margin(HORIZONTAL_MARGIN)
    .vertical_margin(VERTICAL_MARGIN)
    .areas(f.area());

    f.render_widget(header(), title);

    let rules = Paragraph::new(
        HOW_TO_PLAY
            .iter()
            .map(|line| Line::from(Span::styled(*line, Style::default().fg(Color::Gray))))
            .collect::<Vec<_>>(),
    )
    .block(Block::bordered().title(Span::styled(" HOW TO PLAY ", bold())));
    f.render_widget(rules, how_to);

    let languages = Language::ALL.map(|l| (l.label(), l == app.game.language()));
    f.render_widget(
        selector(
            " SELECT LANGUAGE ",
            &languages,
            app.menu_focus == MenuFocus::Language,
        ),
        language,
    );

    let difficulties = Difficulty::ALL.map(|d| (d.label(), d == app.game.difficulty()));
    f.render_widget(
        selector(
            " SELECT DIFFICULTY ",
            &difficulties,
            app.menu_focus == MenuFocus::Difficulty,
        ),
        difficulty,
    );

    let button = Paragraph::new(Span::styled(" START GAME ", selected()))
        .alignment(Alignment::Center)
        .block(Block::bordered());
    f.render_widget(button, start);

    f.render_widget(
        legend("(tab) switch / (←/→) choose / (enter) start / (q)uit"),
        keys,
    );
}

/// One bordered row of options; the chosen one is inverted, the focused row gets a yellow border
fn selector<'a>(title: &'a str, options: &[(&'a str, bool)], focused: bool) -> Paragraph<'a> {
    let mut spans = Vec::with_capacity(options.len() * 2);
    for (idx, (label, is_selected)) in options.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if *is_selected {
            selected()
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!(" {label} "), style));
    }

    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .border_style(border)
                .title(Span::styled(title, bold())),
        )
}
