use ratatui::{
    layout::{Alignment, Constraint, Layout},
    text::Span,
    widgets::Block,
    Frame,
};

use super::{bold, header, legend, stat_panel, HORIZONTAL_MARGIN, VERTICAL_MARGIN};
use crate::app::App;

pub fn render(app: &App, f: &mut Frame) {
    let game = &app.game;

    let [title, _, summary, _, keys] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(10),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .horizontal_margin(HORIZONTAL_MARGIN)
    .vertical_margin(VERTICAL_MARGIN)
    .areas(f.area());

    f.render_widget(header(), title);

    let panel = Block::bordered()
        .title(Span::styled(" GAME OVER ", bold()))
        .title_alignment(Alignment::Center);
    let inner = panel.inner(summary);
    f.render_widget(panel, summary);

    let [top, bottom] = Layout::vertical([Constraint::Length(4); 2]).areas(inner);
    let [score, accuracy] = Layout::horizontal([Constraint::Ratio(1, 2); 2]).areas(top);
    let [words, wpm] = Layout::horizontal([Constraint::Ratio(1, 2); 2]).areas(bottom);

    f.render_widget(
        stat_panel("FINAL SCORE", format!("{}", game.score().floor())),
        score,
    );
    f.render_widget(
        stat_panel("ACCURACY", format!("{}%", game.accuracy().round())),
        accuracy,
    );
    f.render_widget(
        stat_panel("WORDS TYPED", game.correct_words().to_string()),
        words,
    );
    f.render_widget(stat_panel("WPM", format!("{}", game.wpm())), wpm);

    f.render_widget(legend("(r)etry / (m)ain menu / (q)uit"), keys);
}
