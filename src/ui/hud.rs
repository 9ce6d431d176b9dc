use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::session::Session;

const CONTROLS_HINT: &str = "arrows/WASD move  [P] pause  [Q] quit";

/// Renders the two-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, session: &Session) -> Rect {
    let [play_area, score_area, hint_area] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(score_line(session)).alignment(Alignment::Center),
        score_area,
    );
    frame.render_widget(
        Paragraph::new(CONTROLS_HINT)
            .alignment(Alignment::Center)
            .style(Style::new().fg(Color::DarkGray)),
        hint_area,
    );

    play_area
}

fn score_line(session: &Session) -> Line<'static> {
    let engine = session.engine();
    let label = Style::new().fg(Color::DarkGray);
    let value = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::styled("Score ", label),
        Span::styled(engine.score().to_string(), value),
        Span::styled("  Length ", label),
        Span::styled(engine.snake().len().to_string(), value),
        Span::styled("  Best ", label),
        Span::styled(session.best_score().to_string(), value),
        Span::styled("  Tick ", label),
        Span::styled(engine.tick_count().to_string(), value),
    ])
}
