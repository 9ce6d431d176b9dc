use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::engine::GameOverReason;

/// Draws the pause overlay centered on the board.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect) {
    let lines = vec![
        Line::from("PAUSED"),
        Line::from(""),
        Line::from("[P] Resume"),
        Line::from("[Q] Quit"),
    ];
    render_popup(frame, area, " pause ", lines);
}

/// Draws the game-over overlay centered on the board.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    best_score: u32,
    reason: Option<GameOverReason>,
) {
    let lines = vec![
        Line::from("GAME OVER").style(
            Style::new()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(reason_text(reason)),
        Line::from(format!("Score: {score}  Best: {best_score}")),
        Line::from(""),
        Line::from("[Enter]/[R] Play again"),
        Line::from("[Q] Quit"),
    ];
    render_popup(frame, area, " game over ", lines);
}

fn reason_text(reason: Option<GameOverReason>) -> &'static str {
    match reason {
        Some(GameOverReason::WallCollision) => "You hit the wall",
        Some(GameOverReason::SelfCollision) => "You bit yourself",
        Some(GameOverReason::BoardFull) => "Board full, you win!",
        None => "",
    }
}

fn render_popup(frame: &mut Frame<'_>, area: Rect, title: &str, lines: Vec<Line<'_>>) {
    let width = lines
        .iter()
        .map(Line::width)
        .max()
        .unwrap_or(0)
        .saturating_add(4)
        .min(usize::from(area.width));
    let height = (lines.len() + 2).min(usize::from(area.height));

    let popup = centered(area, width as u16, height as u16);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(title)),
        popup,
    );
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);
    popup
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Rect;

    use super::{centered, reason_text};
    use crate::engine::GameOverReason;

    #[test]
    fn popup_is_centered() {
        assert_eq!(centered(Rect::new(0, 0, 20, 10), 10, 4), Rect::new(5, 3, 10, 4));
    }

    #[test]
    fn every_reason_has_a_message() {
        for reason in [
            GameOverReason::WallCollision,
            GameOverReason::SelfCollision,
            GameOverReason::BoardFull,
        ] {
            assert!(!reason_text(Some(reason)).is_empty());
        }
    }
}
