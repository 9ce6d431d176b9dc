use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::config::GridSize;
use crate::engine::GameStatus;
use crate::grid::{Cell, Tile, cell_center};
use crate::session::Session;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_pause_menu};

/// One grid cell is two terminal columns wide so it reads as a square.
pub const TERMINAL_TILE: Tile = Tile {
    width: 2,
    height: 1,
};

const GLYPH_CELL: &str = "██";
const COLOR_HEAD: Color = Color::White;
const COLOR_BODY: Color = Color::Green;
const COLOR_FOOD: Color = Color::Red;
const COLOR_BORDER: Color = Color::DarkGray;

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, session: &Session) {
    let engine = session.engine();
    let area = frame.area();
    let play_area = render_hud(frame, area, session);

    let bounds = engine.bounds();
    let Some(board) = board_rect(play_area, bounds) else {
        frame.render_widget(
            Paragraph::new(format!(
                "Terminal too small for a {}x{} board",
                bounds.cols, bounds.rows
            ))
            .style(Style::new().fg(Color::Yellow)),
            play_area,
        );
        return;
    };

    let block = Block::bordered().border_style(Style::new().fg(COLOR_BORDER));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    let buffer = frame.buffer_mut();
    if let Some(food) = engine.food() {
        if let Some((x, y)) = cell_to_terminal(inner, bounds, food) {
            buffer.set_string(x, y, GLYPH_CELL, Style::new().fg(COLOR_FOOD));
        }
    }

    let head = engine.snake().head();
    for segment in engine.snake().segments() {
        let Some((x, y)) = cell_to_terminal(inner, bounds, *segment) else {
            continue;
        };

        let style = if *segment == head {
            Style::new().fg(COLOR_HEAD).add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(COLOR_BODY)
        };
        buffer.set_string(x, y, GLYPH_CELL, style);
    }

    if engine.status() == GameStatus::GameOver {
        render_game_over_menu(
            frame,
            board,
            engine.score(),
            session.best_score(),
            engine.game_over_reason(),
        );
    } else if session.is_paused() {
        render_pause_menu(frame, board);
    }
}

/// Centers a bordered board of `bounds` cells inside `area`, if it fits.
fn board_rect(area: Rect, bounds: GridSize) -> Option<Rect> {
    let width = bounds.cols.checked_mul(TERMINAL_TILE.width)?.checked_add(2)?;
    let height = bounds.rows.checked_mul(TERMINAL_TILE.height)?.checked_add(2)?;
    if width > area.width || height > area.height {
        return None;
    }

    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [board] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);
    Some(board)
}

/// Maps a grid cell to the terminal position of the left edge of its tile.
fn cell_to_terminal(inner: Rect, bounds: GridSize, cell: Cell) -> Option<(u16, u16)> {
    if !cell.is_within_bounds(bounds) {
        return None;
    }

    let (center_x, center_y) = cell_center(cell, TERMINAL_TILE);
    let left = center_x - i32::from(TERMINAL_TILE.width / 2);
    let top = center_y - i32::from(TERMINAL_TILE.height / 2);

    let x = inner.x.saturating_add(u16::try_from(left).ok()?);
    let y = inner.y.saturating_add(u16::try_from(top).ok()?);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;

    use super::{board_rect, cell_to_terminal, render};
    use crate::config::{GameConfig, GridSize};
    use crate::engine::GameStepEngine;
    use crate::grid::Cell;
    use crate::session::Session;

    const BOUNDS: GridSize = GridSize { cols: 10, rows: 5 };

    #[test]
    fn cells_map_to_double_width_tiles() {
        let inner = Rect::new(3, 2, 20, 5);

        assert_eq!(cell_to_terminal(inner, BOUNDS, Cell::new(0, 0)), Some((3, 2)));
        assert_eq!(cell_to_terminal(inner, BOUNDS, Cell::new(4, 3)), Some((11, 5)));
        assert_eq!(cell_to_terminal(inner, BOUNDS, Cell::new(10, 0)), None);
    }

    #[test]
    fn board_must_fit_in_area() {
        assert_eq!(
            board_rect(Rect::new(0, 0, 22, 7), BOUNDS),
            Some(Rect::new(0, 0, 22, 7))
        );
        assert_eq!(board_rect(Rect::new(0, 0, 21, 7), BOUNDS), None);
    }

    #[test]
    fn frame_shows_score_line() {
        let engine = GameStepEngine::new_with_seed(
            GameConfig {
                cols: 10,
                rows: 5,
                ..GameConfig::default()
            },
            1,
        )
        .expect("valid config");
        let session = Session::new(engine, Instant::now());

        let mut terminal = Terminal::new(TestBackend::new(40, 12)).expect("test backend");
        terminal
            .draw(|frame| render(frame, &session))
            .expect("draw should succeed");

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Score 0"), "{text}");
    }
}
