use std::collections::{HashSet, VecDeque};

use crate::config::{GridSize, INITIAL_SNAKE_LEN};
use crate::grid::Cell;
use crate::input::Direction;

/// Ordered snake body, head at the front, with an occupancy index.
#[derive(Debug, Clone)]
pub struct Snake {
    body: VecDeque<Cell>,
    occupied: HashSet<Cell>,
}

impl Snake {
    /// Creates the start segment: horizontal, head in the middle of the grid,
    /// body trailing to the left.
    #[must_use]
    pub fn centered(bounds: GridSize) -> Self {
        let head = Cell {
            x: i32::from(bounds.cols / 2),
            y: i32::from(bounds.rows / 2),
        };

        let mut segments = Vec::with_capacity(INITIAL_SNAKE_LEN);
        let mut cell = head;
        for _ in 0..INITIAL_SNAKE_LEN {
            segments.push(cell);
            cell = cell.step(Direction::Left);
        }

        Self::from_segments(segments)
    }

    /// Creates a snake from explicit body segments (front is head).
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>) -> Self {
        let occupied = segments.iter().copied().collect();
        Self {
            body: VecDeque::from(segments),
            occupied,
        }
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        *self
            .body
            .front()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Cell {
        *self
            .body
            .back()
            .expect("snake body must always contain at least one segment")
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.occupied.contains(&cell)
    }

    /// Set of all occupied cells.
    #[must_use]
    pub fn occupied(&self) -> &HashSet<Cell> {
        &self.occupied
    }

    /// Returns true if moving the head onto `cell` would hit the body.
    ///
    /// The tail cell is a legal target only when the snake does not grow on
    /// this move, because only then is it vacated in the same step.
    #[must_use]
    pub fn would_collide(&self, cell: Cell, grows: bool) -> bool {
        if !self.occupies(cell) {
            return false;
        }
        grows || cell != self.tail()
    }

    /// Pushes `new_head` and drops the tail unless `grow` is set.
    pub fn advance(&mut self, new_head: Cell, grow: bool) {
        if !grow {
            if let Some(tail) = self.body.pop_back() {
                self.occupied.remove(&tail);
            }
        }
        self.body.push_front(new_head);
        self.occupied.insert(new_head);
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true when there are no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Iterates over body segments from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GridSize;
    use crate::grid::Cell;

    use super::Snake;

    #[test]
    fn centered_snake_is_three_cells_facing_right() {
        let snake = Snake::centered(GridSize { cols: 40, rows: 30 });

        let segments: Vec<Cell> = snake.segments().copied().collect();
        assert_eq!(
            segments,
            vec![Cell::new(20, 15), Cell::new(19, 15), Cell::new(18, 15)]
        );
    }

    #[test]
    fn advance_without_growth_keeps_length() {
        let mut snake = Snake::centered(GridSize { cols: 10, rows: 10 });

        snake.advance(Cell::new(6, 5), false);

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Cell::new(6, 5));
        assert_eq!(snake.tail(), Cell::new(4, 5));
        assert!(!snake.occupies(Cell::new(3, 5)));
    }

    #[test]
    fn growth_keeps_previous_tail() {
        let mut snake = Snake::centered(GridSize { cols: 10, rows: 10 });

        snake.advance(Cell::new(6, 5), true);

        assert_eq!(snake.len(), 4);
        assert_eq!(snake.tail(), Cell::new(3, 5));
        assert!(snake.occupies(Cell::new(3, 5)));
    }

    #[test]
    fn tail_is_free_only_when_not_growing() {
        // Head at (1,1) with a 2x2 loop, tail at (1,2).
        let snake = Snake::from_segments(vec![
            Cell::new(1, 1),
            Cell::new(2, 1),
            Cell::new(2, 2),
            Cell::new(1, 2),
        ]);

        assert!(!snake.would_collide(Cell::new(1, 2), false));
        assert!(snake.would_collide(Cell::new(1, 2), true));
        assert!(snake.would_collide(Cell::new(2, 2), false));
        assert!(!snake.would_collide(Cell::new(0, 1), true));
    }
}
