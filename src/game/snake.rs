use super::command::Direction;
use super::grid::Position;

/// The snake: an ordered sequence of occupied cells, head at index 0.
///
/// The direction of travel is owned by the engine, not the snake; the
/// snake is handed the already-computed new head each tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    cells: Vec<Position>,
}

impl Snake {
    /// Create a snake of the given length, head first, trailing away from
    /// the direction of travel. Length 1 is the default game start.
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let mut cells = vec![head];
        let (dx, dy) = direction.delta();

        for i in 1..length.max(1) {
            cells.push(cells[i - 1].moved_by(-dx, -dy));
        }

        Self { cells }
    }

    pub fn head(&self) -> Position {
        self.cells[0]
    }

    /// All occupied cells, head first
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Whether any cell of the pre-move body (tail included) occupies pos
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Advance to the new head. On growth the tail is kept (length +1),
    /// otherwise it is dropped (constant-length slide).
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.cells.insert(0, new_head);

        if !grow {
            self.cells.pop();
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_cell_snake() {
        let snake = Snake::new(Position::new(10, 10), Direction::Right, 1);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::new(10, 10));
    }

    #[test]
    fn test_snake_trails_behind_head() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        assert_eq!(snake.cells(), &[
            Position::new(5, 5),
            Position::new(4, 5),
            Position::new(3, 5),
        ]);
    }

    #[test]
    fn test_slide_keeps_length() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        snake.advance(Position::new(6, 5), false);

        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(6, 5));
        assert!(!snake.contains(Position::new(3, 5))); // tail vacated
    }

    #[test]
    fn test_growth_keeps_tail() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        snake.advance(Position::new(6, 5), true);

        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Position::new(6, 5));
        assert!(snake.contains(Position::new(3, 5)));
    }

    #[test]
    fn test_contains_includes_head_and_tail() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        assert!(snake.contains(Position::new(5, 5)));
        assert!(snake.contains(Position::new(3, 5)));
        assert!(!snake.contains(Position::new(6, 5)));
    }

    #[test]
    fn test_no_duplicate_cells_after_moves() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 4);
        snake.advance(Position::new(6, 5), false);
        snake.advance(Position::new(6, 6), true);

        let mut seen = snake.cells().to_vec();
        seen.sort_by_key(|p| (p.x, p.y));
        seen.dedup();
        assert_eq!(seen.len(), snake.len());
    }
}
