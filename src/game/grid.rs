use super::command::Direction;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The neighboring cell one step in the given direction, unclamped.
    /// The result may lie outside the grid; bounds checking is the
    /// caller's responsibility.
    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The square coordinate space the game is played on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    size: usize,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    /// Side length in cells
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check whether a position lies within the grid
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.size as i32 && pos.y >= 0 && pos.y < self.size as i32
    }

    /// The center cell, the snake's default starting position
    pub fn center(&self) -> Position {
        Position::new((self.size / 2) as i32, (self.size / 2) as i32)
    }
}
