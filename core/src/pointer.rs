/// Travel direction of the instruction pointer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    East,
    West,
    South,
    North,
}

impl Direction {
    /// Maps 0..=3 to a direction; feeds the random-direction opcode.
    pub fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => Direction::East,
            1 => Direction::West,
            2 => Direction::South,
            _ => Direction::North,
        }
    }
}

/// # Instruction pointer
/// A coordinate and travel direction over the memory grid.
///
/// Coordinates are bytes, so stepping off an edge wraps to the opposite
/// edge for free.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pointer {
    pub x: u8,
    pub y: u8,
    pub direction: Direction,
}

impl Pointer {
    pub fn new() -> Self {
        Pointer {
            x: 0,
            y: 0,
            direction: Direction::East,
        }
    }

    /// Steps one cell in the current travel direction.
    pub fn advance(&mut self) {
        match self.direction {
            Direction::East => self.x = self.x.wrapping_add(1),
            Direction::West => self.x = self.x.wrapping_sub(1),
            Direction::South => self.y = self.y.wrapping_add(1),
            Direction::North => self.y = self.y.wrapping_sub(1),
        }
    }
}

impl Default for Pointer {
    fn default() -> Self {
        Self::new()
    }
}
