use std::collections::VecDeque;

/// Total grid width including the one-cell border frame.
pub const WIDTH: i32 = 80;
/// Total grid height including the one-cell border frame.
pub const HEIGHT: i32 = 22;

/// Port the server listens on (0x271).
pub const DEFAULT_PORT: u16 = 625;

pub const SNAKE_GLYPH: char = 'O';
pub const FOOD_GLYPH: char = '&';
pub const EMPTY_GLYPH: char = ' ';

pub const SCORE_PER_FOOD: u32 = 100;

/// Command byte the client consumes locally to quit; never sent on the wire.
pub const QUIT_COMMAND: u8 = b'q';
/// Byte the server's restart prompt accepts to start a new game.
pub const RESTART_COMMAND: u8 = b'r';

/// A cell on the playfield, (row, column) with row 0 at the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The grid center, where a fresh snake spawns.
    pub fn center() -> Self {
        Self::new(HEIGHT / 2, WIDTH / 2)
    }

    /// True iff the cell lies in the interior, i.e. not on or beyond
    /// the border frame. Only interior cells may hold snake or food.
    pub fn in_bounds(&self) -> bool {
        self.row >= 1 && self.row <= HEIGHT - 2 && self.col >= 1 && self.col <= WIDTH - 2
    }

    /// The neighboring cell one unit-step away in the given direction.
    pub fn step(&self, direction: Direction) -> Self {
        let (dr, dc) = direction.offset();
        Self::new(self.row + dr, self.col + dc)
    }
}

/// One of the four cardinal movement directions.
///
/// Forward is "up" on screen (decreasing row); Back is "down". Each
/// direction maps to exactly one wire command byte (`w`/`s`/`a`/`d`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Back,
    Left,
    Right,
}

impl Direction {
    /// Unit offset in (row, col) space.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Forward => (-1, 0),
            Direction::Back => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Forward => Direction::Back,
            Direction::Back => Direction::Forward,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True iff the two directions map to negated offsets.
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Decodes a wire command byte. Returns None for anything that is
    /// not one of the four direction commands; callers downgrade that
    /// to "continue in the last direction".
    pub fn from_command_byte(byte: u8) -> Option<Direction> {
        match byte {
            b'w' => Some(Direction::Forward),
            b's' => Some(Direction::Back),
            b'a' => Some(Direction::Left),
            b'd' => Some(Direction::Right),
            _ => None,
        }
    }

    /// The single byte that encodes this direction on the wire.
    pub fn command_byte(&self) -> u8 {
        match self {
            Direction::Forward => b'w',
            Direction::Back => b's',
            Direction::Left => b'a',
            Direction::Right => b'd',
        }
    }
}

/// The snake body: an ordered, head-first sequence of unique cells.
///
/// Stored as a contiguous deque rather than a per-segment allocation
/// chain. Movement is "push new head, drop tail unless food was eaten",
/// so every non-head segment occupies the cell its predecessor held one
/// tick earlier.
#[derive(Debug, Clone)]
pub struct Snake {
    segments: VecDeque<Coordinate>,
}

impl Snake {
    /// Creates a length-1 snake at the given cell.
    pub fn new(head: Coordinate) -> Self {
        let mut segments = VecDeque::new();
        segments.push_back(head);
        Self { segments }
    }

    pub fn head(&self) -> Coordinate {
        // Invariant: length >= 1, the head is never removed.
        *self.segments.front().expect("snake is never empty")
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Adds a new head segment at the front. Callers drop the tail
    /// separately when no growth occurs.
    pub fn prepend(&mut self, head: Coordinate) {
        self.segments.push_front(head);
    }

    /// Removes the oldest segment. Silent no-op at length 1 so the
    /// head can never be lost.
    pub fn drop_tail(&mut self) {
        if self.segments.len() > 1 {
            self.segments.pop_back();
        }
    }

    /// True iff the cell matches any segment from the head up to but
    /// excluding the current tail. Used for self-collision: the tail
    /// cell is vacated in the same tick, so moving onto it is legal.
    pub fn contains_excluding_tail(&self, coord: Coordinate) -> bool {
        let len = self.segments.len();
        self.segments.iter().take(len - 1).any(|&seg| seg == coord)
    }

    /// Full-body occupancy test, used by food placement and rendering.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.segments.iter().any(|&seg| seg == coord)
    }

    /// Segments in order, head first.
    pub fn segments(&self) -> impl Iterator<Item = &Coordinate> {
        self.segments.iter()
    }
}
