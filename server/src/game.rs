//! Authoritative game state and the per-tick update rules
//!
//! One `Session` holds everything mutable about a single game: the snake
//! body, the food cell, the last applied direction, the score, and the
//! game-over flag. The turn controller owns exactly one live session at
//! a time and replaces it wholesale on restart.

use log::{debug, info};
use rand::Rng;
use shared::{Coordinate, Direction, Snake, HEIGHT, SCORE_PER_FOOD, WIDTH};

/// All per-game mutable state, bundled into one explicitly owned value.
#[derive(Debug)]
pub struct Session {
    pub snake: Snake,
    pub food: Coordinate,
    pub last_direction: Direction,
    pub score: u32,
    pub game_over: bool,
}

impl Session {
    /// Starts a fresh game: a single-segment snake at the grid center,
    /// moving Forward, score 0, food placed on a free interior cell.
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let snake = Snake::new(Coordinate::center());
        let food = place_food(&snake, rng);
        info!("New session: snake at {:?}, food at {:?}", snake.head(), food);

        Self {
            snake,
            food,
            last_direction: Direction::Forward,
            score: 0,
            game_over: false,
        }
    }

    /// Applies one directional command, advancing the game by one tick.
    ///
    /// A command opposite to the last applied direction is downgraded to
    /// "continue straight" rather than rejected; the engine produces
    /// motion on every call. Hitting the border or a non-tail body
    /// segment sets `game_over` and leaves the session otherwise
    /// untouched.
    pub fn advance<R: Rng>(&mut self, direction: Direction, rng: &mut R) {
        // Reversal attempts degrade to the last direction, never fail.
        let resolved = if direction.is_opposite(self.last_direction) {
            self.last_direction
        } else {
            direction
        };

        let new_head = self.snake.head().step(resolved);

        if !new_head.in_bounds() {
            info!("Hit the wall at {:?}, game over", new_head);
            self.game_over = true;
            return;
        }

        // Scan the pre-move body; the tail cell vacates this tick so it
        // is not an obstacle.
        if self.snake.contains_excluding_tail(new_head) {
            info!("Ran into own body at {:?}, game over", new_head);
            self.game_over = true;
            return;
        }

        if new_head == self.food {
            self.snake.prepend(new_head);
            self.score += SCORE_PER_FOOD;
            // Place against the grown body so food never lands on it.
            self.food = place_food(&self.snake, rng);
            debug!(
                "Ate food, length {}, score {}, new food at {:?}",
                self.snake.len(),
                self.score,
                self.food
            );
        } else {
            self.snake.prepend(new_head);
            self.snake.drop_tail();
        }

        self.last_direction = resolved;
    }
}

/// Picks a uniformly random interior cell not occupied by the snake.
///
/// Rejection-sampled: loops until a free cell comes up. Terminates with
/// probability 1 while free cells exist; a snake filling the entire
/// interior would spin forever, which is accepted since the interior
/// (78x20 cells) vastly exceeds any practical snake length.
pub fn place_food<R: Rng>(snake: &Snake, rng: &mut R) -> Coordinate {
    loop {
        let candidate = Coordinate::new(
            rng.gen_range(1..=HEIGHT - 2),
            rng.gen_range(1..=WIDTH - 2),
        );

        if !snake.contains(candidate) {
            return candidate;
        }
    }
}
