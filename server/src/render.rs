//! Character-grid rendering of a game session
//!
//! Builds the full bordered playfield as a string so tests can inspect
//! it; `draw` presents it by homing the cursor and clearing the screen.

use crate::game::Session;
use shared::{Coordinate, EMPTY_GLYPH, FOOD_GLYPH, HEIGHT, SNAKE_GLYPH, WIDTH};

const HORIZONTAL_BORDER: char = '-';
const VERTICAL_BORDER: char = '|';

/// Renders the session into a HEIGHT x WIDTH character grid followed by
/// a score line.
pub fn render_session(session: &Session) -> String {
    let mut grid = vec![vec![EMPTY_GLYPH; WIDTH as usize]; HEIGHT as usize];

    for col in 0..WIDTH as usize {
        grid[0][col] = HORIZONTAL_BORDER;
        grid[HEIGHT as usize - 1][col] = HORIZONTAL_BORDER;
    }
    for row in grid.iter_mut().take(HEIGHT as usize - 1).skip(1) {
        row[0] = VERTICAL_BORDER;
        row[WIDTH as usize - 1] = VERTICAL_BORDER;
    }

    // Segments outside the interior are skipped rather than trusted.
    for segment in session.snake.segments() {
        if segment.in_bounds() {
            grid[segment.row as usize][segment.col as usize] = SNAKE_GLYPH;
        }
    }

    let Coordinate { row, col } = session.food;
    if session.food.in_bounds() {
        grid[row as usize][col as usize] = FOOD_GLYPH;
    }

    let mut output = String::with_capacity((WIDTH as usize + 1) * (HEIGHT as usize + 1));
    for row in &grid {
        output.extend(row.iter());
        output.push('\n');
    }
    output.push_str(&format!("Score: {}\n", session.score));
    output
}

/// Clears the terminal and prints the rendered session to stdout.
pub fn draw(session: &Session) {
    // ANSI cursor-home plus clear-to-end, then the fresh frame.
    print!("\x1b[H\x1b[J{}", render_session(session));
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Direction, Snake};

    fn session() -> Session {
        let mut snake = Snake::new(Coordinate::new(11, 41));
        snake.prepend(Coordinate::new(11, 40));
        Session {
            snake,
            food: Coordinate::new(5, 5),
            last_direction: Direction::Left,
            score: 300,
            game_over: false,
        }
    }

    fn cell(rendered: &str, row: usize, col: usize) -> char {
        rendered
            .lines()
            .nth(row)
            .and_then(|line| line.chars().nth(col))
            .unwrap()
    }

    #[test]
    fn test_grid_dimensions() {
        let rendered = render_session(&session());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), HEIGHT as usize + 1);
        for line in &lines[..HEIGHT as usize] {
            assert_eq!(line.chars().count(), WIDTH as usize);
        }
    }

    #[test]
    fn test_borders() {
        let rendered = render_session(&session());
        assert!(rendered.lines().next().unwrap().chars().all(|c| c == '-'));
        assert!(rendered
            .lines()
            .nth(HEIGHT as usize - 1)
            .unwrap()
            .chars()
            .all(|c| c == '-'));
        assert_eq!(cell(&rendered, 10, 0), '|');
        assert_eq!(cell(&rendered, 10, WIDTH as usize - 1), '|');
    }

    #[test]
    fn test_snake_and_food_glyphs() {
        let rendered = render_session(&session());
        assert_eq!(cell(&rendered, 11, 40), SNAKE_GLYPH);
        assert_eq!(cell(&rendered, 11, 41), SNAKE_GLYPH);
        assert_eq!(cell(&rendered, 5, 5), FOOD_GLYPH);
        assert_eq!(cell(&rendered, 3, 3), EMPTY_GLYPH);
    }

    #[test]
    fn test_score_line() {
        let rendered = render_session(&session());
        assert_eq!(rendered.lines().last().unwrap(), "Score: 300");
    }
}
