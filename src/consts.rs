//! Assorted constants & hard-coded configuration
use crate::game::Heading;
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};

/// Width of the board in pixels, border included
pub(crate) const BOARD_WIDTH: i32 = 660;

/// Height of the board in pixels, border included
pub(crate) const BOARD_HEIGHT: i32 = 500;

/// Side length of a board cell in pixels
pub(crate) const CELL_SIZE: i32 = 20;

/// Pixel positions of the snake's segments at the start of a game, tail first
pub(crate) const INITIAL_BODY: [(i32, i32); 2] = [
    (5 * CELL_SIZE, 5 * CELL_SIZE),
    (6 * CELL_SIZE, 5 * CELL_SIZE),
];

/// The snake's heading at the start of a game
pub(crate) const INITIAL_HEADING: Heading = Heading::Right;

/// Moves per second at the start of a game
pub(crate) const INITIAL_SPEED: u32 = 4;

/// The speed goes up each time the score reaches a multiple of this
pub(crate) const SPEED_UP_EVERY: u32 = 5;

/// How much the speed goes up by
pub(crate) const SPEED_INCREMENT: u32 = 2;

/// Number of terminal columns used to draw one board cell
pub(crate) const CELL_COLUMNS: u16 = 2;

/// Draw everything inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 26,
};

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_SYMBOL: char = '█';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '█';

/// Glyph for the wall around the board
pub(crate) const BORDER_SYMBOL: char = '▒';

/// Default style for the snake
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green);

/// Default style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Default style for the wall around the board
pub(crate) const BORDER_STYLE: Style = Style::new().fg(Color::Blue);

/// Default style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the title on the welcome screen
pub(crate) const WELCOME_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);

/// Style for the title on the game over screen
pub(crate) const GAME_OVER_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::BOLD);

/// Style for the title on the win screen
pub(crate) const WIN_STYLE: Style = Style::new()
    .fg(Color::LightBlue)
    .add_modifier(Modifier::BOLD);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);
