mod banner;
mod board;
mod heading;
mod snake;
mod vector;
pub(crate) use self::heading::Heading;
use self::banner::Banner;
use self::board::Board;
use self::heading::resolve;
use self::snake::SnakeState;
use self::vector::Vector2;
use crate::app::Screen;
use crate::command::Command;
use crate::config::Styles;
use crate::consts;
use crate::util::{center_rect, get_display_area};
use crossterm::event::{poll, read, Event};
use rand::{rngs::StdRng, Rng};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect, Size},
    style::Style,
    text::Line,
    widgets::Widget,
    Frame,
};
use std::time::{Duration, Instant};

/// A play session: the current game plus the input and timing state that
/// drives it
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = StdRng> {
    rng: R,
    snake: SnakeState,

    /// Heading change to apply before the next move.  Only the first
    /// direction key pressed during a tick is used.
    pending: Option<Heading>,

    /// How the most recent game ended; `None` before the first game
    outcome: Option<Outcome>,

    styles: Styles,
    next_tick: Option<Instant>,
}

impl<R: Rng> Game<R> {
    pub(crate) fn new(styles: Styles, mut rng: R) -> Game<R> {
        let snake = SnakeState::new(Board::default(), &mut rng);
        Game {
            rng,
            snake,
            pending: None,
            outcome: None,
            styles,
            next_tick: None,
        }
    }

    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        if self.snake.started() {
            let period = self.tick_period();
            let when = *self
                .next_tick
                .get_or_insert_with(|| Instant::now() + period);
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.tick();
                self.next_tick = None;
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    fn tick(&mut self) {
        if !self.snake.started() {
            return;
        }
        if let Some(heading) = self.pending.take() {
            self.snake.set_heading(heading);
        }
        if !self.snake.advance(&mut self.rng) {
            self.finish(Outcome::GameOver {
                score: self.snake.score(),
            });
        } else if self.snake.food().is_none() {
            self.finish(Outcome::Won {
                score: self.snake.score(),
            });
        }
    }

    /// Record how the current game ended and set up a fresh one that waits
    /// for the player to start it
    fn finish(&mut self, outcome: Outcome) {
        tracing::info!(?outcome, "game finished");
        self.outcome = Some(outcome);
        self.snake = SnakeState::new(self.snake.board().clone(), &mut self.rng);
        self.pending = None;
        self.next_tick = None;
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Quit => return Some(Screen::Quit),
            Command::Enter => self.start(),
            cmd => {
                if let Some(heading) = cmd.heading() {
                    self.request_heading(heading);
                }
            }
        }
        None
    }

    fn start(&mut self) {
        if self.snake.start() {
            tracing::info!(speed = self.snake.speed(), "game started");
            self.outcome = None;
            self.pending = None;
            self.next_tick = None;
        }
    }

    fn request_heading(&mut self, requested: Heading) {
        if !self.snake.started() || self.pending.is_some() {
            return;
        }
        let current = self.snake.heading();
        if requested == current.opposite() {
            tracing::debug!(?current, ?requested, "ignoring reversal");
        }
        self.pending = Some(resolve(current, requested));
    }

    /// Time between moves at the current speed
    fn tick_period(&self) -> Duration {
        Duration::from_secs(1) / self.snake.speed().max(1)
    }

    fn banner(&self) -> Banner {
        match self.outcome {
            None => Banner::welcome(),
            Some(Outcome::GameOver { score }) => Banner::game_over(score),
            Some(Outcome::Won { score }) => Banner::won(score),
        }
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        if !self.snake.started() {
            self.banner().render(display, buf);
            return;
        }
        let [score_area, board_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(display);
        Line::styled(format!(" Score: {}", self.snake.score()), self.styles.score_bar)
            .render(score_area, buf);

        let board = self.snake.board();
        let board_size = Size {
            width: u16::try_from(board.columns())
                .unwrap_or_default()
                .saturating_mul(consts::CELL_COLUMNS),
            height: u16::try_from(board.rows()).unwrap_or_default(),
        };
        let mut canvas = Canvas {
            area: center_rect(board_area, board_size),
            cell_size: board.cell_size(),
            buf,
        };
        let (right, bottom) = (board.columns() - 1, board.rows() - 1);
        for col in 0..=right {
            for row in [0, bottom] {
                canvas.draw_cell(
                    Vector2::new(col, row).scale(board.cell_size()),
                    consts::BORDER_SYMBOL,
                    self.styles.border,
                );
            }
        }
        for row in 1..bottom {
            for col in [0, right] {
                canvas.draw_cell(
                    Vector2::new(col, row).scale(board.cell_size()),
                    consts::BORDER_SYMBOL,
                    self.styles.border,
                );
            }
        }
        for &p in self.snake.body() {
            canvas.draw_cell(p, consts::SNAKE_SYMBOL, self.styles.snake);
        }
        if let Some(p) = self.snake.food() {
            canvas.draw_cell(p, consts::FOOD_SYMBOL, self.styles.food);
        }
    }
}

/// Draws board cells, given in pixel coordinates, into a buffer
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    cell_size: i32,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Vector2, symbol: char, style: Style) {
        let Some(cell) = pos.to_grid(self.cell_size) else {
            return;
        };
        let (Ok(col), Ok(row)) = (u16::try_from(cell.x), u16::try_from(cell.y)) else {
            return;
        };
        let Some(x) = col
            .checked_mul(consts::CELL_COLUMNS)
            .and_then(|x| x.checked_add(self.area.x))
        else {
            return;
        };
        let Some(y) = row.checked_add(self.area.y) else {
            return;
        };
        if y >= self.area.bottom() {
            return;
        }
        let end = x.saturating_add(consts::CELL_COLUMNS).min(self.area.right());
        for x in x..end {
            if let Some(cell) = self.buf.cell_mut((x, y)) {
                cell.set_char(symbol);
                cell.set_style(Style::reset().patch(style));
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Outcome {
    GameOver { score: u32 },
    /// The snake has filled the board and there is nowhere left to put food.
    Won { score: u32 },
}
