use super::board::Board;
use super::heading::Heading;
use super::vector::Vector2;
use crate::consts;
use enum_map::EnumMap;
use rand::Rng;
use std::collections::{HashSet, VecDeque};

/// Everything that changes while a single game is being played: the snake,
/// its food, the score and the speed.  A new `SnakeState` is created for each
/// game; a finished one is discarded rather than reset.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct SnakeState {
    pub(super) board: Board,

    /// Pixel positions of the snake's segments, tail first, head last
    pub(super) body: VecDeque<Vector2>,

    /// The heading used for the next move
    pub(super) heading: Heading,

    pub(super) score: u32,

    /// Moves per second
    pub(super) speed: u32,

    /// Where the food is.  `None` once the board has no room left for any.
    pub(super) food: Option<Vector2>,

    /// Whether the player has started this game
    pub(super) started: bool,

    /// Offset of one move in each heading
    steps: EnumMap<Heading, Vector2>,
}

impl SnakeState {
    /// Create a new, not-yet-started game on `board` with the snake in its
    /// starting position and food placed with `rng`
    pub(crate) fn new<R: Rng>(board: Board, rng: &mut R) -> SnakeState {
        let steps = Heading::steps(board.cell_size());
        let mut state = SnakeState {
            board,
            body: VecDeque::from(consts::INITIAL_BODY.map(Vector2::from)),
            heading: consts::INITIAL_HEADING,
            score: 0,
            speed: consts::INITIAL_SPEED,
            food: None,
            started: false,
            steps,
        };
        state.generate_food(rng);
        state
    }

    pub(crate) fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn body(&self) -> &VecDeque<Vector2> {
        &self.body
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Vector2 {
        self.body.back().copied().unwrap_or_default()
    }

    pub(crate) fn heading(&self) -> Heading {
        self.heading
    }

    pub(crate) fn set_heading(&mut self, heading: Heading) {
        self.heading = heading;
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn speed(&self) -> u32 {
        self.speed
    }

    pub(crate) fn food(&self) -> Option<Vector2> {
        self.food
    }

    pub(crate) fn started(&self) -> bool {
        self.started
    }

    /// Mark the game as started.  Returns `true` if it had not been started
    /// before.
    pub(crate) fn start(&mut self) -> bool {
        !std::mem::replace(&mut self.started, true)
    }

    /// Place the food on a random cell not covered by the snake.  If there is
    /// no such cell, the food is removed.
    pub(crate) fn generate_food<R: Rng>(&mut self, rng: &mut R) {
        let occupied = self.body.iter().copied().collect::<HashSet<_>>();
        self.food = self.board.sample_free_cell(&occupied, rng);
        if self.food.is_none() {
            tracing::info!(length = self.body.len(), "no free cell left for food");
        }
    }

    /// Move the snake one cell in its current heading.
    ///
    /// Returns `false` if the move would take the head onto the border or
    /// onto the snake itself; the snake is left where it was in that case.
    /// Eating the food grows the snake by one segment, raises the score, and
    /// places new food.
    pub(crate) fn advance<R: Rng>(&mut self, rng: &mut R) -> bool {
        let head = self.head().translate(self.steps[self.heading]);
        if let Some(collision) = self.collision(head) {
            tracing::info!(
                %head,
                ?collision,
                score = self.score,
                length = self.body.len(),
                "snake died"
            );
            return false;
        }
        self.body.push_back(head);
        if Some(head) == self.food {
            self.score += 1;
            tracing::debug!(%head, score = self.score, "food eaten");
            if self.score % consts::SPEED_UP_EVERY == 0 {
                self.speed += consts::SPEED_INCREMENT;
                tracing::info!(speed = self.speed, score = self.score, "speeding up");
            }
            self.generate_food(rng);
        } else {
            let _ = self.body.pop_front();
        }
        true
    }

    fn collision(&self, head: Vector2) -> Option<Collision> {
        if !self.board.is_interior(head) {
            Some(Collision::Wall)
        } else if self.body.contains(&head) {
            Some(Collision::Body)
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Collision {
    Wall,
    Body,
}
