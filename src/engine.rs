//! The grid simulation: one snek, at most one morsel of food, and a boundary
//! that ends the game.

use log::{debug, info};
use rand::Rng;
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    width: u16,
    height: u16,
}

impl Board {
    pub fn new(width: u16, height: u16) -> Self {
        Board {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// The head may sit one column past `width` and one row past `height`
    /// before the game ends.
    fn in_play(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.x <= self.width as i32 && pos.y >= 0 && pos.y <= self.height as i32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const ORIGIN: Pos = Pos { x: 0, y: 0 };

    pub fn offset(&self, delta: PosDelta) -> Pos {
        Pos {
            x: self.x + delta.x,
            y: self.y + delta.y,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PosDelta {
    pub x: i32,
    pub y: i32,
}

impl From<Direction> for PosDelta {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::North => PosDelta { x: 0, y: -1 },
            Direction::South => PosDelta { x: 0, y: 1 },
            Direction::East => PosDelta { x: 1, y: 0 },
            Direction::West => PosDelta { x: -1, y: 0 },
        }
    }
}

/// Head plus the trailing body. The body is stored tail-first so the tail
/// comes off the front and the old head goes on the back.
#[derive(Clone, Debug, PartialEq)]
pub struct Snek {
    head: Pos,
    body: VecDeque<Pos>,
}

impl Snek {
    pub fn new(head: Pos) -> Self {
        Snek {
            head,
            body: VecDeque::new(),
        }
    }

    /// Builds a snek from its segments listed head-first.
    #[cfg(test)]
    pub fn from_segments(head: Pos, behind: &[Pos]) -> Self {
        Snek {
            head,
            body: behind.iter().rev().copied().collect(),
        }
    }

    pub fn head(&self) -> Pos {
        self.head
    }

    pub fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// Head first, tail last.
    pub fn segments(&self) -> impl Iterator<Item = Pos> + '_ {
        std::iter::once(self.head).chain(self.body.iter().rev().copied())
    }

    pub fn occupies(&self, pos: Pos) -> bool {
        self.head == pos || self.body.contains(&pos)
    }

    fn slither(&mut self, new_head: Pos, grow: bool) {
        self.body.push_back(self.head);
        self.head = new_head;
        if !grow {
            self.body.pop_front();
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    Over,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    Idle,      // Not running, nothing moved
    Ongoing,   // Plain movement
    Nommed,    // Ate the food and grew by one
    Collision, // Left the board, game over
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub board: Board,
    pub snek: Snek,
    pub direction: PosDelta,
    pub food: Option<Pos>,
    pub phase: Phase,
}

impl GameState {
    pub fn new(board: Board) -> Self {
        GameState {
            board,
            snek: Snek::new(Pos::ORIGIN),
            direction: Direction::East.into(),
            food: None,
            phase: Phase::NotStarted,
        }
    }

    pub fn start(board: Board) -> Self {
        info!("Starting game on a {}x{} board", board.width, board.height);
        GameState {
            phase: Phase::Running,
            ..Self::new(board)
        }
    }

    pub fn head(&self) -> Pos {
        self.snek.head()
    }

    pub fn len(&self) -> usize {
        self.snek.len()
    }

    /// Latches the direction the next `step` moves in. Reversals are accepted.
    pub fn set_direction(&mut self, direction: Direction) -> PosDelta {
        if self.phase != Phase::Over {
            self.direction = direction.into();
        }
        self.direction
    }

    /// Advances one tick and returns the resulting state. `self` is left as it
    /// was, so a snapshot held by the renderer never changes underneath it.
    ///
    /// Only the board boundary ends the game; the snek may cross its own body.
    pub fn step<R: Rng + ?Sized>(&self, rng: &mut R) -> (GameState, StepResult) {
        if self.phase != Phase::Running {
            return (self.clone(), StepResult::Idle);
        }

        let next_head = self.snek.head.offset(self.direction);
        if !self.board.in_play(next_head) {
            info!(
                "Game over at ({}, {}) with length {}",
                next_head.x,
                next_head.y,
                self.len()
            );
            let over = GameState {
                phase: Phase::Over,
                ..self.clone()
            };
            return (over, StepResult::Collision);
        }

        let nommed = self.food == Some(next_head);
        let mut next = self.clone();
        next.snek.slither(next_head, nommed);

        if nommed || next.food.is_none() {
            next.food = Some(next.place_food(rng));
        }

        let result = if nommed {
            StepResult::Nommed
        } else {
            StepResult::Ongoing
        };
        (next, result)
    }

    /// Picks a random free cell on the visible board.
    ///
    /// Never returns on a board the snek fills completely.
    pub fn place_food<R: Rng + ?Sized>(&self, rng: &mut R) -> Pos {
        loop {
            let pos = Pos {
                x: rng.gen_range(0..self.board.width as i32),
                y: rng.gen_range(0..self.board.height as i32),
            };

            if !self.snek.occupies(pos) {
                debug!("Placed food at ({}, {})", pos.x, pos.y);
                return pos;
            }
        }
    }
}
