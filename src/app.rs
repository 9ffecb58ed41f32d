use crossterm::event::{KeyCode, KeyEvent};
use log::{info, warn};
use rand::rngs::ThreadRng;
use rand::Rng;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::config::{BOARD_HEIGHT, BOARD_WIDTH};
use crate::engine::{Board, GameState, StepResult};
use crate::input::direction_for;
use crate::render::board_extent;

#[derive(Debug)]
pub enum Screen {
    ReadyToStart,
    Playing(GameState),
    GameOver(GameState),
    Exit,
}

pub struct Game<R = ThreadRng> {
    pub screen: Screen,
    rng: R,
    warned_clipped: bool,
}

impl Game {
    pub fn new() -> Self {
        Self::with_rng(rand::thread_rng())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(rng: R) -> Self {
        Game {
            screen: Screen::ReadyToStart,
            rng,
            warned_clipped: false,
        }
    }

    pub fn should_exit(&self) -> bool {
        matches!(self.screen, Screen::Exit)
    }

    pub fn handle_input(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
            info!("Exiting");
            self.screen = Screen::Exit;
            return;
        }

        let new_screen = match &mut self.screen {
            Screen::ReadyToStart if key.code == KeyCode::Char(' ') => Some(Screen::Playing(
                GameState::start(Board::new(BOARD_WIDTH, BOARD_HEIGHT)),
            )),
            Screen::Playing(state) => {
                if let Some(direction) = direction_for(key.code) {
                    state.set_direction(direction);
                }
                None
            }
            Screen::GameOver(_) if key.code == KeyCode::Char(' ') => Some(Screen::ReadyToStart),
            _ => None,
        };

        if let Some(new_screen) = new_screen {
            self.screen = new_screen;
        }
    }

    /// One scheduler tick.
    pub fn update(&mut self) {
        let Screen::Playing(state) = &self.screen else {
            return;
        };

        let (next, result) = state.step(&mut self.rng);
        self.screen = match result {
            StepResult::Collision => Screen::GameOver(next),
            _ => Screen::Playing(next),
        };
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let title = match &self.screen {
            Screen::Playing(state) => format!("SNEK    Length: {}", state.len()),
            _ => "SNEK".to_string(),
        };

        let layout = Layout::default()
            .direction(layout::Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(frame.area());

        frame.render_widget(
            Paragraph::new(title)
                .alignment(Alignment::Left)
                .block(Block::default().borders(Borders::ALL)),
            layout[0],
        );

        match &self.screen {
            Screen::ReadyToStart => {
                frame.render_widget(
                    Paragraph::new("Press SPACE to start")
                        .alignment(Alignment::Center)
                        .block(Block::default().borders(Borders::ALL)),
                    layout[1],
                );
            }
            Screen::Playing(state) => {
                let block = Block::default().title("Playing").borders(Borders::ALL);
                let inner_area = block.inner(layout[1]);
                let board_area = fit_board(state.board, inner_area);
                let (width, height) = board_extent(state.board);

                if (board_area.width < width || board_area.height < height) && !self.warned_clipped {
                    warn!(
                        "Terminal area {}x{} is too small for the board, clipping",
                        inner_area.width, inner_area.height
                    );
                    self.warned_clipped = true;
                }

                frame.render_widget(block, layout[1]);
                frame.render_widget(state, board_area);
            }
            Screen::GameOver(state) => {
                frame.render_widget(
                    Paragraph::new(format!(
                        "Game over\nLength: {}\nPress SPACE to continue",
                        state.len()
                    ))
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL)),
                    layout[1],
                );
            }
            Screen::Exit => {}
        }
    }
}

/// Centres the board inside `area`, shrinking it to whatever fits.
fn fit_board(board: Board, area: Rect) -> Rect {
    let (width, height) = board_extent(board);
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
