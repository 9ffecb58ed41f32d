use ratatui::{
    buffer::{Buffer, Cell},
    layout::Rect,
    style::Color,
    widgets::Widget,
};

use crate::config::{CELL_HEIGHT, CELL_WIDTH};
use crate::engine::{Board, GameState, Pos};

const GRID_SYMBOL: &str = "·";

/// Terminal columns and rows needed to show the whole board.
pub fn board_extent(board: Board) -> (u16, u16) {
    (
        board.width().saturating_mul(CELL_WIDTH),
        board.height().saturating_mul(CELL_HEIGHT),
    )
}

/// Applies `style` to every terminal cell covering `pos`, skipping whatever
/// falls outside `area`. `style` also gets the column offset within the cell.
fn paint(area: Rect, buf: &mut Buffer, pos: Pos, style: impl Fn(&mut Cell, u16)) {
    if pos.x < 0 || pos.y < 0 {
        return;
    }
    let left = area.x as i64 + pos.x as i64 * CELL_WIDTH as i64;
    let top = area.y as i64 + pos.y as i64 * CELL_HEIGHT as i64;

    for row in top..top + CELL_HEIGHT as i64 {
        for dx in 0..CELL_WIDTH {
            let col = left + dx as i64;
            if col >= area.right() as i64 || row >= area.bottom() as i64 {
                continue;
            }
            if let Some(cell) = buf.cell_mut((col as u16, row as u16)) {
                style(cell, dx);
            }
        }
    }
}

impl Widget for &GameState {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in 0..self.board.height() as i32 {
            for x in 0..self.board.width() as i32 {
                paint(area, buf, Pos { x, y }, |cell, dx| {
                    if dx == 0 {
                        cell.set_symbol(GRID_SYMBOL).set_fg(Color::DarkGray);
                    } else {
                        cell.set_symbol(" ");
                    }
                });
            }
        }

        for pos in self.snek.segments() {
            paint(area, buf, pos, |cell, _| {
                cell.set_symbol(" ").set_bg(Color::Blue);
            });
        }

        if let Some(food) = self.food {
            paint(area, buf, food, |cell, _| {
                cell.set_symbol(" ").set_bg(Color::Red);
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Snek;

    fn state(board: Board, head: Pos, food: Option<Pos>) -> GameState {
        let mut state = GameState::start(board);
        state.snek = Snek::new(head);
        state.food = food;
        state
    }

    #[test]
    fn test_board_extent() {
        assert_eq!(board_extent(Board::new(40, 40)), (80, 40));
        assert_eq!(board_extent(Board::new(5, 3)), (10, 3));
    }

    #[test]
    fn test_draws_snek_and_food() {
        let board = Board::new(5, 5);
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);

        let state = state(board, Pos { x: 1, y: 1 }, Some(Pos { x: 3, y: 2 }));
        (&state).render(area, &mut buf);

        assert_eq!(buf[(2, 1)].bg, Color::Blue);
        assert_eq!(buf[(3, 1)].bg, Color::Blue);
        assert_eq!(buf[(6, 2)].bg, Color::Red);
        assert_eq!(buf[(7, 2)].bg, Color::Red);
        assert_eq!(buf[(0, 0)].symbol(), GRID_SYMBOL);
        assert_eq!(buf[(1, 0)].symbol(), " ");
        assert_eq!(buf[(0, 0)].bg, Color::Reset);
    }

    #[test]
    fn test_off_board_head_is_clipped() {
        let board = Board::new(5, 5);
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);

        // One past the corner is still in play, but not drawable here.
        let state = state(board, Pos { x: 5, y: 5 }, None);
        (&state).render(area, &mut buf);

        for y in 0..5 {
            for x in 0..10 {
                assert_ne!(buf[(x, y)].bg, Color::Blue);
            }
        }
    }

    #[test]
    fn test_respects_area_offset() {
        let board = Board::new(3, 3);
        let area = Rect::new(4, 2, 6, 3);
        let mut buf = Buffer::empty(Rect::new(0, 0, 12, 6));

        let state = state(board, Pos::ORIGIN, None);
        (&state).render(area, &mut buf);

        assert_eq!(buf[(4, 2)].bg, Color::Blue);
        assert_eq!(buf[(5, 2)].bg, Color::Blue);
        assert_eq!(buf[(0, 0)].symbol(), " ");
        assert_eq!(buf[(0, 0)].bg, Color::Reset);
    }
}
