use std::time::Duration;

/// Board size in cells.
pub const BOARD_WIDTH: u16 = 40;
pub const BOARD_HEIGHT: u16 = 40;

/// Terminal columns and rows one board cell is drawn with.
pub const CELL_WIDTH: u16 = 2;
pub const CELL_HEIGHT: u16 = 1;

pub const TICK_INTERVAL: Duration = Duration::from_millis(200);

pub const LOG_FILE: &str = "snekgrid.log";
