use std::error::Error;
use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

mod app;
mod config;
mod game;
mod store;
mod ui;
pub use config::{
    BOARD_H, BOARD_W, CELL_W, DEFAULT_PLAYER_NAME, HALF_TILE_H, HALF_TILE_W, HIGH_SCORE_KEY,
    LOG_FILE, MIN_PANE_WIDTH, NAME_MAX_LEN, ORIGIN_X, PLAY_H, PLAY_W, ROTATION_STEP,
    SCORE_TABLE_KEY, SIDEBAR_W, SNAKE_START, STORE_DIR, TABLE_DISPLAY_LIMIT, TICK_MS,
};
pub use game::{Board, Direction, Game, Pos, Snake};

fn main() -> Result<(), Box<dyn Error>> {
    // Log to a file; the alternate screen owns the terminal.
    WriteLogger::init(LevelFilter::Info, Config::default(), File::create(LOG_FILE)?)?;
    app::run()
}
