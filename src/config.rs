// Shared game/UI constants.
pub const BOARD_W: i32 = 15;
pub const BOARD_H: i32 = 15;
pub const TICK_MS: u64 = 150;
pub const SNAKE_START: (i32, i32) = (7, 7);
pub const ROTATION_STEP: f32 = 0.1;
pub const CELL_W: usize = 2; // render each cell as two characters wide
// Isometric projection: screen x advances HALF_TILE_W per grid step, y HALF_TILE_H.
// 2:1 tile aspect keeps diagonal neighbors on distinct character columns.
pub const HALF_TILE_W: i32 = 2;
pub const HALF_TILE_H: i32 = 1;
// Shift the diamond right so the (0, BOARD_H-1) corner lands on column 0.
pub const ORIGIN_X: i32 = (BOARD_H - 1) * HALF_TILE_W;
pub const PLAY_W: usize = ((BOARD_W + BOARD_H - 2) * HALF_TILE_W) as usize + CELL_W;
pub const PLAY_H: usize = ((BOARD_W + BOARD_H - 2) * HALF_TILE_H) as usize + 1;
pub const SIDEBAR_W: u16 = 24;
// Minimal pane width to fit the playfield diamond + sidebar + cabinet border.
pub const MIN_PANE_WIDTH: u16 = (PLAY_W as u16) + SIDEBAR_W + 2;
pub const STORE_DIR: &str = ".isosnake";
pub const HIGH_SCORE_KEY: &str = "snakeHighScore";
pub const SCORE_TABLE_KEY: &str = "snakeHighScores";
pub const TABLE_DISPLAY_LIMIT: usize = 5;
pub const DEFAULT_PLAYER_NAME: &str = "Anonymous";
pub const NAME_MAX_LEN: usize = 24;
pub const LOG_FILE: &str = "isosnake.log";
