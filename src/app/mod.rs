use std::error::Error;
use std::io::{Stdout, stdout};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::{info, warn};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::game::{Direction, Game};
use crate::store::{ScoreEntry, ScoreStore, top_entries};
use crate::ui::draw_game;
use crate::{DEFAULT_PLAYER_NAME, NAME_MAX_LEN, STORE_DIR, TABLE_DISPLAY_LIMIT, TICK_MS};

type Term = Terminal<CrosstermBackend<Stdout>>;

pub enum Phase {
    Idle,
    Running,
    NameEntry { name: String },
}

/// Everything the loop owns: the current run, the phase machine, and the
/// persisted-score wiring.
pub struct App {
    pub game: Game,
    pub phase: Phase,
    pub high_score: u64,
    pub table: Vec<ScoreEntry>,
    store: ScoreStore,
}

impl App {
    pub fn new(store: ScoreStore) -> Self {
        let high_score = store.high_score();
        let table = top_entries(&store.entries(), TABLE_DISPLAY_LIMIT);
        Self {
            game: Game::new(),
            phase: Phase::Idle,
            high_score,
            table,
            store,
        }
    }

    /// Returns true when the key asks to quit.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match &self.phase {
            Phase::Idle => match code {
                KeyCode::Char('q') => return true,
                KeyCode::Enter | KeyCode::Char(' ') => self.start_run(),
                _ => {}
            },
            Phase::Running => match code {
                KeyCode::Char('q') => return true,
                KeyCode::Up => self.game.steer(Direction::Up),
                KeyCode::Down => self.game.steer(Direction::Down),
                KeyCode::Left => self.game.steer(Direction::Left),
                KeyCode::Right => self.game.steer(Direction::Right),
                _ => {}
            },
            Phase::NameEntry { .. } => self.handle_name_key(code),
        }
        false
    }

    pub fn tick(&mut self) {
        self.game.tick();
        if self.game.crashed {
            self.finish_run();
        }
    }

    fn start_run(&mut self) {
        info!("run started");
        self.game = Game::new();
        self.phase = Phase::Running;
    }

    fn finish_run(&mut self) {
        let score = self.game.score;
        info!("run ended with score {score}");
        if score > self.high_score {
            self.high_score = score;
            if let Err(e) = self.store.set_high_score(score) {
                warn!("failed to persist high score: {e}");
            }
            self.phase = Phase::NameEntry { name: String::new() };
        } else {
            self.refresh_table();
            self.phase = Phase::Idle;
        }
    }

    fn handle_name_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => self.submit_name(),
            KeyCode::Backspace => {
                if let Phase::NameEntry { name } = &mut self.phase {
                    name.pop();
                }
            }
            KeyCode::Char(c) if !c.is_control() => {
                if let Phase::NameEntry { name } = &mut self.phase {
                    if name.chars().count() < NAME_MAX_LEN {
                        name.push(c);
                    }
                }
            }
            _ => {}
        }
    }

    fn submit_name(&mut self) {
        let typed = match &self.phase {
            Phase::NameEntry { name } => name.trim().to_string(),
            _ => return,
        };
        let name = if typed.is_empty() {
            DEFAULT_PLAYER_NAME.to_string()
        } else {
            typed
        };
        let entry = ScoreEntry { name, score: self.game.score };
        info!("recording {} with score {}", entry.name, entry.score);
        if let Err(e) = self.store.append_entry(entry) {
            warn!("failed to persist score table: {e}");
        }
        self.refresh_table();
        self.phase = Phase::Idle;
    }

    fn refresh_table(&mut self) {
        self.table = top_entries(&self.store.entries(), TABLE_DISPLAY_LIMIT);
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut tui = TuiGuard::new()?;
    run_loop(tui.terminal_mut())
}

fn run_loop(terminal: &mut Term) -> Result<(), Box<dyn Error>> {
    let store = ScoreStore::open(STORE_DIR)?;
    let mut app = App::new(store);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| draw_game(frame, &app))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                let was_running = matches!(app.phase, Phase::Running);
                if app.handle_key(key.code) {
                    break;
                }
                if !was_running && matches!(app.phase, Phase::Running) {
                    last_tick = Instant::now();
                }
            }
        }

        if matches!(app.phase, Phase::Running) && last_tick.elapsed() >= Duration::from_millis(TICK_MS)
        {
            app.tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_app(tag: &str) -> App {
        let root = std::env::temp_dir().join(format!("isosnake-app-{}-{tag}", std::process::id()));
        let _ = fs::remove_dir_all(&root);
        App::new(ScoreStore::open(root).unwrap())
    }

    fn type_name(app: &mut App, name: &str) {
        for c in name.chars() {
            app.handle_key(KeyCode::Char(c));
        }
        app.handle_key(KeyCode::Enter);
    }

    #[test]
    fn new_high_score_prompts_and_persists() {
        let mut app = temp_app("record");
        app.store.set_high_score(5).unwrap();
        app.high_score = 5;

        app.game.score = 7;
        app.finish_run();
        assert!(matches!(app.phase, Phase::NameEntry { .. }));
        assert_eq!(app.store.high_score(), 7);

        type_name(&mut app, "Alice");
        assert!(matches!(app.phase, Phase::Idle));
        let entries = app.store.entries();
        assert_eq!(entries, vec![ScoreEntry { name: "Alice".into(), score: 7 }]);
        assert_eq!(app.table[0].name, "Alice");
    }

    #[test]
    fn ordinary_run_skips_naming() {
        let mut app = temp_app("ordinary");
        app.store.set_high_score(5).unwrap();
        app.high_score = 5;

        app.game.score = 3;
        app.finish_run();
        assert!(matches!(app.phase, Phase::Idle));
        assert_eq!(app.store.high_score(), 5);
        assert!(app.store.entries().is_empty());
    }

    #[test]
    fn blank_name_defaults_to_placeholder() {
        let mut app = temp_app("blank");
        app.game.score = 1;
        app.finish_run();
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.store.entries()[0].name, DEFAULT_PLAYER_NAME);
    }

    #[test]
    fn persisted_high_score_is_monotonic_across_runs() {
        let mut app = temp_app("monotonic");
        app.game.score = 4;
        app.finish_run();
        type_name(&mut app, "a");

        app.start_run();
        app.game.score = 2;
        app.finish_run();
        assert_eq!(app.store.high_score(), 4);

        app.start_run();
        app.game.score = 9;
        app.finish_run();
        type_name(&mut app, "b");
        assert_eq!(app.store.high_score(), 9);
    }

    #[test]
    fn backspace_edits_the_name_buffer() {
        let mut app = temp_app("edit");
        app.game.score = 1;
        app.finish_run();
        app.handle_key(KeyCode::Char('x'));
        app.handle_key(KeyCode::Char('y'));
        app.handle_key(KeyCode::Backspace);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.store.entries()[0].name, "x");
    }
}
