use std::time::{SystemTime, UNIX_EPOCH};

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use crate::app::{App, Phase};
use crate::{MIN_PANE_WIDTH, PLAY_H, PLAY_W, SIDEBAR_W};

mod render;

pub fn draw_game(frame: &mut Frame, app: &App) {
    let area = frame.size();

    if area.width < MIN_PANE_WIDTH {
        let msg = Paragraph::new(format!("RESIZE PANE (min width: {})", MIN_PANE_WIDTH))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("ISOSNAKE"));
        frame.render_widget(msg, area);
        return;
    }

    // Outer "cabinet" frame.
    let cabinet = Block::default()
        .title("ISOSNAKE")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    let cabinet_inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    // Split into play area (left) and sidebar (right).
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(PLAY_W as u16 + 2), Constraint::Length(SIDEBAR_W)])
        .split(cabinet_inner);

    // Center the fixed-size playfield within the left column.
    let v_center = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(PLAY_H as u16),
            Constraint::Min(1),
        ])
        .split(cols[0]);
    let h_center = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(PLAY_W as u16),
            Constraint::Min(1),
        ])
        .split(v_center[1]);
    let play_rect = h_center[1];

    render::draw_playfield(frame, app, play_rect);
    draw_sidebar(frame, app, cols[1]);

    match &app.phase {
        Phase::Running => {}
        Phase::Idle => render::draw_idle_overlay(frame, app, play_rect),
        Phase::NameEntry { name } => render::draw_name_prompt(frame, app, name, play_rect),
    }
}

fn draw_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(10), Constraint::Min(0), Constraint::Length(7)].as_ref())
        .split(area);

    let status = match &app.phase {
        Phase::Idle => "IDLE",
        Phase::NameEntry { .. } => "NEW BEST",
        Phase::Running => {
            let millis = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis();
            if (millis / 300) % 2 == 0 { "ACTIVE" } else { "      " }
        }
    };

    let info = Paragraph::new(format!(
        "SCORE\n{}\n\nHIGH SCORE\n{}\n\nSTATUS\n{}",
        app.game.score, app.high_score, status
    ))
    .block(Block::default().title("INFO").borders(Borders::ALL))
    .wrap(Wrap { trim: true });
    frame.render_widget(info, chunks[0]);

    let controls = Paragraph::new("←↑↓→ steer\nenter play/save\nq quit")
        .block(Block::default().title("CONTROLS").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    frame.render_widget(controls, chunks[2]);
}
