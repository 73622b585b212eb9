use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::App;
use crate::game::Pos;
use crate::{
    BOARD_H, BOARD_W, HALF_TILE_H, HALF_TILE_W, ORIGIN_X, PLAY_H, PLAY_W, ROTATION_STEP,
    TABLE_DISPLAY_LIMIT,
};

const TILE_STYLE: Style = Style::new().fg(Color::DarkGray);
const BODY_STYLE: Style = Style::new().fg(Color::Green);
// Eye dots on the head block, as in the original sprite.
const HEAD_STYLE: Style = Style::new().fg(Color::White).bg(Color::LightRed);
const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);
// The shaded quadrant stands in for the original's rotating highlight.
const FOOD_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Grid-to-screen isometric projection; None when the cell (including a
/// crashed head) falls off the drawable diamond.
fn project(pos: Pos) -> Option<(usize, usize)> {
    let sx = (pos.x - pos.y) * HALF_TILE_W + ORIGIN_X;
    let sy = (pos.x + pos.y) * HALF_TILE_H;
    if sx < 0 || sy < 0 {
        return None;
    }
    let (sx, sy) = (sx as usize, sy as usize);
    (sx + 1 < PLAY_W && sy < PLAY_H).then_some((sx, sy))
}

pub(super) fn draw_playfield(frame: &mut Frame, app: &App, play_rect: Rect) {
    let mut grid = vec![vec![(' ', Style::new()); PLAY_W]; PLAY_H];

    let plot = |grid: &mut Vec<Vec<(char, Style)>>, pos: Pos, pair: (char, char), style: Style| {
        if let Some((gx, gy)) = project(pos) {
            grid[gy][gx] = (pair.0, style);
            grid[gy][gx + 1] = (pair.1, style);
        }
    };

    // Board first, then snake, then food, matching the original draw order
    // (overlapped food stays visible on top of the body).
    for y in 0..BOARD_H {
        for x in 0..BOARD_W {
            plot(&mut grid, Pos::new(x, y), ('·', ' '), TILE_STYLE);
        }
    }

    for (i, &seg) in app.game.snake.body().iter().enumerate() {
        if i == 0 {
            plot(&mut grid, seg, ('•', '•'), HEAD_STYLE);
        } else {
            plot(&mut grid, seg, ('█', '█'), BODY_STYLE);
        }
    }

    let frame_idx = (app.game.rotation / ROTATION_STEP).round() as usize % FOOD_FRAMES.len();
    plot(&mut grid, app.game.food, (FOOD_FRAMES[frame_idx], ' '), FOOD_STYLE);

    let lines: Vec<Line> = grid
        .iter()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|&(ch, style)| Span::styled(ch.to_string(), style))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), play_rect);
}

pub(super) fn draw_idle_overlay(frame: &mut Frame, app: &App, play_rect: Rect) {
    let mut lines = vec![Line::raw("TOP SCORES"), Line::raw("")];
    if app.table.is_empty() {
        lines.push(Line::raw("no scores yet"));
    } else {
        for (i, entry) in app.table.iter().take(TABLE_DISPLAY_LIMIT).enumerate() {
            let name: String = entry.name.chars().take(12).collect();
            lines.push(Line::raw(format!("{:>2}. {:<12} {:>5}", i + 1, name, entry.score)));
        }
    }
    lines.push(Line::raw(""));
    lines.push(Line::raw("press enter to play"));

    let height = lines.len() as u16 + 2;
    let popup = popup_rect(play_rect, 28, height);
    let overlay = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("SNAKE"));
    frame.render_widget(overlay, popup);
}

pub(super) fn draw_name_prompt(frame: &mut Frame, app: &App, name: &str, play_rect: Rect) {
    let lines = vec![
        Line::raw(format!("NEW HIGH SCORE: {}", app.game.score)),
        Line::raw(""),
        Line::raw("enter your name:"),
        Line::raw(format!("{name}_")),
        Line::raw(""),
        Line::raw("(blank saves as Anonymous)"),
    ];
    let popup = popup_rect(play_rect, 32, lines.len() as u16 + 2);
    let overlay = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(overlay, popup);
}

fn popup_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}
