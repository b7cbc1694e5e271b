use ratatui::prelude::*;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::config::CELL_W;
use crate::game::Snapshot;

const INFO_H: u16 = 3;
const CONTROLS_H: u16 = 3;

pub fn draw_game(frame: &mut Frame, snapshot: &Snapshot) {
    let area = frame.size();
    let play_w = (snapshot.length * CELL_W) as u16;
    let play_h = snapshot.height as u16;
    // Cabinet border on both sides.
    let min_w = play_w + 2;
    let min_h = play_h + INFO_H + CONTROLS_H + 2;

    if area.width < min_w || area.height < min_h {
        let msg = Paragraph::new(format!("RESIZE PANE (min {min_w}x{min_h})"))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("FLAPPY"));
        frame.render_widget(msg, area);
        return;
    }

    // Outer "cabinet" frame.
    let cabinet = Block::default()
        .title("FLAPPY")
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    let cabinet_inner = cabinet.inner(area);
    frame.render_widget(cabinet, area);

    let col_rect = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(play_w),
            Constraint::Min(0),
        ])
        .split(cabinet_inner)[1];

    let stack = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(INFO_H),
            Constraint::Length(play_h),
            Constraint::Length(CONTROLS_H),
            Constraint::Min(0),
        ])
        .split(col_rect);

    draw_info(frame, snapshot, stack[1]);
    draw_playfield(frame, snapshot, stack[2]);
    draw_controls(frame, stack[3]);
}

fn draw_playfield(frame: &mut Frame, snapshot: &Snapshot, play_rect: Rect) {
    let lines: Vec<Line> = snapshot
        .rows()
        .map(|row| Line::raw(row.iter().map(|state| state.glyph()).collect::<String>()))
        .collect();
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), play_rect);

    if snapshot.over {
        let overlay_w = play_rect.width.saturating_sub(4).clamp(8, 24);
        let overlay_h = 5u16.min(play_rect.height);
        let popup = Rect {
            x: play_rect.x + (play_rect.width.saturating_sub(overlay_w)) / 2,
            y: play_rect.y + (play_rect.height.saturating_sub(overlay_h)) / 2,
            width: overlay_w,
            height: overlay_h,
        };
        let overlay = Paragraph::new(format!("GAME OVER\nSCORE {}\nany key exits", snapshot.tick))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(Clear, popup);
        frame.render_widget(overlay, popup);
    }
}

fn draw_info(frame: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let status = if snapshot.over { "CRASHED" } else { "FLYING" };
    let info = Paragraph::new(Line::raw(format!(
        "{:<7}{:<8}{:<8}{}",
        "SCORE:", snapshot.tick, "STATUS:", status
    )))
    .block(Block::default().title("INFO").borders(Borders::ALL));
    frame.render_widget(info, area);
}

fn draw_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::raw("any key flap/fall   esc quit"))
        .block(Block::default().title("CONTROLS").borders(Borders::ALL));
    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Board;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen(width: u16, height: u16, snapshot: &Snapshot) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test backend");
        terminal
            .draw(|frame| draw_game(frame, snapshot))
            .expect("draw");
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn draws_board_and_score() {
        let board = Board::with_seed(10, Some(0)).expect("valid height");
        let text = screen(80, 24, &board.snapshot(12));
        assert!(text.contains("FLAPPY"));
        assert!(text.contains("SCORE: 12"));
        assert!(text.contains("FLYING"));
        assert!(text.contains("<>"));
        assert!(!text.contains("GAME OVER"));
    }

    #[test]
    fn game_over_shows_overlay() {
        let mut board = Board::with_seed(10, Some(0)).expect("valid height");
        board.step(1, true);
        let text = screen(80, 24, &board.snapshot(1));
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("CRASHED"));
    }

    #[test]
    fn small_terminal_asks_for_resize() {
        let board = Board::with_seed(10, Some(0)).expect("valid height");
        let text = screen(40, 10, &board.snapshot(0));
        assert!(text.contains("RESIZE PANE"));
    }
}
