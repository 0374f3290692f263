//! GameView: draws a [`GameSnapshot`] into a [`FrameBuffer`].
//!
//! Pure, no I/O. Layout, left to right: the bordered well (two terminal
//! columns per board cell), a two-column gap, then the status panel.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

const CELL_W: u16 = 2;
const WELL_W: u16 = BOARD_WIDTH as u16 * CELL_W + 2;
const WELL_H: u16 = BOARD_HEIGHT as u16 + 2;
const GAP: u16 = 2;
const PANEL_W: u16 = 16;

const WELL_BG: Rgb = Rgb::new(24, 24, 32);
const BORDER: Style = Style::fg(Rgb::new(180, 180, 190));
const GRID_DOT: Style = Style::fg(Rgb::new(70, 70, 85)).on(WELL_BG);
const LABEL: Style = Style::fg(Rgb::new(150, 150, 160));
const VALUE: Style = Style::fg(Rgb::new(240, 240, 240)).bold();
const HINT: Style = Style::fg(Rgb::new(120, 120, 130));
const BANNER: Style = Style::fg(Rgb::new(255, 255, 255)).on(Rgb::new(60, 20, 20)).bold();

const CONTROLS: [(&str, &str); 6] = [
    ("<- ->", "move"),
    ("down", "drop"),
    ("up", "rotate"),
    ("space", "pause"),
    ("r", "reset"),
    ("q", "quit"),
];

/// Terminal size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Top-left corners of the two layout blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub well_x: u16,
    pub well_y: u16,
    pub panel_x: u16,
}

impl Layout {
    /// Center the well and panel in `viewport`.
    pub fn centered(viewport: Viewport) -> Self {
        let total_w = WELL_W + GAP + PANEL_W;
        let well_x = viewport.width.saturating_sub(total_w) / 2;
        let well_y = viewport.height.saturating_sub(WELL_H) / 2;
        Self {
            well_x,
            well_y,
            panel_x: well_x + WELL_W + GAP,
        }
    }

    /// Terminal position of the left half of board cell `(x, y)`.
    pub fn cell_origin(&self, x: u16, y: u16) -> (u16, u16) {
        (self.well_x + 1 + x * CELL_W, self.well_y + 1 + y)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    /// Redraw the whole frame. `fb` is resized to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::BLANK);

        let layout = Layout::centered(viewport);
        self.draw_well(snap, layout, fb);
        self.draw_panel(snap, layout, fb);

        if snap.game_over {
            self.draw_banner(layout, "GAME OVER", "r to play again", fb);
        } else if snap.paused {
            self.draw_banner(layout, "PAUSED", "space to resume", fb);
        }
    }

    fn draw_well(&self, snap: &GameSnapshot, layout: Layout, fb: &mut FrameBuffer) {
        let (x0, y0) = (layout.well_x, layout.well_y);
        let (x1, y1) = (x0 + WELL_W - 1, y0 + WELL_H - 1);

        fb.put(x0, y0, '┌', BORDER);
        fb.put(x1, y0, '┐', BORDER);
        fb.put(x0, y1, '└', BORDER);
        fb.put(x1, y1, '┘', BORDER);
        for x in x0 + 1..x1 {
            fb.put(x, y0, '─', BORDER);
            fb.put(x, y1, '─', BORDER);
        }
        for y in y0 + 1..y1 {
            fb.put(x0, y, '│', BORDER);
            fb.put(x1, y, '│', BORDER);
        }

        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (cx, cy) = layout.cell_origin(x as u16, y as u16);
                match cell {
                    Some(kind) => {
                        let style = Style::fg(Rgb::of_piece(*kind)).on(WELL_BG);
                        fb.put(cx, cy, '█', style);
                        fb.put(cx + 1, cy, '█', style);
                    }
                    None => {
                        fb.put(cx, cy, ' ', GRID_DOT);
                        fb.put(cx + 1, cy, '.', GRID_DOT);
                    }
                }
            }
        }
    }

    fn draw_panel(&self, snap: &GameSnapshot, layout: Layout, fb: &mut FrameBuffer) {
        let x = layout.panel_x;
        let mut y = layout.well_y + 1;

        for (label, value) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("SPEED", snap.fall_interval_ms),
        ] {
            fb.put_str(x, y, label, LABEL);
            let end = fb.put_u32(x, y + 1, value, VALUE);
            if label == "SPEED" {
                fb.put_str(end, y + 1, "ms", LABEL);
            }
            y += 3;
        }

        y += 1;
        for (keys, action) in CONTROLS {
            fb.put_str(x, y, keys, HINT);
            fb.put_str(x + 7, y, action, HINT);
            y += 1;
        }
    }

    fn draw_banner(&self, layout: Layout, title: &str, hint: &str, fb: &mut FrameBuffer) {
        let inner_x = layout.well_x + 1;
        let inner_w = WELL_W - 2;
        let y = layout.well_y + WELL_H / 2 - 1;

        fb.fill_rect(inner_x, y - 1, inner_w, 4, ' ', BANNER);
        for (row, text) in [(y, title), (y + 1, hint)] {
            let len = text.chars().count() as u16;
            let x = inner_x + inner_w.saturating_sub(len) / 2;
            fb.put_str(x, row, text, BANNER);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, ScriptedPieces};
    use crate::types::{Direction, PieceKind};

    fn render(snap: &GameSnapshot) -> FrameBuffer {
        let mut fb = FrameBuffer::new(1, 1);
        GameView.render_into(snap, Viewport::new(80, 24), &mut fb);
        fb
    }

    fn screen_contains(fb: &FrameBuffer, needle: &str) -> bool {
        (0..fb.height()).any(|y| fb.row_text(y).contains(needle))
    }

    #[test]
    fn layout_centers_well_and_panel() {
        let layout = Layout::centered(Viewport::new(80, 24));
        assert_eq!(layout, Layout { well_x: 20, well_y: 1, panel_x: 44 });
        assert_eq!(layout.cell_origin(0, 0), (21, 2));
        assert_eq!(layout.cell_origin(9, 19), (39, 21));
    }

    #[test]
    fn draws_border_and_empty_grid() {
        let fb = render(&GameSnapshot::default());
        assert_eq!(fb.get(20, 1).unwrap().ch, '┌');
        assert_eq!(fb.get(41, 22).unwrap().ch, '┘');
        assert_eq!(fb.get(22, 2).unwrap().ch, '.');
        assert!(!screen_contains(&fb, "█"));
    }

    #[test]
    fn draws_active_piece_in_its_color() {
        let mut game = GameState::with_source(ScriptedPieces::new(&[PieceKind::T]));
        game.move_horizontal(Direction::Left);
        let fb = render(&game.snapshot());

        // T spawns at x=3 and moved to x=2: top row covers cells 2..=4.
        let layout = Layout::centered(Viewport::new(80, 24));
        let (cx, cy) = layout.cell_origin(2, 0);
        let glyph = fb.get(cx, cy).unwrap();
        assert_eq!(glyph.ch, '█');
        assert_eq!(glyph.style.fg, Rgb::of_piece(PieceKind::T));
        let (cx, cy) = layout.cell_origin(3, 1);
        assert_eq!(fb.get(cx + 1, cy).unwrap().ch, '█');
        let (cx, cy) = layout.cell_origin(2, 1);
        assert_eq!(fb.get(cx + 1, cy).unwrap().ch, '.');
    }

    #[test]
    fn panel_shows_status() {
        let snap = GameSnapshot {
            score: 1300,
            level: 2,
            fall_interval_ms: 800,
            ..GameSnapshot::default()
        };
        let fb = render(&snap);
        assert!(screen_contains(&fb, "SCORE"));
        assert!(screen_contains(&fb, "1300"));
        assert!(screen_contains(&fb, "LEVEL"));
        assert!(screen_contains(&fb, "800ms"));
        assert!(screen_contains(&fb, "rotate"));
    }

    #[test]
    fn overlays() {
        let paused = GameSnapshot {
            paused: true,
            ..GameSnapshot::default()
        };
        let fb = render(&paused);
        assert!(screen_contains(&fb, "PAUSED"));
        assert!(screen_contains(&fb, "space to resume"));

        let over = GameSnapshot {
            paused: true,
            game_over: true,
            ..GameSnapshot::default()
        };
        let fb = render(&over);
        assert!(screen_contains(&fb, "GAME OVER"));
        assert!(screen_contains(&fb, "r to play again"));
        assert!(!screen_contains(&fb, "PAUSED"));

        assert!(!screen_contains(&render(&GameSnapshot::default()), "PAUSED"));
    }

    #[test]
    fn tiny_viewport_is_clipped_not_panicking() {
        let mut fb = FrameBuffer::new(1, 1);
        GameView.render_into(&GameSnapshot::default(), Viewport::new(10, 5), &mut fb);
        assert_eq!((fb.width(), fb.height()), (10, 5));
        assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    }
}
