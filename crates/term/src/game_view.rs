//! GameView: draws a `GameSnapshot` into a framebuffer.
//!
//! Pure, no I/O. Each board cell is two terminal columns wide to make up for the tall aspect
//! ratio of terminal glyphs.

use crate::core::{GameSnapshot, NextPreview};
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{Rgb, BACKGROUND, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal columns per board cell
pub const CELL_W: u16 = 2;

/// Board frame size including the border
pub const FRAME_W: u16 = BOARD_WIDTH as u16 * CELL_W + 2;
pub const FRAME_H: u16 = BOARD_HEIGHT as u16 + 2;

/// Gap between the board frame and the side panel
const PANEL_GAP: u16 = 2;

/// Minimum panel width; narrower terminals only get the board
const PANEL_MIN_W: u16 = 10;

const WELL_BG: Rgb = Rgb::new(20, 20, 28);
const FILL: char = '█';
const EMPTY: char = '·';

/// Terminal viewport dimensions.
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

/// Layout of the board and side panel inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Top-left corner of the board frame
    pub board_x: u16,
    pub board_y: u16,
    /// Left edge of the side panel, `None` when there is no room
    pub panel_x: Option<u16>,
}

impl Layout {
    /// Center the board and panel together, falling back to the board alone.
    pub fn for_viewport(viewport: Viewport) -> Self {
        let with_panel = FRAME_W + PANEL_GAP + PANEL_MIN_W;
        let board_y = viewport.height.saturating_sub(FRAME_H) / 2;

        if viewport.width >= with_panel {
            let board_x = (viewport.width - with_panel) / 2;
            Self {
                board_x,
                board_y,
                panel_x: Some(board_x + FRAME_W + PANEL_GAP),
            }
        } else {
            Self {
                board_x: viewport.width.saturating_sub(FRAME_W) / 2,
                board_y,
                panel_x: None,
            }
        }
    }

    /// Terminal position of the left half of board cell `(col, row)`.
    pub fn cell_origin(&self, col: u16, row: u16) -> (u16, u16) {
        (self.board_x + 1 + col * CELL_W, self.board_y + 1 + row)
    }
}

#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Draw `snap` into `fb`, resizing it to the viewport first.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let layout = Layout::for_viewport(viewport);
        self.draw_board(fb, snap, &layout);

        if let Some(panel_x) = layout.panel_x {
            self.draw_panel(fb, snap, panel_x, layout.board_y);
        }
        if snap.game_over() {
            self.draw_game_over(fb, &layout);
        }
    }

    /// Allocate a framebuffer and draw into it.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_board(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: &Layout) {
        let border = CellStyle::new(Rgb::new(200, 200, 200), BACKGROUND);
        fb.draw_box(layout.board_x, layout.board_y, FRAME_W, FRAME_H, border);

        let empty = CellStyle::new(Rgb::new(70, 70, 85), WELL_BG).dim();
        for (row, line) in snap.grid.iter().enumerate() {
            for (col, &color) in line.iter().enumerate() {
                let (x, y) = layout.cell_origin(col as u16, row as u16);
                if color == BACKGROUND {
                    fb.put_char(x, y, EMPTY, empty);
                    fb.put_char(x + 1, y, ' ', empty);
                } else {
                    fb.fill_rect(x, y, CELL_W, 1, FILL, CellStyle::new(color, WELL_BG));
                }
            }
        }
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, top: u16) {
        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), BACKGROUND);

        let mut y = top;
        for (name, amount) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
        ] {
            fb.put_str(x, y, name, label);
            fb.put_u32(x, y + 1, amount, value);
            y += 3;
        }

        fb.put_str(x, y, "NEXT", label);
        if let Some(next) = &snap.next {
            draw_preview(fb, next, x, y + 1);
        }
        y += 6;

        let hint = value.dim();
        for line in ["←→ move", "↑ rotate", "↓ drop", "r restart", "q quit"] {
            fb.put_str(x, y, line, hint);
            y += 1;
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, layout: &Layout) {
        let banner = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(120, 0, 0)).bold();
        let hint = CellStyle::new(Rgb::new(220, 220, 220), BACKGROUND);

        let mid = layout.board_y + FRAME_H / 2;
        center_text(fb, layout, mid - 1, " GAME OVER ", banner);
        center_text(fb, layout, mid + 1, "r: restart", hint);
    }
}

/// Draw the next piece's current rotation state in its own color.
fn draw_preview(fb: &mut FrameBuffer, next: &NextPreview, x: u16, y: u16) {
    let style = CellStyle::new(next.color, BACKGROUND);
    for (dy, line) in next.matrix.iter().enumerate() {
        for (dx, &filled) in line.iter().enumerate() {
            if filled != 0 {
                fb.fill_rect(x + dx as u16 * CELL_W, y + dy as u16, CELL_W, 1, FILL, style);
            }
        }
    }
}

fn center_text(fb: &mut FrameBuffer, layout: &Layout, y: u16, text: &str, style: CellStyle) {
    let len = text.chars().count() as u16;
    let x = layout.board_x + FRAME_W.saturating_sub(len) / 2;
    fb.put_str(x, y, text, style);
}
