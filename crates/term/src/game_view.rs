//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{
    BlockKind, SessionPhase, FIELD_HEIGHT, FIELD_WIDTH, PREVIEW_HEIGHT, PREVIEW_WIDTH,
};

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

/// Display colour of a block kind. Empty cells are black.
pub fn block_color(kind: BlockKind) -> Rgb {
    match kind {
        BlockKind::None => Rgb::BLACK,
        BlockKind::I => Rgb::new(0, 255, 255),
        BlockKind::O => Rgb::new(255, 235, 4),
        BlockKind::S => Rgb::new(0, 255, 0),
        BlockKind::Z => Rgb::new(255, 0, 0),
        BlockKind::J => Rgb::new(0, 0, 255),
        BlockKind::L => Rgb::new(255, 128, 0),
        BlockKind::T => Rgb::new(128, 0, 128),
    }
}

const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::BLACK);
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::BLACK).bold();
const EMPTY: CellStyle = CellStyle::new(Rgb::new(60, 60, 70), Rgb::BLACK);
const OVERLAY: CellStyle = CellStyle::new(Rgb::WHITE, Rgb::BLACK).bold();

/// Gap between the field frame and the preview frame.
const PANEL_GAP: u16 = 2;

/// Top-left corners of the two framed areas.
#[derive(Debug, Clone, Copy)]
struct Layout {
    field: (u16, u16),
    preview: (u16, u16),
}

pub struct GameView {
    /// Terminal columns per grid cell.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps blocks roughly square.
        Self { cell_w: 2 }
    }
}

impl GameView {
    fn frame_size(&self, cols: u8, rows: u8) -> (u16, u16) {
        (cols as u16 * self.cell_w + 2, rows as u16 + 2)
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let (field_w, field_h) = self.frame_size(FIELD_WIDTH, FIELD_HEIGHT);
        let (preview_w, _) = self.frame_size(PREVIEW_WIDTH, PREVIEW_HEIGHT);
        let total_w = field_w + PANEL_GAP + preview_w;

        let x = viewport.width.saturating_sub(total_w) / 2;
        let y = viewport.height.saturating_sub(field_h) / 2;
        Layout {
            field: (x, y),
            // One row for the "NEXT" label above the preview frame.
            preview: (x + field_w + PANEL_GAP, y + 1),
        }
    }

    /// Render a snapshot into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let layout = self.layout(viewport);
        self.draw_field(fb, snap, layout.field);
        self.draw_preview(fb, snap, layout.preview);

        match snap.session {
            SessionPhase::Title => {
                self.draw_overlay(fb, layout.field, &["BLOCKFALL", "", "PRESS ENTER"])
            }
            SessionPhase::Result => {
                self.draw_overlay(fb, layout.field, &["GAME OVER", "", "PRESS ENTER"])
            }
            SessionPhase::Uninitialized | SessionPhase::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_field(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, origin: (u16, u16)) {
        let (w, h) = self.frame_size(FIELD_WIDTH, FIELD_HEIGHT);
        draw_border(fb, origin, w, h);

        for y in 0..FIELD_HEIGHT as i8 {
            for x in 0..FIELD_WIDTH as i8 {
                self.draw_cell(fb, origin, x as u16, y as u16, snap.visible_cell(x, y));
            }
        }
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, origin: (u16, u16)) {
        fb.put_str(origin.0 + 1, origin.1.saturating_sub(1), "NEXT", LABEL);
        let (w, h) = self.frame_size(PREVIEW_WIDTH, PREVIEW_HEIGHT);
        draw_border(fb, origin, w, h);

        for y in 0..PREVIEW_HEIGHT as u16 {
            for x in 0..PREVIEW_WIDTH as u16 {
                self.draw_cell(fb, origin, x, y, BlockKind::None);
            }
        }
        if let Some(next) = snap.next {
            for (x, y) in next.cells {
                if (0..PREVIEW_WIDTH as i8).contains(&x) && (0..PREVIEW_HEIGHT as i8).contains(&y) {
                    self.draw_cell(fb, origin, x as u16, y as u16, next.kind);
                }
            }
        }
    }

    fn draw_cell(&self, fb: &mut FrameBuffer, origin: (u16, u16), x: u16, y: u16, kind: BlockKind) {
        let cell = if kind.is_empty() {
            Cell::new('·', EMPTY)
        } else {
            Cell::new('█', CellStyle::new(block_color(kind), Rgb::BLACK))
        };
        let px = origin.0 + 1 + x * self.cell_w;
        let py = origin.1 + 1 + y;
        fb.fill_rect(px, py, self.cell_w, 1, cell);
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, origin: (u16, u16), lines: &[&str]) {
        let (w, h) = self.frame_size(FIELD_WIDTH, FIELD_HEIGHT);
        let top = origin.1 + h.saturating_sub(lines.len() as u16) / 2;
        for (i, line) in lines.iter().enumerate() {
            let len = line.chars().count() as u16;
            let x = origin.0 + w.saturating_sub(len) / 2;
            fb.put_str(x, top + i as u16, line, OVERLAY);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, (x, y): (u16, u16), w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let right = x + w - 1;
    let bottom = y + h - 1;

    fb.set(x, y, Cell::new('┌', BORDER));
    fb.set(right, y, Cell::new('┐', BORDER));
    fb.set(x, bottom, Cell::new('└', BORDER));
    fb.set(right, bottom, Cell::new('┘', BORDER));
    fb.fill_rect(x + 1, y, w - 2, 1, Cell::new('─', BORDER));
    fb.fill_rect(x + 1, bottom, w - 2, 1, Cell::new('─', BORDER));
    fb.fill_rect(x, y + 1, 1, h - 2, Cell::new('│', BORDER));
    fb.fill_rect(right, y + 1, 1, h - 2, Cell::new('│', BORDER));
}
