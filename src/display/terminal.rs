//! Terminal canvas: logical pixels mapped onto character cells.
//!
//! Draw calls only touch an in-memory cell buffer; `present` writes the whole
//! buffer out in one flush.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print},
    terminal, QueueableCommand,
};

use super::canvas::{Canvas, Rect, Rgb, TextSize};
use crate::assets::SpriteFrame;
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Cell {
    glyph: char,
    fg: Rgb,
    bg: Rgb,
    bold: bool,
}

impl Cell {
    fn blank(color: Rgb) -> Self {
        Self {
            glyph: ' ',
            fg: color,
            bg: color,
            bold: false,
        }
    }
}

fn to_color(Rgb(r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}

/// Cells `[start, end)` covering the logical span `[pos, pos + len)` on an
/// axis of `logical` pixels drawn with `cells` cells. Anything non-empty
/// and on screen covers at least one cell.
fn cell_span(pos: i32, len: i32, logical: i32, cells: u16) -> (i32, i32) {
    if len <= 0 || cells == 0 {
        return (0, 0);
    }
    let scale = f32::from(cells) / logical as f32;
    let start = (pos as f32 * scale).round() as i32;
    let mut end = ((pos + len) as f32 * scale).round() as i32;
    if end <= start {
        end = start + 1;
    }
    (start.max(0), end.min(i32::from(cells)))
}

/// Cell containing the logical coordinate `pos`.
fn cell_of(pos: i32, logical: i32, cells: u16) -> i32 {
    (pos as f32 * f32::from(cells) / logical as f32).floor() as i32
}

/// Logical coordinate of the centre of cell `index`.
fn cell_centre(index: i32, logical: i32, cells: u16) -> f32 {
    (index as f32 + 0.5) * logical as f32 / f32::from(cells)
}

pub struct TerminalCanvas<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
    /// Wipe the physical screen before the next present.
    needs_wipe: bool,
}

impl<W: Write> TerminalCanvas<W> {
    pub fn new(out: W, cols: u16, rows: u16) -> Self {
        Self {
            out,
            cols,
            rows,
            cells: vec![Cell::blank(Rgb(0, 0, 0)); usize::from(cols) * usize::from(rows)],
            needs_wipe: true,
        }
    }

    pub fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    fn cell_mut(&mut self, col: i32, row: i32) -> Option<&mut Cell> {
        if col < 0 || row < 0 || col >= i32::from(self.cols) || row >= i32::from(self.rows) {
            return None;
        }
        let index = row as usize * usize::from(self.cols) + col as usize;
        self.cells.get_mut(index)
    }

    #[cfg(test)]
    fn cell(&self, col: i32, row: i32) -> Cell {
        self.cells[row as usize * usize::from(self.cols) + col as usize]
    }

    fn spans(&self, rect: Rect) -> ((i32, i32), (i32, i32)) {
        (
            cell_span(rect.x, rect.width, SCREEN_WIDTH, self.cols),
            cell_span(rect.y, rect.height, SCREEN_HEIGHT, self.rows),
        )
    }
}

impl<W: Write> Canvas for TerminalCanvas<W> {
    fn clear(&mut self, color: Rgb) {
        self.cells.fill(Cell::blank(color));
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) {
        let ((c0, c1), (r0, r1)) = self.spans(rect);
        for row in r0..r1 {
            for col in c0..c1 {
                if let Some(cell) = self.cell_mut(col, row) {
                    *cell = Cell::blank(color);
                }
            }
        }
    }

    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Rgb) {
        let bounds = Rect::new(cx - radius, cy - radius, radius * 2, radius * 2);
        let ((c0, c1), (r0, r1)) = self.spans(bounds);
        let r2 = (radius * radius) as f32;
        let mut painted = false;

        for row in r0..r1 {
            let dy = cell_centre(row, SCREEN_HEIGHT, self.rows) - cy as f32;
            for col in c0..c1 {
                let dx = cell_centre(col, SCREEN_WIDTH, self.cols) - cx as f32;
                if dx * dx + dy * dy <= r2 {
                    if let Some(cell) = self.cell_mut(col, row) {
                        *cell = Cell::blank(color);
                        painted = true;
                    }
                }
            }
        }

        // Small circles on coarse grids still show up as one cell.
        if !painted {
            let col = cell_of(cx, SCREEN_WIDTH, self.cols);
            let row = cell_of(cy, SCREEN_HEIGHT, self.rows);
            if let Some(cell) = self.cell_mut(col, row) {
                *cell = Cell::blank(color);
            }
        }
    }

    fn blit(&mut self, rect: Rect, frame: &SpriteFrame, color: Rgb) {
        let sprite_h = frame.len();
        let sprite_w = frame.iter().map(Vec::len).max().unwrap_or(0);
        if sprite_h == 0 || sprite_w == 0 {
            return;
        }

        let ((c0, c1), (r0, r1)) = self.spans(rect);
        // Sample relative to the unclipped span so sprites stay put while
        // scrolling off the left edge.
        let (full_c0, full_c1) = {
            let scale = f32::from(self.cols) / SCREEN_WIDTH as f32;
            let start = (rect.x as f32 * scale).round() as i32;
            let end = ((rect.x + rect.width) as f32 * scale).round() as i32;
            (start, end.max(start + 1))
        };
        let span_w = (full_c1 - full_c0) as usize;
        let span_h = (r1 - r0).max(1) as usize;

        for row in r0..r1 {
            let v = (row - r0) as usize * sprite_h / span_h;
            for col in c0..c1 {
                let u = (col - full_c0) as usize * sprite_w / span_w;
                let glyph = frame[v].get(u).copied().unwrap_or(' ');
                if glyph.is_whitespace() {
                    continue;
                }
                if let Some(cell) = self.cell_mut(col, row) {
                    cell.glyph = glyph;
                    cell.fg = color;
                }
            }
        }
    }

    fn text(&mut self, x: i32, y: i32, text: &str, size: TextSize, color: Rgb) {
        let row = cell_of(y, SCREEN_HEIGHT, self.rows);
        let start = cell_of(x, SCREEN_WIDTH, self.cols);
        for (i, glyph) in text.chars().enumerate() {
            if let Some(cell) = self.cell_mut(start + i as i32, row) {
                cell.glyph = glyph;
                cell.fg = color;
                cell.bold = size == TextSize::Large;
            }
        }
    }

    fn present(&mut self) -> std::io::Result<()> {
        if self.needs_wipe {
            self.out.queue(terminal::Clear(terminal::ClearType::All))?;
            self.needs_wipe = false;
        }

        let mut last: Option<Cell> = None;
        for row in 0..self.rows {
            self.out.queue(cursor::MoveTo(0, row))?;
            let start = usize::from(row) * usize::from(self.cols);
            for cell in &self.cells[start..start + usize::from(self.cols)] {
                if last.map_or(true, |prev| prev.bold != cell.bold) {
                    let attr = if cell.bold {
                        Attribute::Bold
                    } else {
                        Attribute::NormalIntensity
                    };
                    self.out.queue(style::SetAttribute(attr))?;
                }
                if last.map_or(true, |prev| prev.fg != cell.fg) {
                    self.out.queue(style::SetForegroundColor(to_color(cell.fg)))?;
                }
                if last.map_or(true, |prev| prev.bg != cell.bg) {
                    self.out.queue(style::SetBackgroundColor(to_color(cell.bg)))?;
                }
                self.out.queue(Print(cell.glyph))?;
                last = Some(*cell);
            }
        }

        self.out.queue(style::ResetColor)?;
        self.out.queue(style::SetAttribute(Attribute::Reset))?;
        self.out.flush()
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.cells = vec![Cell::blank(Rgb(0, 0, 0)); usize::from(cols) * usize::from(rows)];
        self.needs_wipe = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SKY: Rgb = Rgb(1, 2, 3);
    const RED: Rgb = Rgb(255, 0, 0);

    /// 80×40 cells: every cell is 10×10 logical pixels.
    fn canvas() -> TerminalCanvas<Vec<u8>> {
        let mut c = TerminalCanvas::new(Vec::new(), 80, 40);
        c.clear(SKY);
        c
    }

    #[test]
    fn span_rounds_and_clips() {
        assert_eq!(cell_span(100, 40, 800, 80), (10, 14));
        assert_eq!(cell_span(-30, 50, 800, 80), (0, 2));
        assert_eq!(cell_span(795, 50, 800, 80), (80, 80));
        // Tiny but visible shapes still cover one cell.
        assert_eq!(cell_span(101, 2, 800, 80), (10, 11));
        assert_eq!(cell_span(10, 0, 800, 80), (0, 0));
    }

    #[test]
    fn fill_rect_paints_covered_cells() {
        let mut c = canvas();
        c.fill_rect(Rect::new(100, 300, 40, 60), RED);
        assert_eq!(c.cell(10, 30).bg, RED);
        assert_eq!(c.cell(13, 35).bg, RED);
        assert_eq!(c.cell(14, 35).bg, SKY);
        assert_eq!(c.cell(10, 36).bg, SKY);
    }

    #[test]
    fn small_circle_paints_at_least_one_cell() {
        let mut c = TerminalCanvas::new(Vec::new(), 8, 4);
        c.clear(SKY);
        c.fill_circle(412, 262, 12, RED);
        assert!(c.cells.iter().any(|cell| cell.bg == RED));
    }

    #[test]
    fn blit_keeps_background_under_blank_glyphs() {
        let mut c = canvas();
        let frame = vec![vec!['#', ' '], vec![' ', '#']];
        c.blit(Rect::new(0, 0, 20, 20), &frame, RED);
        assert_eq!(c.cell(0, 0).glyph, '#');
        assert_eq!(c.cell(0, 0).fg, RED);
        assert_eq!(c.cell(1, 0).glyph, ' ');
        assert_eq!(c.cell(1, 0).bg, SKY);
        assert_eq!(c.cell(1, 1).glyph, '#');
    }

    #[test]
    fn text_is_clipped_at_the_right_edge() {
        let mut c = canvas();
        c.text(780, 10, "Score", TextSize::Large, RED);
        assert_eq!(c.cell(78, 1).glyph, 'S');
        assert_eq!(c.cell(79, 1).glyph, 'c');
        assert!(c.cell(78, 1).bold);
    }

    #[test]
    fn present_writes_and_resize_reallocates() {
        let mut c = canvas();
        c.present().unwrap();
        assert!(!c.out.is_empty());
        c.resize(20, 10);
        assert_eq!(c.size(), (20, 10));
        assert_eq!(c.cells.len(), 200);
    }
}
