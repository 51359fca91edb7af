/// Terminal render surface — all terminal output lives here.
///
/// The game draws in a fixed logical resolution; this surface scales those
/// coordinates onto the current terminal grid, one cell per scaled pixel
/// block, and flushes the whole grid on `present`.

use std::io::{self, Write};

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};
use log::error;
use wave_shooter::render::{Rgb, Surface, C_BACKGROUND, C_TEXT};

#[derive(Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    fg: Rgb,
    bg: Rgb,
}

const BLANK: Cell = Cell {
    ch: ' ',
    fg: C_TEXT,
    bg: C_BACKGROUND,
};

pub struct TerminalSurface<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
    logical_width: f32,
    logical_height: f32,
    cells: Vec<Cell>,
}

fn to_color(c: Rgb) -> Color {
    Color::Rgb { r: c.0, g: c.1, b: c.2 }
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, logical_width: f32, logical_height: f32) -> io::Result<Self> {
        let (cols, rows) = terminal::size().map_err(|e| {
            error!("Failed to get terminal size: {}", e);
            e
        })?;
        Ok(TerminalSurface {
            out,
            cols,
            rows,
            logical_width,
            logical_height,
            cells: vec![BLANK; cols as usize * rows as usize],
        })
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.cells = vec![BLANK; cols as usize * rows as usize];
    }

    fn col(&self, x: f32) -> i32 {
        (x / self.logical_width * self.cols as f32).floor() as i32
    }

    fn row(&self, y: f32) -> i32 {
        (y / self.logical_height * self.rows as f32).floor() as i32
    }

    fn cell_mut(&mut self, col: i32, row: i32) -> Option<&mut Cell> {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return None;
        }
        let idx = row as usize * self.cols as usize + col as usize;
        self.cells.get_mut(idx)
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    type Error = io::Error;

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb) -> io::Result<()> {
        let c0 = self.col(x);
        let r0 = self.row(y);
        // Anything thinner than a cell still covers one cell.
        let c1 = self.col(x + w).max(c0 + 1);
        let r1 = self.row(y + h).max(r0 + 1);
        for row in r0..r1 {
            for col in c0..c1 {
                if let Some(cell) = self.cell_mut(col, row) {
                    *cell = Cell { ch: ' ', fg: cell.fg, bg: color };
                }
            }
        }
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, color: Rgb) -> io::Result<()> {
        let c0 = self.col(x);
        let row = self.row(y);
        for (i, ch) in text.chars().enumerate() {
            if let Some(cell) = self.cell_mut(c0 + i as i32, row) {
                cell.ch = ch;
                cell.fg = color;
            }
        }
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        let mut current: Option<(Rgb, Rgb)> = None;
        for row in 0..self.rows {
            self.out.queue(cursor::MoveTo(0, row))?;
            for col in 0..self.cols {
                let cell = self.cells[row as usize * self.cols as usize + col as usize];
                if current != Some((cell.fg, cell.bg)) {
                    self.out.queue(style::SetForegroundColor(to_color(cell.fg)))?;
                    self.out.queue(style::SetBackgroundColor(to_color(cell.bg)))?;
                    current = Some((cell.fg, cell.bg));
                }
                self.out.queue(Print(cell.ch))?;
            }
        }
        self.out.queue(style::ResetColor)?;
        self.out.flush()?;
        self.cells.fill(BLANK);
        Ok(())
    }
}
