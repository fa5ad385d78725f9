use std::io::{Stdout, Write, stdout};

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::queue;

use duel_engine::game::{Cell, GridSize, GridSurface, SessionRng};
use duel_engine::log;

/// Columns between the two boards.
pub const BOARD_GAP: u16 = 4;

/// Each cell is two characters wide so boards come out roughly square.
pub fn board_width(grid: GridSize) -> u16 {
    grid.cells() as u16 * 2 + 2
}

/// Label row, top border, interior, bottom border.
pub fn board_height(grid: GridSize) -> u16 {
    grid.cells() as u16 + 3
}

/// Both boards plus the hint line must fit the terminal; checked before any
/// board is drawn.
pub fn layout_check(grid: GridSize, columns: u16, rows: u16) -> Result<(), String> {
    let needed_columns = board_width(grid) * 2 + BOARD_GAP;
    let needed_rows = board_height(grid) + 1;
    if columns < needed_columns || rows < needed_rows {
        return Err(format!(
            "Terminal is {}x{} but the boards need {}x{}; shrink the grid or enlarge the terminal",
            columns, rows, needed_columns, needed_rows
        ));
    }
    Ok(())
}

pub fn random_snake_color(rng: &mut SessionRng) -> Color {
    Color::Rgb {
        r: rng.random_range(96..=255u8),
        g: rng.random_range(96..=255u8),
        b: rng.random_range(96..=255u8),
    }
}

/// One player's board, anchored at a fixed terminal origin. Rendering
/// failures are logged and swallowed; the simulation does not depend on a
/// frame reaching the screen.
pub struct TerminalSurface {
    out: Stdout,
    grid: GridSize,
    origin_col: u16,
    origin_row: u16,
    color: Color,
    label: String,
}

impl TerminalSurface {
    pub fn new(
        grid: GridSize,
        origin_col: u16,
        origin_row: u16,
        color: Color,
        label: impl Into<String>,
    ) -> Self {
        Self {
            out: stdout(),
            grid,
            origin_col,
            origin_row,
            color,
            label: label.into(),
        }
    }

    /// Label and border, drawn once at setup.
    pub fn draw_frame(&mut self) -> std::io::Result<()> {
        let inner_width = self.grid.cells() as usize * 2;

        let mut label = self.label.clone();
        label.truncate(inner_width + 2);
        queue!(
            self.out,
            MoveTo(self.origin_col, self.origin_row),
            Print(&label),
            MoveTo(self.origin_col, self.origin_row + 1),
            Print(format!("┌{}┐", "─".repeat(inner_width))),
        )?;
        for row in 0..self.grid.cells() as u16 {
            queue!(
                self.out,
                MoveTo(self.origin_col, self.origin_row + 2 + row),
                Print("│"),
                MoveTo(self.origin_col + 1 + inner_width as u16, self.origin_row + 2 + row),
                Print("│"),
            )?;
        }
        queue!(
            self.out,
            MoveTo(
                self.origin_col,
                self.origin_row + 2 + self.grid.cells() as u16
            ),
            Print(format!("└{}┘", "─".repeat(inner_width))),
        )?;
        self.out.flush()
    }

    fn cell_anchor(&self, cell: Cell) -> (u16, u16) {
        (
            self.origin_col + 1 + cell.x as u16 * 2,
            self.origin_row + 2 + cell.y as u16,
        )
    }

    fn blank_interior(&mut self) -> std::io::Result<()> {
        let blank = " ".repeat(self.grid.cells() as usize * 2);
        for row in 0..self.grid.cells() as u16 {
            queue!(
                self.out,
                MoveTo(self.origin_col + 1, self.origin_row + 2 + row),
                Print(&blank),
            )?;
        }
        self.out.flush()
    }

    fn fill_cells(&mut self, cells: &[Cell]) -> std::io::Result<()> {
        queue!(self.out, SetForegroundColor(self.color))?;
        for cell in cells {
            // Transiently out-of-range cells are not drawn.
            if !self.grid.contains(*cell) {
                continue;
            }
            let (col, row) = self.cell_anchor(*cell);
            queue!(self.out, MoveTo(col, row), Print("██"))?;
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }
}

impl GridSurface for TerminalSurface {
    fn clear(&mut self) {
        if let Err(error) = self.blank_interior() {
            log!("[{}] clear failed: {}", self.label, error);
        }
    }

    fn draw(&mut self, cells: &[Cell]) {
        if let Err(error) = self.fill_cells(cells) {
            log!("[{}] draw failed: {}", self.label, error);
        }
    }
}
