//! Terminal emulator for the LED matrix
//!
//! Renders the 7x7 grid as background-colored double-space blocks on an
//! ANSI terminal, standing in for matrix hardware behind the same
//! [`LedMatrix`] trait. Terminal I/O failures are logged and absorbed
//! here; they never reach the simulation.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor, execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
    terminal::{Clear, ClearType},
};

use crate::consts::{BACKGROUND_COLOR, GRID_SIZE};
use crate::display::{LedMatrix, Rgb};

const SIDE: usize = GRID_SIZE as usize;

/// Staged 7x7 framebuffer, flushed to the terminal on [`show`](LedMatrix::show)
pub struct TermMatrix {
    stdout: Stdout,
    cells: [[Rgb; SIDE]; SIDE],
}

impl TermMatrix {
    /// Take over the terminal: clear it and hide the cursor
    pub fn new() -> Self {
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, Clear(ClearType::All), cursor::Hide) {
            log::warn!("terminal setup failed: {e}");
        }
        Self {
            stdout,
            cells: [[BACKGROUND_COLOR; SIDE]; SIDE],
        }
    }

    fn paint(&mut self) -> io::Result<()> {
        for (row, cells) in self.cells.iter().enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, row as u16))?;
            for cell in cells {
                queue!(
                    self.stdout,
                    SetBackgroundColor(Color::Rgb {
                        r: cell.r,
                        g: cell.g,
                        b: cell.b,
                    }),
                    Print("  ")
                )?;
            }
        }
        // Park the cursor below the grid so log output lands clear of it
        queue!(self.stdout, ResetColor, cursor::MoveTo(0, SIDE as u16))?;
        self.stdout.flush()
    }
}

impl Default for TermMatrix {
    fn default() -> Self {
        Self::new()
    }
}

impl LedMatrix for TermMatrix {
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        if (0..GRID_SIZE).contains(&x) && (0..GRID_SIZE).contains(&y) {
            self.cells[y as usize][x as usize] = color;
        }
    }

    fn set_all(&mut self, color: Rgb) {
        self.cells = [[color; SIDE]; SIDE];
    }

    fn show(&mut self) {
        if let Err(e) = self.paint() {
            log::warn!("matrix flush failed: {e}");
        }
    }
}

impl Drop for TermMatrix {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, ResetColor, cursor::Show);
    }
}
