use std::io;
use std::io::Write;

use crossterm::cursor;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::style::Color;
use crossterm::style::Stylize;
use crossterm::terminal;

use crate::driver::Frame;
use crate::driver::RenderSink;

/// A cell is two columns wide so that it comes out roughly square
const CELL: &str = "  ";

const ALIVE_FG: Color = Color::Rgb {
    r: 0x21,
    g: 0x28,
    b: 0x29,
};

const ALIVE_BG: Color = Color::Rgb {
    r: 0x3b,
    g: 0x7e,
    b: 0xd2,
};

pub const HELP: &str = "Press 'r' to toggle simulation, 'q' or 'ctrl+c' to quit.";

/// Draws frames as colored blocks on a terminal
pub struct Painter<W: Write> {
    out: W,
}

impl<W: Write> Painter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSink for Painter<W> {
    fn render(&mut self, frame: &Frame) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(0, 0),
            terminal::Clear(terminal::ClearType::All)
        )?;

        // raw mode: a bare `\n` would not return the cursor to the first column
        for row in frame.grid.rows() {
            for &alive in row {
                if alive {
                    queue!(
                        self.out,
                        style::PrintStyledContent(CELL.with(ALIVE_FG).on(ALIVE_BG))
                    )?;
                } else {
                    queue!(self.out, style::Print(CELL))?;
                }
            }

            queue!(self.out, cursor::MoveToNextLine(1))?;
        }

        queue!(
            self.out,
            cursor::MoveToNextLine(1),
            style::Print(HELP),
            cursor::MoveToNextLine(1),
            style::Print(status_line(frame)),
        )?;

        self.out.flush()
    }
}

/// One line summary of the simulation state, shown under the grid
pub fn status_line(frame: &Frame) -> String {
    let state = if frame.running { "running" } else { "paused" };

    format!(
        "[{state}] generation {}, population {}",
        frame.generation,
        frame.grid.population()
    )
}

/// Puts the terminal into raw mode on the alternate screen for as long as it lives.
///
/// The terminal is restored on drop, so an early return or a panic in the loop does not leave the
/// user's shell in raw mode.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        let guard = Self { _private: () };
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // nothing sensible to do if this fails
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::pattern::parse_pattern;

    fn frame(pattern: &str, running: bool, generation: u64) -> Frame {
        Frame {
            grid: Arc::new(parse_pattern(pattern).unwrap()),
            running,
            generation,
        }
    }

    #[test]
    fn status() {
        insta::assert_snapshot!(
            status_line(&frame("*.\n**\n", false, 0)),
            @"[paused] generation 0, population 3"
        );
        insta::assert_snapshot!(
            status_line(&frame("..\n..\n", true, 12)),
            @"[running] generation 12, population 0"
        );
    }

    #[test]
    fn paints_live_cells_with_background() {
        let mut painter = Painter::new(Vec::new());
        painter.render(&frame("*..*\n.*.*\n..*.\n", true, 3)).unwrap();

        let out = String::from_utf8(painter.into_inner()).unwrap();

        // crossterm drops colors entirely under NO_COLOR
        if std::env::var_os("NO_COLOR").is_none() {
            assert_eq!(out.matches("48;2;59;126;210").count(), 5);
        }
        assert!(out.contains(HELP));
        assert!(out.contains("[running] generation 3, population 5"));
    }

    #[test]
    fn empty_grid_paints_only_text() {
        let mut painter = Painter::new(Vec::new());
        painter.render(&frame("...\n", false, 0)).unwrap();

        let out = String::from_utf8(painter.into_inner()).unwrap();

        assert!(!out.contains("48;2;"));
        assert!(out.contains(HELP));
    }
}
