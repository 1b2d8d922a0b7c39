//! Terminal progress glyph drawn while a completion lookup is in flight.

use std::io::Write;

/// Braille frames, drawn in order and wrapped.
const FRAMES: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Sink for wait-loop progress. `begin` once, `tick` per interval, `finish` once.
pub trait Progress {
    fn begin(&mut self) {}
    fn tick(&mut self) {}
    fn finish(&mut self) {}
}

/// Draws nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Progress for Silent {}

/// Draws a rotating glyph just after the cursor and puts the cursor back.
///
/// Reserves four columns on `begin`; each frame is ` <glyph> ` followed by a
/// 3-column cursor-left, and `finish` blanks the frame and moves back 4.
/// Write errors are ignored; the glyph is cosmetic.
pub struct Spinner<W: Write> {
    out: W,
    frame: usize,
    drawn: bool,
}

impl<W: Write> Spinner<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            frame: 0,
            drawn: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl Spinner<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Progress for Spinner<W> {
    fn begin(&mut self) {
        self.frame = 0;
        self.drawn = false;
        let _ = write!(self.out, "    ");
        let _ = self.out.flush();
    }

    fn tick(&mut self) {
        let glyph = FRAMES[self.frame % FRAMES.len()];
        self.frame += 1;
        self.drawn = true;
        let _ = write!(self.out, " \x1b[36m{}\x1b[0m \x1b[3D", glyph);
        let _ = self.out.flush();
    }

    fn finish(&mut self) {
        if self.drawn {
            let _ = write!(self.out, "   \x1b[3D");
        }
        let _ = write!(self.out, "\x1b[4D");
        let _ = self.out.flush();
    }
}
