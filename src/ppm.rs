use std::io::{self, Write};

use crate::Color;

pub const MAX_VALUE: u32 = 255;

/// Streams a plain-text (`P3`) pixmap. Every integer is written on its own line.
pub struct PpmWriter<W: Write> {
    out: W,
    width: usize,
    height: usize,
    written: usize,
}

impl<W: Write> PpmWriter<W> {
    /// Writes the header immediately.
    pub fn new(mut out: W, width: usize, height: usize) -> io::Result<Self> {
        write!(out, "P3\n{}\n{}\n{}\n", width, height, MAX_VALUE)?;
        Ok(Self {
            out,
            width,
            height,
            written: 0,
        })
    }

    pub fn write_pixel(&mut self, color: Color) -> io::Result<()> {
        let (r, g, b) = color.to_rgb();
        write!(self.out, "{}\n{}\n{}\n", r, g, b)?;
        self.written += 1;
        Ok(())
    }

    pub fn pixels_written(&self) -> usize {
        self.written
    }

    /// Flushes and hands back the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        if self.written != self.width * self.height {
            log::warn!(
                "wrote {} pixels for a {}x{} image",
                self.written,
                self.width,
                self.height
            );
        }
        self.out.flush()?;
        Ok(self.out)
    }
}
