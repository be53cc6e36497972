/// jgraph output for projected, shaded triangles
use std::io::Write;

use crate::error::Result;
use crate::geometry::Triangle;
use crate::projection::Viewport;

/// Sink for screen-space triangles
pub trait DrawableEmitter {
    /// Called once before any triangle
    fn begin(&mut self, viewport: &Viewport) -> Result<()>;

    fn emit(&mut self, triangle: &Triangle) -> Result<()>;

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Writes a jgraph document: a graph with hidden axes spanning the viewport,
/// a black background and one filled polygon per triangle.
pub struct JgraphWriter<W: Write> {
    writer: W,
    outline_gray: f32,
}

impl<W: Write> JgraphWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            outline_gray: 0.0,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DrawableEmitter for JgraphWriter<W> {
    fn begin(&mut self, viewport: &Viewport) -> Result<()> {
        let (w, h) = (viewport.width, viewport.height);
        write!(self.writer, "newgraph\n\n")?;
        writeln!(self.writer, "xaxis min 0 max {} size 2 hash 0 nodraw", w)?;
        write!(self.writer, "yaxis min 0 max {} size 2 hash 0 nodraw\n\n", h)?;
        write!(
            self.writer,
            "newline poly pfill 0 pts 0 0  {w} 0  {w} {h}  0 {h}\n\n"
        )?;
        Ok(())
    }

    /// Fill is the triangle's shade clamped to the [0, 1] gray range
    fn emit(&mut self, triangle: &Triangle) -> Result<()> {
        let fill = triangle.shade.clamp(0.0, 1.0);
        let [a, b, c] = triangle.vertices;
        write!(
            self.writer,
            "newline poly linethickness 0 gray {:.6} pfill {:.6} pts {:.6} {:.6}  {:.6} {:.6}  {:.6} {:.6}\n\n",
            self.outline_gray, fill, a.x, a.y, b.x, b.y, c.x, c.y
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
