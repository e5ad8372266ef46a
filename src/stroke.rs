use log::debug;

use crate::buffer::PixelBuffer;
use crate::error::{CanvasError, CanvasResult};
use crate::pixel::{Pixel, Point, Rgb};

/// What a stroke lays down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokePaint {
    Color(Rgb),
    /// Paints the background colour
    Erase,
}

impl StrokePaint {
    pub fn pixel(self) -> Pixel {
        match self {
            Self::Color(rgb) => rgb.into(),
            Self::Erase => Pixel::BACKGROUND,
        }
    }
}

/// One gesture from pointer-down to pointer-up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stroke {
    points: Vec<Point>,
    width: u32,
    paint: StrokePaint,
}

impl Stroke {
    pub fn new(start: Point, width: u32, paint: StrokePaint) -> CanvasResult<Self> {
        if width == 0 || width > MAX_BRUSH_WIDTH {
            return Err(CanvasError::InvalidWidth(width));
        }
        Ok(Self {
            points: vec![start],
            width,
            paint,
        })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn paint(&self) -> StrokePaint {
        self.paint
    }

    /// Rasterize every segment of the stroke into `buffer`
    pub fn render(&self, buffer: &mut PixelBuffer) {
        let pixel = self.paint.pixel();
        for pair in self.points.windows(2) {
            draw_segment(buffer, pair[0], pair[1], self.width, pixel);
        }
    }
}

/// Draws freehand strokes incrementally, one segment per pointer move
#[derive(Debug, Default)]
pub struct StrokeRenderer {
    current: Option<Stroke>,
}

impl StrokeRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_drawing(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Stroke> {
        self.current.as_ref()
    }

    /// Open a stroke at `start`. Nothing is painted until the first extension.
    pub fn begin_stroke(&mut self, start: Point, width: u32, paint: StrokePaint) -> CanvasResult<()> {
        let stroke = Stroke::new(start, width, paint)?;
        if let Some(old) = self.current.replace(stroke) {
            debug!("Discarding open stroke of {} points", old.points.len());
        }
        Ok(())
    }

    /// Draw a round-capped segment from the last point to `point`
    pub fn extend_stroke(&mut self, buffer: &mut PixelBuffer, point: Point) -> CanvasResult<()> {
        let stroke = self.current.as_mut().ok_or(CanvasError::NotDrawing)?;
        let last = stroke.points.last().copied().unwrap_or(point);
        draw_segment(buffer, last, point, stroke.width, stroke.paint.pixel());
        stroke.points.push(point);
        Ok(())
    }

    /// Close the open stroke and hand it back
    pub fn end_stroke(&mut self) -> CanvasResult<Stroke> {
        self.current.take().ok_or(CanvasError::NotDrawing)
    }
}

/// Widest brush accepted. Keeps a single stamp small enough to draw per pointer move.
pub const MAX_BRUSH_WIDTH: u32 = 256;

/// Offsets covered by a round brush of `width` pixels centred on a pixel
fn brush_offsets(width: u32) -> Vec<(i32, i32)> {
    let radius = width.clamp(1, MAX_BRUSH_WIDTH) as f32 / 2.0;
    let reach = radius.floor() as i32;
    let limit = radius * radius;
    let mut offsets = Vec::new();
    for dy in -reach..=reach {
        for dx in -reach..=reach {
            if (dx * dx + dy * dy) as f32 <= limit {
                offsets.push((dx, dy));
            }
        }
    }
    offsets
}

/// Clip `from`..`to` to the box `min..=max` (Liang-Barsky).
///
/// Returns `None` when the segment misses the box entirely.
fn clip_segment(
    from: Point,
    to: Point,
    min: i64,
    max_x: i64,
    max_y: i64,
) -> Option<((i64, i64), (i64, i64))> {
    let (x0, y0) = (from.x as f64, from.y as f64);
    let (dx, dy) = (to.x as f64 - x0, to.y as f64 - y0);
    let (mut t0, mut t1) = (0.0_f64, 1.0_f64);

    for (p, q) in [
        (-dx, x0 - min as f64),
        (dx, max_x as f64 - x0),
        (-dy, y0 - min as f64),
        (dy, max_y as f64 - y0),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    let at = |t: f64| ((x0 + t * dx).round() as i64, (y0 + t * dy).round() as i64);
    Some((at(t0), at(t1)))
}

/// Stamp the brush at every Bresenham step between `from` and `to`.
///
/// Stamping at both ends gives round caps, and consecutive segments share
/// their joint stamp which gives round joins. The segment is first clipped to
/// the canvas grown by the brush radius, so the walk never leaves that area
/// however far away the end points are. Pixels off the canvas are skipped.
pub fn draw_segment(buffer: &mut PixelBuffer, from: Point, to: Point, width: u32, pixel: Pixel) {
    let brush = brush_offsets(width);
    let reach = (width.clamp(1, MAX_BRUSH_WIDTH) / 2) as i64;
    let max_x = buffer.width() as i64 - 1 + reach;
    let max_y = buffer.height() as i64 - 1 + reach;
    let Some(((x0, y0), (x1, y1))) = clip_segment(from, to, -reach, max_x, max_y) else {
        return;
    };

    let mut stamp = |cx: i64, cy: i64| {
        for &(dx, dy) in &brush {
            let (x, y) = (cx + dx as i64, cy + dy as i64);
            if x < 0 || y < 0 || x >= buffer.width() as i64 || y >= buffer.height() as i64 {
                continue;
            }
            // In bounds, cannot fail
            let _ = buffer.set(x as i32, y as i32, pixel);
        }
    };

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let (mut x, mut y) = (x0, y0);

    loop {
        stamp(x, y);
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}
