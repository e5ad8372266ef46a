use std::time::Instant;

use log::debug;

use crate::buffer::PixelBuffer;
use crate::pixel::Pixel;

/// Repaint the 4-connected region of `seed`'s colour with `new_color`.
///
/// The fill runs off an explicit work stack, so region size is only bounded by
/// memory. Candidates outside the buffer are dropped, and a seed outside the
/// buffer makes the whole call a no-op. `new_color` is painted opaque.
///
/// Returns the number of pixels repainted.
pub fn flood_fill(buffer: &mut PixelBuffer, seed_x: i32, seed_y: i32, new_color: Pixel) -> usize {
    let new_color = new_color.opaque();
    let Ok(target) = buffer.get(seed_x, seed_y) else {
        debug!("Fill seed ({seed_x}, {seed_y}) is off canvas, ignoring");
        return 0;
    };
    if target == new_color {
        return 0;
    }

    let started = Instant::now();
    let mut painted = 0;
    let mut stack = vec![(seed_x, seed_y)];

    while let Some((x, y)) = stack.pop() {
        match buffer.get(x, y) {
            Ok(current) if current == target => {}
            _ => continue,
        }
        if buffer.set(x, y, new_color).is_err() {
            continue;
        }
        painted += 1;
        stack.extend([(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]);
    }

    debug!(
        "Filled {painted} pixels from ({seed_x}, {seed_y}) in {:.2}ms",
        started.elapsed().as_secs_f64() * 1000.0
    );
    painted
}
