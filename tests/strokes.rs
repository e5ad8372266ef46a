use std::time::{Duration, Instant};

use doodle_canvas::stroke::draw_segment;
use doodle_canvas::{
    CanvasError, HistoryStore, Pixel, PixelBuffer, Point, Rgb, StrokePaint, StrokeRenderer,
    MAX_BRUSH_WIDTH,
};

const RED: Rgb = Rgb::new(255, 0, 0);

fn painted(buffer: &PixelBuffer) -> usize {
    let mut count = 0;
    for y in 0..buffer.height() as i32 {
        for x in 0..buffer.width() as i32 {
            if buffer.get(x, y) != Ok(Pixel::BACKGROUND) {
                count += 1;
            }
        }
    }
    count
}

#[test]
fn test_diagonal_stroke_then_undo() {
    let mut buffer = PixelBuffer::new(10, 10).unwrap();
    let mut history = HistoryStore::new(&buffer);
    let mut renderer = StrokeRenderer::new();

    renderer
        .begin_stroke(Point::new(0, 0), 1, StrokePaint::Color(RED))
        .unwrap();
    renderer.extend_stroke(&mut buffer, Point::new(9, 9)).unwrap();
    let stroke = renderer.end_stroke().unwrap();
    history.save_state(&buffer).unwrap();

    assert_eq!(stroke.points(), &[Point::new(0, 0), Point::new(9, 9)]);
    for i in 0..10 {
        assert_eq!(buffer.get(i, i), Ok(Pixel::rgba(255, 0, 0, 255)));
    }
    assert_eq!(painted(&buffer), 10);

    history.undo(&mut buffer).unwrap();
    assert_eq!(buffer, PixelBuffer::new(10, 10).unwrap());
}

#[test]
fn test_begin_stroke_paints_nothing() {
    let mut buffer = PixelBuffer::new(5, 5).unwrap();
    let mut renderer = StrokeRenderer::new();

    renderer
        .begin_stroke(Point::new(2, 2), 3, StrokePaint::Color(RED))
        .unwrap();

    assert!(renderer.is_drawing());
    assert_eq!(painted(&buffer), 0);
    renderer.extend_stroke(&mut buffer, Point::new(2, 2)).unwrap();
    // A single 3px stamp covers the 3x3 block
    assert_eq!(painted(&buffer), 9);
}

#[test]
fn test_extend_without_begin_fails() {
    let mut buffer = PixelBuffer::new(5, 5).unwrap();
    let mut renderer = StrokeRenderer::new();

    assert_eq!(
        renderer.extend_stroke(&mut buffer, Point::new(1, 1)),
        Err(CanvasError::NotDrawing)
    );
    assert_eq!(renderer.end_stroke(), Err(CanvasError::NotDrawing));
    assert_eq!(painted(&buffer), 0);
}

#[test]
fn test_extend_after_end_fails() {
    let mut buffer = PixelBuffer::new(5, 5).unwrap();
    let mut renderer = StrokeRenderer::new();
    renderer
        .begin_stroke(Point::new(0, 0), 1, StrokePaint::Color(RED))
        .unwrap();
    renderer.end_stroke().unwrap();

    assert_eq!(
        renderer.extend_stroke(&mut buffer, Point::new(4, 4)),
        Err(CanvasError::NotDrawing)
    );
}

#[test]
fn test_zero_width_is_rejected() {
    let mut renderer = StrokeRenderer::new();

    assert_eq!(
        renderer.begin_stroke(Point::new(0, 0), 0, StrokePaint::Erase),
        Err(CanvasError::InvalidWidth(0))
    );
    assert!(!renderer.is_drawing());
}

#[test]
fn test_wide_stroke_has_round_caps() {
    let mut buffer = PixelBuffer::new(20, 20).unwrap();
    let mut renderer = StrokeRenderer::new();
    renderer
        .begin_stroke(Point::new(5, 10), 5, StrokePaint::Color(RED))
        .unwrap();
    renderer.extend_stroke(&mut buffer, Point::new(14, 10)).unwrap();

    let red = Pixel::from(RED);
    // Cap extends past the end points by the radius
    assert_eq!(buffer.get(3, 10), Ok(red));
    assert_eq!(buffer.get(16, 10), Ok(red));
    assert_eq!(buffer.get(17, 10), Ok(Pixel::WHITE));
    assert_eq!(buffer.get(10, 8), Ok(red));
    assert_eq!(buffer.get(10, 12), Ok(red));
    assert_eq!(buffer.get(10, 13), Ok(Pixel::WHITE));
    // Corners of the cap's bounding box stay clear
    assert_eq!(buffer.get(3, 8), Ok(Pixel::WHITE));
}

#[test]
fn test_erase_paints_background() {
    let mut buffer = PixelBuffer::filled(6, 6, Pixel::BLACK).unwrap();
    let mut renderer = StrokeRenderer::new();
    renderer
        .begin_stroke(Point::new(0, 3), 1, StrokePaint::Erase)
        .unwrap();
    renderer.extend_stroke(&mut buffer, Point::new(5, 3)).unwrap();

    for x in 0..6 {
        assert_eq!(buffer.get(x, 3), Ok(Pixel::BACKGROUND));
    }
    assert_eq!(buffer.get(0, 2), Ok(Pixel::BLACK));
}

#[test]
fn test_stroke_off_canvas_is_clipped() {
    let mut buffer = PixelBuffer::new(4, 4).unwrap();
    let mut renderer = StrokeRenderer::new();
    renderer
        .begin_stroke(Point::new(-10, 1), 1, StrokePaint::Color(RED))
        .unwrap();

    renderer.extend_stroke(&mut buffer, Point::new(10, 1)).unwrap();

    assert_eq!(painted(&buffer), 4);
}

#[test]
fn test_recorded_stroke_replays_identically() {
    let mut live = PixelBuffer::new(12, 12).unwrap();
    let mut renderer = StrokeRenderer::new();
    renderer
        .begin_stroke(Point::new(1, 1), 2, StrokePaint::Color(RED))
        .unwrap();
    for p in [Point::new(6, 2), Point::new(9, 9), Point::new(2, 10)] {
        renderer.extend_stroke(&mut live, p).unwrap();
    }
    let stroke = renderer.end_stroke().unwrap();

    let mut replay = PixelBuffer::new(12, 12).unwrap();
    stroke.render(&mut replay);

    assert_eq!(replay, live);
}

#[test]
fn test_far_off_canvas_end_points_do_not_overflow() {
    let mut buffer = PixelBuffer::new(10, 10).unwrap();

    draw_segment(
        &mut buffer,
        Point::new(-1_500_000_000, 0),
        Point::new(1_500_000_000, 0),
        1,
        Pixel::BLACK,
    );
    draw_segment(
        &mut buffer,
        Point::new(i32::MIN, i32::MIN),
        Point::new(i32::MAX, i32::MAX),
        3,
        Pixel::BLACK,
    );

    for x in 0..10 {
        assert_eq!(buffer.get(x, 0), Ok(Pixel::BLACK));
    }
    assert_eq!(buffer.get(5, 5), Ok(Pixel::BLACK));
}

#[test]
fn test_segment_wholly_off_canvas_returns_at_once() {
    let mut buffer = PixelBuffer::new(10, 10).unwrap();
    let start = Instant::now();

    draw_segment(
        &mut buffer,
        Point::new(-200_000_000, 5),
        Point::new(-100_000_000, 5),
        5,
        Pixel::BLACK,
    );

    assert!(start.elapsed() < Duration::from_millis(100));
    assert_eq!(painted(&buffer), 0);
}

#[test]
fn test_brush_edge_just_off_canvas_still_paints() {
    let mut buffer = PixelBuffer::new(10, 10).unwrap();

    // Centre line runs two pixels above the canvas, a 5px brush reaches row 0
    draw_segment(&mut buffer, Point::new(-50, -2), Point::new(50, -2), 5, Pixel::BLACK);

    assert_eq!(buffer.get(4, 0), Ok(Pixel::BLACK));
    assert_eq!(buffer.get(4, 1), Ok(Pixel::WHITE));
}

#[test]
fn test_oversized_width_is_rejected() {
    let mut renderer = StrokeRenderer::new();

    assert_eq!(
        renderer.begin_stroke(Point::new(0, 0), MAX_BRUSH_WIDTH + 1, StrokePaint::Erase),
        Err(CanvasError::InvalidWidth(MAX_BRUSH_WIDTH + 1))
    );
    assert!(!renderer.is_drawing());
    assert!(renderer
        .begin_stroke(Point::new(0, 0), MAX_BRUSH_WIDTH, StrokePaint::Erase)
        .is_ok());
}
