use doodle_canvas::{CanvasError, HistoryStore, Pixel, PixelBuffer, SnapshotEncoding};

// Paint pixel (i, 0) so each saved state is distinguishable
fn mark(buffer: &mut PixelBuffer, i: i32) {
    buffer.set(i, 0, Pixel::BLACK).unwrap();
}

#[test]
fn test_new_history_holds_blank_canvas() {
    let buffer = PixelBuffer::new(4, 4).unwrap();
    let history = HistoryStore::new(&buffer);

    assert_eq!(history.len(), 1);
    assert_eq!(history.cursor(), 0);
    assert!(!history.can_undo());
    assert_eq!(history.current(), &buffer.snapshot());
}

#[test]
fn test_restore_then_snapshot_matches_original() {
    let mut buffer = PixelBuffer::new(6, 3).unwrap();
    mark(&mut buffer, 2);
    let original = buffer.snapshot();

    buffer.clear();
    buffer.restore(&original).unwrap();

    assert_eq!(buffer.snapshot(), original);
}

#[test]
fn test_png_snapshot_restores_exact_bytes() {
    let mut buffer = PixelBuffer::new(6, 3).unwrap();
    buffer.set(5, 2, Pixel::rgba(12, 34, 56, 255)).unwrap();
    let expected = buffer.as_bytes().to_vec();
    let snapshot = buffer.snapshot_with(SnapshotEncoding::Png).unwrap();

    buffer.clear();
    buffer.restore(&snapshot).unwrap();

    assert_eq!(snapshot.encoding(), SnapshotEncoding::Png);
    assert_eq!(buffer.as_bytes(), expected.as_slice());
}

#[test]
fn test_restore_rejects_other_size() {
    let small = PixelBuffer::new(2, 2).unwrap();
    let mut large = PixelBuffer::new(3, 3).unwrap();

    let result = large.restore(&small.snapshot());

    assert!(matches!(result, Err(CanvasError::SnapshotMismatch { .. })));
}

#[test]
fn test_undo_returns_to_previous_save() {
    let mut buffer = PixelBuffer::new(8, 1).unwrap();
    let mut history = HistoryStore::new(&buffer);

    let mut states = Vec::new();
    for i in 0..4 {
        mark(&mut buffer, i);
        history.save_state(&buffer).unwrap();
        states.push(buffer.clone());
    }
    history.undo(&mut buffer).unwrap();

    assert_eq!(buffer, states[2]);
    assert_eq!(history.cursor(), 3);
}

#[test]
fn test_undo_at_start_is_noop() {
    let mut buffer = PixelBuffer::new(4, 4).unwrap();
    let mut history = HistoryStore::new(&buffer);
    mark(&mut buffer, 1);
    let before = buffer.clone();

    assert_eq!(history.undo(&mut buffer), Err(CanvasError::EmptyHistory));
    assert_eq!(buffer, before);
    assert_eq!(history.cursor(), 0);
}

#[test]
fn test_save_after_undo_truncates_future() {
    let mut buffer = PixelBuffer::new(8, 1).unwrap();
    let mut history = HistoryStore::new(&buffer);

    // Saves A, B, C
    for i in 0..3 {
        mark(&mut buffer, i);
        history.save_state(&buffer).unwrap();
    }
    history.undo(&mut buffer).unwrap();
    history.undo(&mut buffer).unwrap();
    // Back at A; D replaces B and C
    mark(&mut buffer, 7);
    history.save_state(&buffer).unwrap();
    let d = buffer.clone();
    assert_eq!(history.len(), 3);

    history.undo(&mut buffer).unwrap();
    let a = buffer.clone();
    history.undo(&mut buffer).unwrap();
    assert_eq!(history.undo(&mut buffer), Err(CanvasError::EmptyHistory));

    // Three undos land on the blank canvas; one step before D was A
    assert_eq!(buffer, PixelBuffer::new(8, 1).unwrap());
    assert_eq!(a.get(0, 0), Ok(Pixel::BLACK));
    assert_eq!(a.get(1, 0), Ok(Pixel::WHITE));
    assert_eq!(a.get(7, 0), Ok(Pixel::WHITE));
    assert_eq!(d.get(7, 0), Ok(Pixel::BLACK));
    assert_eq!(d.get(1, 0), Ok(Pixel::WHITE));
}

#[test]
fn test_history_limit_drops_oldest() {
    let mut buffer = PixelBuffer::new(8, 1).unwrap();
    let mut history = HistoryStore::with_options(&buffer, Some(3), SnapshotEncoding::Raw).unwrap();

    for i in 0..5 {
        mark(&mut buffer, i);
        history.save_state(&buffer).unwrap();
    }
    assert_eq!(history.len(), 3);
    assert_eq!(history.cursor(), 2);

    history.undo(&mut buffer).unwrap();
    history.undo(&mut buffer).unwrap();
    assert_eq!(history.undo(&mut buffer), Err(CanvasError::EmptyHistory));

    // Oldest kept state has pixels 0..=2 marked
    assert_eq!(buffer.get(2, 0), Ok(Pixel::BLACK));
    assert_eq!(buffer.get(3, 0), Ok(Pixel::WHITE));
}

#[test]
fn test_history_never_empties() {
    let mut buffer = PixelBuffer::new(4, 4).unwrap();
    let mut history =
        HistoryStore::with_options(&buffer, Some(1), SnapshotEncoding::Raw).unwrap();

    for i in 0..3 {
        mark(&mut buffer, i);
        history.save_state(&buffer).unwrap();
        assert_eq!(history.len(), 1);
    }
    assert_eq!(history.undo(&mut buffer), Err(CanvasError::EmptyHistory));
    assert_eq!(history.len(), 1);
    assert_eq!(history.current().width(), 4);
}
