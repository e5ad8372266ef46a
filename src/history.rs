use log::debug;

use crate::buffer::{PixelBuffer, Snapshot, SnapshotEncoding};
use crate::error::{CanvasError, CanvasResult};

/// Linear undo history of full-canvas snapshots.
///
/// The store is never empty: it starts with the blank canvas and `cursor`
/// always indexes the snapshot matching what is on screen. Saving while the
/// cursor is behind the end drops every snapshot after it. There is no redo.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    snapshots: Vec<Snapshot>,
    cursor: usize,
    /// Oldest snapshots are evicted beyond this many entries
    limit: Option<usize>,
    encoding: SnapshotEncoding,
}

// Never empty, so there is no `is_empty`
#[allow(clippy::len_without_is_empty)]
impl HistoryStore {
    /// Start a history whose first entry is the current state of `buffer`
    pub fn new(buffer: &PixelBuffer) -> Self {
        Self {
            snapshots: vec![buffer.snapshot()],
            cursor: 0,
            limit: None,
            encoding: SnapshotEncoding::Raw,
        }
    }

    /// Like [`HistoryStore::new`] with a depth limit and snapshot encoding
    pub fn with_options(
        buffer: &PixelBuffer,
        limit: Option<usize>,
        encoding: SnapshotEncoding,
    ) -> CanvasResult<Self> {
        Ok(Self {
            snapshots: vec![buffer.snapshot_with(encoding)?],
            cursor: 0,
            // A limit below 1 would leave nothing to restore to
            limit: limit.map(|l| l.max(1)),
            encoding,
        })
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.cursor]
    }

    /// Append the state of `buffer`, abandoning any states after the cursor
    pub fn save_state(&mut self, buffer: &PixelBuffer) -> CanvasResult<()> {
        let snapshot = buffer.snapshot_with(self.encoding)?;
        let abandoned = self.snapshots.len() - (self.cursor + 1);
        if abandoned > 0 {
            debug!("Dropping {abandoned} undone states");
        }
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        self.cursor = self.snapshots.len() - 1;

        if let Some(limit) = self.limit {
            let excess = self.snapshots.len().saturating_sub(limit);
            if excess > 0 {
                self.snapshots.drain(..excess);
                self.cursor -= excess;
            }
        }
        Ok(())
    }

    /// Step back one state and restore it into `buffer`.
    ///
    /// Fails with [`CanvasError::EmptyHistory`] at the first entry, leaving both
    /// the store and the buffer untouched.
    pub fn undo(&mut self, buffer: &mut PixelBuffer) -> CanvasResult<()> {
        if self.cursor == 0 {
            return Err(CanvasError::EmptyHistory);
        }
        buffer.restore(&self.snapshots[self.cursor - 1])?;
        self.cursor -= 1;
        Ok(())
    }
}
