use crate::canvas::raster::RgbaBuffer;
use crate::canvas::surface::Surface;

/// Pixel-snapshot undo store. One snapshot per stroke, popped verbatim back
/// onto the surface; there is no redo stack in this design.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SnapshotHistory {
    stack: Vec<RgbaBuffer>,
    limit: Option<usize>,
}

impl SnapshotHistory {
    /// Unbounded history is the default. A depth cap evicts the oldest
    /// snapshot once the stack is full; `Some(0)` disables snapshots
    /// entirely.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            stack: Vec::new(),
            limit,
        }
    }

    pub fn push(&mut self, snapshot: RgbaBuffer) {
        if let Some(limit) = self.limit {
            if limit == 0 {
                return;
            }
            while self.stack.len() >= limit {
                self.stack.remove(0);
            }
        }
        self.stack.push(snapshot);
    }

    /// Pop the most recent snapshot and write it back onto `surface`,
    /// replacing its entire raster content. Silent no-op when empty.
    pub fn pop_and_apply(&mut self, surface: &mut Surface) -> bool {
        let Some(snapshot) = self.stack.pop() else {
            tracing::debug!("undo requested with empty history");
            return false;
        };
        surface.apply_snapshot(snapshot);
        true
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::SnapshotHistory;
    use crate::canvas::model::Rgba;
    use crate::canvas::raster::RgbaBuffer;
    use crate::canvas::surface::Surface;

    fn snapshot(fill: Rgba) -> RgbaBuffer {
        RgbaBuffer::new(4, 4, fill)
    }

    #[test]
    fn pop_applies_most_recent_snapshot_first() {
        let mut history = SnapshotHistory::default();
        let mut surface = Surface::new(4, 4);
        history.push(snapshot(Rgba::rgba(1, 1, 1, 255)));
        history.push(snapshot(Rgba::rgba(2, 2, 2, 255)));

        assert!(history.pop_and_apply(&mut surface));
        assert_eq!(surface.raster().pixel(0, 0), Rgba::rgba(2, 2, 2, 255));
        assert_eq!(history.len(), 1);

        assert!(history.pop_and_apply(&mut surface));
        assert_eq!(surface.raster().pixel(0, 0), Rgba::rgba(1, 1, 1, 255));
        assert!(history.is_empty());
    }

    #[test]
    fn pop_on_empty_history_is_a_noop() {
        let mut history = SnapshotHistory::default();
        let mut surface = Surface::new(4, 4);
        let before = surface.raster().clone();

        assert!(!history.pop_and_apply(&mut surface));
        assert_eq!(surface.raster(), &before);
    }

    #[test]
    fn capped_history_evicts_oldest_snapshot() {
        let mut history = SnapshotHistory::with_limit(Some(2));
        history.push(snapshot(Rgba::rgba(1, 0, 0, 255)));
        history.push(snapshot(Rgba::rgba(2, 0, 0, 255)));
        history.push(snapshot(Rgba::rgba(3, 0, 0, 255)));
        assert_eq!(history.len(), 2);

        let mut surface = Surface::new(4, 4);
        history.pop_and_apply(&mut surface);
        assert_eq!(surface.raster().pixel(0, 0), Rgba::rgba(3, 0, 0, 255));
        history.pop_and_apply(&mut surface);
        assert_eq!(surface.raster().pixel(0, 0), Rgba::rgba(2, 0, 0, 255));
        assert!(history.is_empty());
    }

    #[test]
    fn zero_limit_disables_snapshots() {
        let mut history = SnapshotHistory::with_limit(Some(0));
        history.push(snapshot(Rgba::BLACK));
        assert!(history.is_empty());
    }
}
