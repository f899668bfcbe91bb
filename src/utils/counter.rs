use crate::trackers::sort::SortTrack;
use std::collections::{BTreeMap, HashSet};

/// Counts unique track ids reported over time
///
/// The count for a frame is the number of distinct ids reported up to and including that frame.
///
#[derive(Debug, Clone, Default)]
pub struct UniqueTrackCounter {
    seen: HashSet<u64>,
    series: BTreeMap<usize, usize>,
}

impl UniqueTrackCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the tracks reported for a frame and returns the running total
    ///
    /// # Parameters
    /// * `frame_idx` - frame number or timestamp; a repeated index overwrites its entry
    /// * `tracks` - the tracks reported by the tracker for that frame
    ///
    pub fn update(&mut self, frame_idx: usize, tracks: &[SortTrack]) -> usize {
        self.seen.extend(tracks.iter().map(|t| t.id));
        let total = self.seen.len();
        self.series.insert(frame_idx, total);
        total
    }

    pub fn total(&self) -> usize {
        self.seen.len()
    }

    /// Running totals keyed by frame index
    ///
    pub fn counts(&self) -> &BTreeMap<usize, usize> {
        &self.series
    }
}

#[cfg(test)]
mod tests {
    use crate::trackers::sort::SortTrack;
    use crate::utils::bbox::BoundingBox;
    use crate::utils::counter::UniqueTrackCounter;

    fn track(id: u64) -> SortTrack {
        let bb = BoundingBox::new(0.0, 0.0, 1.0, 1.0);
        SortTrack {
            id,
            predicted_bbox: bb,
            observed_bbox: bb,
            length: 3,
            time_since_update: 0,
        }
    }

    #[test]
    fn counts_unique() {
        let mut c = UniqueTrackCounter::new();
        assert_eq!(c.update(0, &[]), 0);
        assert_eq!(c.update(1, &[track(1), track(2)]), 2);
        assert_eq!(c.update(2, &[track(2)]), 2);
        assert_eq!(c.update(3, &[track(2), track(5)]), 3);
        assert_eq!(c.total(), 3);
        assert_eq!(
            c.counts().iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>(),
            vec![(0, 0), (1, 2), (2, 2), (3, 3)]
        );
    }
}
