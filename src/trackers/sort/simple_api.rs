use crate::store::TrackStore;
use crate::trackers::sort::options::SortOptions;
use crate::trackers::sort::SortTrack;
use crate::utils::bbox::Detection;
use anyhow::Result;
use log::debug;

/// Easy to use SORT tracker implementation
///
/// One instance tracks one video stream; frames must be passed strictly in order. Independent
/// streams use independent instances, the identity space is per instance.
///
#[derive(Debug, Clone)]
pub struct Sort {
    store: TrackStore,
    opts: SortOptions,
    frame: usize,
}

impl Default for Sort {
    fn default() -> Self {
        let opts = SortOptions::default();
        Self {
            store: TrackStore::new(&opts),
            opts,
            frame: 0,
        }
    }
}

impl Sort {
    /// Creates new tracker
    ///
    /// # Parameters
    /// * `opts` - tracker configuration, validated here
    ///
    pub fn new(opts: SortOptions) -> Result<Self> {
        opts.validate()?;
        Ok(Self {
            store: TrackStore::new(&opts),
            opts,
            frame: 0,
        })
    }

    /// Receive tracking information for the detections of the next frame
    ///
    /// # Parameters
    /// * `detections` - bounding boxes received from a detector
    ///
    /// Returns the confirmed live tracks ordered by id. A track missing from the result was
    /// either not confirmed yet or has expired.
    ///
    pub fn update(&mut self, detections: &[Detection]) -> Result<Vec<SortTrack>> {
        self.frame += 1;
        let tracks = self.store.process(detections)?;
        debug!(
            "Frame {}: {} detections, {} live tracks, {} reported",
            self.frame,
            detections.len(),
            self.store.len(),
            tracks.len()
        );
        Ok(tracks)
    }

    /// The number of frames processed since creation or the last reset
    ///
    pub fn frame_count(&self) -> usize {
        self.frame
    }

    /// All live tracks, including the ones not confirmed yet
    ///
    pub fn active_tracks(&self) -> Vec<SortTrack> {
        self.store.tracks().iter().map(SortTrack::from).collect()
    }

    pub fn options(&self) -> &SortOptions {
        &self.opts
    }

    /// Drops all live tracks and restarts the frame counter; ids are not reused afterwards
    ///
    pub fn reset(&mut self) {
        self.store.clear();
        self.frame = 0;
    }
}
