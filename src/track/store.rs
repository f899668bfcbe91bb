use crate::track::{ConfirmationPolicy, Track};
use crate::trackers::sort::options::SortOptions;
use crate::trackers::sort::voting::SortVoting;
use crate::trackers::sort::SortTrack;
use crate::utils::bbox::{BoundingBox, Detection};
use crate::utils::kalman::kalman_sort_box::SortBoxKalmanFilter;
use anyhow::Result;
use log::{debug, trace};

/// Registry of live tracks; owns the tracks, the identity counter and the lifecycle policy
///
/// Tracks are kept in creation order, so the reported tracks are ordered by id.
///
#[derive(Debug, Clone)]
pub struct TrackStore {
    tracks: Vec<Track>,
    track_id: u64,
    filter: SortBoxKalmanFilter,
    voting: SortVoting,
    max_age: usize,
    min_hits: usize,
    confirmation: ConfirmationPolicy,
}

impl TrackStore {
    pub fn new(opts: &SortOptions) -> Self {
        Self {
            tracks: Vec::new(),
            track_id: 0,
            filter: opts.kalman.clone(),
            voting: SortVoting::new(opts.iou_threshold),
            max_age: opts.max_age,
            min_hits: opts.min_hits,
            confirmation: opts.confirmation,
        }
    }

    fn gen_track_id(&mut self) -> u64 {
        self.track_id += 1;
        self.track_id
    }

    fn spawn(&mut self, bbox: &BoundingBox) {
        let track_id = self.gen_track_id();
        trace!("New track {} at {:?}", track_id, bbox);
        self.tracks.push(Track::new(track_id, bbox, &self.filter));
    }

    /// Runs one frame of the lifecycle: predict, associate, update, spawn, expire, report
    ///
    /// # Parameters
    /// * `detections` - the detections of the current frame, in any order
    ///
    /// Returns the confirmed live tracks.
    ///
    pub fn process(&mut self, detections: &[Detection]) -> Result<Vec<SortTrack>> {
        let boxes = detections.iter().map(Detection::bbox).collect::<Vec<_>>();

        if self.tracks.is_empty() {
            for bbox in &boxes {
                self.spawn(bbox);
            }
        } else {
            let filter = &self.filter;
            let predictions = self
                .tracks
                .iter_mut()
                .map(|t| t.predict(filter))
                .collect::<Vec<_>>();

            let association = self.voting.associate(&boxes, &predictions);
            debug!(
                "Matched: {}, unmatched detections: {}, unmatched tracks: {}",
                association.matches.len(),
                association.unmatched_detections.len(),
                association.unmatched_tracks.len()
            );

            for &(d, t) in &association.matches {
                self.tracks[t].update(&boxes[d], &self.filter)?;
            }

            for &d in &association.unmatched_detections {
                self.spawn(&boxes[d]);
            }
        }

        let max_age = self.max_age;
        self.tracks.retain(|t| {
            let alive = t.time_since_update() <= max_age;
            if !alive {
                trace!(
                    "Track {} expired after {} idle frames",
                    t.get_track_id(),
                    t.time_since_update()
                );
            }
            alive
        });

        let (policy, min_hits) = (self.confirmation, self.min_hits);
        Ok(self
            .tracks
            .iter_mut()
            .filter_map(|t| {
                if t.check_confirmation(policy, min_hits) {
                    Some(SortTrack::from(&*t))
                } else {
                    None
                }
            })
            .collect())
    }

    /// All the live tracks, tentative ones included
    ///
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn get(&self, track_id: u64) -> Option<&Track> {
        self.tracks.iter().find(|t| t.get_track_id() == track_id)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// The last assigned track id, `0` when no track was ever created
    ///
    pub fn last_track_id(&self) -> u64 {
        self.track_id
    }

    /// Drops every live track; ids issued later still never repeat the dropped ones
    ///
    pub fn clear(&mut self) {
        self.tracks.clear();
    }
}
