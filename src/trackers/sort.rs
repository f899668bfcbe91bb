use crate::track::Track;
use crate::utils::bbox::BoundingBox;

/// Tracker configuration
pub mod options;

/// SORT implementation with a very tiny interface
pub mod simple_api;

/// Voting engine with Hungarian algorithm
///
pub mod voting;

#[cfg(feature = "python")]
pub mod sort_py;

/// Default IoU threshold chosen by the authors of SORT
pub const DEFAULT_SORT_IOU_THRESHOLD: f32 = 0.3;

/// Default number of frames a track survives without being matched
pub const DEFAULT_MAX_AGE: usize = 10;

/// Default number of matches required before a track is reported
pub const DEFAULT_MIN_HITS: usize = 3;

/// Online track structure that contains tracking information for the last tracker frame
///
#[derive(Debug, Clone, PartialEq)]
pub struct SortTrack {
    /// id of the track
    ///
    pub id: u64,
    /// the bbox estimated by KF: post-update when matched in this frame, predicted otherwise
    ///
    pub predicted_bbox: BoundingBox,
    /// the last bbox passed by detector
    ///
    pub observed_bbox: BoundingBox,
    /// number of matches since creation, the creating detection included
    ///
    pub length: usize,
    /// frames elapsed since the last match
    ///
    pub time_since_update: usize,
}

impl SortTrack {
    /// `[x1, y1, x2, y2, id]` record of the estimated box
    ///
    pub fn as_row(&self) -> [f32; 5] {
        let [x1, y1, x2, y2] = self.predicted_bbox.as_array();
        [x1, y1, x2, y2, self.id as f32]
    }
}

impl From<&Track> for SortTrack {
    fn from(track: &Track) -> Self {
        SortTrack {
            id: track.get_track_id(),
            predicted_bbox: track.bbox(),
            observed_bbox: track.observed_bbox(),
            length: track.hits(),
            time_since_update: track.time_since_update(),
        }
    }
}
