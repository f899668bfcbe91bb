use crate::track::ConfirmationPolicy;
use crate::trackers::sort::{DEFAULT_MAX_AGE, DEFAULT_MIN_HITS, DEFAULT_SORT_IOU_THRESHOLD};
use crate::utils::kalman::kalman_sort_box::SortBoxKalmanFilter;
use crate::Errors;
use anyhow::Result;
use log::warn;

/// Class that is used to configure the SORT tracker
///
/// The options are fixed once the tracker is built.
///
#[derive(Debug, Clone)]
pub struct SortOptions {
    pub max_age: usize,
    pub min_hits: usize,
    pub iou_threshold: f32,
    pub confirmation: ConfirmationPolicy,
    pub kalman: SortBoxKalmanFilter,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            max_age: DEFAULT_MAX_AGE,
            min_hits: DEFAULT_MIN_HITS,
            iou_threshold: DEFAULT_SORT_IOU_THRESHOLD,
            confirmation: ConfirmationPolicy::default(),
            kalman: SortBoxKalmanFilter::default(),
        }
    }
}

impl SortOptions {
    /// The number of frames the track remains alive without being matched.
    ///
    /// A track unmatched for more than `max_age` consecutive frames is removed, and its id is
    /// never issued again.
    ///
    pub fn max_age(mut self, n: usize) -> Self {
        self.max_age = n;
        self
    }

    /// The number of matches (the creating detection included) required before the track is
    /// reported. Values `0` and `1` report the tracks from the frame they are created on.
    ///
    pub fn min_hits(mut self, n: usize) -> Self {
        self.min_hits = n;
        self
    }

    /// Minimal IoU between a detection and a predicted track box to accept them as a match.
    ///
    pub fn iou_threshold(mut self, threshold: f32) -> Self {
        self.iou_threshold = threshold;
        self
    }

    /// How `min_hits` is counted, see [ConfirmationPolicy].
    ///
    pub fn confirmation(mut self, policy: ConfirmationPolicy) -> Self {
        self.confirmation = policy;
        self
    }

    /// Kalman filter with custom noise.
    ///
    pub fn kalman(mut self, filter: SortBoxKalmanFilter) -> Self {
        self.kalman = filter;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.iou_threshold.is_finite() || !(0.0..=1.0).contains(&self.iou_threshold) {
            warn!("Rejected IoU threshold {}", self.iou_threshold);
            return Err(Errors::InvalidIoUThreshold(self.iou_threshold).into());
        }
        Ok(())
    }
}
