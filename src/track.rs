use crate::utils::bbox::BoundingBox;
use crate::utils::kalman::kalman_sort_box::{SortBoxKalmanFilter, DIM_SORT_STATE};
use crate::utils::kalman::KalmanState;
use crate::Errors;
use anyhow::Result;

/// Track registry that runs the per-frame lifecycle
pub mod store;

/// Rule deciding when a tentative track becomes confirmed
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfirmationPolicy {
    /// every match since creation counts, misses in between do not reset the count
    #[default]
    Cumulative,
    /// the last `min_hits` frames must all be matches
    Consecutive,
}

/// Single tracked object: stable identity plus its motion estimator
///
#[derive(Debug, Clone)]
pub struct Track {
    id: u64,
    state: KalmanState<DIM_SORT_STATE>,
    observed_bbox: BoundingBox,
    hits: usize,
    hit_streak: usize,
    age: usize,
    time_since_update: usize,
    confirmed: bool,
}

impl Track {
    /// Creates the track from its first observation
    ///
    /// # Parameters
    /// * `id` - unique track ID
    /// * `bbox` - the observed box
    /// * `filter` - the filter the state is initialized with
    ///
    pub fn new(id: u64, bbox: &BoundingBox, filter: &SortBoxKalmanFilter) -> Self {
        Self {
            id,
            state: filter.initiate(&bbox.into()),
            observed_bbox: *bbox,
            hits: 1,
            hit_streak: 1,
            age: 0,
            time_since_update: 0,
            confirmed: false,
        }
    }

    /// Advances the state by one frame and returns the predicted box
    ///
    /// Must be called once per frame, before association.
    ///
    pub fn predict(&mut self, filter: &SortBoxKalmanFilter) -> BoundingBox {
        self.state = filter.predict(&self.state);
        self.age += 1;
        if self.time_since_update > 0 {
            self.hit_streak = 0;
        }
        self.time_since_update += 1;
        self.bbox()
    }

    /// Corrects the state with the matched observation
    ///
    pub fn update(&mut self, bbox: &BoundingBox, filter: &SortBoxKalmanFilter) -> Result<()> {
        self.state = filter
            .update(&self.state, &bbox.into())
            .ok_or(Errors::SingularInnovationCovariance(self.id))?;
        self.observed_bbox = *bbox;
        self.time_since_update = 0;
        self.hits += 1;
        self.hit_streak += 1;
        Ok(())
    }

    /// Latches the confirmation flag once the policy is satisfied, returns the flag
    ///
    pub fn check_confirmation(&mut self, policy: ConfirmationPolicy, min_hits: usize) -> bool {
        if !self.confirmed {
            self.confirmed = match policy {
                ConfirmationPolicy::Cumulative => self.hits >= min_hits,
                ConfirmationPolicy::Consecutive => self.hit_streak >= min_hits,
            };
        }
        self.confirmed
    }

    pub fn get_track_id(&self) -> u64 {
        self.id
    }

    /// Filter-smoothed box of the current state
    ///
    pub fn bbox(&self) -> BoundingBox {
        BoundingBox::from(&self.state)
    }

    /// The last box passed by the detector
    ///
    pub fn observed_bbox(&self) -> BoundingBox {
        self.observed_bbox
    }

    pub fn state(&self) -> &KalmanState<DIM_SORT_STATE> {
        &self.state
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn hit_streak(&self) -> usize {
        self.hit_streak
    }

    pub fn age(&self) -> usize {
        self.age
    }

    pub fn time_since_update(&self) -> usize {
        self.time_since_update
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }
}
