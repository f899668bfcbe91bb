//! SORT multi-object tracker.
//!
//! Every tracked object owns a constant-velocity Kalman filter over its box
//! `[cx, cy, s, r]`. On each frame the live filters are predicted and matched to the
//! new detections with a globally optimal IoU assignment. Tracks that stay unmatched
//! for more than `max_age` frames are dropped.
//!
//! ```
//! use sortrack::prelude::*;
//!
//! let mut tracker = Sort::new(SortOptions::default().min_hits(1)).unwrap();
//! let tracks = tracker
//!     .update(&[Detection::new(10.0, 10.0, 50.0, 90.0, 0.9)])
//!     .unwrap();
//! assert_eq!(tracks.len(), 1);
//! assert_eq!(tracks[0].id, 1);
//! ```

/// Box generators used by demos, benches and tests
pub mod examples;
pub mod prelude;
/// Track (motion estimator) and the track registry
pub mod track;
/// Tracker implementations
pub mod trackers;
/// Geometry, Kalman filter, assignment and statistics utilities
pub mod utils;

#[cfg(feature = "python")]
mod py;

pub use track::store;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Errors {
    #[error("IoU threshold must be a finite value within [0.0, 1.0], got {0}")]
    InvalidIoUThreshold(f32),
    #[error("Innovation covariance of track {0} is not positive definite")]
    SingularInnovationCovariance(u64),
}

pub const EPS: f32 = 0.00001;

/// Approximate equality for float-backed values
///
pub trait EstimateClose {
    fn almost_same(&self, other: &Self, eps: f32) -> bool;
}

impl EstimateClose for f32 {
    fn almost_same(&self, other: &Self, eps: f32) -> bool {
        (self - other).abs() < eps
    }
}
