// Original source code idea from
// https://github.com/abewley/sort/blob/master/sort.py
//
use nalgebra::{SMatrix, SVector};

/// Kalman filter for the SORT box state `[cx, cy, s, r, vcx, vcy, vs]`
pub mod kalman_sort_box;

/// Time step between two consecutive frames
pub const DT: u64 = 1;

/// Kalman filter state: the mean vector and its covariance
///
#[derive(Debug, Clone, Copy)]
pub struct KalmanState<const X: usize> {
    pub mean: SVector<f32, X>,
    pub covariance: SMatrix<f32, X, X>,
}

impl<const X: usize> KalmanState<X> {
    pub fn new(mean: SVector<f32, X>, covariance: SMatrix<f32, X, X>) -> Self {
        Self { mean, covariance }
    }

    pub fn mean(&self) -> &SVector<f32, X> {
        &self.mean
    }

    pub fn covariance(&self) -> &SMatrix<f32, X, X> {
        &self.covariance
    }

    /// `true` when both the mean and the covariance hold only finite values
    ///
    pub fn is_finite(&self) -> bool {
        self.mean.iter().all(|v| v.is_finite()) && self.covariance.iter().all(|v| v.is_finite())
    }
}
