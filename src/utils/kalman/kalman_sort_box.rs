use crate::utils::bbox::{BoundingBox, ScaleAspectBox};
use crate::utils::kalman::{KalmanState, DT};
use nalgebra::{SMatrix, SVector};

/// Observed components: `[cx, cy, s, r]`
pub const DIM_SORT_BOX: usize = 4;
/// State components: observed ones plus `[vcx, vcy, vs]`; the aspect has no velocity
pub const DIM_SORT_STATE: usize = 7;

const DEFAULT_MEASUREMENT_NOISE: [f32; DIM_SORT_BOX] = [1.0, 1.0, 10.0, 10.0];
const DEFAULT_PROCESS_NOISE: [f32; DIM_SORT_STATE] = [1.0, 1.0, 1.0, 1.0, 0.01, 0.01, 0.0001];
const DEFAULT_INITIAL_VARIANCE: [f32; DIM_SORT_STATE] =
    [10.0, 10.0, 10.0, 10.0, 10000.0, 10000.0, 10000.0];

/// Constant velocity Kalman filter for SORT boxes
///
/// The filter is stateless: it transforms [KalmanState] values owned by the tracks.
///
#[derive(Debug, Clone)]
pub struct SortBoxKalmanFilter {
    motion_matrix: SMatrix<f32, DIM_SORT_STATE, DIM_SORT_STATE>,
    update_matrix: SMatrix<f32, DIM_SORT_BOX, DIM_SORT_STATE>,
    measurement_noise: SMatrix<f32, DIM_SORT_BOX, DIM_SORT_BOX>,
    process_noise: SMatrix<f32, DIM_SORT_STATE, DIM_SORT_STATE>,
    initial_covariance: SMatrix<f32, DIM_SORT_STATE, DIM_SORT_STATE>,
}

/// Default initializer, the tuning used by the authors of SORT
impl Default for SortBoxKalmanFilter {
    fn default() -> Self {
        SortBoxKalmanFilter::new(
            DEFAULT_MEASUREMENT_NOISE,
            DEFAULT_PROCESS_NOISE,
            DEFAULT_INITIAL_VARIANCE,
        )
    }
}

impl SortBoxKalmanFilter {
    /// Constructor with custom noise (shouldn't be used without the need)
    ///
    /// # Parameters
    /// * `measurement_noise` - diagonal of `R` for `[cx, cy, s, r]`
    /// * `process_noise` - diagonal of `Q` for `[cx, cy, s, r, vcx, vcy, vs]`
    /// * `initial_variance` - diagonal of the covariance a new track starts with
    ///
    pub fn new(
        measurement_noise: [f32; DIM_SORT_BOX],
        process_noise: [f32; DIM_SORT_STATE],
        initial_variance: [f32; DIM_SORT_STATE],
    ) -> Self {
        let mut motion_matrix: SMatrix<f32, DIM_SORT_STATE, DIM_SORT_STATE> = SMatrix::identity();

        // cx, cy, s move with their velocities
        for i in 0..DIM_SORT_STATE - DIM_SORT_BOX {
            motion_matrix[(i, DIM_SORT_BOX + i)] = DT as f32;
        }

        SortBoxKalmanFilter {
            motion_matrix,
            update_matrix: SMatrix::identity(),
            measurement_noise: SMatrix::from_diagonal(&SVector::from(measurement_noise)),
            process_noise: SMatrix::from_diagonal(&SVector::from(process_noise)),
            initial_covariance: SMatrix::from_diagonal(&SVector::from(initial_variance)),
        }
    }

    /// Initialize the filter with the first observation, velocities are zero
    ///
    pub fn initiate(&self, bbox: &ScaleAspectBox) -> KalmanState<DIM_SORT_STATE> {
        let mean: SVector<f32, DIM_SORT_STATE> = SVector::from_iterator(
            bbox.as_array()
                .into_iter()
                .chain([0.0; DIM_SORT_STATE - DIM_SORT_BOX]),
        );
        KalmanState {
            mean,
            covariance: self.initial_covariance,
        }
    }

    /// Predicts the state one frame ahead
    ///
    pub fn predict(&self, state: &KalmanState<DIM_SORT_STATE>) -> KalmanState<DIM_SORT_STATE> {
        let mut mean = state.mean;
        // the area must not be driven below zero by its velocity
        if mean[6] + mean[2] <= 0.0 {
            mean[6] = 0.0;
        }

        let mean = self.motion_matrix * mean;
        let covariance =
            self.motion_matrix * state.covariance * self.motion_matrix.transpose()
                + self.process_noise;
        KalmanState { mean, covariance }
    }

    fn project(&self, state: &KalmanState<DIM_SORT_STATE>) -> KalmanState<DIM_SORT_BOX> {
        let mean = self.update_matrix * state.mean;
        let covariance = self.update_matrix * state.covariance * self.update_matrix.transpose()
            + self.measurement_noise;
        KalmanState { mean, covariance }
    }

    /// Updates the state with the current observation
    ///
    /// Returns `None` when the innovation covariance is not positive definite.
    ///
    pub fn update(
        &self,
        state: &KalmanState<DIM_SORT_STATE>,
        measurement: &ScaleAspectBox,
    ) -> Option<KalmanState<DIM_SORT_STATE>> {
        let projected = self.project(state);
        let cholesky = projected.covariance.cholesky()?;

        // K = P Hᵀ S⁻¹, computed as (S⁻¹ H P)ᵀ since P and S are symmetric
        let kalman_gain: SMatrix<f32, DIM_SORT_STATE, DIM_SORT_BOX> = cholesky
            .solve(&(self.update_matrix * state.covariance))
            .transpose();

        let innovation = SVector::<f32, DIM_SORT_BOX>::from(measurement.as_array()) - projected.mean;
        let mean = state.mean + kalman_gain * innovation;

        // Joseph form keeps the covariance symmetric
        let i_kh = SMatrix::<f32, DIM_SORT_STATE, DIM_SORT_STATE>::identity()
            - kalman_gain * self.update_matrix;
        let covariance = i_kh * state.covariance * i_kh.transpose()
            + kalman_gain * self.measurement_noise * kalman_gain.transpose();

        Some(KalmanState { mean, covariance })
    }
}

impl From<&KalmanState<DIM_SORT_STATE>> for ScaleAspectBox {
    fn from(state: &KalmanState<DIM_SORT_STATE>) -> Self {
        ScaleAspectBox::new(state.mean[0], state.mean[1], state.mean[2], state.mean[3])
    }
}

impl From<&KalmanState<DIM_SORT_STATE>> for BoundingBox {
    fn from(state: &KalmanState<DIM_SORT_STATE>) -> Self {
        BoundingBox::from(ScaleAspectBox::from(state))
    }
}
