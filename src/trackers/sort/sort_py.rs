use crate::trackers::sort::options::SortOptions;
use crate::trackers::sort::simple_api::Sort;
use crate::trackers::sort::{DEFAULT_MAX_AGE, DEFAULT_MIN_HITS, DEFAULT_SORT_IOU_THRESHOLD};
use crate::utils::bbox::Detection;
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

#[pyclass]
#[pyo3(name = "Sort")]
pub struct PySort(pub Sort);

#[pymethods]
impl PySort {
    #[new]
    #[pyo3(signature = (
        max_age = DEFAULT_MAX_AGE,
        min_hits = DEFAULT_MIN_HITS,
        iou_threshold = DEFAULT_SORT_IOU_THRESHOLD
    ))]
    pub fn new_py(max_age: usize, min_hits: usize, iou_threshold: f32) -> PyResult<Self> {
        let opts = SortOptions::default()
            .max_age(max_age)
            .min_hits(min_hits)
            .iou_threshold(iou_threshold);
        Sort::new(opts)
            .map(Self)
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Receive tracking information for the detections of the next frame
    ///
    /// # Parameters
    /// * `detections` - `(x1, y1, x2, y2, confidence)` rows, may be empty
    ///
    /// Returns `(x1, y1, x2, y2, track_id)` rows of the confirmed tracks.
    ///
    #[pyo3(signature = (detections))]
    pub fn update(
        &mut self,
        py: Python<'_>,
        detections: Vec<(f32, f32, f32, f32, f32)>,
    ) -> PyResult<Vec<(f32, f32, f32, f32, u64)>> {
        let detections = detections
            .into_iter()
            .map(|(x1, y1, x2, y2, c)| Detection::new(x1, y1, x2, y2, c))
            .collect::<Vec<_>>();

        let tracks = py
            .allow_threads(|| self.0.update(&detections))
            .map_err(|e| PyRuntimeError::new_err(e.to_string()))?;

        Ok(tracks
            .iter()
            .map(|t| {
                let [x1, y1, x2, y2] = t.predicted_bbox.as_array();
                (x1, y1, x2, y2, t.id)
            })
            .collect())
    }

    #[pyo3(signature = ())]
    pub fn frame_count(&self) -> usize {
        self.0.frame_count()
    }

    #[pyo3(signature = ())]
    pub fn reset(&mut self) {
        self.0.reset()
    }
}
