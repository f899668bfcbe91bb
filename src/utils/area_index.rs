use crate::trackers::sort::SortTrack;
use std::collections::HashMap;

/// Relative size index of tracked objects, the box area multiplied by a scale factor
///
/// The index is a proxy for comparing objects of the same kind, not an absolute measure.
///
#[derive(Debug, Clone, Copy)]
pub struct AreaIndexEstimator {
    scale_factor: f32,
}

impl Default for AreaIndexEstimator {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl AreaIndexEstimator {
    pub fn new(scale_factor: f32) -> Self {
        Self { scale_factor }
    }

    /// Index per track id, rounded to two decimals
    ///
    pub fn estimate(&self, tracks: &[SortTrack]) -> HashMap<u64, f32> {
        tracks
            .iter()
            .map(|t| (t.id, round2(t.predicted_bbox.area() * self.scale_factor)))
            .collect()
    }

    /// Mean of the indices, `0.0` when there are none
    ///
    pub fn average(indices: &HashMap<u64, f32>) -> f32 {
        if indices.is_empty() {
            return 0.0;
        }
        round2(indices.values().sum::<f32>() / indices.len() as f32)
    }
}

fn round2(v: f32) -> f32 {
    (v * 100.0).round() / 100.0
}
