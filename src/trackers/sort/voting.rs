use crate::utils::bbox::BoundingBox;
use crate::utils::iou::iou_batch;
use crate::utils::linear_sum_assignment::linear_sum_assignment;
use itertools::Itertools;
use log::debug;
use nalgebra::DMatrix;

/// Result of a single association round
///
/// `matches` holds `(detection index, track index)` pairs, every index appears at most once
/// and never in the unmatched lists.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Association {
    pub matches: Vec<(usize, usize)>,
    pub unmatched_detections: Vec<usize>,
    pub unmatched_tracks: Vec<usize>,
}

impl Association {
    fn unmatched(detections: usize, tracks: usize) -> Self {
        Self {
            matches: Vec::new(),
            unmatched_detections: (0..detections).collect(),
            unmatched_tracks: (0..tracks).collect(),
        }
    }
}

/// Voting engine with Hungarian algorithm
///
/// Pairs detections with the predicted track boxes so that the total IoU is maximal, then
/// drops the pairs whose IoU is below the threshold.
///
#[derive(Debug, Clone)]
pub struct SortVoting {
    threshold: f32,
}

impl SortVoting {
    /// # Parameters
    /// * `threshold` - minimal IoU accepted as a match
    ///
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Associates the detections of the current frame with the predicted boxes of live tracks
    ///
    pub fn associate(&self, detections: &[BoundingBox], predictions: &[BoundingBox]) -> Association {
        if detections.is_empty() || predictions.is_empty() {
            return Association::unmatched(detections.len(), predictions.len());
        }
        let overlaps = iou_batch(detections, predictions);
        self.winners(&overlaps)
    }

    /// Solves the assignment over a ready `detections × tracks` IoU matrix
    ///
    pub fn winners(&self, overlaps: &DMatrix<f32>) -> Association {
        let (detections, tracks) = overlaps.shape();
        if detections == 0 || tracks == 0 {
            return Association::unmatched(detections, tracks);
        }

        let (matches, rejected): (Vec<_>, Vec<_>) = linear_sum_assignment(overlaps)
            .into_iter()
            .partition(|&(d, t)| overlaps[(d, t)] >= self.threshold);

        if !rejected.is_empty() {
            debug!(
                "Pairs below IoU threshold {}: {}",
                self.threshold,
                rejected
                    .iter()
                    .map(|&(d, t)| format!("{d}->{t} ({:.3})", overlaps[(d, t)]))
                    .join(", ")
            );
        }

        let mut matched_detections = vec![false; detections];
        let mut matched_tracks = vec![false; tracks];
        for &(d, t) in &matches {
            matched_detections[d] = true;
            matched_tracks[t] = true;
        }

        Association {
            unmatched_detections: (0..detections).filter(|&d| !matched_detections[d]).collect(),
            unmatched_tracks: (0..tracks).filter(|&t| !matched_tracks[t]).collect(),
            matches,
        }
    }
}

#[cfg(test)]
mod voting_tests {
    use crate::trackers::sort::voting::{Association, SortVoting};
    use crate::trackers::sort::DEFAULT_SORT_IOU_THRESHOLD;
    use crate::utils::bbox::BoundingBox;
    use nalgebra::DMatrix;

    #[test]
    fn test_voting() {
        let v = SortVoting::new(0.3);
        let overlaps = DMatrix::from_row_slice(
            3,
            3,
            &[
                0.6, 0.4, 0.4, //
                0.5, 0.69, 0.4, //
                0.2, 0.27, 0.28,
            ],
        );
        let winners = v.winners(&overlaps);
        assert_eq!(
            winners,
            Association {
                matches: vec![(0, 0), (1, 1)],
                unmatched_detections: vec![2],
                unmatched_tracks: vec![2],
            }
        );
    }

    #[test]
    fn global_optimum_over_boxes() {
        // detection 0 prefers track 0, but taking it greedily leaves detection 1 with a
        // poor overlap against track 1
        let tracks = [
            BoundingBox::new(0.0, 0.0, 10.0, 10.0),
            BoundingBox::new(4.0, 0.0, 14.0, 10.0),
        ];
        let detections = [
            BoundingBox::new(1.5, 0.0, 11.5, 10.0),
            BoundingBox::new(-1.0, 0.0, 9.0, 10.0),
        ];
        let v = SortVoting::new(DEFAULT_SORT_IOU_THRESHOLD);
        let winners = v.associate(&detections, &tracks);
        assert_eq!(winners.matches, vec![(0, 1), (1, 0)]);
        assert!(winners.unmatched_detections.is_empty());
        assert!(winners.unmatched_tracks.is_empty());
    }

    #[test]
    fn below_threshold_is_unmatched() {
        let v = SortVoting::new(DEFAULT_SORT_IOU_THRESHOLD);
        let tracks = [
            BoundingBox::new(0.0, 0.0, 10.0, 10.0),
            BoundingBox::new(100.0, 100.0, 110.0, 110.0),
        ];
        let detections = [
            BoundingBox::new(8.0, 8.0, 18.0, 18.0),
            BoundingBox::new(107.0, 100.0, 117.0, 110.0),
        ];
        let winners = v.associate(&detections, &tracks);
        assert!(winners.matches.is_empty());
        assert_eq!(winners.unmatched_detections, vec![0, 1]);
        assert_eq!(winners.unmatched_tracks, vec![0, 1]);
    }

    #[test]
    fn threshold_is_inclusive() {
        let v = SortVoting::new(0.5);
        let winners = v.winners(&DMatrix::from_row_slice(1, 1, &[0.5]));
        assert_eq!(winners.matches, vec![(0, 0)]);
    }

    #[test]
    fn empty_sides() {
        let v = SortVoting::new(DEFAULT_SORT_IOU_THRESHOLD);
        let boxes = [
            BoundingBox::new(0.0, 0.0, 10.0, 10.0),
            BoundingBox::new(20.0, 0.0, 30.0, 10.0),
        ];

        let winners = v.associate(&[], &boxes);
        assert!(winners.matches.is_empty());
        assert!(winners.unmatched_detections.is_empty());
        assert_eq!(winners.unmatched_tracks, vec![0, 1]);

        let winners = v.associate(&boxes, &[]);
        assert!(winners.matches.is_empty());
        assert_eq!(winners.unmatched_detections, vec![0, 1]);
        assert!(winners.unmatched_tracks.is_empty());
    }

    #[test]
    fn more_detections_than_tracks() {
        let v = SortVoting::new(DEFAULT_SORT_IOU_THRESHOLD);
        let tracks = [BoundingBox::new(0.0, 0.0, 10.0, 10.0)];
        let detections = [
            BoundingBox::new(50.0, 50.0, 60.0, 60.0),
            BoundingBox::new(1.0, 1.0, 11.0, 11.0),
            BoundingBox::new(0.0, 5.0, 10.0, 15.0),
        ];
        let winners = v.associate(&detections, &tracks);
        assert_eq!(winners.matches, vec![(1, 0)]);
        assert_eq!(winners.unmatched_detections, vec![0, 2]);
        assert!(winners.unmatched_tracks.is_empty());
    }
}
