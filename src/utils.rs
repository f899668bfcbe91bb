/// Bounding boxes
pub mod bbox;

/// Pairwise IoU
pub mod iou;

/// Kalman filter
pub mod kalman;

/// Hungarian assignment over float weights
pub mod linear_sum_assignment;

/// Unique identity counting over time
pub mod counter;

/// Relative size index of tracked objects
pub mod area_index;
