/// SORT tracker implementation (IoU association, constant velocity Kalman motion model)
///
pub mod sort;
