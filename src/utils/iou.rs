use crate::utils::bbox::BoundingBox;
use nalgebra::DMatrix;

/// Added to the union so that collapsed boxes never divide by zero
pub const IOU_EPS: f32 = 1e-6;

/// Intersection over union of two axis-aligned boxes
///
/// Non-finite results (produced only by non-finite coordinates) are reported as `0.0`.
///
pub fn iou(l: &BoundingBox, r: &BoundingBox) -> f32 {
    let intersection = BoundingBox::intersection(l, r);
    let union = l.area() + r.area() - intersection;
    let res = intersection / (union + IOU_EPS);
    if res.is_finite() {
        res
    } else {
        0.0
    }
}

/// Pairwise IoU matrix
///
/// # Parameters
/// * `rows` - boxes laid along the rows (detections)
/// * `cols` - boxes laid along the columns (track predictions)
///
/// Returns `rows.len() × cols.len()` matrix, all-zero of the proper shape when either side is empty.
///
pub fn iou_batch(rows: &[BoundingBox], cols: &[BoundingBox]) -> DMatrix<f32> {
    if rows.is_empty() || cols.is_empty() {
        return DMatrix::zeros(rows.len(), cols.len());
    }
    DMatrix::from_fn(rows.len(), cols.len(), |i, j| iou(&rows[i], &cols[j]))
}
