#![feature(test)]

extern crate test;

use sortrack::examples::BoxGen2;
use sortrack::utils::bbox::BoundingBox;
use sortrack::utils::iou::iou_batch;
use sortrack::utils::linear_sum_assignment::linear_sum_assignment;
use test::Bencher;

fn boxes(n: usize, seed: u64) -> Vec<BoundingBox> {
    (0..n)
        .map(|i| {
            BoxGen2::new(60.0 * i as f32, 0.0, 50.0, 50.0, 5.0, 1.0)
                .with_seed(seed + i as u64)
                .next()
                .unwrap()
        })
        .collect()
}

#[bench]
fn iou_batch_100x100(b: &mut Bencher) {
    let dets = boxes(100, 0);
    let preds = boxes(100, 1000);
    b.iter(|| {
        let m = iou_batch(&dets, &preds);
        assert_eq!(m.shape(), (100, 100));
    });
}

#[bench]
fn associate_100x100(b: &mut Bencher) {
    let dets = boxes(100, 0);
    let preds = boxes(100, 1000);
    b.iter(|| {
        let m = iou_batch(&dets, &preds);
        let pairs = linear_sum_assignment(&m);
        assert_eq!(pairs.len(), 100);
    });
}

#[bench]
fn associate_200x50(b: &mut Bencher) {
    let dets = boxes(200, 0);
    let preds = boxes(50, 1000);
    b.iter(|| {
        let m = iou_batch(&dets, &preds);
        let pairs = linear_sum_assignment(&m);
        assert_eq!(pairs.len(), 50);
    });
}
