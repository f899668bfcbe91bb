#![feature(test)]

extern crate test;

use sortrack::examples::BoxGen2;
use sortrack::prelude::{Detection, Sort, SortOptions};
use test::Bencher;

#[bench]
fn bench_sort_00010(b: &mut Bencher) {
    bench_sort(10, b);
}

#[bench]
fn bench_sort_00050(b: &mut Bencher) {
    bench_sort(50, b);
}

#[bench]
fn bench_sort_00100(b: &mut Bencher) {
    bench_sort(100, b);
}

#[bench]
fn bench_sort_00500(b: &mut Bencher) {
    bench_sort(500, b);
}

fn bench_sort(objects: usize, b: &mut Bencher) {
    let pos_drift = 1.0;
    let box_drift = 0.01;
    let mut iterators = Vec::default();

    for i in 0..objects {
        iterators.push(
            BoxGen2::new(
                1000.0 * i as f32,
                1000.0 * i as f32,
                50.0,
                50.0,
                pos_drift,
                box_drift,
            )
            .with_seed(i as u64),
        )
    }

    let mut tracker = Sort::new(SortOptions::default().min_hits(1)).unwrap();

    b.iter(|| {
        let detections = iterators
            .iter_mut()
            .map(|i| i.next_detection(0.9))
            .collect::<Vec<Detection>>();
        let tracks = tracker.update(&detections).unwrap();
        assert_eq!(tracks.len(), objects);
    });
    eprintln!("Live tracks: {}", tracker.active_tracks().len());
}
