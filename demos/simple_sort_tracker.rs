use anyhow::Result;
use sortrack::examples::BoxGen2;
use sortrack::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let mut tracker = Sort::new(
        SortOptions::default()
            .max_age(DEFAULT_MAX_AGE)
            .min_hits(DEFAULT_MIN_HITS)
            .iou_threshold(DEFAULT_SORT_IOU_THRESHOLD),
    )?;

    let pos_drift = 1.0;
    let box_drift = 0.2;
    let mut b1 = BoxGen2::new_monotonous(100.0, 100.0, 10.0, 15.0, pos_drift, box_drift);
    let mut b2 = BoxGen2::new_monotonous(10.0, 10.0, 12.0, 18.0, pos_drift, box_drift);

    for frame in 0..20 {
        let detections = [b1.next_detection(0.9), b2.next_detection(0.8)];
        let tracks = tracker.update(&detections)?;
        for t in tracks {
            let [x1, y1, x2, y2, id] = t.as_row();
            eprintln!("Frame {frame}: track {id} at ({x1:.1}, {y1:.1}, {x2:.1}, {y2:.1})");
        }
    }

    // the objects leave the scene
    for _ in 0..DEFAULT_MAX_AGE + 1 {
        tracker.update(&[])?;
    }
    eprintln!("Live tracks left: {}", tracker.active_tracks().len());
    Ok(())
}
