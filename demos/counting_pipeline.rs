use anyhow::Result;
use log::info;
use sortrack::examples::BoxGen2;
use sortrack::prelude::*;

const FRAMES: usize = 120;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut tracker = Sort::new(SortOptions::default().max_age(5))?;
    let mut counter = UniqueTrackCounter::new();
    let estimator = AreaIndexEstimator::new(0.001);

    // objects enter the scene one after another and stay visible for 40 frames
    let mut objects = (0..4)
        .map(|i| {
            let gen = BoxGen2::new_monotonous(
                150.0 * i as f32,
                50.0,
                40.0 + 10.0 * i as f32,
                80.0,
                2.0,
                0.2,
            )
            .with_seed(i as u64);
            (20 * i, gen)
        })
        .collect::<Vec<_>>();

    for frame in 0..FRAMES {
        let detections = objects
            .iter_mut()
            .filter(|(start, _)| (*start..*start + 40).contains(&frame))
            .map(|(_, gen)| gen.next_detection(0.9))
            .collect::<Vec<_>>();

        let tracks = tracker.update(&detections)?;
        let total = counter.update(frame, &tracks);
        let indices = estimator.estimate(&tracks);

        if frame % 10 == 0 {
            info!(
                "Frame {}: {} visible, {} counted, average area index {:.2}",
                frame,
                tracks.len(),
                total,
                AreaIndexEstimator::average(&indices)
            );
        }
    }

    info!("Unique objects: {}", counter.total());
    Ok(())
}
