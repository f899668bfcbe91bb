use crate::utils::bbox::{BoundingBox, Detection};
use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Endless generator of a drifting box: the position and the size do a random walk
///
pub struct BoxGen2 {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    gen: StdRng,
    dist_pos: Uniform<f32>,
    dist_box: Uniform<f32>,
}

impl BoxGen2 {
    /// The box wanders in every direction
    ///
    /// # Parameters
    /// * `x`, `y` - initial top-left corner
    /// * `width`, `height` - initial size
    /// * `pos_drift` - maximal position change per step, must be positive
    /// * `box_drift` - maximal size change per step, must be positive
    ///
    pub fn new(x: f32, y: f32, width: f32, height: f32, pos_drift: f32, box_drift: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            gen: StdRng::from_entropy(),
            dist_pos: Uniform::new(-pos_drift, pos_drift),
            dist_box: Uniform::new(-box_drift, box_drift),
        }
    }

    /// The box moves right and down only
    ///
    pub fn new_monotonous(
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        pos_drift: f32,
        box_drift: f32,
    ) -> Self {
        Self {
            x,
            y,
            width,
            height,
            gen: StdRng::from_entropy(),
            dist_pos: Uniform::new(0.0, pos_drift),
            dist_box: Uniform::new(-box_drift, box_drift),
        }
    }

    /// Makes the sequence reproducible
    ///
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.gen = StdRng::seed_from_u64(seed);
        self
    }

    /// Wraps the next box into a detection with the given confidence
    ///
    pub fn next_detection(&mut self, confidence: f32) -> Detection {
        Detection::with_bbox(self.step(), confidence)
    }

    fn step(&mut self) -> BoundingBox {
        self.x += self.gen.sample(self.dist_pos);
        self.y += self.gen.sample(self.dist_pos);

        self.width += self.gen.sample(self.dist_box);
        self.height += self.gen.sample(self.dist_box);

        if self.width < 1.0 {
            self.width = 1.0;
        }
        if self.height < 1.0 {
            self.height = 1.0;
        }

        BoundingBox::ltwh(self.x, self.y, self.width, self.height)
    }
}

impl Iterator for BoxGen2 {
    type Item = BoundingBox;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.step())
    }
}

#[cfg(test)]
mod tests {
    use crate::examples::BoxGen2;

    #[test]
    fn seeded_sequences_repeat() {
        let a = BoxGen2::new(0.0, 0.0, 10.0, 10.0, 1.0, 0.1)
            .with_seed(42)
            .take(10)
            .collect::<Vec<_>>();
        let b = BoxGen2::new(0.0, 0.0, 10.0, 10.0, 1.0, 0.1)
            .with_seed(42)
            .take(10)
            .collect::<Vec<_>>();
        assert_eq!(a, b);
    }

    #[test]
    fn monotonous_moves_forward() {
        let mut gen = BoxGen2::new_monotonous(0.0, 0.0, 10.0, 10.0, 1.0, 0.1).with_seed(3);
        let mut prev = gen.next().unwrap();
        for bb in gen.take(20) {
            assert!(bb.x1() >= prev.x1() && bb.y1() >= prev.y1());
            assert!(bb.width() >= 1.0 && bb.height() >= 1.0);
            prev = bb;
        }
    }
}
