use crate::{EstimateClose, EPS};

/// Smallest extent, scale or aspect a box may have after conversion.
///
/// Detector noise routinely produces collapsed boxes; flooring keeps the filter
/// state finite.
pub const MIN_BOX_EXTENT: f32 = 1e-6;

/// Bounding box in the corner format (x1, y1, x2, y2)
///
#[derive(Clone, Default, Debug, Copy)]
pub struct BoundingBox {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl BoundingBox {
    /// Constructor
    ///
    /// # Parameters
    /// * `x1`, `y1` - top-left corner
    /// * `x2`, `y2` - bottom-right corner
    ///
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Constructor from the (left, top, width, height) format
    ///
    pub fn ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self::new(left, top, left + width, top + height)
    }

    pub fn x1(&self) -> f32 {
        self.x1
    }

    pub fn y1(&self) -> f32 {
        self.y1
    }

    pub fn x2(&self) -> f32 {
        self.x2
    }

    pub fn y2(&self) -> f32 {
        self.y2
    }

    pub fn width(&self) -> f32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f32 {
        self.y2 - self.y1
    }

    pub fn center(&self) -> (f32, f32) {
        ((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    /// Area of the box, zero for inverted boxes
    ///
    pub fn area(&self) -> f32 {
        self.width().max(0.0) * self.height().max(0.0)
    }

    /// Area of the overlapping region, exactly zero when the boxes do not overlap
    ///
    pub fn intersection(l: &BoundingBox, r: &BoundingBox) -> f32 {
        let (x1, y1) = (l.x1.max(r.x1), l.y1.max(r.y1));
        let (x2, y2) = (l.x2.min(r.x2), l.y2.min(r.y2));

        let int_width = (x2 - x1).max(0.0);
        let int_height = (y2 - y1).max(0.0);
        int_width * int_height
    }

    pub fn as_array(&self) -> [f32; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }
}

impl EstimateClose for BoundingBox {
    /// Allows comparing bboxes
    ///
    fn almost_same(&self, other: &Self, eps: f32) -> bool {
        (self.x1 - other.x1).abs() < eps
            && (self.y1 - other.y1).abs() < eps
            && (self.x2 - other.x2).abs() < eps
            && (self.y2 - other.y2).abs() < eps
    }
}

impl PartialEq<Self> for BoundingBox {
    fn eq(&self, other: &Self) -> bool {
        self.almost_same(other, EPS)
    }
}

impl From<[f32; 4]> for BoundingBox {
    fn from(a: [f32; 4]) -> Self {
        BoundingBox::new(a[0], a[1], a[2], a[3])
    }
}

/// Single detector output: the box and the detector confidence
///
/// The confidence is carried for the caller's convenience, association is
/// geometry-only.
///
#[derive(Clone, Debug, Copy, PartialEq)]
pub struct Detection {
    bbox: BoundingBox,
    confidence: f32,
}

impl Detection {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32, confidence: f32) -> Self {
        Self {
            bbox: BoundingBox::new(x1, y1, x2, y2),
            confidence,
        }
    }

    pub fn with_bbox(bbox: BoundingBox, confidence: f32) -> Self {
        Self { bbox, confidence }
    }

    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }

    pub fn confidence(&self) -> f32 {
        self.confidence
    }
}

impl From<BoundingBox> for Detection {
    fn from(bbox: BoundingBox) -> Self {
        Detection::with_bbox(bbox, 1.0)
    }
}

impl From<[f32; 5]> for Detection {
    fn from(a: [f32; 5]) -> Self {
        Detection::new(a[0], a[1], a[2], a[3], a[4])
    }
}

/// Bounding box in the measurement format (xc, yc, scale, aspect)
///
/// `scale` is the box area and `aspect` is width over height.
///
#[derive(Clone, Default, Debug, Copy)]
pub struct ScaleAspectBox {
    pub xc: f32,
    pub yc: f32,
    pub scale: f32,
    pub aspect: f32,
}

impl ScaleAspectBox {
    pub fn new(xc: f32, yc: f32, scale: f32, aspect: f32) -> Self {
        Self {
            xc,
            yc,
            scale,
            aspect,
        }
    }

    pub fn as_array(&self) -> [f32; 4] {
        [self.xc, self.yc, self.scale, self.aspect]
    }
}

impl EstimateClose for ScaleAspectBox {
    fn almost_same(&self, other: &Self, eps: f32) -> bool {
        (self.xc - other.xc).abs() < eps
            && (self.yc - other.yc).abs() < eps
            && (self.scale - other.scale).abs() < eps
            && (self.aspect - other.aspect).abs() < eps
    }
}

impl From<&BoundingBox> for ScaleAspectBox {
    /// Width and height are floored at [MIN_BOX_EXTENT]
    fn from(b: &BoundingBox) -> Self {
        let width = b.width().max(MIN_BOX_EXTENT);
        let height = b.height().max(MIN_BOX_EXTENT);
        ScaleAspectBox {
            xc: b.x1 + width / 2.0,
            yc: b.y1 + height / 2.0,
            scale: width * height,
            aspect: width / height,
        }
    }
}

impl From<BoundingBox> for ScaleAspectBox {
    fn from(b: BoundingBox) -> Self {
        ScaleAspectBox::from(&b)
    }
}

impl From<&ScaleAspectBox> for BoundingBox {
    /// Scale and aspect are floored at [MIN_BOX_EXTENT]
    fn from(b: &ScaleAspectBox) -> Self {
        let scale = b.scale.max(MIN_BOX_EXTENT);
        let aspect = b.aspect.max(MIN_BOX_EXTENT);

        let width = (scale * aspect).sqrt();
        let height = scale / width;
        BoundingBox {
            x1: b.xc - width / 2.0,
            y1: b.yc - height / 2.0,
            x2: b.xc + width / 2.0,
            y2: b.yc + height / 2.0,
        }
    }
}

impl From<ScaleAspectBox> for BoundingBox {
    fn from(b: ScaleAspectBox) -> Self {
        BoundingBox::from(&b)
    }
}

#[cfg(test)]
mod tests {
    use crate::utils::bbox::{BoundingBox, Detection, ScaleAspectBox, MIN_BOX_EXTENT};
    use crate::EstimateClose;

    #[test]
    fn transform() {
        let bbox = BoundingBox::new(10.0, 20.0, 40.0, 80.0);
        let sab = ScaleAspectBox::from(&bbox);
        assert!(sab.almost_same(&ScaleAspectBox::new(25.0, 50.0, 1800.0, 0.5), 1e-4));

        let back = BoundingBox::from(&sab);
        assert!(back.almost_same(&bbox, 1e-3));
    }

    #[test]
    fn round_trip() {
        for (x1, y1, w, h) in [
            (0.0, 0.0, 1.0, 1.0),
            (-15.5, 3.25, 7.0, 120.0),
            (640.0, 480.0, 320.0, 12.5),
            (1000.0, 5.0, 0.5, 0.25),
        ] {
            let bbox = BoundingBox::ltwh(x1, y1, w, h);
            let back: BoundingBox = ScaleAspectBox::from(&bbox).into();
            assert!(back.almost_same(&bbox, 1e-2), "{bbox:?} != {back:?}");
        }
    }

    #[test]
    fn degenerate_boxes_are_clamped() {
        let collapsed = BoundingBox::new(5.0, 5.0, 5.0, 3.0);
        let sab = ScaleAspectBox::from(&collapsed);
        assert!(sab.scale > 0.0 && sab.scale.is_finite());
        assert!(sab.aspect > 0.0 && sab.aspect.is_finite());

        let negative = ScaleAspectBox::new(1.0, 1.0, -4.0, 0.0);
        let bbox = BoundingBox::from(&negative);
        assert!(bbox.as_array().iter().all(|v| v.is_finite()));
        assert!(bbox.width() >= 0.0 && bbox.height() > 0.0);
        assert!(bbox.height() <= 1.0 + MIN_BOX_EXTENT);
    }

    #[test]
    fn intersection() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(5.0, 5.0, 15.0, 15.0);
        let c = BoundingBox::new(20.0, 20.0, 30.0, 30.0);
        assert_eq!(BoundingBox::intersection(&a, &b), 25.0);
        assert_eq!(BoundingBox::intersection(&a, &c), 0.0);
        assert_eq!(BoundingBox::intersection(&a, &a), a.area());
    }

    #[test]
    fn detection() {
        let d = Detection::from([1.0, 2.0, 3.0, 4.0, 0.7]);
        assert_eq!(d.bbox(), BoundingBox::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(d.confidence(), 0.7);
        let d: Detection = BoundingBox::ltwh(0.0, 0.0, 2.0, 2.0).into();
        assert_eq!(d.confidence(), 1.0);
    }
}
