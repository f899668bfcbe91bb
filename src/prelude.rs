pub use crate::track::ConfirmationPolicy;
pub use crate::trackers::sort::options::SortOptions;
pub use crate::trackers::sort::simple_api::Sort;
pub use crate::trackers::sort::SortTrack;
pub use crate::trackers::sort::{DEFAULT_MAX_AGE, DEFAULT_MIN_HITS, DEFAULT_SORT_IOU_THRESHOLD};
pub use crate::utils::area_index::AreaIndexEstimator;
pub use crate::utils::bbox::{BoundingBox, Detection};
pub use crate::utils::counter::UniqueTrackCounter;
