pub mod normalize;
pub mod shared;
pub mod source;
pub mod summary;
pub mod trip;

pub mod prelude {
    pub use crate::normalize::TripNormalizer;
    pub use crate::shared::time::{DayOfWeek, RideLength};
    pub use crate::source::{RawTripV1, RawTripV2, Storage, TripSource};
    pub use crate::trip::{CanonicalTrip, Derived, MemberCasual, RideableType};
}
